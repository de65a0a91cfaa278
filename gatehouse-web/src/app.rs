use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::YewduxRoot;

use crate::components::toaster::Toaster;
use crate::routes::{self, MainRoute};

/// Application shell: store root, router, and the global toast stack.
///
/// Session reconciliation deliberately does NOT live here — each auth-gated
/// page runs its own bootstrap on mount, so a stale in-memory identity never
/// outlives the cookie it was derived from.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <YewduxRoot>
            <BrowserRouter>
                <Switch<MainRoute> render={routes::switch} />
            </BrowserRouter>
            <Toaster />
        </YewduxRoot>
    }
}
