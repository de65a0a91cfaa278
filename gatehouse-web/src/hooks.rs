//! Mount-time session reconciliation shared by the auth-gated pages.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::{ApiError, GatehouseClient};
use crate::models::session::SessionState;
use crate::models::toasts::{ToastState, toast_error};
use crate::routes::MainRoute;

/// What a page does with the answer to "does a valid session cookie exist?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapMode {
    /// Protected page: populate the session store on success, bounce to the
    /// login page on any failure.
    RequireAuth,
    /// Auth form page: an existing session means the visitor does not
    /// belong here, so bounce to the dashboard.
    RedirectAuthenticated,
}

/// Ask the session-check endpoint who the visitor is and reconcile the page
/// accordingly. Exactly one request and at most one navigation decision per
/// mount; no retry, no polling.
///
/// Returns the page-scoped loading flag: true while the check is in flight,
/// false afterward on every path.
#[hook]
pub fn use_session_bootstrap(mode: BootstrapMode) -> bool {
    let loading = use_state(|| true);
    let navigator = use_navigator();
    let (_, session_dispatch) = use_store::<SessionState>();
    let (_, toast_dispatch) = use_store::<ToastState>();

    {
        let loading = loading.clone();
        use_effect_with((), move |_| {
            // Flipped by the cleanup below; a response landing after
            // unmount must not write state or navigate.
            let alive = Rc::new(Cell::new(true));
            let alive_for_cleanup = alive.clone();

            spawn_local(async move {
                let outcome = GatehouseClient::shared().current_user().await;
                if alive.get() {
                    match (mode, outcome) {
                        (BootstrapMode::RequireAuth, Ok(user)) => {
                            session_dispatch.reduce_mut(|state| {
                                state.set_user(user.username, user.email);
                            });
                        }
                        (BootstrapMode::RequireAuth, Err(_)) => {
                            if let Some(nav) = navigator.as_ref() {
                                nav.push(&MainRoute::Login);
                            }
                        }
                        (BootstrapMode::RedirectAuthenticated, Ok(_)) => {
                            if let Some(nav) = navigator.as_ref() {
                                nav.push(&MainRoute::Dashboard);
                            }
                        }
                        (BootstrapMode::RedirectAuthenticated, Err(err)) => {
                            // No session is the expected answer here; only a
                            // broken transport is worth telling the visitor.
                            if matches!(err, ApiError::Transport(_)) {
                                toast_error(&toast_dispatch, "Something went wrong");
                            }
                        }
                    }
                    loading.set(false);
                }
            });

            move || alive_for_cleanup.set(false)
        });
    }

    *loading
}
