use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::MainRoute;

/// `NotFoundPage` fallback component.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{"Page not found"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="link link-primary">
                {"Back to start"}
            </Link<MainRoute>>
        </div>
    }
}
