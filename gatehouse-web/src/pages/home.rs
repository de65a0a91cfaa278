use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

use crate::config::FrontendConfig;
use crate::routes::MainRoute;

/// Landing splash: show a spinner, then hand the visitor to the login page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        let delay = FrontendConfig::new().redirect_delay_ms();
        let timer = Timeout::new(delay, move || {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&MainRoute::Login);
            }
        });
        // Cancelled if the visitor navigates away first.
        move || drop(timer)
    });

    html! {
        <div class="w-full h-screen flex items-center justify-center bg-primary">
            <div class="flex flex-col items-center text-white font-bold gap-5">
                <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-12 h-12 animate-spin" />
                <p class="text-xl">{"Redirecting"}</p>
            </div>
        </div>
    }
}
