use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::GatehouseClient;
use crate::components::loading::LoadingOverlay;
use crate::components::navbar::Navbar;
use crate::hooks::{BootstrapMode, use_session_bootstrap};
use crate::models::session::SessionState;
use crate::routes::MainRoute;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let navigator = use_navigator();
    let (session, session_dispatch) = use_store::<SessionState>();

    // Re-derive the identity from the session cookie on every mount.
    let loading = use_session_bootstrap(BootstrapMode::RequireAuth);

    let on_logout = {
        let session_dispatch = session_dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let session_dispatch = session_dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Best effort. The local state is cleared and the visitor
                // routed away whatever the endpoint answers.
                if GatehouseClient::shared().logout().await.is_err() {
                    log("logout request failed; clearing local session anyway");
                }
                session_dispatch.reduce_mut(SessionState::clear_user);
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&MainRoute::Login);
                }
            });
        })
    };

    let username = session.username().unwrap_or_default().to_string();
    let email = session.email().unwrap_or_default().to_string();

    html! {
        <div class="flex flex-col w-full h-screen">
            <LoadingOverlay visible={loading} />
            <Navbar
                username={session.username().map(ToString::to_string)}
                on_logout={on_logout}
            />
            <div class="flex-1 flex items-center justify-center">
                <div class="card p-5 shadow-xl border border-base-300">
                    <h1 class="text-center text-3xl font-bold">{"User Data"}</h1>
                    <div class="flex flex-col my-2 text-xl">
                        <div class="flex gap-2">
                            <span class="font-bold">{"Username :"}</span>
                            <span>{ username }</span>
                        </div>
                        <div class="flex gap-2">
                            <span class="font-bold">{"Email :"}</span>
                            <span>{ email }</span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use crate::config::FrontendConfig;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    #[allow(dead_code)] // WASM tests may not be run in regular test suite
    fn test_redirect_delay_configured() {
        let config = FrontendConfig::new();
        assert!(config.redirect_delay_ms() > 0);
    }

    #[wasm_bindgen_test]
    #[allow(dead_code)] // WASM tests may not be run in regular test suite
    fn test_api_base_configured() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
    }
}
