use gloo_timers::callback::Timeout;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::{ApiError, GatehouseClient};
use crate::components::loading::LoadingOverlay;
use crate::components::password_field::PasswordField;
use crate::config::FrontendConfig;
use crate::hooks::{BootstrapMode, use_session_bootstrap};
use crate::models::session::SessionState;
use crate::models::toasts::{ToastState, toast_error, toast_success};
use crate::routes::MainRoute;
use crate::validation::can_submit_login;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let rememberme = use_state(|| false);
    let submitting = use_state(|| false);
    let pending_redirect = use_mut_ref(|| None::<Timeout>);
    let navigator = use_navigator();
    let (_, session_dispatch) = use_store::<SessionState>();
    let (_, toast_dispatch) = use_store::<ToastState>();

    // An existing session means the visitor belongs on the dashboard.
    let checking = use_session_bootstrap(BootstrapMode::RedirectAuthenticated);

    {
        // Cancel a queued redirect if the page unmounts first.
        let pending_redirect = pending_redirect.clone();
        use_effect_with((), move |_| {
            move || {
                pending_redirect.borrow_mut().take();
            }
        });
    }

    let onsubmit = {
        let username_handle = username.clone();
        let password_handle = password.clone();
        let rememberme_handle = rememberme.clone();
        let submitting_handle = submitting.clone();
        let pending_redirect = pending_redirect.clone();
        let session_dispatch = session_dispatch.clone();
        let toast_dispatch = toast_dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                username: (*username_handle).clone(),
                password: (*password_handle).clone(),
                rememberme: *rememberme_handle,
            };
            submitting_handle.set(true);
            let submitting_ref = submitting_handle.clone();
            let pending_redirect = pending_redirect.clone();
            let session_dispatch = session_dispatch.clone();
            let toast_dispatch = toast_dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match GatehouseClient::shared().login(&request).await {
                    Ok(user) => {
                        session_dispatch.reduce_mut(|state| {
                            state.set_user(user.username, user.email);
                        });
                        toast_success(&toast_dispatch, "Logged in successfully");
                        toast_success(&toast_dispatch, "Redirecting to Dashboard...");
                        let delay = FrontendConfig::new().redirect_delay_ms();
                        let timer = Timeout::new(delay, move || {
                            if let Some(nav) = navigator.as_ref() {
                                nav.push(&MainRoute::Dashboard);
                            }
                        });
                        *pending_redirect.borrow_mut() = Some(timer);
                    }
                    Err(ApiError::Rejected { .. }) => {
                        toast_error(&toast_dispatch, "Failed to login!");
                    }
                    Err(ApiError::Transport(_)) => {
                        toast_error(&toast_dispatch, "Something went wrong");
                    }
                }
                submitting_ref.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let on_rememberme_change = {
        let rememberme = rememberme.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                rememberme.set(input.checked());
            }
        })
    };

    let is_busy = *submitting;
    let disable_submit = !can_submit_login(&username, &password) || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-primary">
            <LoadingOverlay visible={checking || is_busy} />
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <p class="text-sm text-base-content/60">{"Please enter your details"}</p>
                    <h2 class="card-title text-3xl">{"Welcome back"}</h2>
                    <div class="form-control">
                        <input
                            class="input input-bordered"
                            type="text"
                            placeholder="Username"
                            value={(*username).clone()}
                            oninput={on_username_change}
                        />
                    </div>
                    <div class="form-control">
                        <PasswordField
                            placeholder="Password"
                            value={(*password).clone()}
                            on_change={on_password_change}
                        />
                    </div>
                    <div class="form-control flex-row justify-between items-center">
                        <label class="label cursor-pointer gap-2">
                            <input
                                type="checkbox"
                                class="checkbox"
                                checked={*rememberme}
                                onchange={on_rememberme_change}
                            />
                            <span class="label-text">{"Remember me"}</span>
                        </label>
                        <span class="link link-primary text-sm">{"Forgot password"}</span>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if is_busy { "Logging in..." } else { "Login" } }
                        </button>
                    </div>
                    <div class="flex gap-2 justify-center text-sm mt-3">
                        <span>{"Don't have an account?"}</span>
                        <Link<MainRoute> to={MainRoute::Signup} classes="link link-primary">
                            {"Sign Up"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
