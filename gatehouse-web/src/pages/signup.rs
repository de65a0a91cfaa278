use gloo_timers::callback::Timeout;
use shared::models::CreateUserRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::GatehouseClient;
use crate::components::loading::LoadingOverlay;
use crate::components::password_field::PasswordField;
use crate::config::FrontendConfig;
use crate::models::toasts::{ToastState, toast_error, toast_success};
use crate::routes::MainRoute;
use crate::validation::{can_submit_signup, validate_signup};

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let submitting = use_state(|| false);
    let pending_redirect = use_mut_ref(|| None::<Timeout>);
    let navigator = use_navigator();
    let (_, toast_dispatch) = use_store::<ToastState>();

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
        let email_handle = email.clone();
        let password_handle = password.clone();
        let confirm_handle = confirm_password.clone();
        let submitting_handle = submitting.clone();
        let pending_redirect = pending_redirect.clone();
        let toast_dispatch = toast_dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            // Local checks first; a failure never reaches the network.
            if let Err(issue) =
                validate_signup(&email_handle, &password_handle, &confirm_handle)
            {
                toast_error(&toast_dispatch, issue.message());
                return;
            }

            let request = CreateUserRequest {
                username: (*username_handle).clone(),
                email: (*email_handle).clone(),
                password: (*password_handle).clone(),
            };
            submitting_handle.set(true);
            let submitting_ref = submitting_handle.clone();
            let pending_redirect = pending_redirect.clone();
            let toast_dispatch = toast_dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match GatehouseClient::shared().signup(&request).await {
                    Ok(message) => {
                        toast_success(&toast_dispatch, message);
                        toast_success(&toast_dispatch, "Redirecting to Login page...");
                        let delay = FrontendConfig::new().redirect_delay_ms();
                        let timer = Timeout::new(delay, move || {
                            if let Some(nav) = navigator.as_ref() {
                                nav.push(&MainRoute::Login);
                            }
                        });
                        *pending_redirect.borrow_mut() = Some(timer);
                    }
                    Err(err) => {
                        let message = err
                            .server_message()
                            .unwrap_or("Something went wrong!")
                            .to_string();
                        toast_error(&toast_dispatch, message);
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

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let on_confirm_change = {
        let confirm_password = confirm_password.clone();
        Callback::from(move |value: String| confirm_password.set(value))
    };

    let is_busy = *submitting;
    let disable_submit =
        !can_submit_signup(&username, &email, &password, &confirm_password) || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-primary">
            <LoadingOverlay visible={is_busy} />
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <p class="text-sm text-base-content/60">{"Please enter your details"}</p>
                    <h2 class="card-title text-3xl">{"Sign up new account"}</h2>
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
                        <input
                            class="input input-bordered"
                            type="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <PasswordField
                            placeholder="Password"
                            value={(*password).clone()}
                            on_change={on_password_change}
                        />
                    </div>
                    <div class="form-control">
                        <PasswordField
                            placeholder="Confirm password"
                            value={(*confirm_password).clone()}
                            on_change={on_confirm_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if is_busy { "Signing up..." } else { "Sign Up" } }
                        </button>
                    </div>
                    <div class="flex gap-2 justify-center text-sm mt-3">
                        <span>{"Already have an account?"}</span>
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Login"}
                        </Link<MainRoute>>
                    </div>
                </form>
            </div>
        </div>
    }
}
