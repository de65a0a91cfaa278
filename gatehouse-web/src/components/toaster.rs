use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::models::toasts::{Toast, ToastLevel, ToastState};

/// How long a toast stays on screen.
const TOAST_LIFETIME_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let (_, dispatch) = use_store::<ToastState>();

    {
        let id = props.toast.id;
        use_effect_with(id, move |_| {
            let timer = Timeout::new(TOAST_LIFETIME_MS, move || {
                dispatch.reduce_mut(|state| state.dismiss(id));
            });
            // Dropping the handle cancels the pending dismiss on unmount.
            move || drop(timer)
        });
    }

    let class = match props.toast.level {
        ToastLevel::Success => "alert alert-success shadow-lg",
        ToastLevel::Error => "alert alert-error shadow-lg",
    };

    html! {
        <div {class}>
            <span>{ props.toast.message.clone() }</span>
        </div>
    }
}

/// Bottom-right stack of transient notifications.
#[function_component(Toaster)]
pub fn toaster() -> Html {
    let (state, _) = use_store::<ToastState>();

    html! {
        <div class="toast toast-end z-50">
            { for state.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
            }) }
        </div>
    }
}
