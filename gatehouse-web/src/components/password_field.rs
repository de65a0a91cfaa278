use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct PasswordFieldProps {
    /// Placeholder text for the input.
    pub placeholder: AttrValue,
    /// Current field value (controlled input).
    pub value: String,
    /// Fired with the new value on every keystroke.
    pub on_change: Callback<String>,
}

/// Password input with a show/hide visibility toggle.
///
/// The toggle is purely visual; the value itself always flows through
/// `on_change` unchanged.
#[function_component(PasswordField)]
pub fn password_field(props: &PasswordFieldProps) -> Html {
    let show = use_state(|| false);

    let on_toggle = {
        let show = show.clone();
        Callback::from(move |_: MouseEvent| show.set(!*show))
    };

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    let kind = if *show { "text" } else { "password" };
    let icon = if *show {
        IconId::HeroiconsOutlineEye
    } else {
        IconId::HeroiconsOutlineEyeSlash
    };

    html! {
        <div class="relative flex">
            <input
                class="input input-bordered w-full pr-12"
                type={kind}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                {oninput}
            />
            <button
                type="button"
                class="absolute inset-y-0 right-0 mr-4 my-auto cursor-pointer"
                onclick={on_toggle}
            >
                <Icon icon_id={icon} class="w-5 h-5" />
            </button>
        </div>
    }
}
