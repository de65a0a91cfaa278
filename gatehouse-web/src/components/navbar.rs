use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Username shown in the bar; absent until the session check lands.
    #[prop_or_default]
    pub username: Option<String>,
    /// Fired by the logout button.
    pub on_logout: Callback<MouseEvent>,
}

/// Dashboard header bar: current username on the left, logout on the right.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let username = props.username.clone().unwrap_or_default();

    html! {
        <nav class="navbar justify-between bg-primary text-primary-content p-5">
            <div class="flex items-center gap-2 text-xl">
                <Icon icon_id={IconId::HeroiconsSolidUser} class="w-5 h-5" />
                <span class="flex gap-2">
                    <p class="font-bold">{"Dashboard"}</p>
                    { format!("for {username}") }
                </span>
            </div>
            <button class="btn btn-error text-white font-bold" onclick={props.on_logout.clone()}>
                {"Logout"}
            </button>
        </nav>
    }
}
