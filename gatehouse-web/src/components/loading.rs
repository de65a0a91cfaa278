use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    /// Render the overlay while a page-scoped call is in flight.
    pub visible: bool,
}

/// Full-screen dimmed spinner shown while a page waits on the backend.
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/25">
            <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-12 h-12 animate-spin text-white" />
        </div>
    }
}
