use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Floating hamburger button that opens the sidebar overlay.
///
/// Hidden by CSS at the desktop breakpoint.
#[component]
pub fn MenuButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let expanded = Signal::derive(move || ctx.sidebar.with(|s| s.is_open()).to_string());

    view! {
        <button
            type="button"
            class=css::menuButton
            aria-label="Open navigation menu"
            aria-controls="sidebar"
            aria-expanded=expanded
            on:click=move |_| ctx.toggle_sidebar()
        >
            <Icon icon=ic::MENU />
        </button>
    }
}
