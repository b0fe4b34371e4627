//! Shell component.
//!
//! Owns the sidebar and the page slot. The viewport class comes from a
//! media query and is fed into the sidebar state so the layout follows
//! the window across the desktop breakpoint.

use leptos::prelude::*;
use leptos_use::use_media_query;

use super::{MenuButton, Sidebar};
use crate::app::AppContext;
use crate::components::pages::{
    GithubPage, HomePage, JsonPage, MarkdownPage, NotFoundPage, SnippetsPage,
};
use crate::config::DESKTOP_MEDIA_QUERY;
use crate::models::{AppRoute, SidebarMode, Viewport};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Shell(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    Effect::new(move |_| {
        ctx.set_viewport(Viewport::from_is_desktop(is_desktop.get()));
    });

    // Page column shifts right of the desktop sidebar
    let main_class = Signal::derive(move || match ctx.sidebar.with(|s| s.mode()) {
        SidebarMode::Pinned => format!("{} {}", css::main, css::mainPinned),
        SidebarMode::Collapsed => format!("{} {}", css::main, css::mainCollapsed),
        SidebarMode::Closed | SidebarMode::Overlay => css::main.to_string(),
    });

    view! {
        <div class=css::shell>
            <Sidebar route=route />
            <div class=main_class>
                <MenuButton />
                <main class=css::content>
                    {move || match route.get() {
                        AppRoute::Home => view! { <HomePage /> }.into_any(),
                        AppRoute::Markdown => view! { <MarkdownPage /> }.into_any(),
                        AppRoute::Json => view! { <JsonPage /> }.into_any(),
                        AppRoute::Snippets => view! { <SnippetsPage /> }.into_any(),
                        AppRoute::GitHub => view! { <GithubPage /> }.into_any(),
                        AppRoute::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
