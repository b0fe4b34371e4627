//! Navigation sidebar.
//!
//! | Mode | Presentation |
//! |------|--------------|
//! | Closed | Off-canvas, only the menu button is visible |
//! | Overlay | Slides over the page with a dimming backdrop |
//! | Pinned | Full width beside the page |
//! | Collapsed | Icon rail, labels moved into tooltips |

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_BRAND;
use crate::models::{AppRoute, SidebarMode, Theme, Viewport};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Sidebar(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let sidebar = ctx.sidebar;
    let show_labels = Signal::derive(move || sidebar.with(|s| s.shows_labels()));

    let sidebar_class = Signal::derive(move || {
        let mode = match sidebar.with(|s| s.mode()) {
            SidebarMode::Closed => css::closed,
            SidebarMode::Overlay => css::overlay,
            SidebarMode::Pinned => css::pinned,
            SidebarMode::Collapsed => css::collapsed,
        };
        format!("{} {}", css::sidebar, mode)
    });

    let header_label = Signal::derive(move || {
        sidebar.with(|s| match (s.viewport(), s.is_collapsed()) {
            (Viewport::Mobile, _) => "Close navigation menu",
            (Viewport::Desktop, false) => "Collapse sidebar",
            (Viewport::Desktop, true) => "Expand sidebar",
        })
    });

    let header_icon = move || {
        let icon = sidebar.with(|s| match (s.viewport(), s.is_collapsed()) {
            (Viewport::Mobile, _) => ic::CLOSE,
            (Viewport::Desktop, false) => ic::CHEVRON_LEFT,
            (Viewport::Desktop, true) => ic::CHEVRON_RIGHT,
        });
        view! { <Icon icon=icon /> }
    };

    // Shows the theme a click switches to
    let theme_icon = move || {
        let icon = match ctx.theme.get() {
            Theme::Dark => ic::SUN,
            Theme::Light => ic::MOON,
        };
        view! { <Icon icon=icon /> }
    };
    let theme_label = Signal::derive(move || ctx.theme.get().toggle_label());

    view! {
        <Show when=move || sidebar.with(|s| s.shows_backdrop())>
            <div class=css::backdrop on:click=move |_| ctx.close_sidebar() aria-hidden="true"></div>
        </Show>

        <aside id="sidebar" class=sidebar_class aria-label="Main navigation">
            <div class=css::sidebarHeader>
                <Show when=move || show_labels.get()>
                    <a class=css::brand href=AppRoute::Home.to_hash()>
                        <span class=css::brandIcon><Icon icon=ic::SNIPPETS /></span>
                        <span class=css::brandText>{APP_BRAND}</span>
                    </a>
                </Show>
                <button
                    type="button"
                    class=css::headerButton
                    aria-label=header_label
                    title=header_label
                    on:click=move |_| ctx.sidebar_header_action()
                >
                    {header_icon}
                </button>
            </div>

            <nav class=css::nav>
                {AppRoute::NAV
                    .into_iter()
                    .map(|item| view! { <NavLink item=item current=route /> })
                    .collect_view()}
            </nav>

            <div class=css::sidebarFooter>
                <button
                    type="button"
                    class=css::navItem
                    aria-label=theme_label
                    title=move || (!show_labels.get()).then(|| theme_label.get())
                    on:click=move |_| ctx.toggle_theme()
                >
                    <span class=css::navIcon>{theme_icon}</span>
                    <Show when=move || show_labels.get()>
                        <span class=css::navLabel>{theme_label}</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}

/// One navigation entry. Highlighted when it matches the current route.
#[component]
fn NavLink(item: AppRoute, current: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let label = item.label();
    let href = item.to_hash();
    let icon = ic::route_icon(&item);
    let show_labels = Signal::derive(move || ctx.sidebar.with(|s| s.shows_labels()));

    let is_active = Signal::derive(move || current.with(|r| *r == item));
    let class = move || {
        if is_active.get() {
            format!("{} {}", css::navItem, css::navItemActive)
        } else {
            css::navItem.to_string()
        }
    };

    view! {
        <a
            class=class
            href=href
            aria-current=move || is_active.get().then_some("page")
            title=move || (!show_labels.get()).then_some(label)
            // Re-selecting the current route fires no hashchange
            on:click=move |_| ctx.navigated()
        >
            <span class=css::navIcon><Icon icon=icon /></span>
            <Show when=move || show_labels.get()>
                <span class=css::navLabel>{label}</span>
            </Show>
        </a>
    }
}
