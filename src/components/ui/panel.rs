use leptos::prelude::*;

use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/ui/ui.module.css");

/// Bordered card with a small title bar.
#[component]
pub fn Panel(
    #[prop(into)] title: String,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = match class {
        Some(extra) => format!("{} {}", css::panel, extra),
        None => css::panel.to_string(),
    };

    view! {
        <section class=class>
            <header class=css::panelHeader>
                <h2 class=css::panelTitle>{title}</h2>
            </header>
            <div class=css::panelBody>{children()}</div>
        </section>
    }
}

/// Title and description bar at the top of a tool page.
#[component]
pub fn PageHeader(route: AppRoute) -> impl IntoView {
    view! {
        <header class=css::pageHeader>
            <h1 class=css::pageTitle>{route.title()}</h1>
            <p class=css::pageSubtitle>{route.description()}</p>
        </header>
    }
}
