use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::ui::{Motion, Reveal};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Shown for any hash that doesn't name a tool.
#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class=css::notFound>
            <Reveal motion=Motion::Up class=css::notFoundCard>
                <span class=css::notFoundIcon><Icon icon=ic::ALERT /></span>
                <h1 class=css::heroTitle>"Page not found"</h1>
                <p class=css::heroText>
                    "Nothing lives at "<code class=css::inlineCode>"#/"{path}</code>"."
                </p>
                <a class=css::homeLink href=AppRoute::Home.to_hash()>
                    <Icon icon=ic::HOME />
                    "Back to home"
                </a>
            </Reveal>
        </div>
    }
}
