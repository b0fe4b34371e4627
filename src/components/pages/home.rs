//! Landing page with one card per tool.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::ui::{Motion, Reveal};
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class=css::home>
            <Reveal motion=Motion::Down class=css::hero>
                <span class=css::badge>
                    <Icon icon=ic::SPARKLES />
                    "Developer Productivity Suite"
                </span>
                <h1 class=css::heroTitle>{APP_NAME}</h1>
                <p class=css::heroText>{APP_TAGLINE}</p>
            </Reveal>

            <div class=css::toolGrid>
                {AppRoute::TOOLS
                    .into_iter()
                    .zip(1u32..)
                    .map(|(tool, n)| {
                        let delay = n * 100;
                        view! { <ToolCard tool=tool delay_ms=delay /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ToolCard(tool: AppRoute, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal motion=Motion::Up delay_ms=delay_ms>
            <a class=css::toolCard href=tool.to_hash()>
                <span class=css::toolIcon><Icon icon=ic::route_icon(&tool) /></span>
                <h2 class=css::toolTitle>{tool.title()}</h2>
                <p class=css::toolText>{tool.description()}</p>
            </a>
        </Reveal>
    }
}
