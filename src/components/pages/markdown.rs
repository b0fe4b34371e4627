//! Side-by-side markdown editor and live preview.

use leptos::prelude::*;

use crate::components::ui::{Motion, PageHeader, Panel, Reveal, TextArea};
use crate::config::MARKDOWN_WELCOME;
use crate::models::AppRoute;
use crate::utils::markdown_to_html;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn MarkdownPage() -> impl IntoView {
    let source = RwSignal::new(MARKDOWN_WELCOME.to_string());
    // Sanitized on every edit; the editor is the only input
    let html = Memo::new(move |_| source.with(|md| markdown_to_html(md)));

    view! {
        <div class=css::page>
            <PageHeader route=AppRoute::Markdown />
            <div class=css::split>
                <Reveal motion=Motion::Left class=css::column>
                    <Panel title="Editor" class=css::fill>
                        <TextArea
                            value=source
                            class=css::editor
                            label="Markdown source"
                            placeholder="Write your markdown here..."
                        />
                    </Panel>
                </Reveal>
                <Reveal motion=Motion::Right class=css::column>
                    <Panel title="Preview" class=css::fill>
                        <div class=css::markdown inner_html=move || html.get()></div>
                    </Panel>
                </Reveal>
            </div>
        </div>
    }
}
