//! JSON formatter page.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::ui::{
    Button, ButtonVariant, Motion, PageHeader, Panel, Reveal, StatusKind, StatusMessage, TextArea,
};
use crate::core::format_json;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

const INPUT_PLACEHOLDER: &str = r#"{"name": "John", "age": 30}"#;

/// Outcome of the last format attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum FormatStatus {
    #[default]
    Idle,
    Formatted,
    Failed(String),
}

#[component]
pub fn JsonPage() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let output = RwSignal::new(String::new());
    let status = RwSignal::new(FormatStatus::Idle);

    let on_format = move |_: MouseEvent| match input.with_untracked(|text| format_json(text)) {
        Ok(pretty) => {
            output.set(pretty);
            status.set(FormatStatus::Formatted);
        }
        Err(e) => {
            output.set(String::new());
            status.set(FormatStatus::Failed(e.to_string()));
        }
    };

    let on_clear = move |_: MouseEvent| {
        input.set(String::new());
        output.set(String::new());
        status.set(FormatStatus::Idle);
    };

    let status_view = move || match status.get() {
        FormatStatus::Idle => None,
        FormatStatus::Formatted => Some(view! {
            <StatusMessage kind=StatusKind::Success message="JSON formatted successfully!" />
        }),
        FormatStatus::Failed(message) => Some(view! {
            <StatusMessage kind=StatusKind::Error message=message />
        }),
    };

    view! {
        <div class=css::page>
            <PageHeader route=AppRoute::Json />

            <div class=css::toolbar>
                <Button on_click=on_format>"Format JSON"</Button>
                <Button variant=ButtonVariant::Outline on_click=on_clear>"Clear All"</Button>
                {status_view}
            </div>

            <div class=css::split>
                <Reveal motion=Motion::Left class=css::column>
                    <Panel title="Input" class=css::fill>
                        <TextArea
                            value=input
                            class=css::editor
                            label="JSON input"
                            placeholder=INPUT_PLACEHOLDER
                        />
                    </Panel>
                </Reveal>
                <Reveal motion=Motion::Right class=css::column>
                    <Panel title="Output" class=css::fill>
                        <pre class=css::output>
                            {move || {
                                let text = output.get();
                                if text.is_empty() {
                                    view! {
                                        <span class=css::placeholder>
                                            "Formatted JSON will appear here..."
                                        </span>
                                    }
                                    .into_any()
                                } else {
                                    view! { <code>{text}</code> }.into_any()
                                }
                            }}
                        </pre>
                    </Panel>
                </Reveal>
            </div>
        </div>
    }
}
