use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/ui/ui.module.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Success,
}

/// Inline message with a leading icon. Errors are announced to screen readers.
#[component]
pub fn StatusMessage(kind: StatusKind, #[prop(into)] message: String) -> impl IntoView {
    let (class, icon, role) = match kind {
        StatusKind::Error => (css::alertError, ic::ALERT, "alert"),
        StatusKind::Success => (css::alertSuccess, ic::SUCCESS, "status"),
    };

    view! {
        <div class=format!("{} {}", css::alert, class) role=role>
            <Icon icon=icon />
            <span>{message}</span>
        </div>
    }
}
