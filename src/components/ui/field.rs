//! Form fields bound to `RwSignal<String>`.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/ui/ui.module.css");

#[component]
pub fn Label(#[prop(into)] for_id: String, children: Children) -> impl IntoView {
    view! {
        <label class=css::label for=for_id>
            {children()}
        </label>
    }
}

/// Single-line text input. `on_enter` fires when Enter is pressed.
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] on_enter: Option<Callback<()>>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter"
            && let Some(cb) = on_enter
        {
            ev.prevent_default();
            cb.run(());
        }
    };

    view! {
        <input
            type="text"
            class=css::input
            id=id
            placeholder=placeholder
            autocomplete="off"
            disabled=move || disabled.get().unwrap_or(false)
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            on:keydown=on_keydown
        />
    }
}

/// Multi-line monospace editor.
#[component]
pub fn TextArea(
    value: RwSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Extra class, e.g. to let the editor fill a panel.
    #[prop(optional, into)]
    class: Option<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let class = match class {
        Some(extra) => format!("{} {}", css::textarea, extra),
        None => css::textarea.to_string(),
    };

    view! {
        <textarea
            class=class
            id=id
            placeholder=placeholder
            aria-label=label
            spellcheck="false"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        ></textarea>
    }
}

/// Drop-down over static `(value, label)` pairs.
#[component]
pub fn Select(
    value: RwSignal<String>,
    options: &'static [(&'static str, &'static str)],
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <select
            class=css::select
            id=id
            on:change=move |ev| value.set(event_target_value(&ev))
        >
            {options
                .iter()
                .map(|&(option, label)| {
                    view! {
                        <option value=option selected=move || value.get() == option>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
