use leptos::ev::MouseEvent;
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/ui/ui.module.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    /// Square, icon only.
    Icon,
}

fn button_class(variant: ButtonVariant, size: ButtonSize, wide: bool) -> String {
    let variant = match variant {
        ButtonVariant::Primary => css::primary,
        ButtonVariant::Outline => css::outline,
        ButtonVariant::Destructive => css::destructive,
        ButtonVariant::Ghost => css::ghost,
    };
    let mut class = format!("{} {}", css::button, variant);
    if size == ButtonSize::Icon {
        class.push(' ');
        class.push_str(css::iconButton);
    }
    if wide {
        class.push(' ');
        class.push_str(css::wide);
    }
    class
}

/// Themed `<button type="button">`.
///
/// `label` becomes the `aria-label`, which icon-only buttons need.
#[component]
pub fn Button(
    #[prop(into)] on_click: Callback<MouseEvent>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Stretch to fill the row.
    #[prop(optional)]
    wide: bool,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(into, optional)] title: MaybeProp<String>,
    #[prop(into, optional)] label: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, size, wide)
            disabled=move || disabled.get().unwrap_or(false)
            title=move || title.get()
            aria-label=move || label.get()
            on:click=move |ev| on_click.run(ev)
        >
            {children()}
        </button>
    }
}
