use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/ui/ui.module.css");

/// Entrance direction for [`Reveal`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Fade,
    Up,
    Down,
    Left,
    Right,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::Fade => css::fade,
            Motion::Up => css::up,
            Motion::Down => css::down,
            Motion::Left => css::left,
            Motion::Right => css::right,
        }
    }
}

/// Plays a one-shot CSS entrance animation on mount.
#[component]
pub fn Reveal(
    #[prop(optional)] motion: Motion,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "{} {} {}",
        css::reveal,
        motion.class(),
        class.unwrap_or_default()
    );

    view! {
        <div class=class style=format!("animation-delay: {}ms", delay_ms)>
            {children()}
        </div>
    }
}
