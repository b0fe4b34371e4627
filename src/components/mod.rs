//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`layout`] - Shell, sidebar and mobile menu button
//! - [`pages`] - One page per route
//! - [`ui`] - Shared buttons, fields, panels and feedback
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod layout;
pub mod pages;
pub mod router;
pub mod ui;

pub use router::AppRouter;
