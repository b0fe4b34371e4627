//! Shared UI primitives used by every tool page.
//!
//! - [`Button`] with [`ButtonVariant`] and [`ButtonSize`]
//! - [`TextInput`], [`TextArea`], [`Select`], [`Label`] form fields
//! - [`Panel`] and [`PageHeader`] layout blocks
//! - [`StatusMessage`] inline error/success feedback
//! - [`Reveal`] entrance animation wrapper

mod button;
mod feedback;
mod field;
mod motion;
mod panel;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use feedback::{StatusKind, StatusMessage};
pub use field::{Label, Select, TextArea, TextInput};
pub use motion::{Motion, Reveal};
pub use panel::{PageHeader, Panel};
