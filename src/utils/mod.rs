//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`JsonFetcher`], [`BrowserFetcher`] - Network fetching with timeout
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`normalize_external_url`] - Free-text link normalization
//! - [`generate_id`] - Record identifiers

pub mod dom;
mod fetch;
pub mod format;
mod id;
mod markdown;
mod url;

pub use fetch::{BrowserFetcher, JsonFetcher};
pub use id::{generate_id, now_millis};
pub use markdown::markdown_to_html;
pub use url::normalize_external_url;
