//! Core logic for the tools, independent of the component tree.
//!
//! This module provides:
//! - [`SnippetBook`] snippet collection persisted to a [`storage::KeyValueStore`]
//! - [`format_json`] for the JSON formatter
//! - [`GithubClient`] profile and repository lookups
//! - [`theme`] persistence and application

pub mod error;
mod github;
mod json;
mod snippets;
pub mod storage;
pub mod theme;

pub use github::GithubClient;
pub use json::format_json;
pub use snippets::SnippetBook;
pub use storage::LocalStore;
