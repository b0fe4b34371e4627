//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`AppRoute`] - Hash-based navigation
//! - [`SidebarState`], [`SidebarMode`], [`Viewport`] - Responsive sidebar
//! - [`Theme`] - Light/dark color theme
//! - [`Snippet`], [`SnippetDraft`], [`CopyIndicator`] - Snippet manager records
//! - [`GithubUser`], [`GithubRepo`], [`GithubProfile`], [`SearchState`] - GitHub viewer

mod github;
mod route;
mod sidebar;
mod snippet;
mod theme;

pub use github::{GithubProfile, GithubRepo, GithubUser, SearchState};
pub use route::AppRoute;
pub use sidebar::{SidebarMode, SidebarState, Viewport};
pub use snippet::{CopyIndicator, Snippet, SnippetDraft};
pub use theme::Theme;
