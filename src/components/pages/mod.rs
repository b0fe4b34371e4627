//! One component per route.

mod github;
mod home;
mod json;
mod markdown;
mod not_found;
mod snippets;

pub use github::GithubPage;
pub use home::HomePage;
pub use json::JsonPage;
pub use markdown::MarkdownPage;
pub use not_found::NotFoundPage;
pub use snippets::SnippetsPage;
