//! Hash-based routing.

/// Application routes for hash-based navigation.
/// URL format: `#/tool` (e.g., `#/json`, `#/snippets`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page: #/ or empty hash
    Home,
    Markdown,
    Json,
    Snippets,
    GitHub,
    /// Any unrecognized path (without the leading slash)
    NotFound(String),
}

impl AppRoute {
    /// Routes listed in the sidebar, in display order.
    pub const NAV: [AppRoute; 5] = [
        AppRoute::Home,
        AppRoute::Markdown,
        AppRoute::Json,
        AppRoute::Snippets,
        AppRoute::GitHub,
    ];

    /// Tool routes shown as cards on the home page.
    pub const TOOLS: [AppRoute; 4] = [
        AppRoute::Markdown,
        AppRoute::Json,
        AppRoute::Snippets,
        AppRoute::GitHub,
    ];

    /// Parse URL hash into a route
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "" => Self::Home,
            "markdown" => Self::Markdown,
            "json" => Self::Json,
            "snippets" => Self::Snippets,
            "github" => Self::GitHub,
            other => Self::NotFound(other.to_string()),
        }
    }

    /// Convert route to URL hash (usable directly as an `href`)
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Markdown => "#/markdown".to_string(),
            Self::Json => "#/json".to_string(),
            Self::Snippets => "#/snippets".to_string(),
            Self::GitHub => "#/github".to_string(),
            Self::NotFound(path) => format!("#/{}", path),
        }
    }

    /// Short label used in navigation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
            Self::Snippets => "Snippets",
            Self::GitHub => "GitHub",
            Self::NotFound(_) => "Not Found",
        }
    }

    /// Full tool name used in page headers and home cards.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Dev Tools Hub",
            Self::Markdown => "Markdown Previewer",
            Self::Json => "JSON Formatter",
            Self::Snippets => "Code Snippet Manager",
            Self::GitHub => "GitHub Repo Viewer",
            Self::NotFound(_) => "Page Not Found",
        }
    }

    /// One-line description used in page headers and home cards.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Home => "A modern developer productivity suite",
            Self::Markdown => "Write markdown and see the live preview",
            Self::Json => "Format and validate your JSON data",
            Self::Snippets => "Save and organize your code snippets",
            Self::GitHub => "Browse GitHub repositories and user profiles",
            Self::NotFound(_) => "Nothing lives at this address",
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }
}
