//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Markdown document shown when the previewer first opens.
pub const MARKDOWN_WELCOME: &str = include_str!("../assets/text/welcome.md");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the sidebar and on the home page.
pub const APP_NAME: &str = "Dev Tools Hub";

/// Short brand shown next to the logo mark.
pub const APP_BRAND: &str = "DevTools";

/// Tagline displayed on the home page.
pub const APP_TAGLINE: &str = "A collection of essential developer tools to boost your productivity";

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage key holding the JSON array of saved snippets.
pub const SNIPPETS_KEY: &str = "devtools-snippets";

/// localStorage key holding the selected color theme.
pub const THEME_KEY: &str = "theme";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// GitHub REST API settings.
pub mod github {
    /// Base URL of the public REST API.
    pub const API_BASE: &str = "https://api.github.com";
    /// Media type sent in the `Accept` header.
    pub const ACCEPT: &str = "application/vnd.github+json";
    /// Maximum number of repositories shown per profile.
    pub const REPO_LIMIT: usize = 10;
}

// =============================================================================
// Snippet Configuration
// =============================================================================

/// Language preselected in the snippet form.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Languages offered by the snippet form, as `(value, label)` pairs.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sql", "SQL"),
];

/// Deepest array/object nesting the JSON formatter accepts.
///
/// Parsing and printing recurse once per level, so the bound keeps deep
/// input well inside the wasm stack.
pub const MAX_JSON_DEPTH: usize = 1024;

/// How long the "copied" indicator stays on a snippet (milliseconds).
pub const COPY_FEEDBACK_MS: u32 = 2000;

// =============================================================================
// Layout Configuration
// =============================================================================

/// Media query matching the desktop layout (sidebar pinned).
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 1024px)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
