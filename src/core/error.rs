//! Custom error types for the application.
//!
//! Every variant's `Display` text is what the UI shows inline, so messages
//! are written for the user rather than for a log:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`StorageError`] - localStorage reads and writes
//! - [`SnippetError`] - Snippet form validation and persistence
//! - [`JsonFormatError`] - JSON formatter input and parse failures
//! - [`GithubError`] - GitHub profile lookups
//! - [`ClipboardError`] - Clipboard writes

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to serialize data to JSON.
    #[error("failed to serialize data: {0}")]
    SerializationFailed(String),
    /// Failed to write to localStorage (quota, privacy mode).
    #[error("failed to save to localStorage")]
    WriteFailed,
    /// Failed to remove from localStorage.
    #[error("failed to remove from localStorage")]
    RemoveFailed,
}

/// Snippet manager errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnippetError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Code is required")]
    MissingCode,
    /// Update requested while no snippet is being edited.
    #[error("No snippet selected for editing")]
    NoEditTarget,
    #[error("Snippet not found")]
    NotFound,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// JSON formatter errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JsonFormatError {
    /// Input was empty or whitespace only; nothing was parsed.
    #[error("Please enter some JSON to format")]
    Empty,
    /// The parser's own message.
    #[error("{0}")]
    Parse(String),
    /// Nesting beyond the supported depth.
    #[error("JSON nested deeper than {0} levels is not supported")]
    TooDeep(usize),
}

/// GitHub viewer errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GithubError {
    #[error("Please enter a GitHub username")]
    EmptyUsername,
    /// Non-success response for the user resource.
    #[error("User not found")]
    UserNotFound,
    /// Non-success response for the repository list.
    #[error("Failed to fetch repositories")]
    ReposFailed,
    /// Transport failure on either request.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Clipboard write errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipboardError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Clipboard write rejected: {0}")]
    WriteRejected(String),
}
