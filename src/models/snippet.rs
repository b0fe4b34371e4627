//! Snippet records and the form draft that produces them.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_LANGUAGE, LANGUAGES};
use crate::core::error::SnippetError;

/// A user-authored, labeled code fragment persisted in localStorage.
///
/// Field names serialize in camelCase (`createdAt`) to keep the stored
/// JSON layout stable. Records saved without a language or creation time
/// still load, so one incomplete entry never drops the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub title: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub code: String,
    /// ISO-8601 UTC creation time.
    #[serde(default)]
    pub created_at: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Snippet {
    /// Display label for the snippet's language.
    pub fn language_label(&self) -> &str {
        language_label(&self.language)
    }

    /// Overwrite the editable fields; `id` and `created_at` never change.
    pub(crate) fn apply(&mut self, draft: SnippetDraft) {
        self.title = draft.title;
        self.language = draft.language;
        self.code = draft.code;
    }
}

/// Form contents for creating or editing a snippet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetDraft {
    pub title: String,
    pub language: String,
    pub code: String,
}

impl SnippetDraft {
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            code: code.into(),
        }
    }

    /// Check required fields. Whitespace-only values count as empty.
    pub fn validate(&self) -> Result<(), SnippetError> {
        if self.title.trim().is_empty() {
            return Err(SnippetError::MissingTitle);
        }
        if self.code.trim().is_empty() {
            return Err(SnippetError::MissingCode);
        }
        Ok(())
    }
}

impl Default for SnippetDraft {
    fn default() -> Self {
        Self::new("", DEFAULT_LANGUAGE, "")
    }
}

impl From<&Snippet> for SnippetDraft {
    fn from(snippet: &Snippet) -> Self {
        Self::new(&snippet.title, &snippet.language, &snippet.code)
    }
}

/// Label for a language value; unknown values display as-is.
pub fn language_label(value: &str) -> &str {
    LANGUAGES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Which snippet currently shows the transient "copied" mark.
///
/// Each copy starts a timer that later calls [`CopyIndicator::expire`] with
/// its own id; a timer from an earlier copy must not clear a newer mark.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    current: Option<String>,
}

impl CopyIndicator {
    pub fn mark(&mut self, id: &str) {
        self.current = Some(id.to_string());
    }

    pub fn expire(&mut self, id: &str) {
        if self.current.as_deref() == Some(id) {
            self.current = None;
        }
    }

    pub fn is_copied(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snippet {
        Snippet {
            id: "abc".to_string(),
            title: "Hello".to_string(),
            language: "rust".to_string(),
            code: "fn main() {}".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"createdAt\":\"2024-01-01T00:00:00.000Z\""));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn test_reads_stored_layout() {
        let json = r#"{"id":"1717","title":"t","language":"go","code":"x","createdAt":"2024-05-01T12:00:00.000Z"}"#;
        let snippet: Snippet = serde_json::from_str(json).unwrap();
        assert_eq!(snippet.id, "1717");
        assert_eq!(snippet.created_at, "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_draft_validation() {
        assert_eq!(
            SnippetDraft::new("  ", "rust", "code").validate(),
            Err(SnippetError::MissingTitle)
        );
        assert_eq!(
            SnippetDraft::new("title", "rust", "\n\t").validate(),
            Err(SnippetError::MissingCode)
        );
        assert!(SnippetDraft::new("title", "rust", "code").validate().is_ok());
    }

    #[test]
    fn test_default_draft_language() {
        assert_eq!(SnippetDraft::default().language, "javascript");
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut snippet = sample();
        snippet.apply(SnippetDraft::new("New", "python", "print()"));
        assert_eq!(snippet.id, "abc");
        assert_eq!(snippet.created_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(snippet.title, "New");
        assert_eq!(snippet.language_label(), "Python");
    }

    #[test]
    fn test_language_label() {
        assert_eq!(language_label("cpp"), "C++");
        assert_eq!(language_label("cobol"), "cobol");
    }

    #[test]
    fn test_copy_indicator_keyed_by_id() {
        let mut indicator = CopyIndicator::default();
        indicator.mark("a");
        assert!(indicator.is_copied("a"));

        indicator.mark("b");
        assert!(!indicator.is_copied("a"));

        // Timer from the first copy fires late
        indicator.expire("a");
        assert!(indicator.is_copied("b"));

        indicator.expire("b");
        assert!(!indicator.is_copied("b"));
    }
}
