//! Snippet collection persisted as one JSON array.
//!
//! Every mutation writes the full list before it takes effect in memory: if
//! the write fails, the collection is left exactly as it was.

use crate::config::SNIPPETS_KEY;
use crate::core::error::SnippetError;
use crate::core::storage::{KeyValueStore, load_json, save_json};
use crate::models::{Snippet, SnippetDraft};
use crate::utils::format::format_timestamp_iso;
use crate::utils::{generate_id, now_millis};

/// Ordered snippet list (newest first) bound to its backing store.
#[derive(Debug, Clone)]
pub struct SnippetBook<S> {
    store: S,
    snippets: Vec<Snippet>,
}

impl<S: KeyValueStore> SnippetBook<S> {
    /// Load the saved list. A missing key is an empty list; so is an
    /// unreadable one, which is logged and left in place until the next write.
    pub fn load(store: S) -> Self {
        let snippets = match load_json::<Vec<Snippet>>(&store, SNIPPETS_KEY) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(_e) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("Ignoring unreadable saved snippets: {}", _e).into(),
                );
                Vec::new()
            }
        };
        Self { store, snippets }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, id: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Create a snippet from a validated draft and put it first.
    ///
    /// Returns the new snippet's id.
    pub fn add(&mut self, draft: SnippetDraft) -> Result<String, SnippetError> {
        draft.validate()?;

        let mut id = generate_id();
        while self.get(&id).is_some() {
            id = generate_id();
        }

        let snippet = Snippet {
            id: id.clone(),
            title: draft.title,
            language: draft.language,
            code: draft.code,
            created_at: format_timestamp_iso(now_millis()),
        };

        let mut next = Vec::with_capacity(self.snippets.len() + 1);
        next.push(snippet);
        next.extend(self.snippets.iter().cloned());
        self.commit(next)?;
        Ok(id)
    }

    /// Replace the editable fields of the edit target, keeping its position.
    pub fn update(&mut self, target: Option<&str>, draft: SnippetDraft) -> Result<(), SnippetError> {
        let id = target.ok_or(SnippetError::NoEditTarget)?;
        draft.validate()?;

        let index = self
            .snippets
            .iter()
            .position(|s| s.id == id)
            .ok_or(SnippetError::NotFound)?;

        let mut next = self.snippets.clone();
        next[index].apply(draft);
        self.commit(next)
    }

    /// Remove one snippet. Returns whether it existed.
    pub fn remove(&mut self, id: &str) -> Result<bool, SnippetError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let next = self.snippets.iter().filter(|s| s.id != id).cloned().collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Remove every snippet and the storage key itself.
    pub fn clear(&mut self) -> Result<(), SnippetError> {
        self.store.remove(SNIPPETS_KEY)?;
        self.snippets.clear();
        Ok(())
    }

    fn commit(&mut self, next: Vec<Snippet>) -> Result<(), SnippetError> {
        save_json(&self.store, SNIPPETS_KEY, &next)?;
        self.snippets = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LANGUAGE;
    use crate::core::error::StorageError;
    use crate::core::storage::memory::MemoryStore;

    fn draft(title: &str) -> SnippetDraft {
        SnippetDraft::new(title, "rust", format!("// {}", title))
    }

    fn titles<S: KeyValueStore>(book: &SnippetBook<S>) -> Vec<&str> {
        book.snippets().iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let book = SnippetBook::load(MemoryStore::new());
        assert!(book.is_empty());
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        let store = MemoryStore::new().with_entry(SNIPPETS_KEY, "{not json");
        let book = SnippetBook::load(store);
        assert!(book.is_empty());
    }

    #[test]
    fn test_incomplete_record_keeps_collection() {
        let saved = r#"[
            {"id":"a","title":"Full","language":"go","code":"x","createdAt":"2024-01-02T00:00:00.000Z"},
            {"id":"b","title":"Sparse","code":"y"}
        ]"#;
        let store = MemoryStore::new().with_entry(SNIPPETS_KEY, saved);
        let mut book = SnippetBook::load(&store);

        assert_eq!(book.snippets().len(), 2);
        let sparse = book.get("b").unwrap();
        assert_eq!(sparse.language, DEFAULT_LANGUAGE);
        assert_eq!(sparse.created_at, "");

        // The next write keeps both old records
        book.add(draft("new")).unwrap();
        let reloaded = SnippetBook::load(&store);
        let ids: Vec<&str> = reloaded.snippets().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(&ids[1..], ["a", "b"]);
    }

    #[test]
    fn test_add_then_reload() {
        let store = MemoryStore::new();
        let mut book = SnippetBook::load(&store);
        let id = book.add(draft("first")).unwrap();

        let reloaded = SnippetBook::load(&store);
        assert_eq!(reloaded.snippets().len(), 1);
        let snippet = &reloaded.snippets()[0];
        assert_eq!(snippet.id, id);
        assert!(!snippet.id.is_empty());
        assert_eq!(snippet.title, "first");
        assert_eq!(snippet.language, "rust");
        assert!(snippet.created_at.ends_with('Z'));
    }

    #[test]
    fn test_newest_first_with_fresh_ids() {
        let mut book = SnippetBook::load(MemoryStore::new());
        let a = book.add(draft("a")).unwrap();
        let b = book.add(draft("b")).unwrap();
        let c = book.add(draft("c")).unwrap();

        assert_eq!(titles(&book), vec!["c", "b", "a"]);
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn test_add_requires_title_and_code() {
        let store = MemoryStore::new();
        let mut book = SnippetBook::load(&store);

        assert_eq!(
            book.add(SnippetDraft::new("", "rust", "code")),
            Err(SnippetError::MissingTitle)
        );
        assert_eq!(
            book.add(SnippetDraft::new("title", "rust", "   ")),
            Err(SnippetError::MissingCode)
        );
        assert!(book.is_empty());
        assert!(!store.contains(SNIPPETS_KEY));
    }

    #[test]
    fn test_update_in_place() {
        let store = MemoryStore::new();
        let mut book = SnippetBook::load(&store);
        book.add(draft("a")).unwrap();
        let b = book.add(draft("b")).unwrap();
        book.add(draft("c")).unwrap();
        let created_at = book.get(&b).unwrap().created_at.clone();

        book.update(Some(b.as_str()), SnippetDraft::new("B!", "go", "package main"))
            .unwrap();

        assert_eq!(titles(&book), vec!["c", "B!", "a"]);
        let updated = book.get(&b).unwrap();
        assert_eq!(updated.language, "go");
        assert_eq!(updated.created_at, created_at);

        let reloaded = SnippetBook::load(&store);
        assert_eq!(titles(&reloaded), vec!["c", "B!", "a"]);
    }

    #[test]
    fn test_update_requires_edit_target() {
        let mut book = SnippetBook::load(MemoryStore::new());
        book.add(draft("a")).unwrap();

        assert_eq!(
            book.update(None, draft("x")),
            Err(SnippetError::NoEditTarget)
        );
        assert_eq!(
            book.update(Some("missing"), draft("x")),
            Err(SnippetError::NotFound)
        );
        assert_eq!(titles(&book), vec!["a"]);
    }

    #[test]
    fn test_remove_only_that_id() {
        let store = MemoryStore::new();
        let mut book = SnippetBook::load(&store);
        book.add(draft("a")).unwrap();
        let b = book.add(draft("b")).unwrap();
        book.add(draft("c")).unwrap();
        book.add(draft("d")).unwrap();

        assert_eq!(book.remove(&b), Ok(true));
        assert_eq!(titles(&book), vec!["d", "c", "a"]);
        assert_eq!(book.remove(&b), Ok(false));

        let reloaded = SnippetBook::load(&store);
        assert_eq!(titles(&reloaded), vec!["d", "c", "a"]);
    }

    #[test]
    fn test_removing_last_snippet_persists_empty_list() {
        let store = MemoryStore::new();
        let mut book = SnippetBook::load(&store);
        let id = book.add(draft("only")).unwrap();
        book.remove(&id).unwrap();

        assert!(SnippetBook::load(&store).is_empty());
    }

    #[test]
    fn test_clear_removes_key() {
        let store = MemoryStore::new();
        let mut book = SnippetBook::load(&store);
        book.add(draft("a")).unwrap();
        book.add(draft("b")).unwrap();

        book.clear().unwrap();
        assert!(book.is_empty());
        assert!(!store.contains(SNIPPETS_KEY));
    }

    #[test]
    fn test_failed_write_leaves_list_unchanged() {
        let saved = r#"[{"id":"1","title":"kept","language":"rust","code":"x","createdAt":"2024-01-01T00:00:00.000Z"}]"#;
        let store = MemoryStore::read_only().with_entry(SNIPPETS_KEY, saved);
        let mut book = SnippetBook::load(store);

        assert_eq!(
            book.add(draft("new")),
            Err(SnippetError::Storage(StorageError::WriteFailed))
        );
        assert_eq!(
            book.remove("1"),
            Err(SnippetError::Storage(StorageError::WriteFailed))
        );
        assert_eq!(
            book.clear(),
            Err(SnippetError::Storage(StorageError::RemoveFailed))
        );
        assert_eq!(titles(&book), vec!["kept"]);
    }
}
