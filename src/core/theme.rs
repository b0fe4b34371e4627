//! Theme persistence and application.

use crate::config::THEME_KEY;
use crate::core::error::StorageError;
use crate::core::storage::KeyValueStore;
use crate::models::Theme;
use crate::utils::dom;

/// Load the saved theme; missing or unknown values fall back to the default.
pub fn load_theme(store: &impl KeyValueStore) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Reflect the theme on `<html data-theme="...">` for the global stylesheet.
pub fn apply_theme(theme: Theme) {
    dom::set_root_attribute("data-theme", theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::memory::MemoryStore;

    #[test]
    fn test_defaults_to_dark() {
        assert_eq!(load_theme(&MemoryStore::new()), Theme::Dark);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let store = MemoryStore::new().with_entry(THEME_KEY, "system");
        assert_eq!(load_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        save_theme(&store, Theme::Light).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(load_theme(&store), Theme::Light);
    }
}
