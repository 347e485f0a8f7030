use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::{SessionStore, DEFAULT_TOKEN_KEY};
use crate::token::AccessToken;

/// In-memory SessionStore for tests and native builds.
///
/// Clones share the same map, so a handle held by the HTTP client sees what
/// the login view saved.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    key: String,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Arc::default(),
        }
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock still holds a usable map.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, token: &AccessToken) {
        self.entries()
            .insert(self.key.clone(), token.as_str().to_string());
    }

    fn get(&self) -> Option<AccessToken> {
        self.entries().get(&self.key).cloned().map(AccessToken::from)
    }

    fn clear(&self) {
        self.entries().remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_token() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_save_overwrites_previous_token() {
        let store = MemoryStore::new();

        store.save(&AccessToken::new("first"));
        store.save(&AccessToken::new("second"));

        assert_eq!(store.get(), Some(AccessToken::new("second")));
    }

    #[test]
    fn test_clear_removes_token() {
        let store = MemoryStore::new();
        store.save(&AccessToken::new("abc"));

        store.clear();
        assert!(store.get().is_none());

        // Clearing twice is fine
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save(&AccessToken::new("shared"));
        assert_eq!(other.get(), Some(AccessToken::new("shared")));

        other.clear();
        assert!(store.get().is_none());
    }
}
