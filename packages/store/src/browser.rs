//! # Browser session storage
//!
//! [`BrowserStore`] is the [`SessionStore`] used on the **web platform**. It keeps
//! the token in `window.sessionStorage`, so each tab has its own session and the
//! token disappears when the tab closes.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, sandboxed iframes) or full. All
//! methods swallow those errors: a failed read is treated as "no token" and a
//! failed write leaves the user logged out, which the route guard then handles.

use tracing::warn;

use crate::session::{SessionStore, DEFAULT_TOKEN_KEY};
use crate::token::AccessToken;

/// `sessionStorage`-backed SessionStore.
///
/// Zero-cost to clone: the storage object is looked up on every call.
#[derive(Clone, Debug)]
pub struct BrowserStore {
    key: String,
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }
}

impl BrowserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl SessionStore for BrowserStore {
    fn save(&self, token: &AccessToken) {
        let Some(storage) = Self::storage() else {
            warn!("sessionStorage unavailable, token not saved");
            return;
        };
        if storage.set_item(&self.key, token.as_str()).is_err() {
            warn!(key = %self.key, "failed to write token to sessionStorage");
        }
    }

    fn get(&self) -> Option<AccessToken> {
        let storage = Self::storage()?;
        storage.get_item(&self.key).ok()?.map(AccessToken::from)
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.remove_item(&self.key);
    }
}
