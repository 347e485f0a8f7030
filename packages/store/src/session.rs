//! # Session store contract
//!
//! A [`SessionStore`] holds at most one [`AccessToken`] under a fixed key. The
//! contract is deliberately small:
//!
//! | Method | Behavior |
//! |--------|----------|
//! | [`save`](SessionStore::save) | Persists the token, overwriting any previous value. |
//! | [`get`](SessionStore::get) | Returns the stored token, or `None` when nothing is set. |
//! | [`clear`](SessionStore::clear) | Removes the token. Clearing an empty store is a no-op. |
//!
//! There is no expiry tracking and no encryption: the stored value is exactly
//! what the server issued. Access is synchronous because the route guard must
//! decide before a view renders.

use crate::token::AccessToken;

/// Key used when no other key is configured.
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Storage for the current bearer token.
pub trait SessionStore {
    fn save(&self, token: &AccessToken);
    fn get(&self) -> Option<AccessToken>;
    fn clear(&self);
}
