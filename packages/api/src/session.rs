//! The session context shared by the HTTP client and the views.

use store::{AccessToken, SessionStore};
use tracing::{debug, info};

use crate::claims::{Claims, RoleHint};
use crate::guard::Access;

/// Explicit holder of the current bearer token.
///
/// Set by [`begin`](Session::begin) after a successful login, cleared by
/// [`end`](Session::end). Reads go to the backing store every time, so clones
/// handed to different views observe the same token.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn begin(&self, token: AccessToken) {
        self.store.save(&token);
        info!("session started");
    }

    pub fn end(&self) {
        self.store.clear();
        info!("session ended");
    }

    pub fn token(&self) -> Option<AccessToken> {
        self.store.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Decoded payload of the current token, if there is one and it decodes.
    pub fn claims(&self) -> Option<Claims> {
        let token = self.token()?;
        match Claims::decode(token.as_str()) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!("failed to decode token payload: {e}");
                None
            }
        }
    }

    /// Advisory role; an undecodable token still counts as a plain user.
    pub fn role_hint(&self) -> RoleHint {
        if !self.is_authenticated() {
            return RoleHint::Anonymous;
        }
        match self.claims() {
            Some(claims) if claims.is_admin() => RoleHint::Admin,
            _ => RoleHint::User,
        }
    }

    /// Synchronous route check. No server round-trip.
    pub fn can_enter(&self, access: Access) -> bool {
        access.permits(self.role_hint())
    }
}
