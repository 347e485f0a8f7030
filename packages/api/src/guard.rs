//! Route access levels.
//!
//! The decision is made from the stored token alone, before the view renders.
//! It only decides what the client shows; the backend enforces access itself.

use crate::claims::RoleHint;

/// What a protected view requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Any stored token.
    Authenticated,
    /// A stored token whose payload claims `is_admin: true`.
    AdminOnly,
}

impl Access {
    pub fn permits(self, hint: RoleHint) -> bool {
        match self {
            Self::Authenticated => hint.is_authenticated(),
            Self::AdminOnly => hint.is_authenticated() && hint.is_admin(),
        }
    }
}
