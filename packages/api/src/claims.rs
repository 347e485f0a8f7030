//! # Token claims: advisory only
//!
//! The backend issues a three-part signed token (`header.payload.signature`).
//! This module reads the payload **without verifying the signature**. Whatever
//! comes out of it is a hint for the UI (show the admin link, greet the user by
//! name). The backend re-checks every admin call, so a forged payload only
//! reveals screens whose requests will be refused.
//!
//! Decoding accepts both base64 alphabets, with or without padding. The admin
//! flag is on only when the payload's `is_admin` field is JSON `true`; a string
//! `"true"`, a number, or a missing field all mean "not admin".

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a token payload could not be read.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decoded, unverified token payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Claims {
    payload: Map<String, Value>,
}

impl Claims {
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let segment = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
        let normalized: String = segment
            .trim_end_matches('=')
            .chars()
            .map(|c| match c {
                '-' => '+',
                '_' => '/',
                c => c,
            })
            .collect();
        let bytes = STANDARD_NO_PAD.decode(normalized)?;
        let payload = serde_json::from_slice(&bytes)?;
        Ok(Self { payload })
    }

    /// The `sub` claim; the backend puts the username there.
    pub fn subject(&self) -> Option<&str> {
        self.payload.get("sub")?.as_str()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.payload.get("is_admin"), Some(Value::Bool(true)))
    }
}

/// What the UI may assume about the current user.
///
/// Derived from unverified claims; use it to decide what to *show*, never what
/// to *allow*.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleHint {
    #[default]
    Anonymous,
    User,
    Admin,
}

impl RoleHint {
    pub fn is_authenticated(self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
