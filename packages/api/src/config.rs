//! # Client configuration
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"   # backend root, no trailing slash needed
//!
//! [session]
//! token_key = "access_token"           # sessionStorage key for the bearer token
//! ```
//!
//! Every section and field has a default, so an empty document is a valid
//! configuration. The browser bundle has no config file to read; it uses
//! [`ClientConfig::from_build_env`], which picks up `FINANCE_CLIENT_CONFIG` and
//! `FINANCE_API_BASE_URL` at compile time.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// How the token is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_token_key() -> String {
    store::DEFAULT_TOKEN_KEY.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            session: SessionConfig::default(),
        }
    }

    /// Configuration baked in when the crate was compiled.
    ///
    /// `FINANCE_CLIENT_CONFIG` may hold a whole TOML document; a malformed one
    /// is logged and replaced by the defaults. `FINANCE_API_BASE_URL`, when
    /// set, overrides the base URL either way.
    pub fn from_build_env() -> Self {
        Self::from_env_values(
            option_env!("FINANCE_CLIENT_CONFIG"),
            option_env!("FINANCE_API_BASE_URL"),
        )
    }

    fn from_env_values(document: Option<&str>, base_url: Option<&str>) -> Self {
        let mut config = match document.map(Self::from_toml) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                warn!("ignoring FINANCE_CLIENT_CONFIG: {e}");
                Self::default()
            }
            None => Self::default(),
        };
        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api.base_url = url.to_string();
        }
        config
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
