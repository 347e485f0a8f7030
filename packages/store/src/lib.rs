//! Per-tab persistence for the bearer token.
//!
//! The browser build keeps the token in `window.sessionStorage` through
//! [`BrowserStore`]; native builds and tests use [`MemoryStore`].

pub mod session;
pub mod token;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use session::{SessionStore, DEFAULT_TOKEN_KEY};
pub use token::AccessToken;
