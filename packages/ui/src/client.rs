//! Shared client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::SessionStore`]:
//! - **Web** (WASM + `web` feature): `sessionStorage` via [`store::BrowserStore`]
//! - **Native** (tests, `dx` server-side render): in-memory via [`store::MemoryStore`]

use api::{ApiClient, ClientConfig};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::BrowserStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStore = store::MemoryStore;

/// The client type every view talks to.
pub type AppClient = ApiClient<AppStore>;

/// Create a client from the build-time configuration.
pub fn make_client() -> AppClient {
    make_client_with(&ClientConfig::from_build_env())
}

/// Create a client whose session lives under `config.session.token_key`.
pub fn make_client_with(config: &ClientConfig) -> AppClient {
    let store = AppStore::with_key(config.session.token_key.clone());
    ApiClient::from_config(config, store)
}
