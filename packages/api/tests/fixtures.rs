//! Shared helpers for HTTP client tests.

#![allow(dead_code)]

use api::ApiClient;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;
use store::{AccessToken, MemoryStore};
use wiremock::MockServer;

/// Build an unsigned three-part token carrying `claims`.
pub fn jwt(claims: Value) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string()),
        URL_SAFE_NO_PAD.encode("not-a-real-signature"),
    )
}

pub fn client(server: &MockServer) -> ApiClient<MemoryStore> {
    ApiClient::new(server.uri(), MemoryStore::new())
}

/// Client that already holds `token`.
pub fn logged_in(server: &MockServer, token: &str) -> ApiClient<MemoryStore> {
    let client = client(server);
    client.session().begin(AccessToken::new(token));
    client
}

pub fn transaction(id: i64, amount: f64, description: &str) -> Value {
    serde_json::json!({
        "id": id,
        "date": "2024-06-01T09:30:00",
        "amount": amount,
        "category_id": null,
        "description": description,
        "owner_id": 1,
    })
}
