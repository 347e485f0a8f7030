//! The bearer header is attached exactly when a token is stored.

mod fixtures;

use fixtures::{client, jwt};
use serde_json::json;
use store::AccessToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_header_follows_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(3)
        .mount(&server)
        .await;

    let client = client(&server);
    let token = jwt(json!({"sub": "alice"}));

    client.categories().list().await.unwrap();
    client.session().begin(AccessToken::new(token.clone()));
    client.categories().list().await.unwrap();
    client.session().end();
    client.categories().list().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let auth_headers: Vec<Option<String>> = requests
        .iter()
        .map(|r| {
            r.headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .collect();

    assert_eq!(
        auth_headers,
        vec![None, Some(format!("Bearer {token}")), None]
    );
}

#[tokio::test]
async fn test_rejected_token_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/summary"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = fixtures::logged_in(&server, "expired.token.value");
    let err = client.transactions().summary().await.unwrap_err();

    assert!(err.is_unauthorized());
    // The stored token is left alone; logging out is the view's call
    assert!(client.auth().is_authenticated());
}
