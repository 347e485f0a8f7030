//! Login, registration, logout and the advisory role queries.

mod fixtures;

use api::{Access, ApiError, RoleHint};
use fixtures::{client, jwt};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=pw123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": token, "token_type": "bearer"})),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_then_authenticated() {
    let server = MockServer::start().await;
    let token = jwt(json!({"sub": "alice", "is_admin": false}));
    mount_login(&server, &token).await;

    let client = client(&server);
    let auth = client.auth();
    assert!(!auth.is_authenticated());

    let issued = auth.login("alice", "pw123").await.unwrap();
    assert_eq!(issued.as_str(), token);

    // Login alone does not persist the token
    assert!(!auth.is_authenticated());

    auth.begin_session(issued);
    assert!(auth.is_authenticated());
    assert!(!auth.is_admin());
    assert_eq!(auth.username().as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_is_admin_mirrors_claim() {
    for (claim, expected) in [(json!(true), true), (json!(false), false)] {
        let server = MockServer::start().await;
        let token = jwt(json!({"sub": "alice", "is_admin": claim}));
        mount_login(&server, &token).await;

        let client = client(&server);
        let auth = client.auth();
        let issued = auth.login("alice", "pw123").await.unwrap();
        auth.begin_session(issued);

        assert_eq!(auth.is_admin(), expected);
        assert_eq!(client.session().can_enter(Access::AdminOnly), expected);
    }
}

#[tokio::test]
async fn test_token_without_admin_claim_is_not_admin() {
    let server = MockServer::start().await;
    let token = jwt(json!({"sub": "alice", "exp": 1_900_000_000}));
    mount_login(&server, &token).await;

    let client = client(&server);
    let auth = client.auth();
    auth.begin_session(auth.login("alice", "pw123").await.unwrap());

    assert!(!auth.is_admin());
    assert_eq!(auth.role_hint(), RoleHint::User);
}

#[tokio::test]
async fn test_malformed_token_is_not_admin() {
    let server = MockServer::start().await;
    mount_login(&server, "definitely.not-base64!.jwt").await;

    let client = client(&server);
    let auth = client.auth();
    auth.begin_session(auth.login("alice", "pw123").await.unwrap());

    assert!(auth.is_authenticated());
    assert!(!auth.is_admin());
    assert_eq!(auth.username(), None);
}

#[tokio::test]
async fn test_failed_login_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid username or password"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = client.auth().login("alice", "wrong").await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Invalid username or password");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn test_register_sends_json_and_does_not_log_in() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .and(body_json(json!({"username": "bob", "password": "hunter22"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "username": "bob"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let user = client.auth().register("bob", "hunter22").await.unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.username, "bob");
    assert!(!client.auth().is_authenticated());
}

#[tokio::test]
async fn test_register_conflict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": "Username already exists"})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .auth()
        .register("bob", "hunter22")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn test_logout_clears_session_without_server_call() {
    let server = MockServer::start().await;
    let client = fixtures::logged_in(&server, &jwt(json!({"sub": "alice", "is_admin": true})));
    assert!(client.auth().is_admin());

    client.auth().logout();

    assert!(!client.auth().is_authenticated());
    assert!(!client.auth().is_admin());
    assert!(!client.session().can_enter(Access::Authenticated));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unauthenticated_cannot_enter_admin_route() {
    let server = MockServer::start().await;
    let client = client(&server);

    assert!(!client.session().can_enter(Access::AdminOnly));
    assert!(!client.session().can_enter(Access::Authenticated));
    // The decision needs no network
    assert!(server.received_requests().await.unwrap().is_empty());
}
