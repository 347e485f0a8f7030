//! # Authentication
//!
//! [`Auth`] wraps the two auth endpoints and the session queries the views
//! need.
//!
//! - [`login`](Auth::login) posts form-encoded credentials and returns the
//!   token. It does **not** store it; the caller decides, usually via
//!   [`begin_session`](Auth::begin_session).
//! - [`register`](Auth::register) posts JSON credentials and returns the new
//!   user. It does not log in.
//! - [`logout`](Auth::logout) forgets the token locally. The server is not told.
//!
//! [`is_admin`](Auth::is_admin) and [`username`](Auth::username) read the token
//! payload without checking its signature. They are display hints; see
//! [`crate::claims`].

use reqwest::Method;
use store::{AccessToken, SessionStore};
use tracing::info;

use crate::claims::RoleHint;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, RegisteredUser, TokenResponse};

/// Auth endpoints plus session queries.
pub struct Auth<'a, S> {
    client: &'a ApiClient<S>,
}

impl<'a, S: SessionStore> Auth<'a, S> {
    pub(crate) fn new(client: &'a ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/login")
            .form(&Credentials { username, password });
        let response: TokenResponse = self.client.send_json(request).await?;
        info!(username, "logged in");
        Ok(response.access_token)
    }

    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegisteredUser, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/register")
            .json(&Credentials { username, password });
        let user: RegisteredUser = self.client.send_json(request).await?;
        info!(username = %user.username, id = user.id, "registered");
        Ok(user)
    }

    /// Persist a token obtained from [`login`](Self::login).
    pub fn begin_session(&self, token: AccessToken) {
        self.client.session().begin(token);
    }

    pub fn logout(&self) {
        self.client.session().end();
    }

    pub fn is_authenticated(&self) -> bool {
        self.client.session().is_authenticated()
    }

    /// Advisory: `true` only if the token payload says `"is_admin": true`.
    pub fn is_admin(&self) -> bool {
        self.role_hint().is_admin()
    }

    pub fn role_hint(&self) -> RoleHint {
        self.client.session().role_hint()
    }

    /// The `sub` claim of the current token.
    pub fn username(&self) -> Option<String> {
        self.client
            .session()
            .claims()
            .and_then(|claims| claims.subject().map(str::to_string))
    }
}
