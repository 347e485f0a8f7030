//! # HTTP client and outbound request decorator
//!
//! [`ApiClient`] builds every request against the configured base URL and runs
//! it through [`decorate`](ApiClient::decorate), which attaches
//! `Authorization: Bearer <token>` whenever the [`Session`] holds a token. The
//! token is read when the request is built, so a login or logout takes effect
//! on the very next call.
//!
//! Responses with a non-success status become [`ApiError::Status`]. There is no
//! refresh and no retry-on-401: the caller sees the failure as-is.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::SessionStore;
use tracing::debug;

use crate::admin::Admin;
use crate::auth::Auth;
use crate::categories::Categories;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;
use crate::transactions::Transactions;

/// Typed client for the finance tracker backend.
///
/// Cheap to clone: the HTTP connection pool and the session store are shared.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    session: Session<S>,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session: Session::new(store),
        }
    }

    pub fn from_config(config: &ClientConfig, store: S) -> Self {
        Self::new(config.api.base_url.clone(), store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn auth(&self) -> Auth<'_, S> {
        Auth::new(self)
    }

    pub fn transactions(&self) -> Transactions<'_, S> {
        Transactions::new(self)
    }

    pub fn categories(&self) -> Categories<'_, S> {
        Categories::new(self)
    }

    pub fn admin(&self) -> Admin<'_, S> {
        Admin::new(self)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, if any, to an outgoing request.
    pub fn decorate(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, token.bearer()),
            None => request,
        }
    }

    /// Start a decorated request to `path` (relative to the base URL).
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(method = method.as_str(), url = url.as_str(), "sending request");
        self.decorate(self.http.request(method, url))
    }

    /// Send and turn non-success statuses into [`ApiError::Status`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        debug!(%status, "request rejected");
        Err(ApiError::from_response(status, &body))
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        Ok(self.send(request).await?.json().await?)
    }

    /// Send and discard the response body.
    pub(crate) async fn send_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(request).await?;
        Ok(())
    }
}
