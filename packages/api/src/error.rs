use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single request. Never retried by this crate.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, or a body that did not decode into the expected type.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ApiError {
    /// Build a status error, pulling the server's message out of the body.
    ///
    /// The backend answers `{"error": "..."}` for its own failures and
    /// `{"detail": "..."}` for framework-level ones.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = server_message(body)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        Self::Status { status, message }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| value.get(key)?.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ApiError) -> String {
        match err {
            ApiError::Status { message, .. } => message,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_key_is_used() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Username already exists"}"#,
        );
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(message(err), "Username already exists");
    }

    #[test]
    fn test_detail_key_is_used() {
        let err = ApiError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "Not authenticated"}"#,
        );
        assert!(err.is_unauthorized());
        assert_eq!(message(err), "Not authenticated");
    }

    #[test]
    fn test_structured_detail_falls_back_to_body() {
        let body = r#"{"detail": [{"loc": ["body", "amount"], "msg": "field required"}]}"#;
        let err = ApiError::from_response(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(message(err), body);
    }

    #[test]
    fn test_empty_body_uses_reason_phrase() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, "  ");
        assert_eq!(message(err), "Not Found");
    }

    #[test]
    fn test_display() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, r#"{"error": "Forbidden: Admins only"}"#);
        assert_eq!(err.to_string(), "server returned 403 Forbidden: Forbidden: Admins only");
    }
}
