//! Structured error payloads returned by the identity service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A structured, anticipated rejection from the identity service.
///
/// Carries the HTTP status the service answered with and the message taken
/// from the recognized error body. Anything that does not match one of the
/// recognized body shapes is *not* a `ServiceError`; it stays an
/// unanticipated failure and is propagated unchanged by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} (status {status})")]
pub struct ServiceError {
    /// HTTP status of the rejected request
    pub status: u16,

    /// Human-readable message from the error body
    pub message: String,

    /// Machine-readable error code, when the service supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

/// Superset of the error body shapes the service is known to emit.
#[derive(Debug, Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
}

impl ServiceError {
    /// Parse a rejected response body into a structured error.
    ///
    /// Recognized shapes, in order of preference:
    /// - `{"code": n, "msg": s}` (the service's native shape)
    /// - `{"message": s}`
    /// - `{"error": s, "error_description": s?}` (OAuth-style; the
    ///   description becomes the message and the slug becomes the code)
    ///
    /// Returns `None` when the body is not JSON or matches none of the
    /// shapes; the caller must then propagate the original failure.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Option<Self> {
        let raw: RawErrorBody = serde_json::from_str(body).ok()?;
        let RawErrorBody { msg, message, error, error_description, error_code } = raw;

        let (message, slug) = match (msg, message, error_description, error) {
            (Some(m), _, _, _) | (None, Some(m), _, _) => (m, None),
            (None, None, Some(description), slug) => (description, slug),
            (None, None, None, Some(slug)) => (slug, None),
            (None, None, None, None) => return None,
        };

        Some(Self { status, message, error_code: error_code.or(slug) })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for errors.
    use super::*;

    #[test]
    fn recognizes_native_shape() {
        let error =
            ServiceError::from_response(422, r#"{"code":422,"msg":"Invalid email"}"#).unwrap();

        assert_eq!(error.status, 422);
        assert_eq!(error.message, "Invalid email");
        assert!(error.error_code.is_none());
    }

    #[test]
    fn recognizes_message_shape() {
        let error = ServiceError::from_response(404, r#"{"message":"User not found"}"#).unwrap();

        assert_eq!(error.status, 404);
        assert_eq!(error.message, "User not found");
    }

    #[test]
    fn recognizes_oauth_shape() {
        let error = ServiceError::from_response(
            400,
            r#"{"error":"invalid_grant","error_description":"Refresh token revoked"}"#,
        )
        .unwrap();

        assert_eq!(error.message, "Refresh token revoked");
        assert_eq!(error.error_code.as_deref(), Some("invalid_grant"));
    }

    #[test]
    fn bare_error_slug_becomes_the_message() {
        let error = ServiceError::from_response(400, r#"{"error":"invalid_request"}"#).unwrap();

        assert_eq!(error.message, "invalid_request");
        assert!(error.error_code.is_none());
    }

    #[test]
    fn explicit_error_code_wins() {
        let error = ServiceError::from_response(
            403,
            r#"{"msg":"Banned","error_code":"user_banned"}"#,
        )
        .unwrap();

        assert_eq!(error.error_code.as_deref(), Some("user_banned"));
    }

    #[test]
    fn rejects_unrecognized_json() {
        assert!(ServiceError::from_response(500, r#"{"detail":"boom"}"#).is_none());
    }

    #[test]
    fn rejects_non_json_bodies() {
        assert!(ServiceError::from_response(502, "<html>Bad Gateway</html>").is_none());
        assert!(ServiceError::from_response(500, "").is_none());
    }

    #[test]
    fn display_includes_status() {
        let error = ServiceError {
            status: 422,
            message: "Invalid email".to_string(),
            error_code: None,
        };

        assert_eq!(error.to_string(), "Invalid email (status 422)");
    }
}
