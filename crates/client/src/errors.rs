//! Client error types and the shared failure classifier.

use authgate_domain::ServiceError;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by every client operation.
///
/// `Api` is the typed channel for anticipated service rejections — failures
/// the service itself described with a structured error body. Every other
/// variant carries an unanticipated failure (network fault, unrecognizable
/// body, bad configuration) and is never synthesized from a recognized error
/// body, so callers can pattern-match on `Api` knowing nothing unexpected was
/// absorbed into it.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The service rejected the request with a structured error payload.
    #[error("identity service rejected the request: {0}")]
    Api(ServiceError),

    /// Transport-level failure: connect, TLS, timeout, body read or decode.
    #[error("http transport failure: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response whose body matched no recognized error shape.
    #[error("unexpected response from identity service ({status}): {body}")]
    UnexpectedResponse {
        /// HTTP status of the response
        status: StatusCode,
        /// The body, verbatim
        body: String,
    },

    /// The client could not be constructed from its configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// The structured service error, when this is an anticipated rejection.
    #[must_use]
    pub fn api_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// True when the failure is the service's own structured rejection.
    #[must_use]
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// Classify a non-2xx response.
///
/// The single decision point shared by every operation: a body matching a
/// recognized structured-error shape becomes the typed [`AuthError::Api`]
/// channel; anything else stays an unanticipated failure carrying the
/// original status and body verbatim.
pub(crate) fn classify(status: StatusCode, body: &str) -> AuthError {
    match ServiceError::from_response(status.as_u16(), body) {
        Some(error) => AuthError::Api(error),
        None => AuthError::UnexpectedResponse { status, body: body.to_string() },
    }
}
