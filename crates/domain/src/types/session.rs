//! Session types returned by the token endpoint.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::user::User;

/// An authenticated session issued by the identity service.
///
/// The `expires_at` timestamp is not part of the wire format: it is derived
/// once, at normalization time, as call-time + `expires_in`, and is absent
/// whenever the service omitted `expires_in`. Presence of `expires_in` is the
/// trigger, not its value: `expires_in = 0` still produces a (zero-duration)
/// expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (always "bearer")
    pub token_type: String,

    /// Access token lifetime in seconds, as reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,

    /// Absolute expiration timestamp (UTC), derived from `expires_in`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Refresh token for obtaining a replacement session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// The user the session belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Session {
    /// Check if the access token is expired or will expire within the given
    /// threshold.
    ///
    /// Returns `false` when the session carries no expiry at all.
    #[must_use]
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => {
                let threshold = Duration::seconds(threshold_seconds);
                Utc::now() + threshold >= expires_at
            }
            None => false,
        }
    }

    /// Get seconds until token expiration, or `None` when no expiry is set.
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at.map(|expires_at| (expires_at - Utc::now()).num_seconds())
    }
}

/// Raw token endpoint response body, before expiry derivation.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl From<TokenResponse> for Session {
    fn from(response: TokenResponse) -> Self {
        // Presence, not truthiness: Some(0) yields an already-elapsed expiry.
        let expires_at = response.expires_in.map(|secs| Utc::now() + Duration::seconds(secs));

        Self {
            access_token: response.access_token,
            token_type: response.token_type,
            expires_in: response.expires_in,
            expires_at,
            refresh_token: response.refresh_token,
            user: response.user,
        }
    }
}
