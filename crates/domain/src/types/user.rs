//! User records and admin mutation attributes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user record as returned by the identity service.
///
/// Only the fields this layer actually reads are typed. Everything else the
/// service returns (identities, confirmation timestamps, provider-specific
/// claims) is preserved verbatim in `extra` and round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier
    pub id: String,

    /// The user's email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The user's phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The user's role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Metadata owned by the user
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub user_metadata: HashMap<String, Value>,

    /// Metadata owned by the application
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub app_metadata: HashMap<String, Value>,

    /// Record creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Record update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Fields this layer does not interpret, passed through as-is
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Attributes accepted by the privileged create/update user operations.
///
/// Serialized sparsely: absent fields are omitted from the request body so the
/// service only sees what the caller actually set. `extra` lets callers send
/// attributes this layer does not model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AdminUserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Mark the email address as already confirmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_confirm: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Mark the phone number as already confirmed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_confirm: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_metadata: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ban duration (e.g. "24h"), or "none" to lift a ban
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_duration: Option<String>,

    /// Attributes this layer does not model, passed through as-is
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
