//! Account-flow link issuance types.

use serde::{Deserialize, Serialize};

use super::session::Session;
use super::user::User;

/// Which account flow a generated link should start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Signup,
    Magiclink,
    Recovery,
    Invite,
}

impl LinkType {
    /// The link type's wire name, carried in the request body.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Magiclink => "magiclink",
            Self::Recovery => "recovery",
            Self::Invite => "invite",
        }
    }
}

/// Payload returned by the generate-link endpoint.
///
/// Depending on the link type the service answers with either a session-shaped
/// or a user-shaped body. The two are disjoint on the wire (a session body
/// always carries `access_token`, a user body always carries a top-level
/// `id`), so the payload is passed through without interpretation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LinkResponse {
    Session(Session),
    User(Box<User>),
}
