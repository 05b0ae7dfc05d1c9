//! Supported third-party identity providers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of federated identity providers the service understands.
///
/// The wire representation is the lowercase provider name, used both in the
/// authorize-URL query string and in OIDC credential bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Apple,
    Azure,
    Bitbucket,
    Discord,
    Facebook,
    Github,
    Gitlab,
    Google,
    Keycloak,
    Linkedin,
    Notion,
    Slack,
    Spotify,
    Twitch,
    Twitter,
    Workos,
}

impl Provider {
    /// The provider's wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Azure => "azure",
            Self::Bitbucket => "bitbucket",
            Self::Discord => "discord",
            Self::Facebook => "facebook",
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Google => "google",
            Self::Keycloak => "keycloak",
            Self::Linkedin => "linkedin",
            Self::Notion => "notion",
            Self::Slack => "slack",
            Self::Spotify => "spotify",
            Self::Twitch => "twitch",
            Self::Twitter => "twitter",
            Self::Workos => "workos",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
