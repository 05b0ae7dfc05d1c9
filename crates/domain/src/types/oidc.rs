//! OIDC credential bundle for federated sign-in.

use serde::Serialize;

use super::provider::Provider;

/// Input to the federated sign-in flow: an id-token minted by a third-party
/// provider plus the context the service needs to verify it.
///
/// Serialized sparsely; only `id_token` is required by the wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct OidcCredentials {
    /// The provider-issued OIDC id-token
    pub id_token: String,

    /// Nonce the id-token was bound to, when one was used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    /// OAuth client id the token was issued for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Expected token issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Which provider minted the token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

impl OidcCredentials {
    /// Create a credential bundle carrying only the id-token.
    #[must_use]
    pub fn new(id_token: impl Into<String>) -> Self {
        Self { id_token: id_token.into(), nonce: None, client_id: None, issuer: None, provider: None }
    }
}
