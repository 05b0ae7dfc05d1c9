//! # Authgate Client
//!
//! HTTP client for the Authgate identity service: federated (OIDC) sign-in,
//! session refresh, password-reset and magic-link issuance, and privileged
//! user administration.
//!
//! Every operation shares one contract: build the request from immutable
//! configuration, invoke the transport exactly once, normalize a 2xx body
//! into its typed shape, and classify failures. A rejection the service
//! describes with a structured error body surfaces as
//! [`AuthError::Api`]; every other failure (network fault, malformed body,
//! unexpected shape) keeps its own variant and is never folded into the
//! typed channel.
//!
//! # Usage
//!
//! ```no_run
//! use authgate_client::{AuthClient, AuthorizeOptions, ClientConfig, Provider};
//!
//! # async fn run() -> Result<(), authgate_client::AuthError> {
//! let config = ClientConfig::builder().base_url("https://id.example.com").build();
//! let client = AuthClient::new(config)?;
//!
//! // Computed, never fetched
//! let url = client.provider_url(Provider::Github, &AuthorizeOptions::default());
//!
//! // Privileged operations use the configured (service-level) headers
//! let users = client.admin().list_users().await?;
//! # Ok(())
//! # }
//! ```

pub mod admin;
pub mod client;
pub mod config;
pub mod errors;
pub mod request;

mod transport;

// Re-export commonly used items
pub use admin::AdminApi;
pub use client::{
    AuthClient, AuthorizeOptions, GenerateLinkOptions, InviteOptions, ResetPasswordOptions,
};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use errors::AuthError;

// Domain types, re-exported so callers need only this crate
pub use authgate_domain::{
    AdminUserAttributes, LinkResponse, LinkType, OidcCredentials, Provider, ServiceError,
    Session, TokenResponse, User,
};
