//! Wire types exchanged with the identity service.

pub mod link;
pub mod oidc;
pub mod provider;
pub mod session;
pub mod user;

pub use link::{LinkResponse, LinkType};
pub use oidc::OidcCredentials;
pub use provider::Provider;
pub use session::{Session, TokenResponse};
pub use user::{AdminUserAttributes, User};
