//! # Authgate Domain
//!
//! Wire-level data types for the Authgate identity service.
//!
//! This crate contains:
//! - Session and token-response types, including the derived expiry timestamp
//! - User records and admin mutation attributes
//! - The closed set of federated identity providers
//! - The structured error payload the service returns on rejection
//!
//! ## Architecture
//! - No dependencies on other Authgate crates
//! - Only external dependencies allowed
//! - Pure wire models and data structures; no I/O

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::ServiceError;
pub use types::{
    AdminUserAttributes, LinkResponse, LinkType, OidcCredentials, Provider, Session,
    TokenResponse, User,
};
