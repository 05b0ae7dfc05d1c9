//! Privileged user-administration operations.

use authgate_domain::{AdminUserAttributes, User};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::client::AuthClient;
use crate::errors::AuthError;
use crate::request::{endpoint, QueryPairs};

/// Envelope the service wraps the user collection in.
#[derive(Debug, Deserialize)]
struct UsersEnvelope {
    users: Vec<User>,
}

/// Privileged operations over the remote users resource.
///
/// All five require service-level credentials carried in the client's
/// default headers; no per-call token is involved. They share one pattern:
/// build the request, invoke the transport once, classify failures,
/// deserialize the 2xx body. Idempotency is the service's concern, not this
/// layer's.
pub struct AdminApi<'a> {
    client: &'a AuthClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a AuthClient) -> Self {
        Self { client }
    }

    fn user_path(id: &str) -> String {
        format!("/admin/users/{}", urlencoding::encode(id))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        http_method: Method,
        api_path: &str,
        body: Option<&AdminUserAttributes>,
    ) -> Result<T, AuthError> {
        let url = endpoint(self.client.base_url(), api_path, &QueryPairs::new());
        debug!(method = %http_method, %url, "admin request");

        let mut request = self
            .client
            .transport()
            .request(http_method, &url)
            .headers(self.client.default_headers().clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.client.transport().execute(request).await?;
        Ok(response.json().await?)
    }

    /// Create a user from `attributes`.
    ///
    /// # Errors
    /// Classified per the shared policy.
    #[instrument(skip_all)]
    pub async fn create_user(&self, attributes: &AdminUserAttributes) -> Result<User, AuthError> {
        self.send(Method::POST, "/admin/users", Some(attributes)).await
    }

    /// List every user.
    ///
    /// The service answers with a `{"users": [...]}` envelope; the bare
    /// collection is returned.
    ///
    /// # Errors
    /// Classified per the shared policy.
    #[instrument(skip_all)]
    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        let envelope: UsersEnvelope = self.send(Method::GET, "/admin/users", None).await?;
        Ok(envelope.users)
    }

    /// Fetch a user by id.
    ///
    /// # Errors
    /// Classified per the shared policy.
    #[instrument(skip_all)]
    pub async fn get_user_by_id(&self, id: &str) -> Result<User, AuthError> {
        self.send(Method::GET, &Self::user_path(id), None).await
    }

    /// Update a user by id, returning the updated record.
    ///
    /// # Errors
    /// Classified per the shared policy.
    #[instrument(skip_all)]
    pub async fn update_user_by_id(
        &self,
        id: &str,
        attributes: &AdminUserAttributes,
    ) -> Result<User, AuthError> {
        self.send(Method::PUT, &Self::user_path(id), Some(attributes)).await
    }

    /// Delete a user by id.
    ///
    /// The service answers with its last representation of the deleted user,
    /// which is returned as-is.
    ///
    /// # Errors
    /// Classified per the shared policy.
    #[instrument(skip_all)]
    pub async fn delete_user(&self, id: &str) -> Result<User, AuthError> {
        self.send(Method::DELETE, &Self::user_path(id), None).await
    }
}
