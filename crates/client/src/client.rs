//! The Authgate client: end-user session flows and account-flow triggers.

use authgate_domain::{LinkResponse, LinkType, OidcCredentials, Provider, Session, TokenResponse, User};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, instrument};

use crate::admin::AdminApi;
use crate::config::ClientConfig;
use crate::errors::AuthError;
use crate::request::{endpoint, with_bearer, QueryPairs};
use crate::transport::Transport;

/// Options for building a provider-authorize URL.
#[derive(Debug, Clone, Default)]
pub struct AuthorizeOptions {
    /// Where the provider should send the user after consent
    pub redirect_to: Option<String>,
    /// Space-separated OAuth scopes to request from the provider
    pub scopes: Option<String>,
    /// Additional query parameters, appended in the order given
    pub query_params: Vec<(String, String)>,
}

/// Options for [`AuthClient::invite_user_by_email`].
#[derive(Debug, Clone, Default)]
pub struct InviteOptions {
    /// Where the invite link should land the user
    pub redirect_to: Option<String>,
    /// Arbitrary metadata stored on the invited user
    pub data: Option<serde_json::Value>,
}

/// Options for [`AuthClient::reset_password_for_email`].
#[derive(Debug, Clone, Default)]
pub struct ResetPasswordOptions {
    /// Where the recovery link should land the user
    pub redirect_to: Option<String>,
    /// Anti-abuse (captcha) token, forwarded under the security-metadata key
    pub captcha_token: Option<String>,
}

/// Options for [`AuthClient::generate_link`].
#[derive(Debug, Clone, Default)]
pub struct GenerateLinkOptions {
    /// Initial password, for signup links
    pub password: Option<String>,
    /// Arbitrary metadata stored on the user
    pub data: Option<serde_json::Value>,
    /// Where the link should land the user
    pub redirect_to: Option<String>,
}

/// Client for the Authgate identity service HTTP API.
///
/// Holds only immutable configuration (base URL, default header set,
/// transport handle), all fixed at construction. Operations never mutate
/// shared state and may run concurrently without coordination; each one
/// suspends exactly once, at the transport invocation.
pub struct AuthClient {
    config: ClientConfig,
    transport: Transport,
}

impl AuthClient {
    /// Create a client from its configuration.
    ///
    /// # Errors
    /// Returns [`AuthError::Config`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(mut config: ClientConfig) -> Result<Self, AuthError> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let transport = Transport::new(config.timeout)?;

        Ok(Self { config, transport })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Privileged admin operations sharing this client's configuration.
    #[must_use]
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn default_headers(&self) -> &HeaderMap {
        &self.config.default_headers
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Compute the URL that starts a federated sign-in with `provider`.
    ///
    /// Purely computed, never fetched; hand it to the caller's navigation
    /// layer. Query order is fixed: `provider`, then `redirect_to`, then
    /// `scopes`, then any extra pairs in the order given.
    #[must_use]
    pub fn provider_url(&self, provider: Provider, options: &AuthorizeOptions) -> String {
        let mut query = QueryPairs::new();
        query.push("provider", provider.as_str());
        query.push_opt("redirect_to", options.redirect_to.as_deref());
        query.push_opt("scopes", options.scopes.as_deref());
        query.extend_pairs(&options.query_params);

        endpoint(&self.config.base_url, "/authorize", &query)
    }

    /// Sign in with a federated OIDC identity token.
    ///
    /// # Errors
    /// [`AuthError::Api`] when the service rejects the credentials with a
    /// structured error; any other variant for unanticipated failures.
    #[instrument(skip_all)]
    pub async fn sign_in_with_oidc(
        &self,
        credentials: &OidcCredentials,
    ) -> Result<Session, AuthError> {
        self.token_request("id_token", credentials).await
    }

    /// Exchange a refresh token for a new session.
    ///
    /// # Errors
    /// [`AuthError::Api`] when the service rejects the token with a
    /// structured error; any other variant for unanticipated failures.
    #[instrument(skip_all)]
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<Session, AuthError> {
        self.token_request("refresh_token", &json!({ "refresh_token": refresh_token })).await
    }

    /// Shared token-endpoint call; the grant type discriminator rides in the
    /// query string.
    async fn token_request<B: Serialize>(
        &self,
        grant_type: &str,
        body: &B,
    ) -> Result<Session, AuthError> {
        let mut query = QueryPairs::new();
        query.push("grant_type", grant_type);
        let url = endpoint(&self.config.base_url, "/token", &query);

        debug!(%grant_type, "requesting token");

        let request = self
            .transport
            .request(Method::POST, &url)
            .headers(self.config.default_headers.clone())
            .json(body);
        let response = self.transport.execute(request).await?;

        let token: TokenResponse = response.json().await?;
        Ok(Session::from(token))
    }

    /// Revoke the session behind `access_token`.
    ///
    /// The response body is intentionally ignored: any 2xx status counts as
    /// success.
    ///
    /// # Errors
    /// Classified per the shared policy on non-2xx; transport failures
    /// propagate unchanged.
    #[instrument(skip_all)]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let url = endpoint(&self.config.base_url, "/logout", &QueryPairs::new());
        let headers = with_bearer(&self.config.default_headers, access_token)?;

        let request = self.transport.request(Method::POST, &url).headers(headers);
        self.transport.execute(request).await?;

        Ok(())
    }

    /// Send an invite link to `email`, returning the invited user.
    ///
    /// # Errors
    /// Classified per the shared policy.
    #[instrument(skip_all)]
    pub async fn invite_user_by_email(
        &self,
        email: &str,
        options: &InviteOptions,
    ) -> Result<User, AuthError> {
        let mut query = QueryPairs::new();
        query.push_opt("redirect_to", options.redirect_to.as_deref());
        let url = endpoint(&self.config.base_url, "/invite", &query);

        let mut body = json!({ "email": email });
        if let Some(data) = &options.data {
            body["data"] = data.clone();
        }

        let request = self
            .transport
            .request(Method::POST, &url)
            .headers(self.config.default_headers.clone())
            .json(&body);
        let response = self.transport.execute(request).await?;

        Ok(response.json().await?)
    }

    /// Send a password-recovery link to `email`.
    ///
    /// An anti-abuse token, when supplied, is forwarded nested under the
    /// fixed `meta_security` key; the key is omitted entirely otherwise.
    ///
    /// # Errors
    /// Classified per the shared policy.
    #[instrument(skip_all)]
    pub async fn reset_password_for_email(
        &self,
        email: &str,
        options: &ResetPasswordOptions,
    ) -> Result<(), AuthError> {
        let mut query = QueryPairs::new();
        query.push_opt("redirect_to", options.redirect_to.as_deref());
        let url = endpoint(&self.config.base_url, "/recover", &query);

        let mut body = json!({ "email": email });
        if let Some(token) = &options.captcha_token {
            body["meta_security"] = json!({ "captcha_token": token });
        }

        let request = self
            .transport
            .request(Method::POST, &url)
            .headers(self.config.default_headers.clone())
            .json(&body);
        self.transport.execute(request).await?;

        Ok(())
    }

    /// Ask the service to mint an account-flow link for `email`.
    ///
    /// Depending on `link_type` the service answers with either a
    /// session-shaped or a user-shaped payload; it is passed through without
    /// interpretation as [`LinkResponse`].
    ///
    /// # Errors
    /// Classified per the shared policy.
    #[instrument(skip_all, fields(link_type = link_type.as_str()))]
    pub async fn generate_link(
        &self,
        link_type: LinkType,
        email: &str,
        options: &GenerateLinkOptions,
    ) -> Result<LinkResponse, AuthError> {
        let url = endpoint(&self.config.base_url, "/admin/generate_link", &QueryPairs::new());

        let mut body = json!({ "type": link_type.as_str(), "email": email });
        if let Some(password) = &options.password {
            body["password"] = json!(password);
        }
        if let Some(data) = &options.data {
            body["data"] = data.clone();
        }
        if let Some(redirect_to) = &options.redirect_to {
            body["redirect_to"] = json!(redirect_to);
        }

        let request = self
            .transport
            .request(Method::POST, &url)
            .headers(self.config.default_headers.clone())
            .json(&body);
        let response = self.transport.execute(request).await?;

        Ok(response.json().await?)
    }
}
