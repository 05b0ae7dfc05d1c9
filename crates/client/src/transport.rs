//! Single-attempt transport over reqwest.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::errors::{classify, AuthError};

/// Thin wrapper around [`reqwest::Client`].
///
/// Every public operation suspends exactly once, here. There are no retries
/// and no circuit breaking: a single transport failure surfaces immediately
/// on that call's own completion path. Non-2xx responses are handed to the
/// classifier; transport-level failures propagate unchanged.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    client: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(timeout: Duration) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self { client })
    }

    /// Create a request builder using the underlying reqwest client.
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Send the request once, returning the raw 2xx response for the caller
    /// to normalize.
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response, AuthError> {
        let response = builder.send().await?;

        let status = response.status();
        let url = response.url().clone();
        debug!(%status, %url, "received response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, %url, "identity service returned an error status");
        Err(classify(status, &body))
    }
}
