//! Request assembly: query encoding, URL joining, header merging.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::errors::AuthError;

/// Ordered query-string pairs.
///
/// Each key and value is percent-encoded independently; the encoded output
/// preserves insertion order, so callers control parameter ordering rather
/// than relying on any map iteration order.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs {
    pairs: Vec<(String, String)>,
}

impl QueryPairs {
    /// Create an empty pair list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value pair.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Append a pair only when a value is present.
    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append open-ended extra parameters, keeping the caller's order.
    pub fn extend_pairs(&mut self, pairs: &[(String, String)]) {
        self.pairs.extend(pairs.iter().cloned());
    }

    /// True when no pair has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode into `k=v&k2=v2` form, percent-encoding every key and value.
    #[must_use]
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Join base URL, path and optional query into a full endpoint URL.
pub(crate) fn endpoint(base_url: &str, path: &str, query: &QueryPairs) -> String {
    if query.is_empty() {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}{path}?{}", query.encode())
    }
}

/// The configured default headers plus a bearer credential.
///
/// The default set is cloned, never mutated; repeated calls with different
/// tokens are independent.
pub(crate) fn with_bearer(defaults: &HeaderMap, token: &str) -> Result<HeaderMap, AuthError> {
    let value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| AuthError::Config(format!("invalid bearer token: {e}")))?;

    let mut headers = defaults.clone();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    //! Unit tests for request.
    use reqwest::header::HeaderMap;

    use super::*;

    #[test]
    fn encodes_pairs_in_insertion_order() {
        let mut query = QueryPairs::new();
        query.push("provider", "github");
        query.push("redirect_to", "https://a.example/cb");

        assert_eq!(query.encode(), "provider=github&redirect_to=https%3A%2F%2Fa.example%2Fcb");
    }

    #[test]
    fn encodes_keys_and_values_independently()  {
        let mut query = QueryPairs::new();
        query.extend_pairs(&[("a key".to_string(), "a&value=x".to_string())]);

        assert_eq!(query.encode(), "a%20key=a%26value%3Dx");
    }

    #[test]
    fn push_opt_skips_absent_values() {
        let mut query = QueryPairs::new();
        query.push_opt("redirect_to", None);
        assert!(query.is_empty());

        query.push_opt("redirect_to", Some("https://a.example"));
        assert_eq!(query.encode(), "redirect_to=https%3A%2F%2Fa.example");
    }

    #[test]
    fn endpoint_omits_question_mark_without_query() {
        let query = QueryPairs::new();
        assert_eq!(endpoint("https://id.example.com", "/logout", &query), "https://id.example.com/logout");
    }

    #[test]
    fn bearer_merge_leaves_defaults_untouched() {
        let mut defaults = HeaderMap::new();
        defaults.insert("apikey", reqwest::header::HeaderValue::from_static("service-key"));

        let merged = with_bearer(&defaults, "user-token").unwrap();

        assert_eq!(merged.get(AUTHORIZATION).unwrap(), "Bearer user-token");
        assert_eq!(merged.get("apikey").unwrap(), "service-key");
        // The configured set was cloned, not mutated
        assert!(defaults.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn bearer_merge_rejects_unencodable_tokens() {
        let defaults = HeaderMap::new();
        let result = with_bearer(&defaults, "bad\ntoken");
        assert!(matches!(result, Err(AuthError::Config(_))));
    }
}
