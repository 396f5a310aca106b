//! Thin HTTP client wrapper for the quotes/facts API
//!
//! Centralizes the base URL, the `X-Api-Key` header, and error
//! normalization. One attempt per call - no retry logic.

use crate::error::{Error, Result};
use std::time::Duration;

/// Connect timeout for outbound requests
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Async HTTP client with standard configuration
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create a client for `base_url`, sending `api_key` on every request
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(concat!("quotidian/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self {
            inner,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// GET `{base}/{path}` with query parameters, returning the JSON body
    ///
    /// Non-2xx statuses become `Error::Http`; transport failures become
    /// `Error::Network`.
    pub async fn request(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        let response = self
            .inner
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(params)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| Error::Network(e.to_string()))
    }

    /// Base URL this client targets (for logging)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = ApiClient::new("https://api.example.com/v1/", "key").unwrap();
        assert_eq!(client.base_url(), "https://api.example.com/v1");
    }

    #[tokio::test]
    async fn unresolvable_host_is_a_network_error() {
        let client = ApiClient::new("http://invalid.invalid.invalid", "key").unwrap();
        let result = client.request("quotes", &[]).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
