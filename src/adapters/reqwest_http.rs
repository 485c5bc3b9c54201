//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of [`HttpClient`]. The request timeout is baked
//! into the underlying `reqwest::Client` so every call is bounded.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::{classify_reqwest_error, NetworkError};
use crate::traits::{Headers, HttpClient, Response};

/// HTTP client implementation using reqwest.
///
/// The inner client keeps a cookie store, so a session cookie set by the
/// server on login is presented on later requests.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Create a client whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, NetworkError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| NetworkError::Other {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, timeout })
    }

    fn convert_error(&self, err: reqwest::Error, url: &str) -> NetworkError {
        classify_reqwest_error(&err, url, self.timeout.as_secs())
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        headers
            .iter()
            .fold(builder, |builder, (key, value)| builder.header(key, value))
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<Response, NetworkError> {
        let response = builder
            .send()
            .await
            .map_err(|e| self.convert_error(e, url))?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| self.convert_error(e, url))?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, NetworkError> {
        let builder = Self::apply_headers(self.client.get(url), headers);
        self.send(builder, url).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        headers: &Headers,
    ) -> Result<Response, NetworkError> {
        let builder = Self::apply_headers(self.client.post(url).json(body), headers);
        self.send(builder, url).await
    }
}
