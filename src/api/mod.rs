//! Client for the chama REST API.
//!
//! [`ChamaApi`] maps each named operation onto one HTTP request against a
//! single base URL. Transport goes through an injected [`HttpClient`]; every
//! operation takes a [`CancelToken`] and resolves to
//! [`NetworkError::Cancelled`] as soon as it fires.

use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::ReqwestHttpClient;
use crate::cancel::CancelToken;
use crate::error::NetworkError;
use crate::models::{
    ActivitiesResponse, ContributeRequest, ContributeResponse, DashboardResponse,
    DiscussionsResponse, LoansResponse, LoginRequest, LoginResponse,
};
use crate::startup::ApiConfig;
use crate::traits::{Headers, HttpClient, Response};

/// Client for the chama API.
#[derive(Clone)]
pub struct ChamaApi {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ChamaApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChamaApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ChamaApi {
    /// Create a client over an arbitrary transport.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Create a client backed by reqwest, with the configured timeout.
    pub fn from_config(config: &ApiConfig) -> Result<Self, NetworkError> {
        let http = ReqwestHttpClient::new(config.timeout)?;
        Ok(Self::new(Arc::new(http), config.base_url.clone()))
    }

    /// `POST /login`.
    ///
    /// A rejected login comes back as `NetworkError::HttpStatus` carrying the
    /// server's message (the server answers 401).
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        cancel: &CancelToken,
    ) -> Result<LoginResponse, NetworkError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post("/login", &body, cancel).await
    }

    /// `GET /dashboard`.
    pub async fn get_dashboard(
        &self,
        cancel: &CancelToken,
    ) -> Result<DashboardResponse, NetworkError> {
        self.get("/dashboard", cancel).await
    }

    /// `POST /contribute`.
    pub async fn contribute(
        &self,
        request: &ContributeRequest,
        cancel: &CancelToken,
    ) -> Result<ContributeResponse, NetworkError> {
        self.post("/contribute", request, cancel).await
    }

    /// `GET /loans`.
    pub async fn get_loans(&self, cancel: &CancelToken) -> Result<LoansResponse, NetworkError> {
        self.get("/loans", cancel).await
    }

    /// `GET /discussions`.
    pub async fn get_discussions(
        &self,
        cancel: &CancelToken,
    ) -> Result<DiscussionsResponse, NetworkError> {
        self.get("/discussions", cancel).await
    }

    /// `GET /activities`.
    pub async fn get_activities(
        &self,
        cancel: &CancelToken,
    ) -> Result<ActivitiesResponse, NetworkError> {
        self.get("/activities", cancel).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancelToken,
    ) -> Result<T, NetworkError> {
        let url = self.url(path);
        tracing::debug!("GET {}", path);

        let response = until_cancelled(cancel, self.http.get(&url, &json_headers())).await?;
        decode(path, response)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancelToken,
    ) -> Result<T, NetworkError> {
        let url = self.url(path);
        let body = serde_json::to_value(body)?;
        tracing::debug!("POST {}", path);

        let response =
            until_cancelled(cancel, self.http.post_json(&url, &body, &json_headers())).await?;
        decode(path, response)
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

/// Race `request` against the token. The request future is dropped on cancel.
async fn until_cancelled<F>(cancel: &CancelToken, request: F) -> Result<Response, NetworkError>
where
    F: Future<Output = Result<Response, NetworkError>>,
{
    if cancel.is_cancelled() {
        return Err(NetworkError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(NetworkError::Cancelled),
        result = request => result,
    }
}

fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, NetworkError> {
    if !response.is_success() {
        let message = error_message(&response);
        tracing::debug!("{} returned HTTP {}: {}", path, response.status, message);
        return Err(NetworkError::HttpStatus {
            status: response.status,
            message,
        });
    }

    Ok(response.json()?)
}

/// Pull a human-readable message out of an error body.
///
/// Looks for a JSON `message` or `error` string. A short plain-text body is
/// used as is; markup and anything else yields an empty message.
fn error_message(response: &Response) -> String {
    let Ok(value) = response.json::<serde_json::Value>() else {
        return response
            .text()
            .ok()
            .map(|text| text.trim().to_string())
            .filter(|text| text.len() <= 200 && !text.starts_with('<') && !text.contains('\n'))
            .unwrap_or_default();
    };

    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
