//! The platform API boundary.

use crate::error::{FetchError, FetchResult};
use async_trait::async_trait;
use gf_core::Config;
use std::collections::BTreeMap;
use std::time::Duration;

/// Query parameters of one request. Ordered so that every consumer sees the
/// same sequence.
pub type Params = BTreeMap<String, String>;

/// Raw HTTP response as seen by the fetch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Authenticated GET against the platform API.
///
/// Implementations must be Send + Sync; the bundle fetcher issues requests
/// concurrently from one task.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue `GET <base>/<path>?<params>` and return status and body.
    ///
    /// Only transport failures are errors here; a non-success status is a
    /// successful call returning that status.
    async fn get(&self, path: &str, params: &Params) -> FetchResult<ApiResponse>;
}

/// Responses are requested as JSON; the platform defaults to XML.
const RESPONSE_FORMAT: (&str, &str) = ("format", "json");

/// reqwest-backed client sending a static bearer token.
///
/// The token is used as-is and never refreshed.
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<String>,
}

impl HttpApiClient {
    /// Build a client against `base_url` with a per-request timeout.
    pub fn new(
        base_url: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gridfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::ClientSetup(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Build a client from the resolved configuration.
    pub fn from_config(config: &Config) -> FetchResult<Self> {
        let token = config
            .resolve_access_token()
            .map_err(|e| FetchError::ClientSetup(e.to_string()))?;
        if token.is_none() {
            log::warn!("No access token configured; requests will be sent unauthenticated");
        }
        Self::new(
            config.api_base_url.clone(),
            token,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Join the base URL and a resource path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn get(&self, path: &str, params: &Params) -> FetchResult<ApiResponse> {
        let url = self.url_for(path);
        let mut query: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if !params.contains_key(RESPONSE_FORMAT.0) {
            query.push(RESPONSE_FORMAT);
        }

        let mut request = self.client.get(&url).query(&query);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let transport = |e: reqwest::Error| FetchError::Transport {
            endpoint: path.to_string(),
            message: e.to_string(),
        };
        let response = request.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        log::debug!("GET {} -> {}", url, status);
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
