//! HTTP client for the storefront REST API.
//!
//! Shared by the catalog, checkout and product admin adapters. Error bodies
//! follow the backend convention `{"detail": "..."}`; when the detail is a
//! plain string it is surfaced verbatim, otherwise the caller picks a
//! fallback message.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when talking to the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    /// The success body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The backend's own message, when it sent one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Thin wrapper over a shared `reqwest::Client` bound to one base URL.
#[derive(Clone)]
pub struct StorefrontApiClient {
    inner: Arc<StorefrontApiClientInner>,
}

struct StorefrontApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl StorefrontApiClient {
    /// Create a client for the API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            inner: Arc::new(StorefrontApiClientInner {
                client,
                base_url: base_url.into().trim_end_matches('/').to_string(),
            }),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Execute a GET request with query parameters.
    pub async fn get<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).query(query).send().await?;
        Self::handle_response(response).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.post(&url).json(body).send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Pull `detail` out of an error body when it is a plain string.
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("detail").and_then(|d| d.as_str()).map(str::to_string));
        ApiError::Api { status, detail }
    }
}

impl std::fmt::Debug for StorefrontApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontApiClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
