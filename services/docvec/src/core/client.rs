//! HTTP client for the vectorization service.
//!
//! Two endpoints:
//!
//! - `GET /health` returns `{"status": ...}`
//! - `POST /process-document` takes `{"filename", "content"}` and
//!   returns at least `{"message": ...}`
//!
//! Network failures, timeouts, non-2xx statuses and undecodable bodies
//! all surface as `TransportError`. Nothing is retried.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::core::config::ApiConfig;
use crate::core::error::{DocvecError, Result};
use crate::core::types::{HealthStatus, ProcessDocumentRequest, ServiceResponse};

/// Destination for chunks produced by the ingestor
#[async_trait]
pub trait ChunkSink: Send + Sync {
    /// Submit one chunk under its display label
    async fn submit(&self, label: &str, content: &str) -> Result<ServiceResponse>;
}

/// Client for the vectorization service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    submit_timeout: Duration,
    health_timeout: Duration,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(1)
            .build()
            .map_err(|e| DocvecError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            submit_timeout: Duration::from_secs(config.submit_timeout_sec),
            health_timeout: Duration::from_secs(config.health_timeout_sec),
        })
    }

    /// Service base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query `GET /health`
    pub async fn health_status(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| DocvecError::TransportError(format!("Invalid health response: {e}")))
    }

    /// Health check collapsed to a bool; failures are logged
    pub async fn is_healthy(&self) -> bool {
        match self.health_status().await {
            Ok(status) => {
                tracing::info!("API Health: {}", status.status_or_unknown());
                true
            }
            Err(e) => {
                tracing::warn!("API health check failed: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl ChunkSink for ApiClient {
    async fn submit(&self, label: &str, content: &str) -> Result<ServiceResponse> {
        let url = format!("{}/process-document", self.base_url);
        let request = ProcessDocumentRequest {
            filename: label.to_string(),
            content: content.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .timeout(self.submit_timeout)
            .json(&request)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        response
            .json::<ServiceResponse>()
            .await
            .map_err(|e| DocvecError::TransportError(format!("Invalid service response: {e}")))
    }
}

/// Turn a non-2xx response into a `TransportError` carrying the body
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DocvecError::TransportError(format!("HTTP {status}: {body}")))
}
