//! Google Directions HTTP client.
//!
//! Asks for subway-only transit routes between two place names or
//! `lat,lng` pairs. No retries: a failed call surfaces immediately.

use std::time::Duration;

use tracing::debug;

use super::error::DirectionsError;
use super::provider::DirectionsProvider;
use super::types::{DirectionsResponse, RawRoute};

/// Default base URL for the Directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Body bytes kept in error messages.
const ERROR_BODY_LIMIT: usize = 500;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key sent as the `key` parameter
    pub api_key: String,
    /// Endpoint URL (defaults to the production Directions API)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Fetch the raw response body for a transit query.
    ///
    /// Non-2xx responses and undecodable bodies are provider errors; the
    /// provider's own `status` field is left for the caller to inspect.
    pub async fn get_response(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectionsResponse, DirectionsError> {
        debug!(origin, destination, "requesting transit directions");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "transit"),
                ("transit_mode", "subway"),
                ("alternatives", "true"),
                ("units", "metric"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::provider(
                format!("HTTP {}", status.as_u16()),
                body.chars().take(ERROR_BODY_LIMIT).collect::<String>(),
            ));
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            DirectionsError::provider(
                "INVALID_RESPONSE",
                format!(
                    "{e} (body: {})",
                    body.chars().take(ERROR_BODY_LIMIT).collect::<String>()
                ),
            )
        })
    }
}

impl DirectionsProvider for DirectionsClient {
    async fn get_transit_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RawRoute>, DirectionsError> {
        self.get_response(origin, destination).await?.into_routes()
    }
}
