//! Mock directions client for testing without API access.
//!
//! Serves one canned provider response for every query and remembers what
//! it was asked.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::error::DirectionsError;
use super::provider::DirectionsProvider;
use super::types::{DirectionsResponse, RawRoute};

/// Mock directions client that serves a fixed response.
///
/// The response goes through the same status handling as the live client,
/// so a canned `ZERO_RESULTS` or `REQUEST_DENIED` body behaves exactly as
/// it would from the provider.
#[derive(Debug, Clone)]
pub struct MockDirectionsClient {
    response: Arc<DirectionsResponse>,
    queries: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockDirectionsClient {
    /// Serve the given response.
    pub fn new(response: DirectionsResponse) -> Self {
        Self {
            response: Arc::new(response),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve a response parsed from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Serve a response loaded from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let path = path.as_ref();
        let fixture_error = |message: String| DirectionsError::Fixture {
            path: path.to_path_buf(),
            message,
        };

        let json = std::fs::read_to_string(path).map_err(|e| fixture_error(e.to_string()))?;
        Self::from_json(&json).map_err(|e| fixture_error(e.to_string()))
    }

    /// Every `(origin, destination)` asked for so far, oldest first.
    pub async fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().await.clone()
    }
}

impl DirectionsProvider for MockDirectionsClient {
    async fn get_transit_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RawRoute>, DirectionsError> {
        self.queries
            .lock()
            .await
            .push((origin.to_string(), destination.to_string()));

        DirectionsResponse::clone(&self.response).into_routes()
    }
}
