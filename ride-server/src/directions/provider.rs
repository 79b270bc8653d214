//! The seam between the ride pipeline and a directions source.

use std::future::Future;

use super::client::DirectionsClient;
use super::error::DirectionsError;
use super::mock::MockDirectionsClient;
use super::types::RawRoute;

/// A source of transit routes.
pub trait DirectionsProvider: Send + Sync {
    /// Subway routes from `origin` to `destination`, best first.
    ///
    /// Both ends may be place text or `"lat,lng"`. Any provider status
    /// other than `OK` is an error, `ZERO_RESULTS` included.
    fn get_transit_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<Vec<RawRoute>, DirectionsError>> + Send;
}

/// The directions source chosen at startup.
#[derive(Debug, Clone)]
pub enum DirectionsBackend {
    /// The live Directions API
    Live(DirectionsClient),
    /// Canned responses, for development without an API key
    Mock(MockDirectionsClient),
}

impl DirectionsProvider for DirectionsBackend {
    async fn get_transit_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<RawRoute>, DirectionsError> {
        match self {
            DirectionsBackend::Live(client) => client.get_transit_routes(origin, destination).await,
            DirectionsBackend::Mock(client) => client.get_transit_routes(origin, destination).await,
        }
    }
}

impl From<DirectionsClient> for DirectionsBackend {
    fn from(client: DirectionsClient) -> Self {
        DirectionsBackend::Live(client)
    }
}

impl From<MockDirectionsClient> for DirectionsBackend {
    fn from(client: MockDirectionsClient) -> Self {
        DirectionsBackend::Mock(client)
    }
}
