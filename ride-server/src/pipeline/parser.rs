//! Link to rides, end to end.

use tracing::{info, warn};

use crate::directions::{DirectionsError, DirectionsProvider};
use crate::domain::RideSegment;
use crate::link::{LinkResolver, RouteEnds};

use super::extract::extract_rides;
use super::transfers::{TransferRule, mark_transfers};

/// Why a link could not be parsed into rides.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No origin/destination could be read from the link, including when a
    /// short link could not be expanded
    #[error("could not resolve {url}: {reason}")]
    UnresolvableUrl { url: String, reason: String },

    /// A network call failed; retrying may help
    #[error("{stage} request from {origin} to {destination} failed: {source}")]
    Transport {
        stage: &'static str,
        origin: String,
        destination: String,
        #[source]
        source: reqwest::Error,
    },

    /// The directions provider refused or failed the request
    #[error("directions provider returned {status} for {origin} to {destination}: {message}")]
    Provider {
        status: String,
        message: String,
        origin: String,
        destination: String,
    },
}

/// Stage name for directions calls in errors and logs.
const DIRECTIONS_STAGE: &str = "directions";

/// Parses shared map links into ride segments.
///
/// Each call runs resolve, directions, extract and transfer detection in
/// sequence. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct RideParser<D> {
    resolver: LinkResolver,
    directions: D,
    rule: TransferRule,
}

impl<D: DirectionsProvider> RideParser<D> {
    /// Create a parser from its collaborators.
    pub fn new(resolver: LinkResolver, directions: D, rule: TransferRule) -> Self {
        Self {
            resolver,
            directions,
            rule,
        }
    }

    /// The directions source in use.
    pub fn directions(&self) -> &D {
        &self.directions
    }

    /// Parse a shared link into rides, in travel order.
    ///
    /// A link that resolves but has no subway route (including the
    /// provider answering `ZERO_RESULTS`) gives an empty list, not an error.
    pub async fn parse(&self, url: &str) -> Result<Vec<RideSegment>, ParseError> {
        let ends = self
            .resolver
            .resolve(url)
            .await
            .map_err(|e| ParseError::UnresolvableUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let routes = match self
            .directions
            .get_transit_routes(&ends.origin, &ends.destination)
            .await
        {
            Ok(routes) => routes,
            Err(e) if e.is_zero_results() => {
                info!(origin = %ends.origin, destination = %ends.destination, "no transit route");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(
                    origin = %ends.origin,
                    destination = %ends.destination,
                    error = %e,
                    "directions request failed"
                );
                return Err(directions_failure(e, ends));
            }
        };

        let rides = mark_transfers(extract_rides(&routes), &self.rule);
        info!(
            routes = routes.len(),
            rides = rides.len(),
            transfers = rides.iter().filter(|r| r.transferred).count(),
            "parsed link"
        );
        Ok(rides)
    }
}

fn directions_failure(error: DirectionsError, ends: RouteEnds) -> ParseError {
    let RouteEnds {
        origin,
        destination,
        ..
    } = ends;

    match error {
        DirectionsError::Transport(source) => ParseError::Transport {
            stage: DIRECTIONS_STAGE,
            origin,
            destination,
            source,
        },
        DirectionsError::Provider { status, message } => ParseError::Provider {
            status,
            message,
            origin,
            destination,
        },
        DirectionsError::Fixture { path, message } => ParseError::Provider {
            status: "MOCK_FIXTURE".to_string(),
            message: format!("{}: {message}", path.display()),
            origin,
            destination,
        },
    }
}
