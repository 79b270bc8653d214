//! Transit directions gateway.
//!
//! Key characteristics of the provider:
//! - Origin and destination may be free text or `lat,lng` pairs
//! - Requests are limited to subway transit with alternatives
//! - The body's `status` field, not the HTTP status, says whether routes
//!   were found; `ZERO_RESULTS` is a normal answer for a non-transit link

mod client;
mod error;
mod mock;
mod provider;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use error::{DirectionsError, ZERO_RESULTS};
pub use mock::MockDirectionsClient;
pub use provider::{DirectionsBackend, DirectionsProvider};
pub use types::{
    DirectionsResponse, RawLeg, RawRoute, RawStep, TransitDetails, TransitLine, TransitStop,
    TravelMode,
};
