//! Application state for the web layer.

use std::sync::Arc;

use crate::directions::DirectionsBackend;
use crate::pipeline::RideParser;
use crate::stations::StationRegistry;

/// Shared application state.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Link to rides pipeline
    pub parser: Arc<RideParser<DirectionsBackend>>,

    /// Canonical stations for suggestions
    pub stations: Arc<StationRegistry>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(parser: RideParser<DirectionsBackend>, stations: StationRegistry) -> Self {
        Self {
            parser: Arc::new(parser),
            stations: Arc::new(stations),
        }
    }
}
