//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::RideSegment;
use crate::stations::StationSuggestion;

/// Request to parse a shared map link.
#[derive(Debug, Deserialize)]
pub struct ParseUrlRequest {
    /// The link as the user pasted it
    pub url: String,
}

/// A ride found in a link, ready to be stored.
#[derive(Debug, Serialize)]
pub struct RideResult {
    /// Subway line ("6", "L")
    pub line: String,

    /// Stop where the ride starts
    pub boarding_stop: String,

    /// Stop where the ride ends
    pub departing_stop: String,

    /// ISO date the ride is filed under
    pub ride_date: String,

    /// Whether the rider changes to the next ride here
    pub transferred: bool,

    /// 0 to 100
    pub confidence: u8,
}

impl RideResult {
    fn from_segment(segment: RideSegment, date: &str) -> Self {
        Self {
            line: segment.line,
            boarding_stop: segment.boarding_stop,
            departing_stop: segment.departing_stop,
            ride_date: date.to_string(),
            transferred: segment.transferred,
            confidence: segment.confidence.value(),
        }
    }
}

/// Outcome of parsing a link.
#[derive(Debug, Serialize)]
pub struct ParseUrlResponse {
    /// False when the link held no subway rides
    pub success: bool,

    /// Human-readable summary
    pub message: String,

    /// ISO date all rides are filed under
    pub ride_date: String,

    pub rides: Vec<RideResult>,
}

impl ParseUrlResponse {
    /// Wrap parsed rides, all dated `date`.
    pub fn from_rides(rides: Vec<RideSegment>, date: NaiveDate) -> Self {
        let ride_date = date.format("%Y-%m-%d").to_string();

        if rides.is_empty() {
            return Self::no_rides(ride_date);
        }

        let message = match rides.len() {
            1 => "Found 1 subway ride in the route".to_string(),
            n => format!("Found {n} subway rides in the route"),
        };
        let rides = rides
            .into_iter()
            .map(|r| RideResult::from_segment(r, &ride_date))
            .collect();

        Self {
            success: true,
            message,
            ride_date,
            rides,
        }
    }

    /// The answer for a link with no usable rides.
    pub fn no_rides(ride_date: String) -> Self {
        Self {
            success: false,
            message: "No subway rides found for this link. Make sure it is a Google Maps transit route."
                .to_string(),
            ride_date,
            rides: Vec::new(),
        }
    }
}

/// Request for stations resembling a name.
#[derive(Debug, Deserialize)]
pub struct SuggestStationsRequest {
    /// Free-text station name, typically read from a link
    pub extracted_name: String,

    /// Anything the user said about the name; echoed back
    #[serde(default)]
    pub user_feedback: String,
}

/// Ranked station suggestions.
#[derive(Debug, Serialize)]
pub struct SuggestStationsResponse {
    pub extracted_name: String,
    pub suggestions: Vec<StationSuggestion>,
    pub user_feedback: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
