//! Directions API response DTOs.
//!
//! These types map directly to the Google Directions JSON response. Nearly
//! everything is optional or defaulted because the provider omits fields
//! freely, and a missing field in one step must not fail the whole body.

use serde::Deserialize;

use super::error::DirectionsError;

/// Provider status for a successful response.
const STATUS_OK: &str = "OK";

/// Top-level response body.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `OK`, `ZERO_RESULTS`, `REQUEST_DENIED`, ...
    pub status: String,

    /// Human-readable detail, present on most failures.
    pub error_message: Option<String>,

    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

impl DirectionsResponse {
    /// The routes, if the provider reported `OK`.
    ///
    /// Any other status, `ZERO_RESULTS` included, is a provider error.
    pub fn into_routes(self) -> Result<Vec<RawRoute>, DirectionsError> {
        if self.status == STATUS_OK {
            Ok(self.routes)
        } else {
            Err(DirectionsError::provider(
                self.status,
                self.error_message.unwrap_or_default(),
            ))
        }
    }
}

/// One candidate route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRoute {
    #[serde(default)]
    pub legs: Vec<RawLeg>,
}

/// A leg between two waypoints. Transit routes have exactly one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLeg {
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

/// A single instruction within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStep {
    /// Missing modes read as [`TravelMode::Other`], so the step is ignored.
    #[serde(default)]
    pub travel_mode: TravelMode,

    pub html_instructions: Option<String>,

    /// Only present on `TRANSIT` steps.
    pub transit_details: Option<TransitDetails>,
}

/// How a step is travelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Transit,
    Walking,
    Driving,
    Bicycling,
    #[default]
    #[serde(other)]
    Other,
}

/// The vehicle ride within a transit step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitDetails {
    pub departure_stop: Option<TransitStop>,
    pub arrival_stop: Option<TransitStop>,
    pub line: Option<TransitLine>,
}

/// A stop at either end of a transit step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitStop {
    pub name: Option<String>,
}

/// The line a transit step rides.
///
/// Subway lines usually carry a `short_name` ("6", "A"); some systems only
/// send the long `name` ("Lexington Avenue Line").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitLine {
    pub short_name: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_transit_response() {
        let json = r#"{
            "geocoded_waypoints": [],
            "routes": [{
                "summary": "",
                "legs": [{
                    "start_address": "Union Square, New York, NY 10003, USA",
                    "end_address": "Grand Central Terminal, New York, NY 10017, USA",
                    "steps": [
                        {
                            "travel_mode": "TRANSIT",
                            "html_instructions": "Subway towards Woodlawn",
                            "transit_details": {
                                "departure_stop": { "name": "14 St - Union Sq", "location": { "lat": 40.7347, "lng": -73.9907 } },
                                "arrival_stop": { "name": "Grand Central - 42 St" },
                                "headsign": "Woodlawn",
                                "num_stops": 3,
                                "line": {
                                    "short_name": "4",
                                    "name": "Lexington Avenue Express",
                                    "vehicle": { "type": "SUBWAY", "name": "Subway" }
                                }
                            }
                        },
                        { "travel_mode": "WALKING", "html_instructions": "Walk to Grand Central" }
                    ]
                }]
            }],
            "status": "OK"
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "OK");
        assert!(response.error_message.is_none());

        let steps = &response.routes[0].legs[0].steps;
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].travel_mode, TravelMode::Transit);
        assert_eq!(steps[1].travel_mode, TravelMode::Walking);
        assert!(steps[1].transit_details.is_none());

        let details = steps[0].transit_details.as_ref().unwrap();
        let line = details.line.as_ref().unwrap();
        assert_eq!(line.short_name.as_deref(), Some("4"));
        assert_eq!(
            details.departure_stop.as_ref().and_then(|s| s.name.as_deref()),
            Some("14 St - Union Sq")
        );
    }

    #[test]
    fn step_without_travel_mode_still_decodes() {
        let json = r#"{
            "status": "OK",
            "routes": [{ "legs": [{ "steps": [
                { "html_instructions": "Walk" },
                { "travel_mode": "TRANSIT", "transit_details": {} }
            ] }] }]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        let steps = &response.routes[0].legs[0].steps;
        assert_eq!(steps[0].travel_mode, TravelMode::Other);
        assert_eq!(steps[1].travel_mode, TravelMode::Transit);
    }

    #[test]
    fn deserialize_error_response() {
        let json = r#"{
            "error_message": "The provided API key is invalid.",
            "routes": [],
            "status": "REQUEST_DENIED"
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "REQUEST_DENIED");
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
        assert!(response.routes.is_empty());
    }

    #[test]
    fn missing_routes_default_to_empty() {
        let response: DirectionsResponse =
            serde_json::from_str(r#"{ "status": "ZERO_RESULTS" }"#).unwrap();
        assert!(response.routes.is_empty());
    }

    #[test]
    fn only_ok_yields_routes() {
        let ok: DirectionsResponse =
            serde_json::from_str(r#"{ "status": "OK", "routes": [{ "legs": [] }] }"#).unwrap();
        assert_eq!(ok.into_routes().unwrap().len(), 1);

        let zero: DirectionsResponse =
            serde_json::from_str(r#"{ "status": "ZERO_RESULTS", "routes": [] }"#).unwrap();
        assert!(zero.into_routes().unwrap_err().is_zero_results());

        let denied: DirectionsResponse = serde_json::from_str(
            r#"{ "status": "REQUEST_DENIED", "error_message": "bad key" }"#,
        )
        .unwrap();
        match denied.into_routes().unwrap_err() {
            DirectionsError::Provider { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "bad key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_travel_modes_are_tolerated() {
        assert_eq!(
            serde_json::from_str::<TravelMode>(r#""FERRY_HOVERCRAFT""#).unwrap(),
            TravelMode::Other
        );
        assert_eq!(
            serde_json::from_str::<TravelMode>(r#""DRIVING""#).unwrap(),
            TravelMode::Driving
        );
    }
}
