//! Ride segments.

use serde::Serialize;

use super::Confidence;

/// One continuous ride on a single subway line.
///
/// Built by the route extractor; only the transfer detector changes it
/// afterwards, and only the `transferred` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RideSegment {
    /// Line identifier, e.g. "6" or "A".
    pub line: String,

    /// Where the rider gets on.
    pub boarding_stop: String,

    /// Where the rider gets off.
    pub departing_stop: String,

    /// Whether the rider changes to the next segment at `departing_stop`.
    pub transferred: bool,

    /// How certain we are about this segment.
    pub confidence: Confidence,
}

impl RideSegment {
    /// Create a segment with `transferred` unset.
    pub fn new(
        line: impl Into<String>,
        boarding_stop: impl Into<String>,
        departing_stop: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            line: line.into(),
            boarding_stop: boarding_stop.into(),
            departing_stop: departing_stop.into(),
            transferred: false,
            confidence,
        }
    }
}
