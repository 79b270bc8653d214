//! Ride segments from raw directions.

use tracing::debug;

use crate::directions::{RawRoute, RawStep, TransitDetails, TravelMode};
use crate::domain::{Confidence, RideSegment};
use crate::stations::tidy_stop_name;

/// Suffix the provider appends to some long line names.
const LINE_SUFFIX: &str = "Line";

/// Turn the first route into ride segments, one per transit step.
///
/// Legs and steps are walked in order. Non-transit steps contribute
/// nothing, and transit steps missing a line or either stop are skipped.
/// Every segment carries [`Confidence::DIRECT_TRANSIT`] and starts out
/// not transferred.
pub fn extract_rides(routes: &[RawRoute]) -> Vec<RideSegment> {
    let Some(route) = routes.first() else {
        return Vec::new();
    };

    route
        .legs
        .iter()
        .flat_map(|leg| leg.steps.iter())
        .filter(|step| step.travel_mode == TravelMode::Transit)
        .filter_map(|step| {
            let ride = ride_from_step(step);
            if ride.is_none() {
                debug!(
                    instructions = step.html_instructions.as_deref().unwrap_or(""),
                    "skipping incomplete transit step"
                );
            }
            ride
        })
        .collect()
}

fn ride_from_step(step: &RawStep) -> Option<RideSegment> {
    let details: &TransitDetails = step.transit_details.as_ref()?;

    let line = line_label(details)?;
    let boarding = stop_name(details.departure_stop.as_ref()?.name.as_deref())?;
    let departing = stop_name(details.arrival_stop.as_ref()?.name.as_deref())?;

    Some(RideSegment::new(
        line,
        boarding,
        departing,
        Confidence::DIRECT_TRANSIT,
    ))
}

/// Short name if present, else the long name without a trailing "Line".
fn line_label(details: &TransitDetails) -> Option<String> {
    let line = details.line.as_ref()?;
    let raw = non_blank(line.short_name.as_deref()).or_else(|| non_blank(line.name.as_deref()))?;

    let label = match raw.strip_suffix(LINE_SUFFIX) {
        Some(stripped) if stripped.ends_with(char::is_whitespace) => stripped.trim_end(),
        _ => raw,
    };
    non_blank(Some(label)).map(str::to_string)
}

fn stop_name(name: Option<&str>) -> Option<String> {
    non_blank(name).map(tidy_stop_name)
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
