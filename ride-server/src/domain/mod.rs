//! Domain types for the ride link parser.
//!
//! Values here are validated at construction time, so code that receives
//! them can trust their invariants.

mod confidence;
mod ride;
mod station;

pub use confidence::{Confidence, InvalidConfidence};
pub use ride::RideSegment;
pub use station::Station;
