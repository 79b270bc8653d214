//! Subway station registry and name matching.
//!
//! The registry maps each line to the stations it serves and is loaded once
//! from a JSON file. Free-text names (from links, users or the directions
//! provider) are compared against it through [`normalize`], which reduces a
//! name to a comparison key, and [`find_matching_stations`], which ranks
//! candidates by confidence.

mod error;
mod matcher;
mod normalize;
mod registry;

pub use error::StationError;
pub use matcher::{MAX_MATCHES, MatchCandidate, find_matching_stations};
pub use normalize::{normalize, tidy_stop_name};
pub use registry::{LineMap, StationRegistry, StationSuggestion};

pub(crate) use normalize::words;
