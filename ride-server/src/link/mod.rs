//! Shared map link resolution.
//!
//! Turns a Google Maps directions link, possibly shortened, into the origin
//! and destination the directions provider should be asked about.

mod error;
mod resolver;
mod shape;

pub use error::LinkError;
pub use resolver::{LinkConfig, LinkResolver};
pub use shape::{LinkShape, RouteEnds, extract_route_ends};
