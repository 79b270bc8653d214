//! Shared link to subway rides.
//!
//! Resolve the link to an origin and destination, ask the directions
//! provider for a subway route, turn its transit steps into rides and mark
//! the transfers between them.

mod extract;
mod parser;
mod transfers;


pub use extract::extract_rides;
pub use parser::{ParseError, RideParser};
pub use transfers::{TransferRule, mark_transfers};
