//! Web layer for the ride link parser.
//!
//! Provides HTTP endpoints for parsing shared links into rides and for
//! suggesting stations for a free-text name.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
