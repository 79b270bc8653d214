//! Subway ride link parser.
//!
//! Turns a shared Google Maps transit link into the subway rides it
//! describes: which line, where the rider boards and leaves, and whether
//! they change to another line afterwards.

pub mod config;
pub mod directions;
pub mod domain;
pub mod link;
pub mod pipeline;
pub mod stations;
pub mod web;
