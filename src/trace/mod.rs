//! Shared trace data types.
//!
//! - [`models`]: tile, trace type and lane keyed maps
//! - [`constants`]: packet layout, register addresses, regex patterns

pub mod constants;
pub mod models;

pub use models::*;
