//! Core abstractions for autoplanner.
//!
//! This module provides the shared types and date utilities used across features.

mod batch;
mod category;
mod datetime;

pub use batch::{BatchError, BatchOutcome};
pub use category::Category;
pub use datetime::{parse_clock_time, resolve_date};
