//! autoplanner - free text to calendar events
//!
//! This crate parses free-text event descriptions with keyword and regex
//! matching, then normalizes and schedules the result into concrete events.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PlannerError;
pub use features::nlp::{parse_basic_input, ParsedEvent};
