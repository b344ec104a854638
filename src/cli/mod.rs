//! Command-line interface for autoplanner.

pub mod args;
pub mod commands;
