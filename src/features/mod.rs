//! Feature implementations for autoplanner.
//!
//! This module contains the stages of the event pipeline:
//! - Natural language parsing
//! - Submission records
//! - Normalization
//! - Scheduling

pub mod nlp;
pub mod normalize;
pub mod schedule;
pub mod submit;
