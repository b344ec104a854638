//! Output formatting for autoplanner.
//!
//! This module provides formatters for displaying events in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::BatchOutcome;
use crate::error::PlannerError;
use crate::features::nlp::ParsedEvent;
use crate::features::normalize::NormalizedEvent;
use crate::features::schedule::ScheduledEvent;

pub use json::*;
pub use pretty::*;

/// Format a parsed event based on output format
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_parsed_event(event: &ParsedEvent, format: OutputFormat) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_event_pretty(event)),
        OutputFormat::Json => format_parsed_event_json(event),
    }
}

/// Format a normalize batch based on output format
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_normalize_outcome(
    outcome: &BatchOutcome<NormalizedEvent>,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_normalize_outcome_pretty(outcome)),
        OutputFormat::Json => format_normalize_outcome_json(outcome),
    }
}

/// Format a scheduled event based on output format
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_scheduled_event(event: &ScheduledEvent, format: OutputFormat) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_scheduled_event_pretty(event)),
        OutputFormat::Json => format_scheduled_event_json(event),
    }
}

/// Format a schedule batch based on output format
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_schedule_outcome(
    outcome: &BatchOutcome<ScheduledEvent>,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match format {
        OutputFormat::Pretty => Ok(format_schedule_outcome_pretty(outcome)),
        OutputFormat::Json => format_schedule_outcome_json(outcome),
    }
}
