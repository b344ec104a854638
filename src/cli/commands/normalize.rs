//! Normalize command implementation.

use std::io::Read;

use crate::cli::args::{NormalizeArgs, OutputFormat};
use crate::config::Config;
use crate::error::PlannerError;
use crate::features::normalize::EventNormalizer;
use crate::features::schedule::schedule_batch;
use crate::output::{format_normalize_outcome, format_schedule_outcome};

/// Execute the normalize command.
///
/// With `--schedule`, events that normalized are scheduled as well and the
/// normalization failures are reported alongside them.
///
/// # Errors
///
/// Returns an error if the input cannot be read, is not a JSON array or an
/// object with an `events` array, or is empty.
pub fn normalize(config: &Config, args: &NormalizeArgs, format: OutputFormat) -> Result<String, PlannerError> {
    let today = super::resolve_today(args.today.as_deref())?;

    let contents = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        },
    };

    let events = extract_events(serde_json::from_str(&contents)?)?;
    tracing::debug!(count = events.len(), %today, "normalizing events");

    let outcome = EventNormalizer::from_config(&config.normalize).normalize_batch(&events, today);
    if !args.schedule {
        return format_normalize_outcome(&outcome, format);
    }

    let mut scheduled = schedule_batch(&outcome.items);
    scheduled.errors.extend(outcome.errors);
    format_schedule_outcome(&scheduled, format)
}

/// Accept either `[...]` or `{ "events": [...] }`.
fn extract_events(value: serde_json::Value) -> Result<Vec<serde_json::Value>, PlannerError> {
    let events = match value {
        serde_json::Value::Array(events) => events,
        serde_json::Value::Object(mut map) => match map.remove("events") {
            Some(serde_json::Value::Array(events)) => events,
            _ => {
                return Err(PlannerError::InvalidArgument(
                    "expected an \"events\" array".to_string(),
                ))
            },
        },
        _ => {
            return Err(PlannerError::InvalidArgument(
                "expected a JSON array of events".to_string(),
            ))
        },
    };

    if events.is_empty() {
        return Err(PlannerError::InvalidArgument("events list is required".to_string()));
    }
    Ok(events)
}
