//! JSON output formatting for autoplanner.
//!
//! Field names follow the snake_case wire format of the event pipeline.

use serde::Serialize;
use serde_json::json;

use crate::core::BatchOutcome;
use crate::error::PlannerError;
use crate::features::nlp::ParsedEvent;
use crate::features::normalize::NormalizedEvent;
use crate::features::schedule::ScheduledEvent;
use crate::features::submit::{SubmissionEvent, SubmissionRequest};

/// Format a parsed event as JSON
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_parsed_event_json(event: &ParsedEvent) -> Result<String, PlannerError> {
    to_json(event)
}

/// Format a submission request with the endpoint it is posted to
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_submission_json(
    endpoint: &str,
    request: &SubmissionRequest<SubmissionEvent>,
) -> Result<String, PlannerError> {
    let output = json!({
        "method": "POST",
        "endpoint": endpoint,
        "body": request,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a normalize batch the way the normalize endpoint answers
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_normalize_outcome_json(outcome: &BatchOutcome<NormalizedEvent>) -> Result<String, PlannerError> {
    let output = json!({
        "ok": outcome.is_ok(),
        "normalized_events": outcome.items,
        "errors": (!outcome.errors.is_empty()).then_some(&outcome.errors),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a scheduled event as JSON
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_scheduled_event_json(event: &ScheduledEvent) -> Result<String, PlannerError> {
    let output = json!({
        "ok": true,
        "created_events": [event],
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a schedule batch the way the schedule endpoint answers
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn format_schedule_outcome_json(outcome: &BatchOutcome<ScheduledEvent>) -> Result<String, PlannerError> {
    let output = json!({
        "ok": outcome.is_ok(),
        "created_events": outcome.items,
        "errors": (!outcome.errors.is_empty()).then_some(&outcome.errors),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PlannerError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PlannerError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::features::nlp::parse_basic_input;
    use crate::features::normalize::EventNormalizer;
    use crate::features::schedule::schedule_batch;

    #[test]
    fn test_parsed_event_json() {
        let output = format_parsed_event_json(&parse_basic_input("meeting tomorrow at 14:30")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["date"], "tomorrow");
        assert_eq!(value["start_time"], "14:30");
        assert_eq!(value["all_day"], true);
    }

    #[test]
    fn test_submission_json() {
        let request = SubmissionRequest::single(parse_basic_input("lunch").to_submission());
        let output = format_submission_json("http://localhost:8000/api/ai/normalize/", &request).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["method"], "POST");
        assert_eq!(value["body"]["events"][0]["duration"], 1440);
    }

    #[test]
    fn test_normalize_outcome_errors_null_when_none() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 11).unwrap();
        let events = vec![serde_json::json!({"title": "x"})];
        let outcome = EventNormalizer::default().normalize_batch(&events, today);

        let value: serde_json::Value =
            serde_json::from_str(&format_normalize_outcome_json(&outcome).unwrap()).unwrap();
        assert_eq!(value["ok"], true);
        assert!(value["errors"].is_null());
        assert_eq!(value["normalized_events"][0]["date"], "2024-12-11");
    }

    #[test]
    fn test_normalize_outcome_lists_errors() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 11).unwrap();
        let events = vec![serde_json::json!({"date": "today"})];
        let outcome = EventNormalizer::default().normalize_batch(&events, today);

        let value: serde_json::Value =
            serde_json::from_str(&format_normalize_outcome_json(&outcome).unwrap()).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["errors"][0]["error"], "title is required");
    }

    #[test]
    fn test_schedule_outcome_json() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 11).unwrap();
        let events = vec![serde_json::json!({"title": "Holiday", "date": "tomorrow"})];
        let normalized = EventNormalizer::default().normalize_batch(&events, today);
        let outcome = schedule_batch(&normalized.items);

        let value: serde_json::Value =
            serde_json::from_str(&format_schedule_outcome_json(&outcome).unwrap()).unwrap();
        assert_eq!(value["ok"], true);
        assert!(value["errors"].is_null());
        assert_eq!(value["created_events"][0]["start_time"], "00:00:00");
        assert_eq!(value["created_events"][0]["duration"], 1440);
    }
}
