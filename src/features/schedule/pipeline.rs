//! Free text to scheduled event in one call.

use chrono::NaiveDate;

use super::scheduler::{schedule_event, ScheduledEvent};
use crate::error::PlannerError;
use crate::features::nlp::parse_basic_input;
use crate::features::normalize::{EventNormalizer, RawEvent};

/// Parse, submit, normalize and schedule a free-text event description.
///
/// # Errors
///
/// Returns [`PlannerError::EmptyInput`] for blank text, or
/// [`PlannerError::Normalize`] when the parsed event fails validation
/// (for example an out-of-range time such as `25:99`).
pub fn plan_text(text: &str, normalizer: &EventNormalizer, today: NaiveDate) -> Result<ScheduledEvent, PlannerError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PlannerError::EmptyInput);
    }

    let submission = parse_basic_input(text).to_submission();
    let normalized = normalizer.normalize(&RawEvent::from(&submission), today)?;
    Ok(schedule_event(&normalized))
}
