//! Turn normalized events into concrete, timed events.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::core::{BatchOutcome, Category};
use crate::features::normalize::NormalizedEvent;
use crate::features::submit::ALL_DAY_MINUTES;

/// An event with a concrete start and length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledEvent {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    /// Minutes.
    pub duration: u32,
    pub location: Option<String>,
    pub description: Option<String>,
    pub participants: Option<String>,
    pub reminder: u32,
    pub category: Category,
    pub all_day: bool,
}

impl ScheduledEvent {
    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    #[must_use]
    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at() + chrono::Duration::minutes(i64::from(self.duration))
    }
}

/// Schedule a normalized event.
///
/// All-day events, and events missing a start time or duration, span the
/// whole day from midnight.
#[must_use]
pub fn schedule_event(event: &NormalizedEvent) -> ScheduledEvent {
    let timed = match (event.all_day, event.start_time, event.duration) {
        (false, Some(start), Some(duration)) => Some((start, duration)),
        _ => None,
    };
    let (start_time, duration) = timed.unwrap_or((NaiveTime::default(), ALL_DAY_MINUTES));

    tracing::debug!(title = %event.title, date = %event.date, %start_time, duration, "scheduled event");

    ScheduledEvent {
        title: event.title.clone(),
        date: event.date,
        start_time,
        duration,
        location: event.location.clone(),
        description: event.description.clone(),
        participants: event.participants.clone(),
        reminder: event.reminder,
        category: event.category,
        all_day: timed.is_none(),
    }
}

/// Schedule every normalized event.
#[must_use]
pub fn schedule_batch(events: &[NormalizedEvent]) -> BatchOutcome<ScheduledEvent> {
    let outcome = BatchOutcome {
        items: events.iter().map(schedule_event).collect(),
        errors: Vec::new(),
    };
    tracing::debug!(count = outcome.items.len(), "scheduled batch");
    outcome
}
