//! Wire records sent to the normalize and schedule stages.

use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::features::nlp::{DateKeyword, ParsedEvent};

/// Start time sent for all-day events.
pub const ALL_DAY_START: &str = "00:00";

/// Duration in minutes sent for all-day events.
pub const ALL_DAY_MINUTES: u32 = 1440;

/// One event as submitted for normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub title: String,
    pub date: DateKeyword,
    pub start_time: Option<String>,
    pub duration: Option<u32>,
    pub category: Category,
    pub all_day: bool,
}

impl SubmissionEvent {
    /// Copy the wire fields of a parsed event.
    ///
    /// All-day events get a concrete midnight start and a full-day duration
    /// so that the record always carries both time fields.
    #[must_use]
    pub fn from_parsed(event: &ParsedEvent) -> Self {
        let (start_time, duration) = if event.all_day {
            (Some(ALL_DAY_START.to_string()), Some(ALL_DAY_MINUTES))
        } else {
            (event.start_time.clone(), event.duration_minutes)
        };

        Self {
            title: event.title.clone(),
            date: event.date,
            start_time,
            duration,
            category: event.category,
            all_day: event.all_day,
        }
    }
}

/// Request body for the normalize and schedule endpoints: `{ "events": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest<T> {
    pub events: Vec<T>,
}

impl<T> SubmissionRequest<T> {
    #[must_use]
    pub fn single(event: T) -> Self {
        Self { events: vec![event] }
    }
}

/// Endpoint URLs of the event pipeline for one backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Create endpoints under `base_url`. A trailing slash is ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn normalize(&self) -> String {
        format!("{}/api/ai/normalize/", self.base_url)
    }
}
