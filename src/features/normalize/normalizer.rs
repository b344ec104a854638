//! Event normalization: fill in defaults, resolve dates, validate fields.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::raw::{DurationInput, ParticipantsInput, RawEvent};
use crate::config::NormalizeConfig;
use crate::core::{parse_clock_time, resolve_date, BatchOutcome, Category};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_LOCATION_CHARS: usize = 255;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;
pub const MAX_DURATION_MINUTES: i64 = 1440;
/// 28 days.
pub const MAX_REMINDER_MINUTES: i64 = 40320;

/// Why a raw event could not be normalized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("title is required")]
    TitleRequired,

    #[error("cannot parse date: {0}")]
    InvalidDate(String),

    #[error("cannot parse time: {0}")]
    InvalidTime(String),

    #[error("cannot parse duration or out of range: {0}")]
    InvalidDuration(String),

    #[error("duration must be 1-1440 minutes, got {0}")]
    DurationOutOfRange(i64),
}

/// A validated event with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    pub title: String,
    pub date: NaiveDate,
    pub all_day: bool,
    /// `None` for all-day events.
    pub start_time: Option<NaiveTime>,
    /// Minutes; `None` for all-day events.
    pub duration: Option<u32>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Valid e-mail addresses joined by `,`.
    pub participants: Option<String>,
    /// Minutes before the start.
    pub reminder: u32,
    pub category: Category,
}

static HOURS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:小时|hour|h)")
        .unwrap_or_else(|e| panic!("Invalid hours regex: {e}"))
});

static MINUTES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*(?:分钟|minute|m)")
        .unwrap_or_else(|e| panic!("Invalid minutes regex: {e}"))
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("Invalid email regex: {e}"))
});

/// Fills and validates raw event records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventNormalizer {
    default_duration_minutes: u32,
    default_reminder_minutes: u32,
    default_category: Category,
}

impl Default for EventNormalizer {
    fn default() -> Self {
        Self::from_config(&NormalizeConfig::default())
    }
}

impl EventNormalizer {
    /// Create a normalizer using the defaults from configuration.
    #[must_use]
    pub const fn from_config(config: &NormalizeConfig) -> Self {
        Self {
            default_duration_minutes: config.default_duration_minutes,
            default_reminder_minutes: config.default_reminder_minutes,
            default_category: config.default_category,
        }
    }

    /// Normalize one raw event. Relative dates resolve against `today`.
    ///
    /// # Errors
    ///
    /// Returns a [`NormalizeError`] when the title is missing or the date,
    /// start time, or duration cannot be parsed.
    pub fn normalize(&self, raw: &RawEvent, today: NaiveDate) -> Result<NormalizedEvent, NormalizeError> {
        let title = raw.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(NormalizeError::TitleRequired);
        }

        let date = match raw.date.as_deref() {
            None => today,
            Some(text) => {
                resolve_date(text, today).ok_or_else(|| NormalizeError::InvalidDate(text.trim().to_string()))?
            },
        };

        let has_length = raw.duration.is_some() || raw.end_time.is_some();
        let all_day = raw.all_day == Some(true) || raw.start_time.is_none() || !has_length;

        let (start_time, duration) = if all_day {
            (None, None)
        } else {
            let start = normalize_start_time(raw.start_time.as_deref())?;
            let duration = self.normalize_duration(raw, start)?;
            (Some(start), Some(duration))
        };

        let event = NormalizedEvent {
            title: truncate(title, MAX_TITLE_CHARS),
            date,
            all_day,
            start_time,
            duration,
            location: normalize_text(raw.location.as_deref(), MAX_LOCATION_CHARS),
            description: normalize_text(raw.description.as_deref(), MAX_DESCRIPTION_CHARS),
            participants: raw.participants.as_ref().and_then(normalize_participants),
            reminder: self.normalize_reminder(raw.reminder.as_ref()),
            category: self.normalize_category(raw.category.as_deref()),
        };

        tracing::info!(title = %event.title, date = %event.date, "normalized event");
        Ok(event)
    }

    /// Normalize every event, collecting failures instead of stopping.
    ///
    /// Items that do not even deserialize as a [`RawEvent`] are reported as
    /// failures with the deserialization message.
    #[must_use]
    pub fn normalize_batch(&self, events: &[serde_json::Value], today: NaiveDate) -> BatchOutcome<NormalizedEvent> {
        let mut outcome = BatchOutcome::default();

        for (index, value) in events.iter().enumerate() {
            let title = value.get("title").and_then(serde_json::Value::as_str);
            let result = serde_json::from_value::<RawEvent>(value.clone())
                .map_err(|e| e.to_string())
                .and_then(|raw| self.normalize(&raw, today).map_err(|e| e.to_string()));

            match result {
                Ok(event) => outcome.items.push(event),
                Err(error) => {
                    tracing::warn!(index, %error, "event normalization failed");
                    outcome.push_error(index, title, error);
                },
            }
        }

        outcome
    }

    fn normalize_duration(&self, raw: &RawEvent, start: NaiveTime) -> Result<u32, NormalizeError> {
        match &raw.duration {
            Some(DurationInput::Minutes(minutes)) => {
                if *minutes <= 0 || *minutes > MAX_DURATION_MINUTES {
                    return Err(NormalizeError::DurationOutOfRange(*minutes));
                }
                u32::try_from(*minutes).map_err(|_| NormalizeError::DurationOutOfRange(*minutes))
            },
            Some(DurationInput::Text(text)) => parse_duration_text(text),
            None => Ok(raw
                .end_time
                .as_deref()
                .and_then(parse_clock_time)
                .map(|end| (end - start).num_minutes())
                .filter(|minutes| *minutes > 0)
                .and_then(|minutes| u32::try_from(minutes).ok())
                .unwrap_or(self.default_duration_minutes)),
        }
    }

    fn normalize_reminder(&self, reminder: Option<&serde_json::Value>) -> u32 {
        let minutes = match reminder {
            Some(serde_json::Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        };

        minutes
            .filter(|m| (0..=MAX_REMINDER_MINUTES).contains(m))
            .and_then(|m| u32::try_from(m).ok())
            .unwrap_or(self.default_reminder_minutes)
    }

    fn normalize_category(&self, category: Option<&str>) -> Category {
        category
            .and_then(|c| c.parse().ok())
            .unwrap_or(self.default_category)
    }
}

fn normalize_start_time(input: Option<&str>) -> Result<NaiveTime, NormalizeError> {
    let text = input.unwrap_or_default();
    parse_clock_time(text).ok_or_else(|| NormalizeError::InvalidTime(text.trim().to_string()))
}

/// Parse "1h", "90m", "1.5 hours", "1 hour 30 minutes", "2小时".
///
/// Hours and minutes are summed. A bare `m` directly followed by `in`
/// ("30 min") is not read as minutes.
fn parse_duration_text(text: &str) -> Result<u32, NormalizeError> {
    let lower = text.trim().to_lowercase();
    let invalid = || NormalizeError::InvalidDuration(text.trim().to_string());

    let hour_minutes = match HOURS_PATTERN.captures(&lower) {
        Some(caps) => {
            let minutes = caps[1].parse::<f64>().map_err(|_| invalid())? * 60.0;
            // Checked before the cast, which would saturate.
            if minutes > MAX_DURATION_MINUTES as f64 {
                return Err(invalid());
            }
            minutes as i64
        },
        None => 0,
    };

    let minutes = match MINUTES_PATTERN
        .captures_iter(&lower)
        .find(|caps| caps.get(0).is_some_and(|m| !lower[m.end()..].starts_with("in")))
    {
        Some(caps) => caps[1].parse::<i64>().map_err(|_| invalid())?,
        None => 0,
    };

    hour_minutes
        .checked_add(minutes)
        .filter(|total| (1..=MAX_DURATION_MINUTES).contains(total))
        .and_then(|total| u32::try_from(total).ok())
        .ok_or_else(invalid)
}

fn normalize_text(input: Option<&str>, max_chars: usize) -> Option<String> {
    input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| truncate(s, max_chars))
}

fn normalize_participants(input: &ParticipantsInput) -> Option<String> {
    let entries: Vec<&str> = match input {
        ParticipantsInput::Text(text) => text.split(',').collect(),
        ParticipantsInput::List(list) => list.iter().flat_map(|p| p.split(',')).collect(),
    };

    let valid: Vec<&str> = entries
        .into_iter()
        .map(str::trim)
        .filter(|e| EMAIL_PATTERN.is_match(e))
        .collect();

    (!valid.is_empty()).then(|| valid.join(","))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // A Wednesday.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 11).unwrap()
    }

    fn raw(value: serde_json::Value) -> RawEvent {
        serde_json::from_value(value).unwrap()
    }

    fn normalize(value: serde_json::Value) -> Result<NormalizedEvent, NormalizeError> {
        EventNormalizer::default().normalize(&raw(value), today())
    }

    // ============
    // Title Tests
    // ============

    #[test]
    fn test_title_required() {
        assert_eq!(normalize(json!({})), Err(NormalizeError::TitleRequired));
        assert_eq!(
            normalize(json!({"title": "   "})),
            Err(NormalizeError::TitleRequired)
        );
    }

    #[test]
    fn test_title_trimmed_and_truncated() {
        let long = format!("  {}  ", "é".repeat(250));
        let event = normalize(json!({ "title": long })).unwrap();
        assert_eq!(event.title.chars().count(), MAX_TITLE_CHARS);
    }

    // ===========
    // Date Tests
    // ===========

    #[test]
    fn test_missing_date_is_today() {
        let event = normalize(json!({"title": "x"})).unwrap();
        assert_eq!(event.date, today());
    }

    #[test]
    fn test_relative_date_resolves() {
        let event = normalize(json!({"title": "x", "date": "tomorrow"})).unwrap();
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 12, 12).unwrap());
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            normalize(json!({"title": "x", "date": "someday"})),
            Err(NormalizeError::InvalidDate("someday".to_string()))
        );
    }

    // ==============
    // All-day Tests
    // ==============

    #[test]
    fn test_missing_time_is_all_day() {
        let event = normalize(json!({"title": "x", "duration": 30})).unwrap();
        assert!(event.all_day);
        assert!(event.start_time.is_none());
        assert!(event.duration.is_none());
    }

    #[test]
    fn test_missing_duration_is_all_day() {
        let event = normalize(json!({"title": "x", "start_time": "10:00"})).unwrap();
        assert!(event.all_day);
    }

    #[test]
    fn test_explicit_all_day_clears_times() {
        let event = normalize(json!({
            "title": "x", "start_time": "00:00", "duration": 1440, "all_day": true
        }))
        .unwrap();
        assert!(event.all_day);
        assert!(event.start_time.is_none());
        assert!(event.duration.is_none());
    }

    #[test]
    fn test_timed_event() {
        let event = normalize(json!({
            "title": "Meeting", "date": "tomorrow", "start_time": "14:30", "duration": "1h"
        }))
        .unwrap();
        assert!(!event.all_day);
        assert_eq!(event.start_time, NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(event.duration, Some(60));
    }

    // ===========
    // Time Tests
    // ===========

    #[test]
    fn test_invalid_time() {
        assert_eq!(
            normalize(json!({"title": "x", "start_time": "25:99", "duration": 30})),
            Err(NormalizeError::InvalidTime("25:99".to_string()))
        );
    }

    #[test]
    fn test_time_with_seconds() {
        let event = normalize(json!({"title": "x", "start_time": "08:15:30", "duration": 30})).unwrap();
        assert_eq!(event.start_time, NaiveTime::from_hms_opt(8, 15, 30));
    }

    // ===============
    // Duration Tests
    // ===============

    #[test]
    fn test_duration_out_of_range() {
        assert_eq!(
            normalize(json!({"title": "x", "start_time": "10:00", "duration": 0})),
            Err(NormalizeError::DurationOutOfRange(0))
        );
        assert_eq!(
            normalize(json!({"title": "x", "start_time": "10:00", "duration": 1441})),
            Err(NormalizeError::DurationOutOfRange(1441))
        );
    }

    #[test]
    fn test_parse_duration_text() {
        assert_eq!(parse_duration_text("1h"), Ok(60));
        assert_eq!(parse_duration_text("90m"), Ok(90));
        assert_eq!(parse_duration_text("1h 30m"), Ok(90));
        assert_eq!(parse_duration_text("1 hour 30 minutes"), Ok(90));
        assert_eq!(parse_duration_text("1.5 hours"), Ok(90));
        assert_eq!(parse_duration_text("2小时"), Ok(120));
        assert_eq!(parse_duration_text("45分钟"), Ok(45));
    }

    #[test]
    fn test_parse_duration_text_min_suffix_not_minutes() {
        assert_eq!(
            parse_duration_text("30 min"),
            Err(NormalizeError::InvalidDuration("30 min".to_string()))
        );
    }

    #[test]
    fn test_parse_duration_text_out_of_range() {
        assert!(parse_duration_text("25h").is_err());
        assert!(parse_duration_text("soon").is_err());
    }

    #[test]
    fn test_parse_duration_text_huge_hours_rejected() {
        assert_eq!(
            parse_duration_text("99999999999999999999999h 5m"),
            Err(NormalizeError::InvalidDuration("99999999999999999999999h 5m".to_string()))
        );
        assert!(parse_duration_text("1000000 hours").is_err());
    }

    #[test]
    fn test_parse_duration_text_huge_minutes_rejected() {
        assert_eq!(
            parse_duration_text("1h 99999999999999999999m"),
            Err(NormalizeError::InvalidDuration("1h 99999999999999999999m".to_string()))
        );
        assert!(parse_duration_text("9223372036854775807m").is_err());
    }

    #[test]
    fn test_end_time_gives_duration() {
        let event = normalize(json!({"title": "x", "start_time": "09:00", "end_time": "10:30"})).unwrap();
        assert!(!event.all_day);
        assert_eq!(event.duration, Some(90));
    }

    #[test]
    fn test_start_without_duration_or_end_time_is_all_day() {
        let event = normalize(json!({"title": "x", "start_time": "09:00", "end_time": ""})).unwrap();
        assert!(event.all_day);
        assert_eq!(event.start_time, None);
        assert_eq!(event.duration, None);
    }

    #[test]
    fn test_unparseable_end_time_uses_default() {
        let event = normalize(json!({"title": "x", "start_time": "09:00", "end_time": "later"})).unwrap();
        assert!(!event.all_day);
        assert_eq!(event.duration, Some(60));
    }

    #[test]
    fn test_end_time_before_start_uses_default() {
        let event = normalize(json!({"title": "x", "start_time": "11:00", "end_time": "10:00"})).unwrap();
        assert_eq!(event.duration, Some(60));
    }

    // ======================
    // Optional Field Tests
    // ======================

    #[test]
    fn test_location_and_description() {
        let event = normalize(json!({
            "title": "x", "location": "  Room 4 ", "description": ""
        }))
        .unwrap();
        assert_eq!(event.location.as_deref(), Some("Room 4"));
        assert!(event.description.is_none());
    }

    #[test]
    fn test_participants_keep_valid_emails() {
        let event = normalize(json!({
            "title": "x", "participants": "a@x.io, not-an-email, b@y.org"
        }))
        .unwrap();
        assert_eq!(event.participants.as_deref(), Some("a@x.io,b@y.org"));

        let event = normalize(json!({"title": "x", "participants": ["nobody"]})).unwrap();
        assert!(event.participants.is_none());
    }

    #[test]
    fn test_reminder() {
        let event = normalize(json!({"title": "x"})).unwrap();
        assert_eq!(event.reminder, 15);

        let event = normalize(json!({"title": "x", "reminder": "30"})).unwrap();
        assert_eq!(event.reminder, 30);

        let event = normalize(json!({"title": "x", "reminder": 50000})).unwrap();
        assert_eq!(event.reminder, 15);

        let event = normalize(json!({"title": "x", "reminder": -1})).unwrap();
        assert_eq!(event.reminder, 15);
    }

    #[test]
    fn test_category() {
        let event = normalize(json!({"title": "x", "category": "Appointment"})).unwrap();
        assert_eq!(event.category, Category::Appointment);

        let event = normalize(json!({"title": "x", "category": "party"})).unwrap();
        assert_eq!(event.category, Category::Other);
    }

    #[test]
    fn test_config_defaults_apply() {
        let config = NormalizeConfig {
            default_duration_minutes: 45,
            default_reminder_minutes: 5,
            default_category: Category::Work,
        };
        let normalizer = EventNormalizer::from_config(&config);
        let event = normalizer
            .normalize(&raw(json!({"title": "x", "start_time": "12:00", "end_time": "11:00"})), today())
            .unwrap();
        assert_eq!(event.duration, Some(45));
        assert_eq!(event.reminder, 5);
        assert_eq!(event.category, Category::Work);
    }

    // ============
    // Batch Tests
    // ============

    #[test]
    fn test_batch_collects_errors() {
        let events = vec![
            json!({"title": "ok", "date": "today"}),
            json!({"title": "bad", "date": "someday"}),
            json!({"date": "today"}),
            json!({"title": "weird", "all_day": "yes"}),
        ];
        let outcome = EventNormalizer::default().normalize_batch(&events, today());

        assert!(outcome.is_ok());
        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.errors.len(), 3);
        assert_eq!(outcome.errors[0].index, 1);
        assert_eq!(outcome.errors[0].title, "bad");
        assert_eq!(outcome.errors[0].error, "cannot parse date: someday");
        assert_eq!(outcome.errors[1].title, "Unknown");
        assert_eq!(outcome.errors[2].index, 3);
    }

    #[test]
    fn test_serialized_shape() {
        let event = normalize(json!({
            "title": "Meeting", "date": "2024-12-20", "start_time": "14:30", "duration": 90
        }))
        .unwrap();
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["date"], "2024-12-20");
        assert_eq!(value["start_time"], "14:30:00");
        assert_eq!(value["duration"], 90);
        assert_eq!(value["category"], "other");
    }
}
