//! Basic natural language event parser.
//!
//! Parses strings like "team meeting tomorrow at 14:30 for 2 hours" into a
//! structured event record using keyword and regex matching only.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::Category;
use crate::features::submit::SubmissionEvent;

/// Relative date detected in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateKeyword {
    #[default]
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "tomorrow")]
    Tomorrow,
    /// The day after tomorrow ("后天").
    #[serde(rename = "next day")]
    NextDay,
    #[serde(rename = "next week")]
    NextWeek,
    #[serde(rename = "next monday")]
    NextMonday,
    #[serde(rename = "next friday")]
    NextFriday,
}

impl DateKeyword {
    /// Wire name of the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::NextDay => "next day",
            Self::NextWeek => "next week",
            Self::NextMonday => "next monday",
            Self::NextFriday => "next friday",
        }
    }
}

impl std::fmt::Display for DateKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing a free-text event description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEvent {
    /// Input text with the trailing date/time clause stripped.
    pub title: String,
    /// Relative date; `today` when nothing was detected.
    pub date: DateKeyword,
    /// First `H:MM`/`HH:MM` found in the text, verbatim and unvalidated.
    pub start_time: Option<String>,
    /// Duration in minutes.
    #[serde(rename = "duration")]
    pub duration_minutes: Option<u32>,
    pub category: Category,
    /// True when either the start time or the duration is missing.
    pub all_day: bool,
}

impl ParsedEvent {
    /// Build the record sent to the normalize stage.
    #[must_use]
    pub fn to_submission(&self) -> SubmissionEvent {
        SubmissionEvent::from_parsed(self)
    }
}

// Date keywords, checked in order. Each entry is (lowercase needles, verbatim needles).
const DATE_RULES: &[(&[&str], &[&str], DateKeyword)] = &[
    (&["tomorrow"], &["明天"], DateKeyword::Tomorrow),
    (&[], &["后天"], DateKeyword::NextDay),
    (&["next week"], &[], DateKeyword::NextWeek),
    (&["next monday"], &[], DateKeyword::NextMonday),
    (&["next friday"], &[], DateKeyword::NextFriday),
];

// "2 hour" must be checked before the generic "hour".
const DURATION_RULES: &[(&str, u32)] = &[("2 hour", 120), ("hour", 60), ("30 min", 30)];

const CATEGORY_RULES: &[(&str, Category)] = &[
    ("meeting", Category::Meeting),
    ("work", Category::Work),
    ("personal", Category::Personal),
];

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2}):([0-9]{2})").unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // Everything up to the first temporal clause; digits and '@' end the title.
    Regex::new(r"(?i)^([^0-9@]*?)(?:\s+(?:tomorrow|today|next|at|[0-9]).*)?$")
        .unwrap_or_else(|e| panic!("Invalid title regex: {e}"))
});

/// Parse a free-text event description into structured data.
///
/// Never fails: every field falls back to its default when nothing matches.
///
/// # Examples
///
/// ```
/// use autoplanner::core::Category;
/// use autoplanner::features::nlp::{parse_basic_input, DateKeyword};
///
/// let event = parse_basic_input("meeting tomorrow at 14:30");
/// assert_eq!(event.title, "meeting");
/// assert_eq!(event.date, DateKeyword::Tomorrow);
/// assert_eq!(event.start_time.as_deref(), Some("14:30"));
/// assert_eq!(event.category, Category::Meeting);
/// assert!(event.all_day);
/// ```
#[must_use]
pub fn parse_basic_input(input: &str) -> ParsedEvent {
    let text = input.trim();
    let lower = text.to_lowercase();

    let start_time = detect_time(text);
    let duration_minutes = detect_duration(&lower);
    let all_day = start_time.is_none() || duration_minutes.is_none();

    let event = ParsedEvent {
        title: extract_title(text),
        date: detect_date(text, &lower),
        start_time,
        duration_minutes,
        category: detect_category(&lower),
        all_day,
    };

    tracing::debug!(
        title = %event.title,
        date = %event.date,
        start_time = ?event.start_time,
        duration = ?event.duration_minutes,
        category = %event.category,
        all_day = event.all_day,
        "parsed basic input"
    );

    event
}

fn detect_date(text: &str, lower: &str) -> DateKeyword {
    DATE_RULES
        .iter()
        .find(|(lowercase, verbatim, _)| {
            lowercase.iter().any(|k| lower.contains(k)) || verbatim.iter().any(|k| text.contains(k))
        })
        .map_or(DateKeyword::Today, |(_, _, keyword)| *keyword)
}

fn detect_time(text: &str) -> Option<String> {
    TIME_PATTERN
        .captures(text)
        .map(|caps| format!("{}:{}", &caps[1], &caps[2]))
}

fn detect_duration(lower: &str) -> Option<u32> {
    DURATION_RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, minutes)| *minutes)
}

fn detect_category(lower: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(Category::Other, |(_, category)| *category)
}

/// Strip a trailing temporal clause; keep the text as-is if nothing is left.
fn extract_title(text: &str) -> String {
    TITLE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|title| !title.is_empty())
        .unwrap_or(text)
        .trim()
        .to_string()
}
