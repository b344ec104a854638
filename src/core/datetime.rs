//! Date and time resolution utilities.
//!
//! Resolves the date keywords produced by the basic input parser (and the
//! wider set accepted from raw events, in English and Chinese) into concrete
//! calendar dates relative to a caller-supplied "today".

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// How a weekday keyword is anchored to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeekdayAnchor {
    /// Occurrence strictly after today ("next friday", "下周五").
    Next,
    /// Occurrence on or after today ("this friday", "本周五").
    This,
}

/// A keyword rule: any of `keywords` found in the input resolves the date.
struct KeywordRule {
    keywords: &'static [&'static str],
    offset: Offset,
}

#[derive(Clone, Copy)]
enum Offset {
    Days(i64),
    Weekday(Weekday, WeekdayAnchor),
    NextWeek,
}

// Checked top to bottom; the first rule with a matching keyword wins.
// "this" weekdays come before "next" weekdays so that the bare "周日"
// keyword does not capture "本周日".
const RULES: &[KeywordRule] = &[
    KeywordRule { keywords: &["明天", "tomorrow", "next day"], offset: Offset::Days(1) },
    KeywordRule { keywords: &["后天"], offset: Offset::Days(2) },
    KeywordRule { keywords: &["本周一", "this monday"], offset: Offset::Weekday(Weekday::Mon, WeekdayAnchor::This) },
    KeywordRule { keywords: &["本周二", "this tuesday"], offset: Offset::Weekday(Weekday::Tue, WeekdayAnchor::This) },
    KeywordRule { keywords: &["本周三", "this wednesday"], offset: Offset::Weekday(Weekday::Wed, WeekdayAnchor::This) },
    KeywordRule { keywords: &["本周四", "this thursday"], offset: Offset::Weekday(Weekday::Thu, WeekdayAnchor::This) },
    KeywordRule { keywords: &["本周五", "this friday"], offset: Offset::Weekday(Weekday::Fri, WeekdayAnchor::This) },
    KeywordRule { keywords: &["本周六", "this saturday"], offset: Offset::Weekday(Weekday::Sat, WeekdayAnchor::This) },
    KeywordRule { keywords: &["本周日", "this sunday"], offset: Offset::Weekday(Weekday::Sun, WeekdayAnchor::This) },
    KeywordRule { keywords: &["下周一", "next monday"], offset: Offset::Weekday(Weekday::Mon, WeekdayAnchor::Next) },
    KeywordRule { keywords: &["下周二", "next tuesday"], offset: Offset::Weekday(Weekday::Tue, WeekdayAnchor::Next) },
    KeywordRule { keywords: &["下周三", "next wednesday"], offset: Offset::Weekday(Weekday::Wed, WeekdayAnchor::Next) },
    KeywordRule { keywords: &["下周四", "next thursday"], offset: Offset::Weekday(Weekday::Thu, WeekdayAnchor::Next) },
    KeywordRule { keywords: &["下周五", "next friday"], offset: Offset::Weekday(Weekday::Fri, WeekdayAnchor::Next) },
    KeywordRule { keywords: &["下周六", "next saturday"], offset: Offset::Weekday(Weekday::Sat, WeekdayAnchor::Next) },
    KeywordRule { keywords: &["下周日", "周日", "next sunday"], offset: Offset::Weekday(Weekday::Sun, WeekdayAnchor::Next) },
    KeywordRule { keywords: &["下周", "next week"], offset: Offset::NextWeek },
    KeywordRule { keywords: &["今天", "today"], offset: Offset::Days(0) },
];

/// Resolve a date expression to a concrete date.
///
/// Supports:
/// - relative keywords: `today`, `tomorrow`, `next day`, `明天`, `后天`, ...
/// - weekdays: `next friday`, `this monday`, `下周一`, `本周五`
/// - `next week` (the coming Monday)
/// - ISO dates and datetimes (`2024-12-15`, `2024-12-15T10:00:00`,
///   `2024-12-15T10:00:00.5+08:00`)
/// - `MM-DD`, `MM/DD` (current year), `YYYY/MM/DD`, `DD-MM-YYYY`
///
/// Keywords are found anywhere in the input, case-insensitively.
/// Returns `None` if nothing matches.
#[must_use]
pub fn resolve_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();

    if let Some(days) = relative_days(&input.to_lowercase(), today) {
        return Some(today + Duration::days(days));
    }

    parse_absolute_date(input, today)
}

/// Number of days from `today` named by a relative keyword in `input`.
fn relative_days(input: &str, today: NaiveDate) -> Option<i64> {
    let rule = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| input.contains(k)))?;

    Some(match rule.offset {
        Offset::Days(days) => days,
        Offset::Weekday(target, anchor) => days_until_weekday(today, target, anchor),
        Offset::NextWeek => days_until_weekday(today, Weekday::Mon, WeekdayAnchor::Next),
    })
}

fn days_until_weekday(today: NaiveDate, target: Weekday, anchor: WeekdayAnchor) -> i64 {
    let ahead = i64::from(target.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday());

    match anchor {
        WeekdayAnchor::Next if ahead <= 0 => ahead + 7,
        WeekdayAnchor::This if ahead < 0 => ahead + 7,
        _ => ahead,
    }
}

/// Parse explicit date formats.
fn parse_absolute_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    // Offset datetimes keep their local date.
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }

    // Year-less forms take the current year.
    let year = today.year();
    NaiveDate::parse_from_str(&format!("{year}-{input}"), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{year}/{input}"), "%Y/%m/%d"))
        .ok()
}

/// Parse a wall-clock time in `HH:MM:SS` or `HH:MM` form.
///
/// Out-of-range components (`25:00`, `12:61`) are rejected.
#[must_use]
pub fn parse_clock_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    NaiveTime::parse_from_str(input, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
        .ok()
}
