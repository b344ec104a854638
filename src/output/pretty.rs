use std::fmt::Write;

use colored::Colorize;

use crate::core::BatchOutcome;
use crate::features::nlp::ParsedEvent;
use crate::features::normalize::NormalizedEvent;
use crate::features::schedule::ScheduledEvent;

const NONE: &str = "-";

/// Format a parsed event as pretty output
pub fn format_parsed_event_pretty(event: &ParsedEvent) -> String {
    let mut output = format!("{}\n", "Parsed Event".yellow().bold());
    writeln!(output, "  {} {}", "Title:".cyan().bold(), event.title).ok();
    writeln!(output, "  {} {}", "Date:".cyan(), event.date).ok();
    writeln!(output, "  {} {}", "Time:".cyan(), event.start_time.as_deref().unwrap_or(NONE)).ok();

    let duration = event
        .duration_minutes
        .map_or_else(|| NONE.to_string(), |m| format!("{m} min"));
    writeln!(output, "  {} {duration}", "Duration:".cyan()).ok();
    writeln!(output, "  {} {}", "Category:".magenta(), event.category).ok();
    writeln!(output, "  {} {}", "All day:".dimmed(), yes_no(event.all_day)).ok();

    output
}

/// Format a normalize batch as pretty output
pub fn format_normalize_outcome_pretty(outcome: &BatchOutcome<NormalizedEvent>) -> String {
    let mut output = format!(
        "{} ({} ok, {} failed)\n",
        "Normalized Events".bold(),
        outcome.items.len(),
        outcome.errors.len()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for event in &outcome.items {
        let when = match (event.start_time, event.duration) {
            (Some(start), Some(minutes)) => format!("{} {} ({minutes} min)", event.date, start.format("%H:%M")),
            _ => format!("{} {}", event.date, "all day".dimmed()),
        };
        writeln!(output, "{} {}  {}  {}", "[ok]".green(), event.title.bold(), when.yellow(), event.category.to_string().cyan()).ok();
    }

    for error in &outcome.errors {
        writeln!(output, "{} #{} {}: {}", "[!!]".red(), error.index, error.title.bold(), error.error.red()).ok();
    }

    output
}

/// Format a scheduled event as pretty output
pub fn format_scheduled_event_pretty(event: &ScheduledEvent) -> String {
    let mut output = format!("{} {}\n", "Scheduled:".green().bold(), event.title.bold());

    if event.all_day {
        writeln!(output, "  {} {} ({})", "When:".cyan(), event.date, "all day".dimmed()).ok();
    } else {
        writeln!(
            output,
            "  {} {} - {}",
            "When:".cyan(),
            event.starts_at().format("%Y-%m-%d %H:%M"),
            event.ends_at().format("%H:%M")
        )
        .ok();
        writeln!(output, "  {} {} min", "Duration:".cyan(), event.duration).ok();
    }

    writeln!(output, "  {} {}", "Category:".magenta(), event.category).ok();
    writeln!(output, "  {} {} min before", "Reminder:".dimmed(), event.reminder).ok();

    if let Some(location) = &event.location {
        writeln!(output, "  {} {location}", "Location:".blue()).ok();
    }
    if let Some(participants) = &event.participants {
        writeln!(output, "  {} {participants}", "With:".blue()).ok();
    }
    if let Some(description) = &event.description {
        writeln!(output, "  {} {description}", "Notes:".dimmed()).ok();
    }

    output
}

/// Format a schedule batch as pretty output
pub fn format_schedule_outcome_pretty(outcome: &BatchOutcome<ScheduledEvent>) -> String {
    let mut output = format!(
        "{} ({} ok, {} failed)\n",
        "Scheduled Events".bold(),
        outcome.items.len(),
        outcome.errors.len()
    );
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for event in &outcome.items {
        let when = if event.all_day {
            format!("{} {}", event.date, "all day".dimmed())
        } else {
            format!(
                "{} - {}",
                event.starts_at().format("%Y-%m-%d %H:%M"),
                event.ends_at().format("%H:%M")
            )
        };
        writeln!(output, "{} {}  {}  {}", "[ok]".green(), event.title.bold(), when.yellow(), event.category.to_string().cyan()).ok();
    }

    for error in &outcome.errors {
        writeln!(output, "{} #{} {}: {}", "[!!]".red(), error.index, error.title.bold(), error.error.red()).ok();
    }

    output
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::features::nlp::parse_basic_input;
    use crate::features::normalize::EventNormalizer;
    use crate::features::schedule::{plan_text, schedule_batch};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 11).unwrap()
    }

    #[test]
    fn test_parsed_event_pretty() {
        let output = format_parsed_event_pretty(&parse_basic_input("2 hour work session"));
        assert!(output.contains("2 hour work session"));
        assert!(output.contains("120 min"));
        assert!(output.contains("work"));
        assert!(output.contains("yes"));
    }

    #[test]
    fn test_normalize_outcome_pretty() {
        let events = vec![
            serde_json::json!({"title": "Standup", "start_time": "09:00", "duration": 15}),
            serde_json::json!({"title": "Broken", "date": "someday"}),
        ];
        let outcome = EventNormalizer::default().normalize_batch(&events, today());
        let output = format_normalize_outcome_pretty(&outcome);
        assert!(output.contains("1 ok, 1 failed"));
        assert!(output.contains("Standup"));
        assert!(output.contains("cannot parse date: someday"));
    }

    #[test]
    fn test_scheduled_event_pretty() {
        let event = plan_text("meeting tomorrow at 14:30 for 2 hours", &EventNormalizer::default(), today()).unwrap();
        let output = format_scheduled_event_pretty(&event);
        assert!(output.contains("meeting"));
        assert!(output.contains("2024-12-12 14:30"));
        assert!(output.contains("16:30"));
    }

    #[test]
    fn test_scheduled_all_day_pretty() {
        let event = plan_text("holiday next week", &EventNormalizer::default(), today()).unwrap();
        let output = format_scheduled_event_pretty(&event);
        assert!(output.contains("2024-12-16"));
        assert!(output.contains("all day"));
    }

    #[test]
    fn test_schedule_outcome_pretty() {
        let events = vec![
            serde_json::json!({"title": "Standup", "date": "tomorrow", "start_time": "09:00", "duration": 15}),
            serde_json::json!({"title": "Offsite", "date": "next friday"}),
        ];
        let outcome = schedule_batch(&EventNormalizer::default().normalize_batch(&events, today()).items);
        let output = format_schedule_outcome_pretty(&outcome);
        assert!(output.contains("2 ok, 0 failed"));
        assert!(output.contains("2024-12-12 09:00 - 09:15"));
        assert!(output.contains("2024-12-13"));
    }
}
