//! Loosely-typed event records accepted by the normalizer.

use serde::{Deserialize, Deserializer, Serialize};

use crate::features::submit::SubmissionEvent;

/// Duration as submitted: whole minutes or free text ("1h", "90m").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Minutes(i64),
    Text(String),
}

impl DurationInput {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

/// Participants as submitted: comma-separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticipantsInput {
    Text(String),
    List(Vec<String>),
}

/// An event record whose fields may be missing or incomplete.
///
/// Empty strings deserialize as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    pub title: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub date: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub start_time: Option<String>,
    #[serde(deserialize_with = "blank_duration_as_none")]
    pub duration: Option<DurationInput>,
    #[serde(deserialize_with = "empty_as_none")]
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub participants: Option<ParticipantsInput>,
    pub reminder: Option<serde_json::Value>,
    pub category: Option<String>,
    pub all_day: Option<bool>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn blank_duration_as_none<'de, D>(deserializer: D) -> Result<Option<DurationInput>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<DurationInput>::deserialize(deserializer)?;
    Ok(value.filter(|d| !d.is_blank()))
}

impl From<&SubmissionEvent> for RawEvent {
    fn from(event: &SubmissionEvent) -> Self {
        Self {
            title: Some(event.title.clone()),
            date: Some(event.date.as_str().to_string()),
            start_time: event.start_time.clone(),
            duration: event.duration.map(|m| DurationInput::Minutes(i64::from(m))),
            category: Some(event.category.as_str().to_string()),
            all_day: Some(event.all_day),
            ..Self::default()
        }
    }
}
