//! Event categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of a calendar event.
///
/// The basic input parser only detects `meeting`, `work` and `personal`
/// and falls back to `other`. `appointment` is accepted from raw events
/// submitted for normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Meeting,
    Appointment,
    #[default]
    Other,
}

impl Category {
    /// All categories, in the order they are listed to users.
    pub const ALL: [Self; 5] = [
        Self::Work,
        Self::Personal,
        Self::Meeting,
        Self::Appointment,
        Self::Other,
    ];

    /// Wire name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Meeting => "meeting",
            Self::Appointment => "appointment",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
