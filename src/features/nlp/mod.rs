//! Natural language parsing for event entry.
//!
//! This module provides keyword/regex parsing for free-text event input like:
//! - "meeting tomorrow at 14:30"
//! - "2 hour work session"
//! - "personal errand next friday"

mod parser;

pub use parser::{parse_basic_input, DateKeyword, ParsedEvent};
