//! Event normalization.
//!
//! Turns loosely-typed event records (missing fields, relative dates,
//! free-text durations) into validated [`NormalizedEvent`]s.

mod normalizer;
mod raw;

pub use normalizer::{EventNormalizer, NormalizeError, NormalizedEvent};
pub use raw::{DurationInput, ParticipantsInput, RawEvent};
