//! Event scheduling.
//!
//! Maps normalized events to concrete start times and durations, and runs
//! the whole text-to-event pipeline.

mod pipeline;
mod scheduler;

pub use pipeline::plan_text;
pub use scheduler::{schedule_batch, schedule_event, ScheduledEvent};
