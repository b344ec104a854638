//! Submission records for the normalize/schedule pipeline.

mod payload;

pub use payload::{Endpoints, SubmissionEvent, SubmissionRequest, ALL_DAY_MINUTES, ALL_DAY_START};
