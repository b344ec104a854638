//! Free-text commands: `parse`, `payload` and `plan`.

use crate::cli::args::{OutputFormat, PlanArgs, TextArgs};
use crate::config::Config;
use crate::error::PlannerError;
use crate::features::nlp::parse_basic_input;
use crate::features::normalize::EventNormalizer;
use crate::features::schedule::plan_text;
use crate::features::submit::{Endpoints, SubmissionRequest};
use crate::output::{format_parsed_event, format_scheduled_event, format_submission_json};

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(args: &TextArgs, format: OutputFormat) -> Result<String, PlannerError> {
    let event = parse_basic_input(&args.joined());
    format_parsed_event(&event, format)
}

/// Execute the payload command.
///
/// The request is always rendered as JSON, since that is what gets posted.
///
/// # Errors
///
/// Returns an error if the text is empty or serialization fails.
pub fn payload(config: &Config, args: &TextArgs) -> Result<String, PlannerError> {
    let text = args.joined();
    if text.trim().is_empty() {
        return Err(PlannerError::EmptyInput);
    }

    let endpoints = Endpoints::new(&config.server.base_url);
    let request = SubmissionRequest::single(parse_basic_input(&text).to_submission());
    format_submission_json(&endpoints.normalize(), &request)
}

/// Execute the plan command.
///
/// # Errors
///
/// Returns an error if the text is empty, `--today` is malformed, or the
/// parsed event fails normalization.
pub fn plan(config: &Config, args: &PlanArgs, format: OutputFormat) -> Result<String, PlannerError> {
    let today = super::resolve_today(args.today.as_deref())?;
    let normalizer = EventNormalizer::from_config(&config.normalize);
    let event = plan_text(&args.text.joined(), &normalizer, today)?;
    format_scheduled_event(&event, format)
}
