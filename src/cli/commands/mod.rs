//! Command implementations for autoplanner.
//!
//! This module contains the implementation of all CLI commands.

mod config;
mod normalize;
mod plan;

pub use config::config;
pub use normalize::normalize;
pub use plan::{parse, payload, plan};

use chrono::{Local, NaiveDate};
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PlannerError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PlannerError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "autoplanner", &mut buf);
    String::from_utf8(buf).map_err(|e| PlannerError::InvalidArgument(format!("UTF-8 error: {e}")))
}

/// Resolve the `--today` override, defaulting to the local date.
fn resolve_today(today: Option<&str>) -> Result<NaiveDate, PlannerError> {
    today.map_or_else(
        || Ok(Local::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map_err(|e| PlannerError::InvalidArgument(format!("--today {s}: {e}")))
        },
    )
}
