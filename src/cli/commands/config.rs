//! Config command implementation.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigCommands;
use crate::config::{Config, Paths};
use crate::error::PlannerError;

/// Execute a config subcommand.
///
/// `config_path` is the file in use; `None` means the default location.
///
/// # Errors
///
/// Returns an error if the config cannot be read or written.
pub fn config(command: &ConfigCommands, config: &Config, config_path: Option<&Path>) -> Result<String, PlannerError> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };

    match command {
        ConfigCommands::Show => config.to_yaml(),
        ConfigCommands::Path => Ok(path.display().to_string()),
        ConfigCommands::Init { force } => init(&path, *force),
    }
}

fn default_config_path() -> Result<PathBuf, PlannerError> {
    let paths = Paths::new()?;
    paths.ensure_dirs()?;
    Ok(paths.config_file)
}

fn init(path: &Path, force: bool) -> Result<String, PlannerError> {
    if path.exists() && !force {
        return Err(PlannerError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to_path(path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(format!("Wrote {}", path.display()))
}
