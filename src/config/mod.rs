//! Configuration management for autoplanner.
//!
//! This module handles loading and saving configuration from `~/.autoplanner/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, NormalizeConfig, ServerConfig};
