use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "autoplanner")]
#[command(about = "Turn free-text event descriptions into scheduled events")]
#[command(long_about = "autoplanner - free text to calendar events

Parses natural language like \"meeting tomorrow at 14:30 for 2 hours\" into
structured events, then normalizes and schedules them the same way the
planner backend does.

QUICK START:
  autoplanner parse \"meeting tomorrow at 14:30\"    Show the parsed fields
  autoplanner plan \"2 hour work session 9:00\"     Parse, normalize, schedule
  autoplanner payload \"lunch next friday\"         Show the normalize request
  autoplanner normalize --file events.json        Normalize raw events

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  autoplanner <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    #[arg(long, global = true, env = "AUTOPLANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse free text into event fields
    ///
    /// Runs the basic keyword parser only; nothing is normalized.
    ///
    /// # Examples
    ///
    ///   autoplanner parse "meeting tomorrow at 14:30"
    ///   autoplanner parse "2 hour work session" -o json
    ///
    /// # Supported Patterns
    ///
    ///   Dates:      tomorrow, 明天, 后天, next week, next monday, next friday
    ///   Times:      9:30, 14:30
    ///   Durations:  2 hour(s), hour, 30 min
    ///   Categories: meeting, work, personal
    #[command(alias = "p")]
    Parse(TextArgs),

    /// Show the normalize request built from free text
    ///
    /// Prints the endpoint and the `{ "events": [...] }` body that would be
    /// posted to the backend. All-day events carry a 00:00 start and a
    /// 1440 minute duration.
    Payload(TextArgs),

    /// Normalize raw event records
    ///
    /// Reads a JSON array of events, or an object with an `events` array,
    /// from a file or stdin. Each event is validated on its own; failures
    /// are reported next to the successes.
    ///
    /// # Examples
    ///
    ///   autoplanner normalize --file events.json
    ///   echo '[{"title": "Sync", "date": "tomorrow"}]' | autoplanner normalize
    ///   autoplanner normalize --file events.json --schedule
    #[command(alias = "n")]
    Normalize(NormalizeArgs),

    /// Parse, normalize and schedule free text
    ///
    /// # Examples
    ///
    ///   autoplanner plan "meeting tomorrow at 14:30 for 2 hours"
    ///   autoplanner plan "personal errand next friday" --today 2024-12-11
    Plan(PlanArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Example: autoplanner completions zsh > ~/.zsh/completions/_autoplanner
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct TextArgs {
    /// Event description, e.g. "meeting tomorrow at 14:30"
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TextArgs {
    /// The words of the description joined back into one string.
    #[must_use]
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// JSON file with the raw events (reads stdin when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Also schedule the normalized events
    #[arg(short, long)]
    pub schedule: bool,

    /// Date relative keywords resolve against (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Date relative keywords resolve against (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_joins_words() {
        let cli = Cli::try_parse_from(["autoplanner", "parse", "meeting", "tomorrow", "at", "14:30"]).unwrap();
        match cli.command {
            Commands::Parse(args) => assert_eq!(args.joined(), "meeting tomorrow at 14:30"),
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::try_parse_from(["autoplanner", "plan", "lunch", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_parse_requires_text() {
        assert!(Cli::try_parse_from(["autoplanner", "parse"]).is_err());
    }
}
