use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use autoplanner::cli::args::{Cli, Commands};
use autoplanner::cli::commands;
use autoplanner::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("AUTOPLANNER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match &cli.command {
        Commands::Parse(args) => commands::parse(args, format)?,
        Commands::Payload(args) => commands::payload(&config, args)?,
        Commands::Normalize(args) => commands::normalize(&config, args, format)?,
        Commands::Plan(args) => commands::plan(&config, args, format)?,
        Commands::Config(args) => commands::config(&args.command, &config, cli.config.as_deref())?,
        Commands::Completions { shell } => commands::completions(*shell)?,
    };

    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    Ok(())
}
