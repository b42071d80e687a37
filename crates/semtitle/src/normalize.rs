//! Title normalization command.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use semtitle_commit::CommitInput;
use semtitle_config::{Config, find_and_load_config, load_config};
use semtitle_core::{NormalizationOutcome, Pipeline};

use crate::cli::{Cli, OutputFormat};

/// Runs the normalization and prints the outcome.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = resolve_config(cli.config.as_deref())?;
    let commits = parse_commits(cli.commits.as_deref())?;
    let branch = cli.branch.as_deref().unwrap_or_default();

    let outcome = Pipeline::new(config).process(&cli.title, &commits, branch);
    println!("{}", render(&outcome, cli.output)?);

    if cli.check && outcome.changed {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Loads the explicit configuration file, or discovers one, or falls back
/// to defaults when none exists.
fn resolve_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }

    match find_and_load_config() {
        Ok(config) => Ok(config),
        Err(err) if err.is_not_found() => {
            debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
        Err(err) => Err(err).context("failed to load configuration"),
    }
}

/// Parses the commits argument; an absent or empty argument means no commits.
fn parse_commits(json: Option<&str>) -> Result<Vec<CommitInput>> {
    match json {
        None | Some("") => Ok(Vec::new()),
        Some(json) => serde_json::from_str(json).context("invalid commits JSON"),
    }
}

fn render(outcome: &NormalizationOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(outcome).context("failed to serialize outcome")
        }
        OutputFormat::Title => Ok(outcome.new_title.clone()),
    }
}
