//! CLI definition.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::normalize;

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON outcome
    Json,
    /// The new title only
    Title,
}

/// Normalize pull request titles to conventional commit format.
#[derive(Debug, Parser)]
#[command(name = "semtitle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Current pull request title (use `--` before a title starting with `-`)
    pub title: String,

    /// Commits as a JSON array of strings, {"message": ...} or {"commit": {"message": ...}}
    pub commits: Option<String>,

    /// Branch name of the pull request
    pub branch: Option<String>,

    /// Configuration file (default: semtitle.toml in the current directory or a parent)
    #[arg(short, long, env = "SEMTITLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    /// Exit with status 1 when the title would change
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<ExitCode> {
        normalize::run(&self)
    }
}
