//! Command-line arguments

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Validate JSON records against a warden schema.
#[derive(Parser, Debug)]
#[command(name = "warden", version, about, long_about = None)]
pub struct Cli {
    /// Settings file. Defaults to `warden.toml` in the current directory, if present.
    #[arg(long, global = true, env = "WARDEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv). Overrides WARDEN_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one record, or an array of records, against a schema.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema document (`.json` or `.toml`).
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Input file holding a JSON object or array of objects; `-` reads stdin.
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Report format.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// How the check report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per record, followed by its field errors.
    #[default]
    Text,
    /// The validation outcomes as JSON.
    Json,
}
