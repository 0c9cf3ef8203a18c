//! # warden CLI entry point
//!
//! Exit codes: 0 when every record is valid, 1 when any record is invalid,
//! 2 on usage, configuration or I/O errors.

use std::process::ExitCode;

use clap::Parser;

mod check;
mod cli;
mod logging;
mod settings;

use cli::{Cli, Command};
use settings::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::Config::from_env()
        .with_verbosity(cli.verbose)
        .init()
    {
        eprintln!("warden: {e:#}");
        return ExitCode::from(2);
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "warden starting");

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::debug!(error = ?e, "check aborted");
            eprintln!("warden: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Check(args) => {
            let settings = Settings::load(cli.config.as_deref(), &args)?;
            let stdout = std::io::stdout();
            check::run(&settings, &args.input, &mut stdout.lock())
        }
    }
}
