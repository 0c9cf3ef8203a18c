//! Subscriber setup for the `warden` binary.
//!
//! Logs go to stderr so that reports on stdout stay machine-readable.

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// An `EnvFilter` directive string such as `warn` or `warden_validator=trace`.
    pub level: String,
    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: Format::Compact,
        }
    }
}

impl Config {
    /// Reads `WARDEN_LOG` (falling back to `RUST_LOG`) and `WARDEN_LOG_FORMAT`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = var("WARDEN_LOG").or_else(|| var("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = var("WARDEN_LOG_FORMAT") {
            config.format = match format.to_lowercase().as_str() {
                "pretty" => Format::Pretty,
                "json" => Format::Json,
                _ => Format::Compact,
            };
        }

        config
    }

    /// `-v` flags replace the level from the environment.
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let level = match verbose {
            0 => return self,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        level.clone_into(&mut self.level);
        self
    }

    /// Installs the global subscriber.
    pub fn init(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(&self.level)
            .with_context(|| format!("invalid log filter `{}`", self.level))?;
        let registry = tracing_subscriber::registry().with(filter);

        let result = match self.format {
            Format::Compact => registry
                .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
                .try_init(),
            Format::Pretty => registry
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init(),
            Format::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
        };
        result.context("failed to install log subscriber")
    }
}
