//! Layered settings: defaults, then `warden.toml`, then `WARDEN_*`
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::cli::{CheckArgs, OutputFormat};

const DEFAULT_FILE: &str = "warden.toml";

/// Environment keys read with the `WARDEN_` prefix. `WARDEN_LOG` and
/// `WARDEN_LOG_FORMAT` belong to logging and are not settings.
const ENV_KEYS: &[&str] = &["schema", "output"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Schema document used when `--schema` is not given.
    pub schema: Option<PathBuf>,
    #[serde(default)]
    pub output: OutputFormat,
}

/// Values given on the command line; unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<OutputFormat>,
}

impl Settings {
    /// Resolves settings for a `check` run.
    ///
    /// An explicitly named settings file must exist; the default
    /// `warden.toml` is optional.
    pub fn load(config: Option<&Path>, args: &CheckArgs) -> anyhow::Result<Self> {
        let file = match config {
            Some(path) if !path.is_file() => {
                bail!("settings file {} does not exist", path.display())
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_FILE),
        };

        let overrides = Overrides {
            schema: args.schema.clone(),
            output: args.output,
        };

        Self::figment(&file, overrides)
            .extract()
            .with_context(|| format!("invalid settings (file: {})", file.display()))
    }

    fn figment(file: &Path, overrides: Overrides) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("WARDEN_").only(ENV_KEYS))
            .merge(Serialized::defaults(overrides))
    }
}
