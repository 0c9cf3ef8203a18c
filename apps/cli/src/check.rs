//! The `check` subcommand.

use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, bail};
use warden_validator::json::{raw_input_from_json, record_to_json};
use warden_validator::prelude::*;

use crate::cli::OutputFormat;
use crate::settings::Settings;

/// Records read from one input document.
#[derive(Debug)]
pub enum Records {
    /// The document was a single object.
    One(RawInput),
    /// The document was an array of objects.
    Many(Vec<RawInput>),
}

impl Records {
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let json: serde_json::Value =
            serde_json::from_str(source).context("input is not valid JSON")?;

        match json {
            serde_json::Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    raw_input_from_json(item).with_context(|| format!("record {i}"))
                })
                .collect::<anyhow::Result<_>>()
                .map(Self::Many),
            other => Ok(Self::One(raw_input_from_json(other)?)),
        }
    }

    fn as_slice(&self) -> &[RawInput] {
        match self {
            Self::One(input) => std::slice::from_ref(input),
            Self::Many(inputs) => inputs,
        }
    }
}

/// Validates every record and writes the report. Returns `true` when all
/// records are valid.
pub fn run(settings: &Settings, input: &str, out: &mut impl Write) -> anyhow::Result<bool> {
    let Some(schema) = &settings.schema else {
        bail!("no schema given; pass --schema or set `schema` in warden.toml");
    };

    let registry = SchemaRegistry::from_path(schema)
        .with_context(|| format!("failed to load schema {}", schema.display()))?;
    let records = Records::parse(&read_input(input)?)?;

    let outcomes: Vec<ValidationOutcome> = records
        .as_slice()
        .iter()
        .map(|record| registry.validate(record))
        .collect();
    let invalid = outcomes.iter().filter(|o| !o.is_valid()).count();

    tracing::info!(
        schema = %schema.display(),
        records = outcomes.len(),
        invalid,
        "check finished"
    );

    match settings.output {
        OutputFormat::Text => write_text(&outcomes, out)?,
        OutputFormat::Json => write_json(&records, &outcomes, out)?,
    }

    Ok(invalid == 0)
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read input from stdin")?;
        return Ok(source);
    }

    let path = Path::new(input);
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input {}", path.display()))
}

fn write_text(outcomes: &[ValidationOutcome], out: &mut impl Write) -> io::Result<()> {
    for (i, outcome) in outcomes.iter().enumerate() {
        match outcome {
            ValidationOutcome::Valid { cleaned } => {
                writeln!(out, "record {i}: valid {}", record_to_json(cleaned))?;
            }
            ValidationOutcome::Invalid { errors } => {
                writeln!(out, "record {i}: invalid")?;
                for error in errors {
                    writeln!(out, "  {error}")?;
                }
            }
        }
    }
    Ok(())
}

fn write_json(
    records: &Records,
    outcomes: &[ValidationOutcome],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let report = match records {
        Records::One(_) => serde_json::to_value(&outcomes[0])?,
        Records::Many(_) => serde_json::to_value(outcomes)?,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
