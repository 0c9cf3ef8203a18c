//! Schema construction errors

use std::path::PathBuf;

/// Why a schema could not be built or loaded.
///
/// These are programming or configuration mistakes, detected before any
/// record is validated. They never describe a bad input value.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A field was declared with an empty name.
    #[error("field name must not be empty")]
    EmptyFieldName,

    /// Two fields share a name.
    #[error("duplicate field `{name}`")]
    DuplicateField { name: String },

    /// A lower bound exceeds the upper bound, so no value could pass.
    #[error("field `{field}`: minimum {min} is greater than maximum {max}")]
    InvertedBounds {
        field: String,
        min: String,
        max: String,
    },

    /// A constraint that the field's kind does not support.
    #[error("field `{field}`: `{constraint}` does not apply to {kind} fields")]
    UnsupportedConstraint {
        field: String,
        constraint: &'static str,
        kind: &'static str,
    },

    /// A constraint value of the wrong shape, such as a fractional integer bound.
    #[error("field `{field}`: invalid `{constraint}`: {reason}")]
    InvalidConstraint {
        field: String,
        constraint: &'static str,
        reason: String,
    },

    /// A schema document is not valid JSON for the document format.
    #[error("invalid JSON schema document: {0}")]
    Json(#[from] serde_json::Error),

    /// A schema document is not valid TOML for the document format.
    #[error("invalid TOML schema document: {0}")]
    Toml(#[from] toml::de::Error),

    /// A schema document could not be read.
    #[error("cannot read schema document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema document path without a `.json` or `.toml` extension.
    #[error("unsupported schema document format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}
