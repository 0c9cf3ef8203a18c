//! Serializable schema documents
//!
//! A schema can be declared in a JSON or TOML file instead of in code:
//!
//! ```toml
//! name = "sign-up"
//!
//! [[fields]]
//! name = "username"
//! type = "text"
//! max_length = 20
//! min_length = 3
//!
//! [[fields]]
//! name = "age"
//! type = "integer"
//! min = 18
//! max = 100
//! ```
//!
//! Unknown keys are rejected, as are constraints the field's kind does not
//! support, so a typo never silently disables a check.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::field::{
    BooleanField, EmailField, FieldKind, FieldRule, FloatField, IntegerField, TextField, UrlField,
};
use crate::schema::SchemaError;

/// A whole schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaDocument {
    /// Optional label, used only in logs and reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field declarations, in evaluation order.
    pub fields: Vec<FieldDocument>,
}

/// One field declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: KindName,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<Bound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<Bound>,
}

const fn default_required() -> bool {
    true
}

/// The `type` discriminator of a field declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindName {
    Text,
    Integer,
    Float,
    Boolean,
    Email,
    Url,
}

impl KindName {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Email => "email",
            Self::Url => "url",
        }
    }
}

/// A numeric bound as written in the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Integer(i64),
    Float(f64),
}

impl SchemaDocument {
    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads a document, choosing the format by file extension
    /// (`.json` or `.toml`, case-insensitive).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, SchemaError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("toml") => Self::from_toml_str,
            _ => {
                return Err(SchemaError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }
}

impl FieldDocument {
    /// Converts the declaration into a field rule.
    ///
    /// Bounds are not compared here; the registry builder does that for
    /// every rule, however it was declared.
    pub fn to_rule(&self) -> Result<FieldRule, SchemaError> {
        let kind = match self.kind {
            KindName::Text => {
                self.reject_bounds()?;
                FieldKind::Text(TextField {
                    max_length: self.max_length,
                    min_length: self.min_length,
                })
            }
            KindName::Integer => {
                self.reject_lengths()?;
                FieldKind::Integer(IntegerField {
                    max: self.integer_bound("max", self.max)?,
                    min: self.integer_bound("min", self.min)?,
                })
            }
            KindName::Float => {
                self.reject_lengths()?;
                FieldKind::Float(FloatField {
                    max: self.max.map(Bound::as_f64),
                    min: self.min.map(Bound::as_f64),
                })
            }
            KindName::Boolean => {
                self.reject_lengths()?;
                self.reject_bounds()?;
                FieldKind::Boolean(BooleanField)
            }
            KindName::Email => {
                self.reject_min_length()?;
                self.reject_bounds()?;
                FieldKind::Email(EmailField {
                    max_length: self.max_length,
                })
            }
            KindName::Url => {
                self.reject_min_length()?;
                self.reject_bounds()?;
                FieldKind::Url(UrlField {
                    max_length: self.max_length,
                })
            }
        };

        let rule = FieldRule::new(kind).required(self.required);
        Ok(match &self.display_name {
            Some(display_name) => rule.with_display_name(display_name.clone()),
            None => rule,
        })
    }

    fn unsupported(&self, constraint: &'static str) -> SchemaError {
        SchemaError::UnsupportedConstraint {
            field: self.name.clone(),
            constraint,
            kind: self.kind.as_str(),
        }
    }

    fn reject_min_length(&self) -> Result<(), SchemaError> {
        match self.min_length {
            Some(_) => Err(self.unsupported("min_length")),
            None => Ok(()),
        }
    }

    fn reject_lengths(&self) -> Result<(), SchemaError> {
        if self.max_length.is_some() {
            return Err(self.unsupported("max_length"));
        }
        self.reject_min_length()
    }

    fn reject_bounds(&self) -> Result<(), SchemaError> {
        if self.max.is_some() {
            return Err(self.unsupported("max"));
        }
        if self.min.is_some() {
            return Err(self.unsupported("min"));
        }
        Ok(())
    }

    fn integer_bound(
        &self,
        constraint: &'static str,
        bound: Option<Bound>,
    ) -> Result<Option<i64>, SchemaError> {
        match bound {
            None => Ok(None),
            Some(Bound::Integer(n)) => Ok(Some(n)),
            Some(Bound::Float(n)) => Err(SchemaError::InvalidConstraint {
                field: self.name.clone(),
                constraint,
                reason: format!("expected an integer, found {n}"),
            }),
        }
    }
}

impl Bound {
    const fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(n) => n,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
