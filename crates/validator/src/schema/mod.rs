//! Schema registries
//!
//! A [`SchemaRegistry`] is the ordered, immutable set of field rules that
//! every record is validated against. Build one with
//! [`SchemaRegistry::builder`], load one from a [`SchemaDocument`], or
//! declare a type with [`schema!`](crate::schema!) that owns a static one.
//!
//! ```
//! use warden_validator::prelude::*;
//!
//! let registry = SchemaRegistry::builder()
//!     .field("username", TextField::new().max_length(20).min_length(3))
//!     .field("age", IntegerField::new().range(18, 100))
//!     .build()
//!     .unwrap();
//!
//! let outcome = registry.validate(&warden_validator::record! {
//!     "username" => "alice",
//!     "age" => 17,
//! });
//! assert_eq!(outcome.errors()[0].field_name, "age");
//! ```

mod document;
mod error;

pub use document::{Bound, FieldDocument, KindName, SchemaDocument};
pub use error::SchemaError;

use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::engine::{self, ValidationEngine, ValidationOutcome};
use crate::field::FieldRule;
use crate::value::RawInput;

// ============================================================================
// REGISTRY
// ============================================================================

/// Ordered mapping from field name to [`FieldRule`].
///
/// Iteration order is declaration order, which is the order fields are
/// evaluated and errors reported in. A registry is `Send + Sync` and can be
/// shared by any number of concurrent runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaRegistry {
    name: Option<String>,
    fields: IndexMap<String, FieldRule>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Builds a registry from a parsed schema document.
    pub fn from_document(document: &SchemaDocument) -> Result<Self, SchemaError> {
        let mut builder = Self::builder();
        if let Some(name) = &document.name {
            builder = builder.name(name.clone());
        }
        for field in &document.fields {
            builder = builder.field(field.name.clone(), field.to_rule()?);
        }
        builder.build()
    }

    /// Loads a JSON or TOML schema document and builds a registry from it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        Self::from_document(&SchemaDocument::load(path)?)
    }

    /// Optional label given at build time.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// The name shown for a field in error reports: its display name when
    /// one was set, the field name otherwise.
    #[must_use]
    pub fn display_name_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.fields
            .get(field)
            .and_then(FieldRule::display_name)
            .unwrap_or(field)
    }

    /// Runs every field rule against `input`.
    #[must_use]
    pub fn validate(&self, input: &RawInput) -> ValidationOutcome {
        engine::run(self, input)
    }

    /// Creates an engine for one record; nothing runs until it is asked.
    pub fn validator(&self, input: impl Into<RawInput>) -> ValidationEngine<'_> {
        ValidationEngine::new(self, input)
    }
}

impl<'a> IntoIterator for &'a SchemaRegistry {
    type Item = (&'a String, &'a FieldRule);
    type IntoIter = indexmap::map::Iter<'a, String, FieldRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects field declarations and checks them once, in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    name: Option<String>,
    fields: Vec<(String, FieldRule)>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a field. Accepts a bare field kind or a configured [`FieldRule`].
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<FieldRule>) -> Self {
        self.fields.push((name.into(), rule.into()));
        self
    }

    /// Checks names and bounds and freezes the registry.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::EmptyFieldName`] for a field named `""`
    /// - [`SchemaError::DuplicateField`] when a name is used twice
    /// - [`SchemaError::InvertedBounds`] when a minimum exceeds its maximum
    pub fn build(self) -> Result<SchemaRegistry, SchemaError> {
        let mut fields = IndexMap::with_capacity(self.fields.len());

        for (name, rule) in self.fields {
            if name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if let Some((min, max)) = rule.kind().inverted_bounds() {
                return Err(SchemaError::InvertedBounds {
                    field: name,
                    min,
                    max,
                });
            }
            match fields.entry(name) {
                Entry::Occupied(entry) => {
                    return Err(SchemaError::DuplicateField {
                        name: entry.key().clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(rule);
                }
            }
        }

        tracing::debug!(
            schema = self.name.as_deref().unwrap_or("<anonymous>"),
            fields = fields.len(),
            "schema registry built"
        );

        Ok(SchemaRegistry {
            name: self.name,
            fields,
        })
    }
}

// ============================================================================
// SCHEMA TRAIT
// ============================================================================

/// A type with a fixed, process-wide registry.
///
/// Usually implemented with [`schema!`](crate::schema!): declare the schema
/// once, then create a validator per record.
pub trait Schema {
    /// The registry shared by every run of this schema.
    fn registry() -> &'static SchemaRegistry;

    /// Creates an engine for one record.
    fn validator(input: impl Into<RawInput>) -> ValidationEngine<'static> {
        ValidationEngine::new(Self::registry(), input)
    }

    /// Validates one record immediately.
    fn validate(input: &RawInput) -> ValidationOutcome {
        Self::registry().validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
