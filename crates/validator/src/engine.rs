//! The validation engine
//!
//! A run evaluates every field of a [`SchemaRegistry`] against one raw
//! record, in declaration order, and never stops at the first failure.
//! Its [`ValidationOutcome`] holds either the complete cleaned record or
//! the complete list of field errors, never a mix.

use std::fmt;

use serde::Serialize;

use crate::field::FieldRule;
use crate::foundation::{ErrorKind, ValidationError};
use crate::schema::SchemaRegistry;
use crate::value::{RawInput, Record, Value};

static ABSENT: Value = Value::Null;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// One rejected field, as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field_name: String,
    /// The rule's display name, or the field name when none was set.
    pub display_name: String,
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field_name: &str, rule: &FieldRule, error: ValidationError) -> Self {
        Self {
            field_name: field_name.to_owned(),
            display_name: rule.display_name().unwrap_or(field_name).to_owned(),
            kind: error.kind,
            message: error.message.into_owned(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name, self.message)
    }
}

// ============================================================================
// NOT VALIDATED ERROR
// ============================================================================

/// Cleaned data was requested from an engine that cannot provide it.
///
/// This is a usage error, distinct from the field errors of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotValidatedError {
    /// `is_valid` has not been called yet.
    #[error("validation has not been run")]
    NotRun,

    /// The run rejected at least one field.
    #[error("validation failed with {error_count} field error(s)")]
    Failed { error_count: usize },
}

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Every field passed. Holds one entry per declared field, absent
    /// optional fields included as `Null`.
    Valid { cleaned: Record },
    /// At least one field failed. Errors are in declaration order.
    Invalid { errors: Vec<FieldError> },
}

impl ValidationOutcome {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    #[must_use]
    pub const fn cleaned(&self) -> Option<&Record> {
        match self {
            Self::Valid { cleaned } => Some(cleaned),
            Self::Invalid { .. } => None,
        }
    }

    /// Field errors; empty for a valid outcome.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid { .. } => &[],
            Self::Invalid { errors } => errors.as_slice(),
        }
    }

    pub fn into_result(self) -> Result<Record, Vec<FieldError>> {
        match self {
            Self::Valid { cleaned } => Ok(cleaned),
            Self::Invalid { errors } => Err(errors),
        }
    }
}

/// Evaluates every field of `registry` against `input`.
///
/// A missing key and an explicit null are the same thing. Keys in `input`
/// that the registry does not declare are ignored.
#[must_use]
pub fn run(registry: &SchemaRegistry, input: &RawInput) -> ValidationOutcome {
    let _span = tracing::debug_span!(
        "validate",
        schema = registry.name().unwrap_or("<anonymous>"),
        fields = registry.len()
    )
    .entered();

    let mut cleaned = Record::with_capacity(registry.len());
    let mut errors = Vec::new();

    for (name, rule) in registry.iter() {
        let raw = input.get(name).unwrap_or(&ABSENT);
        match rule.validate(raw) {
            Ok(value) => {
                tracing::trace!(field = name, "field accepted");
                cleaned.insert(name.to_owned(), value);
            }
            Err(error) => {
                tracing::trace!(field = name, kind = %error.kind, "field rejected");
                errors.push(FieldError::new(name, rule, error));
            }
        }
    }

    tracing::debug!(errors = errors.len(), "validation finished");

    if errors.is_empty() {
        ValidationOutcome::Valid { cleaned }
    } else {
        ValidationOutcome::Invalid { errors }
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// One record bound to a registry, validated at most once.
///
/// ```
/// use warden_validator::prelude::*;
///
/// let registry = SchemaRegistry::builder()
///     .field("age", IntegerField::new().min(18))
///     .build()
///     .unwrap();
///
/// let mut engine = ValidationEngine::new(&registry, warden_validator::record! { "age" => 12 });
/// assert_eq!(engine.data(), Err(NotValidatedError::NotRun));
/// assert!(!engine.is_valid());
/// assert_eq!(engine.errors()[0].message, "Value is too small");
/// assert_eq!(engine.data(), Err(NotValidatedError::Failed { error_count: 1 }));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationEngine<'s> {
    registry: &'s SchemaRegistry,
    input: RawInput,
    outcome: Option<ValidationOutcome>,
}

impl<'s> ValidationEngine<'s> {
    pub fn new(registry: &'s SchemaRegistry, input: impl Into<RawInput>) -> Self {
        Self {
            registry,
            input: input.into(),
            outcome: None,
        }
    }

    /// Runs validation on first call and reports whether every field passed.
    /// Later calls return the cached answer.
    pub fn is_valid(&mut self) -> bool {
        self.outcome
            .get_or_insert_with(|| run(self.registry, &self.input))
            .is_valid()
    }

    /// The cleaned record of a successful run.
    ///
    /// # Errors
    ///
    /// [`NotValidatedError::NotRun`] before [`is_valid`](Self::is_valid) was
    /// called, [`NotValidatedError::Failed`] after a failed run.
    pub fn data(&self) -> Result<&Record, NotValidatedError> {
        match &self.outcome {
            None => Err(NotValidatedError::NotRun),
            Some(ValidationOutcome::Valid { cleaned }) => Ok(cleaned),
            Some(ValidationOutcome::Invalid { errors }) => Err(NotValidatedError::Failed {
                error_count: errors.len(),
            }),
        }
    }

    /// Field errors of the run; empty before a run and after a valid one.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        match &self.outcome {
            Some(outcome) => outcome.errors(),
            None => &[],
        }
    }

    #[must_use]
    pub const fn input(&self) -> &RawInput {
        &self.input
    }

    #[must_use]
    pub const fn registry(&self) -> &'s SchemaRegistry {
        self.registry
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&ValidationOutcome> {
        self.outcome.as_ref()
    }

    /// Consumes the engine, running validation if it has not run yet.
    #[must_use]
    pub fn into_outcome(self) -> ValidationOutcome {
        match self.outcome {
            Some(outcome) => outcome,
            None => run(self.registry, &self.input),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
