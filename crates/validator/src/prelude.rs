//! Prelude module for convenient imports.
//!
//! Provides a single `use warden_validator::prelude::*;` import that brings
//! in the field kinds, the schema types and the engine.
//!
//! # Examples
//!
//! ```
//! use warden_validator::prelude::*;
//!
//! let registry = SchemaRegistry::builder()
//!     .field("homepage", UrlField::new().optional())
//!     .build()
//!     .unwrap();
//! assert!(registry.validate(&RawInput::new()).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Core trait and errors
// ============================================================================

pub use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS: Single-value checks
// ============================================================================

pub use crate::validators::{
    Email, Max, MaxLength, Min, MinLength, Url, email, max, max_length, min, min_length, url,
};

// ============================================================================
// FIELDS: Field kinds and rules
// ============================================================================

pub use crate::field::{
    BooleanField, Clean, EmailField, FieldKind, FieldKindExt, FieldRule, FloatField,
    IntegerField, TextField, UrlField,
};

// ============================================================================
// SCHEMA AND ENGINE
// ============================================================================

pub use crate::engine::{FieldError, NotValidatedError, ValidationEngine, ValidationOutcome};
pub use crate::schema::{Schema, SchemaDocument, SchemaError, SchemaRegistry};
pub use crate::value::{RawInput, Record, Value, ValueKind};
