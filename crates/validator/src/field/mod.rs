//! Field rules
//!
//! A [`FieldRule`] is one entry of a schema: a [`FieldKind`] with its
//! constraints, plus the policy shared by every kind:
//!
//! - absent or null and optional: succeeds with [`Value::Null`], nothing else is checked
//! - absent or null and required: fails with `MissingRequired`
//! - otherwise the kind checks the type, then its constraints, then its format
//!
//! # Examples
//!
//! ```
//! use warden_validator::prelude::*;
//!
//! let rule = FieldRule::new(TextField::new().max_length(20).min_length(3));
//! assert_eq!(rule.validate(&Value::from("alice")).unwrap(), Value::from("alice"));
//! assert_eq!(rule.validate(&Value::Null).unwrap_err().kind, ErrorKind::MissingRequired);
//!
//! let nickname = TextField::new().optional();
//! assert_eq!(nickname.validate(&Value::Null).unwrap(), Value::Null);
//! ```

mod boolean;
mod format;
mod number;
mod text;

pub use boolean::BooleanField;
pub use format::{EmailField, UrlField};
pub use number::{FloatField, IntegerField};
pub use text::TextField;

use crate::foundation::ValidationError;
use crate::value::Value;

// ============================================================================
// CLEAN TRAIT
// ============================================================================

/// Turns a present, non-null raw value into the typed value of a field kind.
pub trait Clean {
    /// Checks type, constraints and format, returning the cleaned value.
    fn clean(&self, value: &Value) -> Result<Value, ValidationError>;
}

// ============================================================================
// FIELD KIND
// ============================================================================

/// The kind of a field together with its kind-specific constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text(TextField),
    Integer(IntegerField),
    Float(FloatField),
    Boolean(BooleanField),
    Email(EmailField),
    Url(UrlField),
}

impl FieldKind {
    /// Lower-case kind name, as used in schema documents.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Email(_) => "email",
            Self::Url(_) => "url",
        }
    }

    /// Returns `(min, max)` when the lower constraint exceeds the upper one,
    /// meaning no value could ever pass.
    #[must_use]
    pub fn inverted_bounds(&self) -> Option<(String, String)> {
        fn check<T: PartialOrd + ToString>(
            min: Option<T>,
            max: Option<T>,
        ) -> Option<(String, String)> {
            match (min, max) {
                (Some(min), Some(max)) if min > max => Some((min.to_string(), max.to_string())),
                _ => None,
            }
        }

        match self {
            Self::Text(f) => check(f.min_length, f.max_length),
            Self::Integer(f) => check(f.min, f.max),
            Self::Float(f) => check(f.min, f.max),
            Self::Boolean(_) => None,
            Self::Email(f) => check(Some(format::IMPLICIT_MIN_LENGTH), f.max_length),
            Self::Url(f) => check(Some(format::IMPLICIT_MIN_LENGTH), f.max_length),
        }
    }
}

impl Clean for FieldKind {
    fn clean(&self, value: &Value) -> Result<Value, ValidationError> {
        match self {
            Self::Text(f) => f.clean(value),
            Self::Integer(f) => f.clean(value),
            Self::Float(f) => f.clean(value),
            Self::Boolean(f) => f.clean(value),
            Self::Email(f) => f.clean(value),
            Self::Url(f) => f.clean(value),
        }
    }
}

// ============================================================================
// FIELD RULE
// ============================================================================

/// A field kind plus the required flag and an optional display name.
///
/// Rules are immutable once placed in a registry.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    kind: FieldKind,
    required: bool,
    display_name: Option<String>,
}

impl FieldRule {
    /// Creates a required rule without a display name.
    pub fn new(kind: impl Into<FieldKind>) -> Self {
        Self {
            kind: kind.into(),
            required: true,
            display_name: None,
        }
    }

    /// Marks the field as optional.
    pub fn optional(self) -> Self {
        self.required(false)
    }

    /// Sets whether the field must be present.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the name shown in error reports instead of the field name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Validates one raw value. [`Value::Null`] stands for "absent".
    pub fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        match value {
            Value::Null if self.required => Err(ValidationError::missing_required()),
            Value::Null => Ok(Value::Null),
            present => self.kind.clean(present),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_kind_conversions {
    ($($field:ident => $variant:ident),+ $(,)?) => {
        $(
            impl From<$field> for FieldKind {
                fn from(field: $field) -> Self {
                    Self::$variant(field)
                }
            }

            impl From<$field> for FieldRule {
                fn from(field: $field) -> Self {
                    Self::new(field)
                }
            }
        )+
    };
}

impl_kind_conversions! {
    TextField => Text,
    IntegerField => Integer,
    FloatField => Float,
    BooleanField => Boolean,
    EmailField => Email,
    UrlField => Url,
}

impl From<FieldKind> for FieldRule {
    fn from(kind: FieldKind) -> Self {
        Self::new(kind)
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Shortcuts for turning a bare field kind into a configured [`FieldRule`].
///
/// Automatically implemented for every field kind.
pub trait FieldKindExt: Into<FieldKind> + Sized {
    /// An optional rule for this kind.
    fn optional(self) -> FieldRule {
        FieldRule::new(self).optional()
    }

    /// A required rule for this kind with a display name.
    fn with_display_name(self, name: impl Into<String>) -> FieldRule {
        FieldRule::new(self).with_display_name(name)
    }
}

impl<K: Into<FieldKind>> FieldKindExt for K {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn required_absent_fails() {
        let err = FieldRule::new(IntegerField::new()).validate(&Value::Null).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingRequired);
        assert_eq!(err.message, "This field is required");
    }

    #[test]
    fn optional_absent_skips_constraints() {
        let rule = TextField::new().min_length(100).optional();
        assert_eq!(rule.validate(&Value::Null).unwrap(), Value::Null);
        // present values are still checked
        assert!(rule.validate(&Value::from("short")).is_err());
    }

    #[test]
    fn display_name_builder() {
        let rule = EmailField::new().with_display_name("Contact email");
        assert_eq!(rule.display_name(), Some("Contact email"));
        assert!(rule.is_required());
        assert_eq!(rule.kind().name(), "email");
    }

    #[test]
    fn inverted_bounds_detected() {
        assert_eq!(
            FieldKind::from(TextField::new().min_length(10).max_length(5)).inverted_bounds(),
            Some(("10".to_owned(), "5".to_owned()))
        );
        assert!(
            FieldKind::from(IntegerField::new().range(1, 1))
                .inverted_bounds()
                .is_none()
        );
        assert!(
            FieldKind::from(UrlField::new().max_length(4))
                .inverted_bounds()
                .is_some()
        );
        assert!(FieldKind::from(BooleanField::new()).inverted_bounds().is_none());
    }
}
