//! Error types for field validation failures
//!
//! A [`ValidationError`] is the expected, recoverable outcome of a field rule
//! rejecting a value. It carries a machine-readable [`ErrorKind`], a
//! human-readable message and a small set of ordered parameters.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The category of a field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required value was absent or null.
    MissingRequired,
    /// The value has the wrong type for the field.
    TypeMismatch,
    /// Text is longer than `max_length` characters.
    TooLong,
    /// Text is shorter than `min_length` characters.
    TooShort,
    /// A number falls outside the inclusive `min..=max` bounds.
    OutOfRange,
    /// The value does not match the expected format.
    InvalidFormat,
}

impl ErrorKind {
    /// Stable code used in serialized reports and logs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingRequired => "missing_required",
            Self::TypeMismatch => "type_mismatch",
            Self::TooLong => "too_long",
            Self::TooShort => "too_short",
            Self::OutOfRange => "out_of_range",
            Self::InvalidFormat => "invalid_format",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured field validation error.
///
/// # Examples
///
/// ```
/// use warden_validator::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::too_short(10, 5);
/// assert_eq!(error.kind, ErrorKind::TooShort);
/// assert_eq!(error.message, "Value is too short");
/// assert_eq!(error.param("min"), Some("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Failure category.
    pub kind: ErrorKind,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Parameters describing the failure.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    /// Example: `[("min", "5"), ("actual", "3")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "missing_required" error.
    pub fn missing_required() -> Self {
        Self::new(ErrorKind::MissingRequired, "This field is required")
    }

    /// Creates a "type_mismatch" error.
    ///
    /// `message` is shown to users; `expected` and `actual` are type names.
    pub fn type_mismatch(
        message: impl Into<Cow<'static, str>>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::new(ErrorKind::TypeMismatch, message)
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates a "too_long" error.
    pub fn too_long(max: usize, actual: usize) -> Self {
        Self::new(ErrorKind::TooLong, "Value is too long")
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "too_short" error.
    pub fn too_short(min: usize, actual: usize) -> Self {
        Self::new(ErrorKind::TooShort, "Value is too short")
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "out_of_range" error for a value above `max`.
    pub fn too_large<T: fmt::Display>(max: T, actual: T) -> Self {
        Self::new(ErrorKind::OutOfRange, "Value is too large")
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "out_of_range" error for a value below `min`.
    pub fn too_small<T: fmt::Display>(min: T, actual: T) -> Self {
        Self::new(ErrorKind::OutOfRange, "Value is too small")
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(
        message: impl Into<Cow<'static, str>>,
        expected: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::InvalidFormat, message).with_param("expected", expected)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new(ErrorKind::InvalidFormat, "Value invalid");
        assert_eq!(error.kind, ErrorKind::InvalidFormat);
        assert_eq!(error.message, "Value invalid");
        assert!(error.params.is_empty());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::too_small(18, 10);

        assert_eq!(error.kind, ErrorKind::OutOfRange);
        assert_eq!(error.param("min"), Some("18"));
        assert_eq!(error.param("actual"), Some("10"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_display() {
        let error = ValidationError::too_long(20, 25);
        assert_eq!(
            error.to_string(),
            "too_long: Value is too long (params: [max=20, actual=25])"
        );
        assert_eq!(
            ValidationError::missing_required().to_string(),
            "missing_required: This field is required"
        );
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ErrorKind::MissingRequired.code(), "missing_required");
        assert_eq!(ErrorKind::OutOfRange.to_string(), "out_of_range");
        assert_eq!(
            serde_json::to_value(ErrorKind::TooShort).unwrap(),
            serde_json::json!("too_short")
        );
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::missing_required();
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
