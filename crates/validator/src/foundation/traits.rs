//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A single check over an already-typed input.
///
/// Field rules are built out of these: the rule resolves the raw value to
/// the right Rust type and then runs each configured check in order.
///
/// # Examples
///
/// ```
/// use warden_validator::foundation::{ErrorKind, Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new(ErrorKind::InvalidFormat, "No spaces allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("alice").is_ok());
/// assert!(NoSpaces.validate("a b").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate> Validate for Option<V> {
    type Input = V::Input;

    /// An unset optional check always passes.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self {
            Some(validator) => validator.validate(input),
            None => Ok(()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
