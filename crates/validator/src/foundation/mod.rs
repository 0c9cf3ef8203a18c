//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//!
//! Checks are generic over their input type, so a length check can only be
//! applied to text and a bound check only to a comparable number:
//!
//! ```
//! use warden_validator::foundation::Validate;
//! use warden_validator::validators::{max, min_length};
//!
//! assert!(min_length(5).validate("hello").is_ok());
//! assert!(max(100_i64).validate(&101).is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::{ErrorKind, ValidationError};
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
