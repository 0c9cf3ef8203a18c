//! String length checks
//!
//! Length is measured in Unicode scalar values (chars), never bytes, so
//! multi-byte text counts the way a reader would count it.

use crate::foundation::ValidationError;

/// Counts the characters of a string.
#[inline]
pub(crate) fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::too_short(self.min, char_len(input)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) { ValidationError::too_long(self.max, char_len(input)) }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, Validate};

    #[test]
    fn test_min_length() {
        let validator = MinLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("hello world").is_ok());
        assert!(validator.validate("hi").is_err());
        assert!(validator.validate("").is_err());
    }

    #[test]
    fn test_max_length() {
        let validator = MaxLength::new(5);
        assert!(validator.validate("hello").is_ok());
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("hello!").is_err());
    }

    #[test]
    fn test_error_kinds_and_params() {
        let err = min_length(5).validate("hi").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooShort);
        assert_eq!(err.param("actual"), Some("2"));

        let err = max_length(2).validate("hey").unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooLong);
        assert_eq!(err.param("max"), Some("2"));
    }

    #[test]
    fn test_unicode_handling() {
        // "用户名称" is 4 chars but 12 bytes
        assert!(max_length(4).validate("用户名称").is_ok());
        assert!(min_length(5).validate("用户名称").is_err());
        assert!(min_length(2).validate("\u{1f44b}\u{1f30d}").is_ok());
        assert_eq!(char_len("h\u{e9}llo"), 5);
    }
}
