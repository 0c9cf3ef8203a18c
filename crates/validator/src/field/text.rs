use crate::field::Clean;
use crate::foundation::{Validate, ValidationError};
use crate::validators::{MaxLength, MinLength};
use crate::value::Value;

/// Free text with optional character-length bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextField {
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
}

impl TextField {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: None,
            min_length: None,
        }
    }

    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Type and length checks shared with the email and URL kinds.
    pub(crate) fn check_text<'v>(&self, value: &'v Value) -> Result<&'v str, ValidationError> {
        let Value::Text(text) = value else {
            return Err(ValidationError::type_mismatch(
                "Must be a string",
                "string",
                value.kind().as_str(),
            ));
        };

        let text = text.as_str();
        self.max_length.map(MaxLength::new).validate(text)?;
        self.min_length.map(MinLength::new).validate(text)?;
        Ok(text)
    }
}

impl Clean for TextField {
    fn clean(&self, value: &Value) -> Result<Value, ValidationError> {
        self.check_text(value).map(|text| Value::Text(text.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;

    #[test]
    fn accepts_text_within_bounds() {
        let field = TextField::new().max_length(20).min_length(10);
        assert_eq!(
            field.clean(&Value::from("virusdefender")).unwrap(),
            Value::from("virusdefender")
        );
    }

    #[test]
    fn rejects_non_text() {
        let field = TextField::new();
        for value in [Value::from(1), Value::from(1.5), Value::from(true)] {
            let err = field.clean(&value).unwrap_err();
            assert_eq!(err.kind, ErrorKind::TypeMismatch);
            assert_eq!(err.message, "Must be a string");
        }
    }

    #[test]
    fn max_is_checked_before_min() {
        // unreachable through a built schema, which rejects inverted bounds
        let field = TextField::new().max_length(0).min_length(3);
        assert_eq!(
            field.clean(&Value::from("ab")).unwrap_err().kind,
            ErrorKind::TooLong
        );
    }

    #[test]
    fn counts_chars_not_bytes() {
        let field = TextField::new().max_length(3).min_length(3);
        assert!(field.clean(&Value::from("用户名")).is_ok());
        assert!(field.clean(&Value::from("abcd")).is_err());
    }

    #[test]
    fn empty_string_is_present() {
        assert_eq!(
            TextField::new().clean(&Value::from("")).unwrap(),
            Value::from("")
        );
        assert_eq!(
            TextField::new().min_length(1).clean(&Value::from("")).unwrap_err().kind,
            ErrorKind::TooShort
        );
    }
}
