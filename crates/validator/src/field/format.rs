use crate::field::{Clean, TextField};
use crate::foundation::{Validate, ValidationError};
use crate::validators::{Email, Url};
use crate::value::Value;

/// Shortest text the email and URL kinds will consider.
pub(crate) const IMPLICIT_MIN_LENGTH: usize = 5;

/// An email address.
///
/// Text rules apply first with an implicit `min_length` of 5; the address
/// must then pass [`Email`]. The cleaned value is the input, unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmailField {
    pub max_length: Option<usize>,
}

impl EmailField {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    const fn text(self) -> TextField {
        TextField {
            max_length: self.max_length,
            min_length: Some(IMPLICIT_MIN_LENGTH),
        }
    }
}

impl Clean for EmailField {
    fn clean(&self, value: &Value) -> Result<Value, ValidationError> {
        let text = self.text().check_text(value)?;
        Email.validate(text)?;
        Ok(value.clone())
    }
}

/// An absolute `http`, `https`, `ftp` or `ftps` URL.
///
/// Text rules apply first with an implicit `min_length` of 5; the URL must
/// then pass [`Url`]. The cleaned value is the input, unchanged, even when
/// its host had to be IDN-encoded for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UrlField {
    pub max_length: Option<usize>,
}

impl UrlField {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    const fn text(self) -> TextField {
        TextField {
            max_length: self.max_length,
            min_length: Some(IMPLICIT_MIN_LENGTH),
        }
    }
}

impl Clean for UrlField {
    fn clean(&self, value: &Value) -> Result<Value, ValidationError> {
        let text = self.text().check_text(value)?;
        Url.validate(text)?;
        Ok(value.clone())
    }
}
