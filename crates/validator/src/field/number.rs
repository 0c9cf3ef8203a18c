use crate::field::Clean;
use crate::foundation::{Validate, ValidationError};
use crate::validators::{Max, Min};
use crate::value::Value;

/// A signed integer with optional inclusive bounds.
///
/// Only integer values are accepted: neither an integral float such as
/// `30.0` nor a boolean counts as an integer.
///
/// Integers are 64-bit signed. A JSON number above `i64::MAX` is read as a
/// float (see [`Value`]), so it fails here with `TypeMismatch` rather than
/// `OutOfRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntegerField {
    pub max: Option<i64>,
    pub min: Option<i64>,
}

impl IntegerField {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max: None,
            min: None,
        }
    }

    #[must_use]
    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets both bounds, `min..=max`.
    #[must_use]
    pub const fn range(self, min: i64, max: i64) -> Self {
        self.min(min).max(max)
    }
}

impl Clean for IntegerField {
    fn clean(&self, value: &Value) -> Result<Value, ValidationError> {
        let Value::Integer(n) = value else {
            return Err(ValidationError::type_mismatch(
                "Must be an integer",
                "integer",
                value.kind().as_str(),
            ));
        };

        self.max.map(Max::new).validate(n)?;
        self.min.map(Min::new).validate(n)?;
        Ok(Value::Integer(*n))
    }
}

/// A floating point number with optional inclusive bounds.
///
/// Only float values are accepted; integers are not widened.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatField {
    pub max: Option<f64>,
    pub min: Option<f64>,
}

impl FloatField {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max: None,
            min: None,
        }
    }

    #[must_use]
    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets both bounds, `min..=max`.
    #[must_use]
    pub const fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }
}

impl Clean for FloatField {
    fn clean(&self, value: &Value) -> Result<Value, ValidationError> {
        let Value::Float(n) = value else {
            return Err(ValidationError::type_mismatch(
                "Must be a float",
                "float",
                value.kind().as_str(),
            ));
        };

        self.max.map(Max::new).validate(n)?;
        self.min.map(Min::new).validate(n)?;
        Ok(Value::Float(*n))
    }
}
