use crate::field::Clean;
use crate::foundation::ValidationError;
use crate::value::Value;

/// A boolean, accepting a fixed set of spellings.
///
/// | input                                  | result  |
/// |----------------------------------------|---------|
/// | `true`, `1`, `"1"`, `"true"`, `"True"`  | `true`  |
/// | `false`, `0`, `"0"`, `"false"`, `"False"` | `false` |
///
/// String matching is case-sensitive; `"TRUE"` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanField;

impl BooleanField {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn coerce(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Integer(1) => Some(true),
        Value::Integer(0) => Some(false),
        Value::Text(s) => match s.as_str() {
            "1" | "true" | "True" => Some(true),
            "0" | "false" | "False" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

impl Clean for BooleanField {
    fn clean(&self, value: &Value) -> Result<Value, ValidationError> {
        coerce(value)
            .map(Value::Boolean)
            .ok_or_else(|| ValidationError::invalid_format("Value invalid", "boolean"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn coerces_accepted_spellings() {
        let field = BooleanField::new();
        for value in [Value::from(true), Value::from(1), Value::from("1"), Value::from("true"), Value::from("True")] {
            assert_eq!(field.clean(&value).unwrap(), Value::Boolean(true));
        }
        for value in [Value::from(false), Value::from(0), Value::from("0"), Value::from("false"), Value::from("False")] {
            assert_eq!(field.clean(&value).unwrap(), Value::Boolean(false));
        }
    }

    #[test]
    fn rejects_other_shapes() {
        let field = BooleanField::new();
        for value in [
            Value::from(2),
            Value::from(-1),
            Value::from("2"),
            Value::from("TRUE"),
            Value::from("yes"),
            Value::from(""),
            Value::from(1.0),
            Value::Object(IndexMap::new()),
            Value::Array(Vec::new()),
        ] {
            let err = field.clean(&value).unwrap_err();
            assert_eq!(err.message, "Value invalid", "{value:?}");
        }
    }
}
