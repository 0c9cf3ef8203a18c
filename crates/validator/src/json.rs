//! JSON boundary helpers.
//!
//! Records usually arrive as JSON objects. These helpers convert between
//! `serde_json::Value` and the crate's [`RawInput`] / [`Record`] maps
//! while preserving key order.
//!
//! # Examples
//!
//! ```
//! use warden_validator::json::raw_input_from_json;
//! use warden_validator::value::Value;
//! use serde_json::json;
//!
//! let input = raw_input_from_json(json!({"age": 30, "score": 9.5})).unwrap();
//! assert_eq!(input["age"], Value::Integer(30));
//! assert_eq!(input["score"], Value::Float(9.5));
//! ```

use crate::value::{RawInput, Record, Value, ValueKind};

/// A JSON document that cannot be used as a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected a JSON object, found {found}")]
pub struct NotAnObject {
    /// Kind of the value that was found instead.
    pub found: ValueKind,
}

/// Converts a JSON object into raw input for a validation run.
pub fn raw_input_from_json(json: serde_json::Value) -> Result<RawInput, NotAnObject> {
    match Value::from(json) {
        Value::Object(map) => Ok(map),
        other => Err(NotAnObject {
            found: other.kind(),
        }),
    }
}

/// Converts cleaned data back into a JSON object.
#[must_use]
pub fn record_to_json(record: &Record) -> serde_json::Value {
    serde_json::Value::Object(
        record
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::from(v.clone())))
            .collect(),
    )
}
