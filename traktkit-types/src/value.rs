//! Scalar and sequence codecs used by entity fields.

use crate::date;
use crate::{DecodeError, EncodeError, FieldPath};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Number, Value};

/// Decodes a field value from its JSON representation.
pub trait FromWire: Sized {
    /// Shape description used in [`DecodeError::TypeMismatch`].
    const EXPECTED: &'static str;

    /// Decodes `value`, located at `path`.
    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError>;
}

/// Encodes a field value to its JSON representation.
pub trait ToWire {
    fn to_wire(&self) -> Result<Value, EncodeError>;
}

/// Short name of a JSON value's shape.
pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "unsigned integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch<T: FromWire>(value: &Value, path: &FieldPath) -> DecodeError {
    DecodeError::TypeMismatch {
        path: path.clone(),
        expected: T::EXPECTED,
        actual: kind(value),
    }
}

impl FromWire for String {
    const EXPECTED: &'static str = "string";

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| mismatch::<Self>(value, path))
    }
}

impl ToWire for String {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.clone()))
    }
}

impl FromWire for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        value.as_i64().ok_or_else(|| mismatch::<Self>(value, path))
    }
}

impl ToWire for i64 {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::Number((*self).into()))
    }
}

impl FromWire for f64 {
    const EXPECTED: &'static str = "number";

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        value.as_f64().ok_or_else(|| mismatch::<Self>(value, path))
    }
}

impl ToWire for f64 {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or_else(|| EncodeError::Serialization(format!("non-finite number {self}")))
    }
}

impl FromWire for bool {
    const EXPECTED: &'static str = "bool";

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        value.as_bool().ok_or_else(|| mismatch::<Self>(value, path))
    }
}

impl ToWire for bool {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        Ok(Value::Bool(*self))
    }
}

impl FromWire for NaiveDate {
    const EXPECTED: &'static str = "date string";

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let raw = value.as_str().ok_or_else(|| mismatch::<Self>(value, path))?;
        date::parse_date(raw).ok_or_else(|| DecodeError::MalformedDate {
            path: path.clone(),
            raw: raw.to_owned(),
        })
    }
}

impl ToWire for NaiveDate {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        date::format_date(self)
            .map(Value::String)
            .ok_or_else(|| EncodeError::DateOutOfRange {
                value: self.to_string(),
            })
    }
}

impl FromWire for DateTime<Utc> {
    const EXPECTED: &'static str = "timestamp string";

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let raw = value.as_str().ok_or_else(|| mismatch::<Self>(value, path))?;
        date::parse_timestamp(raw).ok_or_else(|| DecodeError::MalformedDate {
            path: path.clone(),
            raw: raw.to_owned(),
        })
    }
}

impl ToWire for DateTime<Utc> {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        date::format_timestamp(self)
            .map(Value::String)
            .ok_or_else(|| EncodeError::DateOutOfRange {
                value: self.to_string(),
            })
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    const EXPECTED: &'static str = "array";

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        let items = value.as_array().ok_or_else(|| mismatch::<Self>(value, path))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| T::from_wire(item, &path.element(index)))
            .collect()
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        self.iter()
            .map(ToWire::to_wire)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}
