//! Wire codec foundation for the Trakt data model.
//!
//! This crate defines the pieces every Trakt entity is built from:
//! - [`WireEntity`], a per-type key table plus field-level decode/encode
//! - [`FieldReader`] / [`FieldWriter`], which walk JSON objects and track paths
//! - [`WireEnum`], closed string sets with a fallback variant
//! - Fixed date and timestamp formats ([`date`])
//! - The decode/encode boundary used by the transport layer
//!
//! The entities themselves live in `traktkit-model`.

pub mod date;
mod entity;
mod enumeration;
mod error;
mod value;

pub use entity::{FieldReader, FieldWriter, WireEntity};
pub use enumeration::{WireEnum, enum_from_wire, enum_to_wire};
pub use error::{DecodeError, EncodeError, FieldPath};
pub use value::{FromWire, ToWire};

use serde_json::Value;
use tracing::trace;
use value::kind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while moving an entity across the wire.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Decodes a single entity from JSON bytes.
pub fn decode<T: WireEntity>(bytes: &[u8]) -> std::result::Result<T, DecodeError> {
    trace!(entity = T::ENTITY, len = bytes.len(), "decoding entity");
    let value = parse_document(bytes)?;
    decode_value(&value)
}

/// Decodes a single entity from an already-parsed JSON value.
pub fn decode_value<T: WireEntity>(value: &Value) -> std::result::Result<T, DecodeError> {
    match value {
        Value::Object(object) => T::decode_fields(&FieldReader::root::<T>(object)),
        other => Err(DecodeError::InvalidDocument(format!(
            "expected an object for {}, found {}",
            T::ENTITY,
            kind(other)
        ))),
    }
}

/// Decodes a top-level JSON array of entities.
///
/// A single malformed element fails the whole decode.
pub fn decode_list<T: WireEntity>(bytes: &[u8]) -> std::result::Result<Vec<T>, DecodeError> {
    trace!(entity = T::ENTITY, len = bytes.len(), "decoding entity list");
    let value = parse_document(bytes)?;
    decode_list_value(&value)
}

/// Decodes a top-level JSON array of entities from a parsed value.
pub fn decode_list_value<T: WireEntity>(
    value: &Value,
) -> std::result::Result<Vec<T>, DecodeError> {
    let Value::Array(items) = value else {
        return Err(DecodeError::InvalidDocument(format!(
            "expected an array of {}, found {}",
            T::ENTITY,
            kind(value)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| entity::read_entity(item, &FieldPath::element_of::<T>(index)))
        .collect()
}

/// Encodes an entity to JSON bytes.
pub fn encode<T: WireEntity>(value: &T) -> std::result::Result<Vec<u8>, EncodeError> {
    trace!(entity = T::ENTITY, "encoding entity");
    let json = encode_value(value)?;
    serde_json::to_vec(&json).map_err(|e| EncodeError::Serialization(e.to_string()))
}

/// Encodes an entity to a JSON value.
pub fn encode_value<T: WireEntity>(value: &T) -> std::result::Result<Value, EncodeError> {
    entity::write_entity(value)
}

/// Encodes a slice of entities as a top-level JSON array.
pub fn encode_list<T: WireEntity>(values: &[T]) -> std::result::Result<Vec<u8>, EncodeError> {
    trace!(entity = T::ENTITY, count = values.len(), "encoding entity list");
    let items = values
        .iter()
        .map(entity::write_entity)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    serde_json::to_vec(&Value::Array(items)).map_err(|e| EncodeError::Serialization(e.to_string()))
}

fn parse_document(bytes: &[u8]) -> std::result::Result<Value, DecodeError> {
    serde_json::from_slice(bytes).map_err(|e| DecodeError::InvalidDocument(e.to_string()))
}

/// Implements `serde::Serialize` and `serde::Deserialize` for entity types by
/// routing through their [`WireEntity`] key tables.
///
/// ```ignore
/// traktkit_types::wire_serde!(Language, Certification);
/// ```
#[macro_export]
macro_rules! wire_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::__private::serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
                where
                    S: $crate::__private::serde::Serializer,
                {
                    let value = $crate::encode_value(self)
                        .map_err(<S::Error as $crate::__private::serde::ser::Error>::custom)?;
                    $crate::__private::serde::Serialize::serialize(&value, serializer)
                }
            }

            impl<'de> $crate::__private::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                where
                    D: $crate::__private::serde::Deserializer<'de>,
                {
                    let value: $crate::__private::serde_json::Value =
                        $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                    $crate::decode_value(&value)
                        .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
                }
            }
        )+
    };
}

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
