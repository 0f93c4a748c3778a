//! Entity-level codec: key tables and the readers/writers that walk them.

use crate::value::{FromWire, ToWire, kind};
use crate::{DecodeError, EncodeError, FieldPath};
use serde_json::{Map, Value};

/// A Trakt resource with a fixed wire representation.
///
/// `KEYS` is the complete key table: every field has exactly one wire key
/// listed here, and encoding a fully-populated value emits exactly these
/// keys. No case conversion is applied anywhere.
pub trait WireEntity: Sized {
    /// Entity name used in error paths.
    const ENTITY: &'static str;

    /// Wire keys of every field, in declaration order.
    const KEYS: &'static [&'static str];

    /// Builds the entity from the fields of a JSON object.
    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError>;

    /// Writes every field into a JSON object.
    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError>;
}

/// Read access to the fields of one JSON object during decode.
///
/// Required lookups treat `null` the same as an absent key.
#[derive(Debug)]
pub struct FieldReader<'a> {
    entity: &'static str,
    keys: &'static [&'static str],
    object: &'a Map<String, Value>,
    pointer: String,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn root<T: WireEntity>(object: &'a Map<String, Value>) -> Self {
        Self::at::<T>(object, String::new())
    }

    fn at<T: WireEntity>(object: &'a Map<String, Value>, pointer: String) -> Self {
        Self {
            entity: T::ENTITY,
            keys: T::KEYS,
            object,
            pointer,
        }
    }

    /// Returns the name of the entity being decoded.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    fn path(&self, key: &'static str) -> FieldPath {
        debug_assert!(
            self.keys.contains(&key),
            "{key} is not in the key table of {}",
            self.entity
        );
        FieldPath::new(self.entity, key, format!("{}/{key}", self.pointer))
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|v| !v.is_null())
    }

    fn require(&self, key: &'static str) -> Result<&'a Value, DecodeError> {
        self.present(key).ok_or_else(|| DecodeError::MissingField {
            path: self.path(key),
        })
    }

    /// Decodes a required scalar or scalar sequence.
    pub fn required<T: FromWire>(&self, key: &'static str) -> Result<T, DecodeError> {
        let value = self.require(key)?;
        T::from_wire(value, &self.path(key))
    }

    /// Decodes an optional scalar; absent and `null` both yield `None`.
    pub fn optional<T: FromWire>(&self, key: &'static str) -> Result<Option<T>, DecodeError> {
        self.present(key)
            .map(|value| T::from_wire(value, &self.path(key)))
            .transpose()
    }

    /// Decodes a required nested entity.
    pub fn nested<T: WireEntity>(&self, key: &'static str) -> Result<T, DecodeError> {
        let value = self.require(key)?;
        read_entity(value, &self.path(key))
    }

    /// Decodes an optional nested entity.
    pub fn optional_nested<T: WireEntity>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, DecodeError> {
        self.present(key)
            .map(|value| read_entity(value, &self.path(key)))
            .transpose()
    }

    /// Decodes a required sequence of nested entities.
    ///
    /// An empty array is valid; a missing key is not.
    pub fn nested_list<T: WireEntity>(&self, key: &'static str) -> Result<Vec<T>, DecodeError> {
        let value = self.require(key)?;
        read_entity_list(value, &self.path(key))
    }

    /// Decodes an optional sequence of nested entities.
    pub fn optional_nested_list<T: WireEntity>(
        &self,
        key: &'static str,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        self.present(key)
            .map(|value| read_entity_list(value, &self.path(key)))
            .transpose()
    }
}

/// Decodes an entity from `value`, which sits at `path`.
pub(crate) fn read_entity<T: WireEntity>(value: &Value, path: &FieldPath) -> Result<T, DecodeError> {
    let Value::Object(object) = value else {
        return Err(DecodeError::TypeMismatch {
            path: path.clone(),
            expected: "object",
            actual: kind(value),
        });
    };
    T::decode_fields(&FieldReader::at::<T>(object, path.pointer().to_owned()))
}

fn read_entity_list<T: WireEntity>(value: &Value, path: &FieldPath) -> Result<Vec<T>, DecodeError> {
    let Value::Array(items) = value else {
        return Err(DecodeError::TypeMismatch {
            path: path.clone(),
            expected: "array",
            actual: kind(value),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| read_entity(item, &path.element(index)))
        .collect()
}

/// Write access to the JSON object being built during encode.
#[derive(Debug)]
pub struct FieldWriter {
    entity: &'static str,
    keys: &'static [&'static str],
    object: Map<String, Value>,
}

impl FieldWriter {
    fn new<T: WireEntity>() -> Self {
        Self {
            entity: T::ENTITY,
            keys: T::KEYS,
            object: Map::new(),
        }
    }

    fn insert(&mut self, key: &'static str, value: Value) {
        debug_assert!(
            self.keys.contains(&key),
            "{key} is not in the key table of {}",
            self.entity
        );
        self.object.insert(key.to_owned(), value);
    }

    /// Writes a scalar or scalar sequence.
    pub fn put<T: ToWire>(&mut self, key: &'static str, value: &T) -> Result<(), EncodeError> {
        let value = value.to_wire()?;
        self.insert(key, value);
        Ok(())
    }

    /// Writes an optional value, omitting the key entirely when `None`.
    pub fn put_optional<T: ToWire>(
        &mut self,
        key: &'static str,
        value: Option<&T>,
    ) -> Result<(), EncodeError> {
        match value {
            Some(value) => self.put(key, value),
            None => Ok(()),
        }
    }

    /// Writes an optional value that is nullable on the wire: `None`
    /// becomes an explicit `null`.
    pub fn put_nullable<T: ToWire>(
        &mut self,
        key: &'static str,
        value: Option<&T>,
    ) -> Result<(), EncodeError> {
        match value {
            Some(value) => self.put(key, value),
            None => {
                self.insert(key, Value::Null);
                Ok(())
            }
        }
    }

    /// Writes a nested entity.
    pub fn put_nested<T: WireEntity>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), EncodeError> {
        let value = write_entity(value)?;
        self.insert(key, value);
        Ok(())
    }

    /// Writes a sequence of nested entities.
    pub fn put_nested_list<T: WireEntity>(
        &mut self,
        key: &'static str,
        values: &[T],
    ) -> Result<(), EncodeError> {
        let items = values
            .iter()
            .map(write_entity)
            .collect::<Result<Vec<_>, _>>()?;
        self.insert(key, Value::Array(items));
        Ok(())
    }

    /// Writes an optional sequence of nested entities, omitting the key when
    /// `None`.
    pub fn put_optional_nested_list<T: WireEntity>(
        &mut self,
        key: &'static str,
        values: Option<&[T]>,
    ) -> Result<(), EncodeError> {
        match values {
            Some(values) => self.put_nested_list(key, values),
            None => Ok(()),
        }
    }

    fn into_value(self) -> Value {
        Value::Object(self.object)
    }
}

/// Encodes an entity into a JSON object.
pub(crate) fn write_entity<T: WireEntity>(value: &T) -> Result<Value, EncodeError> {
    let mut writer = FieldWriter::new::<T>();
    value.encode_fields(&mut writer)?;
    Ok(writer.into_value())
}
