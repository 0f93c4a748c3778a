//! Production studios.

use crate::StudioIds;
use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// A production studio credited on a movie or show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Studio {
    pub name: String,
    pub country: String,
    pub ids: StudioIds,
}

impl WireEntity for Studio {
    const ENTITY: &'static str = "Studio";
    const KEYS: &'static [&'static str] = &["name", "country", "ids"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.required("name")?,
            country: fields.required("country")?,
            ids: fields.nested("ids")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("name", &self.name)?;
        fields.put("country", &self.country)?;
        fields.put_nested("ids", &self.ids)
    }
}
