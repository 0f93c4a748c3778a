//! Translation languages.

use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// A language Trakt has translations for, e.g. `{"name": "English", "code": "en"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language {
    pub name: String,
    pub code: String,
}

impl WireEntity for Language {
    const ENTITY: &'static str = "Language";
    const KEYS: &'static [&'static str] = &["name", "code"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.required("name")?,
            code: fields.required("code")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("name", &self.name)?;
        fields.put("code", &self.code)
    }
}
