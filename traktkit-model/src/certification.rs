//! Content certifications.

use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// Content certifications, grouped by country. Trakt only returns `us`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certifications {
    pub us: Vec<Certification>,
}

/// A single content rating such as `PG-13`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Certification {
    pub name: String,
    pub slug: String,
    pub description: String,
}

impl WireEntity for Certifications {
    const ENTITY: &'static str = "Certifications";
    const KEYS: &'static [&'static str] = &["us"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            us: fields.nested_list("us")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested_list("us", &self.us)
    }
}

impl WireEntity for Certification {
    const ENTITY: &'static str = "Certification";
    const KEYS: &'static [&'static str] = &["name", "slug", "description"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.required("name")?,
            slug: fields.required("slug")?,
            description: fields.required("description")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("name", &self.name)?;
        fields.put("slug", &self.slug)?;
        fields.put("description", &self.description)
    }
}
