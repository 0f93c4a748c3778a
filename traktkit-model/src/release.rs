//! Per-country movie releases.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use traktkit_types::{
    DecodeError, EncodeError, FieldPath, FieldReader, FieldWriter, FromWire, ToWire, WireEntity,
    WireEnum, enum_from_wire, enum_to_wire,
};

/// How a movie was released in a country.
///
/// Tags Trakt adds later decode to [`ReleaseType::Unknown`]. `Unknown` itself
/// cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Unknown,
    Premiere,
    Limited,
    Theatrical,
    Digital,
    Physical,
    Tv,
}

impl WireEnum for ReleaseType {
    const NAME: &'static str = "ReleaseType";
    const FALLBACK: Self = Self::Unknown;
    const VARIANTS: &'static [(Self, &'static str)] = &[
        (Self::Premiere, "premiere"),
        (Self::Limited, "limited"),
        (Self::Theatrical, "theatrical"),
        (Self::Digital, "digital"),
        (Self::Physical, "physical"),
        (Self::Tv, "tv"),
    ];
}

impl FromWire for ReleaseType {
    const EXPECTED: &'static str = "string";

    fn from_wire(value: &Value, path: &FieldPath) -> Result<Self, DecodeError> {
        enum_from_wire(value, path)
    }
}

impl ToWire for ReleaseType {
    fn to_wire(&self) -> Result<Value, EncodeError> {
        enum_to_wire(*self)
    }
}

impl FromStr for ReleaseType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode_tag(s))
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = Self::VARIANTS
            .iter()
            .find(|(variant, _)| variant == self)
            .map_or("unknown", |(_, tag)| *tag);
        f.write_str(tag)
    }
}

impl Serialize for ReleaseType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = self.encode_tag().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(tag)
    }
}

impl<'de> Deserialize<'de> for ReleaseType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::decode_tag(&raw))
    }
}

/// A release of a movie in one country.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieRelease {
    /// Two-letter country code.
    pub country: String,
    /// Certification in that country; may be an empty string.
    pub certification: String,
    pub release_date: NaiveDate,
    pub release_type: ReleaseType,
    /// Festival name for a premiere, disc specs for a physical release.
    /// Trakt sends `null` when there is none.
    pub note: Option<String>,
}

impl WireEntity for MovieRelease {
    const ENTITY: &'static str = "MovieRelease";
    const KEYS: &'static [&'static str] = &[
        "country",
        "certification",
        "release_date",
        "release_type",
        "note",
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            country: fields.required("country")?,
            certification: fields.required("certification")?,
            release_date: fields.required("release_date")?,
            release_type: fields.required("release_type")?,
            note: fields.optional("note")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("country", &self.country)?;
        fields.put("certification", &self.certification)?;
        fields.put("release_date", &self.release_date)?;
        fields.put("release_type", &self.release_type)?;
        fields.put_nullable("note", self.note.as_ref())
    }
}
