//! Trailers and other videos attached to media.

use chrono::{DateTime, Utc};
use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// A trailer, clip or featurette attached to a movie or show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Video {
    pub title: String,
    pub url: String,
    /// Hosting site, e.g. `youtube`.
    pub site: String,
    /// Wire key `type`: `trailer`, `clip`, `featurette`, ...
    pub video_type: String,
    /// Vertical resolution.
    pub size: i64,
    pub official: bool,
    pub published_at: DateTime<Utc>,
    pub country: String,
    pub language: String,
}

impl WireEntity for Video {
    const ENTITY: &'static str = "Video";
    const KEYS: &'static [&'static str] = &[
        "title",
        "url",
        "site",
        "type",
        "size",
        "official",
        "published_at",
        "country",
        "language",
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            title: fields.required("title")?,
            url: fields.required("url")?,
            site: fields.required("site")?,
            video_type: fields.required("type")?,
            size: fields.required("size")?,
            official: fields.required("official")?,
            published_at: fields.required("published_at")?,
            country: fields.required("country")?,
            language: fields.required("language")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("title", &self.title)?;
        fields.put("url", &self.url)?;
        fields.put("site", &self.site)?;
        fields.put("type", &self.video_type)?;
        fields.put("size", &self.size)?;
        fields.put("official", &self.official)?;
        fields.put("published_at", &self.published_at)?;
        fields.put("country", &self.country)?;
        fields.put("language", &self.language)
    }
}
