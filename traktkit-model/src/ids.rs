//! Identifier sets attached to Trakt media.

use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// Identifiers of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieIds {
    pub trakt: i64,
    pub slug: String,
    pub imdb: Option<String>,
    pub tmdb: Option<i64>,
}

impl WireEntity for MovieIds {
    const ENTITY: &'static str = "MovieIds";
    const KEYS: &'static [&'static str] = &["trakt", "slug", "imdb", "tmdb"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            trakt: fields.required("trakt")?,
            slug: fields.required("slug")?,
            imdb: fields.optional("imdb")?,
            tmdb: fields.optional("tmdb")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("trakt", &self.trakt)?;
        fields.put("slug", &self.slug)?;
        fields.put_optional("imdb", self.imdb.as_ref())?;
        fields.put_optional("tmdb", self.tmdb.as_ref())
    }
}

/// Identifiers of a show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowIds {
    pub trakt: i64,
    pub slug: String,
    pub tvdb: Option<i64>,
    pub imdb: Option<String>,
    pub tmdb: Option<i64>,
    pub tv_rage: Option<i64>,
}

impl WireEntity for ShowIds {
    const ENTITY: &'static str = "ShowIds";
    const KEYS: &'static [&'static str] = &["trakt", "slug", "tvdb", "imdb", "tmdb", "tvrage"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            trakt: fields.required("trakt")?,
            slug: fields.required("slug")?,
            tvdb: fields.optional("tvdb")?,
            imdb: fields.optional("imdb")?,
            tmdb: fields.optional("tmdb")?,
            tv_rage: fields.optional("tvrage")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("trakt", &self.trakt)?;
        fields.put("slug", &self.slug)?;
        fields.put_optional("tvdb", self.tvdb.as_ref())?;
        fields.put_optional("imdb", self.imdb.as_ref())?;
        fields.put_optional("tmdb", self.tmdb.as_ref())?;
        fields.put_optional("tvrage", self.tv_rage.as_ref())
    }
}

/// Identifiers of a studio. All three are always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudioIds {
    pub trakt: i64,
    pub slug: String,
    pub tmdb: i64,
}

impl WireEntity for StudioIds {
    const ENTITY: &'static str = "StudioIds";
    const KEYS: &'static [&'static str] = &["trakt", "slug", "tmdb"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            trakt: fields.required("trakt")?,
            slug: fields.required("slug")?,
            tmdb: fields.required("tmdb")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("trakt", &self.trakt)?;
        fields.put("slug", &self.slug)?;
        fields.put("tmdb", &self.tmdb)
    }
}

/// Reference to a media item by any of its identifiers.
///
/// Sent in sync request bodies and echoed back in `not_found` partitions.
/// On the wire the identifiers are nested: `{"ids": {"imdb": "tt0000111"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SyncId {
    pub trakt: Option<i64>,
    pub slug: Option<String>,
    pub tmdb: Option<i64>,
    pub imdb: Option<String>,
}

impl SyncId {
    /// References an item by its Trakt id.
    #[must_use]
    pub fn trakt(id: i64) -> Self {
        Self {
            trakt: Some(id),
            ..Self::default()
        }
    }

    /// References an item by its slug.
    #[must_use]
    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// References an item by its IMDb id.
    #[must_use]
    pub fn imdb(id: impl Into<String>) -> Self {
        Self {
            imdb: Some(id.into()),
            ..Self::default()
        }
    }

    /// References an item by its TMDB id.
    #[must_use]
    pub fn tmdb(id: i64) -> Self {
        Self {
            tmdb: Some(id),
            ..Self::default()
        }
    }
}

/// The inner `ids` object of a [`SyncId`].
struct SyncIdSet<'a>(std::borrow::Cow<'a, SyncId>);

impl WireEntity for SyncIdSet<'_> {
    const ENTITY: &'static str = "SyncId.ids";
    const KEYS: &'static [&'static str] = &["trakt", "slug", "tmdb", "imdb"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self(std::borrow::Cow::Owned(SyncId {
            trakt: fields.optional("trakt")?,
            slug: fields.optional("slug")?,
            tmdb: fields.optional("tmdb")?,
            imdb: fields.optional("imdb")?,
        })))
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_optional("trakt", self.0.trakt.as_ref())?;
        fields.put_optional("slug", self.0.slug.as_ref())?;
        fields.put_optional("tmdb", self.0.tmdb.as_ref())?;
        fields.put_optional("imdb", self.0.imdb.as_ref())
    }
}

impl WireEntity for SyncId {
    const ENTITY: &'static str = "SyncId";
    const KEYS: &'static [&'static str] = &["ids"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        let ids: SyncIdSet<'static> = fields.nested("ids")?;
        Ok(ids.0.into_owned())
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested("ids", &SyncIdSet(std::borrow::Cow::Borrowed(self)))
    }
}
