//! TV shows and show-level aggregates.

use crate::ShowIds;
use chrono::{DateTime, Utc};
use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// A TV show. Like [`crate::Movie`], everything past `ids` is extended info.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub title: String,
    pub year: Option<i64>,
    pub ids: ShowIds,

    pub overview: Option<String>,
    pub first_aired: Option<DateTime<Utc>>,
    pub runtime: Option<i64>,
    pub certification: Option<String>,
    pub network: Option<String>,
    pub country: Option<String>,
    pub trailer: Option<String>,
    pub homepage: Option<String>,
    pub status: Option<String>,
    pub rating: Option<f64>,
    pub votes: Option<i64>,
    pub comment_count: Option<i64>,
    pub updated_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub available_translations: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub aired_episodes: Option<i64>,
}

impl Show {
    /// Creates a show with only the minimal fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, year: Option<i64>, ids: ShowIds) -> Self {
        Self {
            title: title.into(),
            year,
            ids,
            overview: None,
            first_aired: None,
            runtime: None,
            certification: None,
            network: None,
            country: None,
            trailer: None,
            homepage: None,
            status: None,
            rating: None,
            votes: None,
            comment_count: None,
            updated_at: None,
            language: None,
            available_translations: None,
            genres: None,
            aired_episodes: None,
        }
    }
}

impl WireEntity for Show {
    const ENTITY: &'static str = "Show";
    const KEYS: &'static [&'static str] = &[
        "title",
        "year",
        "ids",
        "overview",
        "first_aired",
        "runtime",
        "certification",
        "network",
        "country",
        "trailer",
        "homepage",
        "status",
        "rating",
        "votes",
        "comment_count",
        "updated_at",
        "language",
        "available_translations",
        "genres",
        "aired_episodes",
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            title: fields.required("title")?,
            year: fields.optional("year")?,
            ids: fields.nested("ids")?,
            overview: fields.optional("overview")?,
            first_aired: fields.optional("first_aired")?,
            runtime: fields.optional("runtime")?,
            certification: fields.optional("certification")?,
            network: fields.optional("network")?,
            country: fields.optional("country")?,
            trailer: fields.optional("trailer")?,
            homepage: fields.optional("homepage")?,
            status: fields.optional("status")?,
            rating: fields.optional("rating")?,
            votes: fields.optional("votes")?,
            comment_count: fields.optional("comment_count")?,
            updated_at: fields.optional("updated_at")?,
            language: fields.optional("language")?,
            available_translations: fields.optional("available_translations")?,
            genres: fields.optional("genres")?,
            aired_episodes: fields.optional("aired_episodes")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("title", &self.title)?;
        fields.put_optional("year", self.year.as_ref())?;
        fields.put_nested("ids", &self.ids)?;
        fields.put_optional("overview", self.overview.as_ref())?;
        fields.put_optional("first_aired", self.first_aired.as_ref())?;
        fields.put_optional("runtime", self.runtime.as_ref())?;
        fields.put_optional("certification", self.certification.as_ref())?;
        fields.put_optional("network", self.network.as_ref())?;
        fields.put_optional("country", self.country.as_ref())?;
        fields.put_optional("trailer", self.trailer.as_ref())?;
        fields.put_optional("homepage", self.homepage.as_ref())?;
        fields.put_optional("status", self.status.as_ref())?;
        fields.put_optional("rating", self.rating.as_ref())?;
        fields.put_optional("votes", self.votes.as_ref())?;
        fields.put_optional("comment_count", self.comment_count.as_ref())?;
        fields.put_optional("updated_at", self.updated_at.as_ref())?;
        fields.put_optional("language", self.language.as_ref())?;
        fields.put_optional("available_translations", self.available_translations.as_ref())?;
        fields.put_optional("genres", self.genres.as_ref())?;
        fields.put_optional("aired_episodes", self.aired_episodes.as_ref())
    }
}

/// A show from the "most favorited" listings.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritedShow {
    pub user_count: i64,
    pub show: Show,
}

impl WireEntity for FavoritedShow {
    const ENTITY: &'static str = "FavoritedShow";
    const KEYS: &'static [&'static str] = &["user_count", "show"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            user_count: fields.required("user_count")?,
            show: fields.nested("show")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("user_count", &self.user_count)?;
        fields.put_nested("show", &self.show)
    }
}
