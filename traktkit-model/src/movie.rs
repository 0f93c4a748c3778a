//! Movie summaries and movie-level aggregates.

use crate::MovieIds;
use chrono::{DateTime, NaiveDate, Utc};
use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// A movie.
///
/// `title`, `year` and `ids` are returned at every extended level. The
/// remaining fields only appear with `?extended=full` and are omitted from
/// the encoded object when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    /// `null` for movies Trakt has no release year for.
    pub year: Option<i64>,
    pub ids: MovieIds,

    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub released: Option<NaiveDate>,
    /// Runtime in minutes.
    pub runtime: Option<i64>,
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
    pub certification: Option<String>,
}

impl Movie {
    /// Creates a movie with only the minimal fields set.
    #[must_use]
    pub fn new(title: impl Into<String>, year: Option<i64>, ids: MovieIds) -> Self {
        Self {
            title: title.into(),
            year,
            ids,
            tagline: None,
            overview: None,
            released: None,
            runtime: None,
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
            certification: None,
        }
    }
}

impl WireEntity for Movie {
    const ENTITY: &'static str = "Movie";
    const KEYS: &'static [&'static str] = &[
        "title",
        "year",
        "ids",
        "tagline",
        "overview",
        "released",
        "runtime",
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
        "certification",
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            title: fields.required("title")?,
            year: fields.optional("year")?,
            ids: fields.nested("ids")?,
            tagline: fields.optional("tagline")?,
            overview: fields.optional("overview")?,
            released: fields.optional("released")?,
            runtime: fields.optional("runtime")?,
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
            certification: fields.optional("certification")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("title", &self.title)?;
        fields.put_optional("year", self.year.as_ref())?;
        fields.put_nested("ids", &self.ids)?;
        fields.put_optional("tagline", self.tagline.as_ref())?;
        fields.put_optional("overview", self.overview.as_ref())?;
        fields.put_optional("released", self.released.as_ref())?;
        fields.put_optional("runtime", self.runtime.as_ref())?;
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
        fields.put_optional("certification", self.certification.as_ref())
    }
}

/// A movie from the "most favorited" listings.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritedMovie {
    pub user_count: i64,
    pub movie: Movie,
}

impl WireEntity for FavoritedMovie {
    const ENTITY: &'static str = "FavoritedMovie";
    const KEYS: &'static [&'static str] = &["user_count", "movie"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            user_count: fields.required("user_count")?,
            movie: fields.nested("movie")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("user_count", &self.user_count)?;
        fields.put_nested("movie", &self.movie)
    }
}

/// Community counters for a movie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MovieStats {
    pub watchers: i64,
    pub plays: i64,
    pub collectors: i64,
    pub comments: i64,
    pub lists: i64,
    pub votes: i64,
    pub favorited: i64,
}

impl WireEntity for MovieStats {
    const ENTITY: &'static str = "MovieStats";
    const KEYS: &'static [&'static str] = &[
        "watchers",
        "plays",
        "collectors",
        "comments",
        "lists",
        "votes",
        "favorited",
    ];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            watchers: fields.required("watchers")?,
            plays: fields.required("plays")?,
            collectors: fields.required("collectors")?,
            comments: fields.required("comments")?,
            lists: fields.required("lists")?,
            votes: fields.required("votes")?,
            favorited: fields.required("favorited")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("watchers", &self.watchers)?;
        fields.put("plays", &self.plays)?;
        fields.put("collectors", &self.collectors)?;
        fields.put("comments", &self.comments)?;
        fields.put("lists", &self.lists)?;
        fields.put("votes", &self.votes)?;
        fields.put("favorited", &self.favorited)
    }
}
