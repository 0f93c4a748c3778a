//! Request bodies sent to Trakt.
//!
//! These are separate from the response types: every field is optional and
//! absent fields are left out of the encoded object rather than sent as
//! `null`.

use crate::SyncId;
use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// Body of `PUT /sync/watchlist`. Send one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WatchlistUpdate {
    pub description: Option<String>,
    /// `rank`, `added`, `title`, `released`, `runtime`, `popularity`,
    /// `percentage` or `votes`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub sort_how: Option<String>,
}

impl WatchlistUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the watchlist description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the sort field.
    #[must_use]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub fn with_sort_how(mut self, sort_how: impl Into<String>) -> Self {
        self.sort_how = Some(sort_how.into());
        self
    }
}

impl WireEntity for WatchlistUpdate {
    const ENTITY: &'static str = "WatchlistUpdate";
    const KEYS: &'static [&'static str] = &["description", "sort_by", "sort_how"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            description: fields.optional("description")?,
            sort_by: fields.optional("sort_by")?,
            sort_how: fields.optional("sort_how")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_optional("description", self.description.as_ref())?;
        fields.put_optional("sort_by", self.sort_by.as_ref())?;
        fields.put_optional("sort_how", self.sort_how.as_ref())
    }
}

/// Body of `POST /sync/favorites` and `POST /sync/favorites/remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FavoritesItems {
    pub movies: Option<Vec<SyncId>>,
    pub shows: Option<Vec<SyncId>>,
}

impl FavoritesItems {
    /// Creates an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a movie reference.
    #[must_use]
    pub fn with_movie(mut self, id: SyncId) -> Self {
        self.movies.get_or_insert_with(Vec::new).push(id);
        self
    }

    /// Appends a show reference.
    #[must_use]
    pub fn with_show(mut self, id: SyncId) -> Self {
        self.shows.get_or_insert_with(Vec::new).push(id);
        self
    }
}

impl WireEntity for FavoritesItems {
    const ENTITY: &'static str = "FavoritesItems";
    const KEYS: &'static [&'static str] = &["movies", "shows"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.optional_nested_list("movies")?,
            shows: fields.optional_nested_list("shows")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_optional_nested_list("movies", self.movies.as_deref())?;
        fields.put_optional_nested_list("shows", self.shows.as_deref())
    }
}
