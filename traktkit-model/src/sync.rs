//! Results of batch sync mutations.
//!
//! Trakt reports a batch add/remove as disjoint partitions, each split by
//! media kind. Every partition is required even when empty; the values are
//! passed through as received.

use crate::SyncId;
use chrono::{DateTime, Utc};
use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

/// Per-kind counts for movies and shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjectCount {
    pub movies: i64,
    pub shows: i64,
}

impl WireEntity for ObjectCount {
    const ENTITY: &'static str = "ObjectCount";
    const KEYS: &'static [&'static str] = &["movies", "shows"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.required("movies")?,
            shows: fields.required("shows")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("movies", &self.movies)?;
        fields.put("shows", &self.shows)
    }
}

/// References Trakt could not match, for movies and shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NotFound {
    pub movies: Vec<SyncId>,
    pub shows: Vec<SyncId>,
}

impl WireEntity for NotFound {
    const ENTITY: &'static str = "NotFound";
    const KEYS: &'static [&'static str] = &["movies", "shows"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.nested_list("movies")?,
            shows: fields.nested_list("shows")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested_list("movies", &self.movies)?;
        fields.put_nested_list("shows", &self.shows)
    }
}

/// Response to adding items to favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FavoritesItemPostResult {
    pub added: ObjectCount,
    pub existing: ObjectCount,
    pub not_found: NotFound,
}

impl WireEntity for FavoritesItemPostResult {
    const ENTITY: &'static str = "FavoritesItemPostResult";
    const KEYS: &'static [&'static str] = &["added", "existing", "not_found"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            added: fields.nested("added")?,
            existing: fields.nested("existing")?,
            not_found: fields.nested("not_found")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested("added", &self.added)?;
        fields.put_nested("existing", &self.existing)?;
        fields.put_nested("not_found", &self.not_found)
    }
}

/// Response to removing items from favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RemoveFavoritesItemResult {
    pub deleted: ObjectCount,
    pub not_found: NotFound,
}

impl WireEntity for RemoveFavoritesItemResult {
    const ENTITY: &'static str = "RemoveFavoritesItemResult";
    const KEYS: &'static [&'static str] = &["deleted", "not_found"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            deleted: fields.nested("deleted")?,
            not_found: fields.nested("not_found")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested("deleted", &self.deleted)?;
        fields.put_nested("not_found", &self.not_found)
    }
}

// ── Watchlist ────────────────────────────────────────────────────

/// Per-kind counts for movies, shows, seasons and episodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MediaCount {
    pub movies: i64,
    pub shows: i64,
    pub seasons: i64,
    pub episodes: i64,
}

impl WireEntity for MediaCount {
    const ENTITY: &'static str = "MediaCount";
    const KEYS: &'static [&'static str] = &["movies", "shows", "seasons", "episodes"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.required("movies")?,
            shows: fields.required("shows")?,
            seasons: fields.required("seasons")?,
            episodes: fields.required("episodes")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("movies", &self.movies)?;
        fields.put("shows", &self.shows)?;
        fields.put("seasons", &self.seasons)?;
        fields.put("episodes", &self.episodes)
    }
}

/// Unmatched references for movies, shows, seasons and episodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MediaNotFound {
    pub movies: Vec<SyncId>,
    pub shows: Vec<SyncId>,
    pub seasons: Vec<SyncId>,
    pub episodes: Vec<SyncId>,
}

impl WireEntity for MediaNotFound {
    const ENTITY: &'static str = "MediaNotFound";
    const KEYS: &'static [&'static str] = &["movies", "shows", "seasons", "episodes"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.nested_list("movies")?,
            shows: fields.nested_list("shows")?,
            seasons: fields.nested_list("seasons")?,
            episodes: fields.nested_list("episodes")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested_list("movies", &self.movies)?;
        fields.put_nested_list("shows", &self.shows)?;
        fields.put_nested_list("seasons", &self.seasons)?;
        fields.put_nested_list("episodes", &self.episodes)
    }
}

/// State of the watchlist after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchlistSummary {
    pub updated_at: DateTime<Utc>,
    pub item_count: i64,
}

impl WireEntity for WatchlistSummary {
    const ENTITY: &'static str = "WatchlistSummary";
    const KEYS: &'static [&'static str] = &["updated_at", "item_count"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            updated_at: fields.required("updated_at")?,
            item_count: fields.required("item_count")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("updated_at", &self.updated_at)?;
        fields.put("item_count", &self.item_count)
    }
}

/// Response to adding items to the watchlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchlistItemPostResult {
    pub added: MediaCount,
    pub existing: MediaCount,
    pub not_found: MediaNotFound,
    pub list: WatchlistSummary,
}

impl WireEntity for WatchlistItemPostResult {
    const ENTITY: &'static str = "WatchlistItemPostResult";
    const KEYS: &'static [&'static str] = &["added", "existing", "not_found", "list"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            added: fields.nested("added")?,
            existing: fields.nested("existing")?,
            not_found: fields.nested("not_found")?,
            list: fields.nested("list")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested("added", &self.added)?;
        fields.put_nested("existing", &self.existing)?;
        fields.put_nested("not_found", &self.not_found)?;
        fields.put_nested("list", &self.list)
    }
}
