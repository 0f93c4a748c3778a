//! Results of batch mutations on a user's hidden items and custom lists.
//!
//! Same partition rules as favorites and the watchlist, with wider per-kind
//! buckets: hidden items can be users, list items can be people.

use crate::SyncId;
use traktkit_types::{DecodeError, EncodeError, FieldReader, FieldWriter, WireEntity};

// ── Hidden items ─────────────────────────────────────────────────

/// Per-kind counts for hidden movies, shows, seasons and users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HiddenItemCount {
    pub movies: i64,
    pub shows: i64,
    pub seasons: i64,
    pub users: i64,
}

impl WireEntity for HiddenItemCount {
    const ENTITY: &'static str = "HiddenItemCount";
    const KEYS: &'static [&'static str] = &["movies", "shows", "seasons", "users"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.required("movies")?,
            shows: fields.required("shows")?,
            seasons: fields.required("seasons")?,
            users: fields.required("users")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("movies", &self.movies)?;
        fields.put("shows", &self.shows)?;
        fields.put("seasons", &self.seasons)?;
        fields.put("users", &self.users)
    }
}

/// Unmatched references for hidden movies, shows, seasons and users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HiddenItemNotFound {
    pub movies: Vec<SyncId>,
    pub shows: Vec<SyncId>,
    pub seasons: Vec<SyncId>,
    pub users: Vec<SyncId>,
}

impl WireEntity for HiddenItemNotFound {
    const ENTITY: &'static str = "HiddenItemNotFound";
    const KEYS: &'static [&'static str] = &["movies", "shows", "seasons", "users"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.nested_list("movies")?,
            shows: fields.nested_list("shows")?,
            seasons: fields.nested_list("seasons")?,
            users: fields.nested_list("users")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested_list("movies", &self.movies)?;
        fields.put_nested_list("shows", &self.shows)?;
        fields.put_nested_list("seasons", &self.seasons)?;
        fields.put_nested_list("users", &self.users)
    }
}

/// Response to hiding items in a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HideItemResult {
    pub added: HiddenItemCount,
    pub not_found: HiddenItemNotFound,
}

impl WireEntity for HideItemResult {
    const ENTITY: &'static str = "HideItemResult";
    const KEYS: &'static [&'static str] = &["added", "not_found"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            added: fields.nested("added")?,
            not_found: fields.nested("not_found")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested("added", &self.added)?;
        fields.put_nested("not_found", &self.not_found)
    }
}

/// Response to unhiding items in a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UnhideItemResult {
    pub deleted: HiddenItemCount,
    pub not_found: HiddenItemNotFound,
}

impl WireEntity for UnhideItemResult {
    const ENTITY: &'static str = "UnhideItemResult";
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

// ── Custom lists ─────────────────────────────────────────────────

/// Per-kind counts for list movies, shows, seasons, episodes and people.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ListItemCount {
    pub movies: i64,
    pub shows: i64,
    pub seasons: i64,
    pub episodes: i64,
    pub people: i64,
}

impl WireEntity for ListItemCount {
    const ENTITY: &'static str = "ListItemCount";
    const KEYS: &'static [&'static str] = &["movies", "shows", "seasons", "episodes", "people"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.required("movies")?,
            shows: fields.required("shows")?,
            seasons: fields.required("seasons")?,
            episodes: fields.required("episodes")?,
            people: fields.required("people")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put("movies", &self.movies)?;
        fields.put("shows", &self.shows)?;
        fields.put("seasons", &self.seasons)?;
        fields.put("episodes", &self.episodes)?;
        fields.put("people", &self.people)
    }
}

/// Unmatched references for list movies, shows, seasons, episodes and people.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListItemNotFound {
    pub movies: Vec<SyncId>,
    pub shows: Vec<SyncId>,
    pub seasons: Vec<SyncId>,
    pub episodes: Vec<SyncId>,
    pub people: Vec<SyncId>,
}

impl WireEntity for ListItemNotFound {
    const ENTITY: &'static str = "ListItemNotFound";
    const KEYS: &'static [&'static str] = &["movies", "shows", "seasons", "episodes", "people"];

    fn decode_fields(fields: &FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            movies: fields.nested_list("movies")?,
            shows: fields.nested_list("shows")?,
            seasons: fields.nested_list("seasons")?,
            episodes: fields.nested_list("episodes")?,
            people: fields.nested_list("people")?,
        })
    }

    fn encode_fields(&self, fields: &mut FieldWriter) -> Result<(), EncodeError> {
        fields.put_nested_list("movies", &self.movies)?;
        fields.put_nested_list("shows", &self.shows)?;
        fields.put_nested_list("seasons", &self.seasons)?;
        fields.put_nested_list("episodes", &self.episodes)?;
        fields.put_nested_list("people", &self.people)
    }
}

/// Response to adding items to a custom list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListItemPostResult {
    pub added: ListItemCount,
    pub existing: ListItemCount,
    pub not_found: ListItemNotFound,
}

impl WireEntity for ListItemPostResult {
    const ENTITY: &'static str = "ListItemPostResult";
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
