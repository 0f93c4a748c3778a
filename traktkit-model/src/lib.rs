//! Trakt entity model.
//!
//! Every type here mirrors one Trakt JSON resource and implements
//! [`WireEntity`] with an explicit key table:
//! - Catalog data: [`Movie`], [`Show`], [`Studio`], [`Video`], [`Language`],
//!   [`Certifications`]
//! - Movie releases with the [`ReleaseType`] fallback enum
//! - Batch mutation results for favorites, the watchlist, hidden items and
//!   custom lists
//! - Request bodies ([`WatchlistUpdate`], [`FavoritesItems`]), which are
//!   distinct from response types and omit absent fields
//!
//! Use [`decode`] / [`encode`] (re-exported from `traktkit-types`) at the
//! transport boundary, or plain serde: every entity implements
//! `Serialize`/`Deserialize` through the same tables.

mod certification;
mod ids;
mod language;
mod movie;
mod release;
mod request;
mod show;
mod studio;
mod sync;
mod user;
mod video;

pub use certification::{Certification, Certifications};
pub use ids::{MovieIds, ShowIds, StudioIds, SyncId};
pub use language::Language;
pub use movie::{FavoritedMovie, Movie, MovieStats};
pub use release::{MovieRelease, ReleaseType};
pub use request::{FavoritesItems, WatchlistUpdate};
pub use show::{FavoritedShow, Show};
pub use studio::Studio;
pub use sync::{
    FavoritesItemPostResult, MediaCount, MediaNotFound, NotFound, ObjectCount,
    RemoveFavoritesItemResult, WatchlistItemPostResult, WatchlistSummary,
};
pub use user::{
    HiddenItemCount, HiddenItemNotFound, HideItemResult, ListItemCount, ListItemNotFound,
    ListItemPostResult, UnhideItemResult,
};
pub use video::Video;

pub use traktkit_types::{
    DecodeError, EncodeError, Error, FieldPath, Result, WireEntity, WireEnum, decode,
    decode_list, decode_value, encode, encode_list, encode_value,
};

traktkit_types::wire_serde!(
    Certification,
    Certifications,
    MovieIds,
    ShowIds,
    StudioIds,
    SyncId,
    Language,
    FavoritedMovie,
    Movie,
    MovieStats,
    MovieRelease,
    FavoritesItems,
    WatchlistUpdate,
    FavoritedShow,
    Show,
    Studio,
    FavoritesItemPostResult,
    MediaCount,
    MediaNotFound,
    NotFound,
    ObjectCount,
    RemoveFavoritesItemResult,
    WatchlistItemPostResult,
    WatchlistSummary,
    HiddenItemCount,
    HiddenItemNotFound,
    HideItemResult,
    UnhideItemResult,
    ListItemCount,
    ListItemNotFound,
    ListItemPostResult,
    Video,
);
