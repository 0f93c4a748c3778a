//! Shared fixtures for model tests: Trakt payloads and fully-populated values.

#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};
use traktkit_model::{
    FavoritesItemPostResult, Movie, MovieIds, MovieRelease, NotFound, ObjectCount, ReleaseType,
    Show, ShowIds, SyncId,
};

pub fn tron_ids() -> MovieIds {
    MovieIds {
        trakt: 343,
        slug: "tron-legacy-2010".into(),
        imdb: Some("tt1104001".into()),
        tmdb: Some(20526),
    }
}

/// `GET /movies/tron-legacy-2010` at the default extended level.
pub fn movie_min_json() -> Value {
    json!({
        "title": "TRON: Legacy",
        "year": 2010,
        "ids": {
            "trakt": 343,
            "slug": "tron-legacy-2010",
            "imdb": "tt1104001",
            "tmdb": 20526
        }
    })
}

/// `GET /movies/tron-legacy-2010?extended=full`.
pub fn movie_full_json() -> Value {
    json!({
        "title": "TRON: Legacy",
        "year": 2010,
        "ids": {
            "trakt": 343,
            "slug": "tron-legacy-2010",
            "imdb": "tt1104001",
            "tmdb": 20526
        },
        "tagline": "The Game Has Changed.",
        "overview": "Sam Flynn, the tech-savvy and daring son of Kevin Flynn, investigates his father's disappearance and is pulled into The Grid.",
        "released": "2010-12-16",
        "runtime": 125,
        "country": "us",
        "trailer": null,
        "homepage": "http://disney.go.com/tron/",
        "status": "released",
        "rating": 8.0,
        "votes": 111,
        "comment_count": 92,
        "updated_at": "2014-07-23T03:21:46.000Z",
        "language": "en",
        "available_translations": ["en"],
        "genres": ["action"],
        "certification": "PG-13"
    })
}

pub fn show_min_json() -> Value {
    json!({
        "title": "Game of Thrones",
        "year": 2011,
        "ids": {
            "trakt": 353,
            "slug": "game-of-thrones",
            "tvdb": 121361,
            "imdb": "tt0944947",
            "tmdb": 1399,
            "tvrage": null
        }
    })
}

/// `GET /movies/tron-legacy-2010/releases/us`, trimmed to three entries.
pub fn releases_json() -> Value {
    json!([
        {
            "country": "us",
            "certification": "PG",
            "release_date": "2010-12-17",
            "release_type": "theatrical",
            "note": null
        },
        {
            "country": "us",
            "certification": "PG",
            "release_date": "2011-04-05",
            "release_type": "physical",
            "note": "Blu-ray"
        },
        {
            "country": "us",
            "certification": "",
            "release_date": "2010-11-30",
            "release_type": "premiere",
            "note": "Los Angeles"
        }
    ])
}

/// `GET /movies/tron-legacy-2010/stats`.
pub fn movie_stats_json() -> Value {
    json!({
        "watchers": 39204,
        "plays": 51033,
        "collectors": 27379,
        "comments": 36,
        "lists": 4561,
        "votes": 7866,
        "favorited": 9
    })
}

pub fn language_json() -> Value {
    json!({"name": "English", "code": "en"})
}

pub fn certification_json() -> Value {
    json!({"name": "PG-13", "slug": "pg-13", "description": "Parents Strongly Cautioned - Ages 13+ Recommended"})
}

pub fn studio_json() -> Value {
    json!({
        "name": "Walt Disney Pictures",
        "country": "us",
        "ids": {"trakt": 2, "slug": "walt-disney-pictures", "tmdb": 2}
    })
}

pub fn video_json() -> Value {
    json!({
        "title": "TRON: Legacy - Official Trailer",
        "url": "https://youtube.com/watch?v=L9szn1QQfas",
        "site": "youtube",
        "type": "trailer",
        "size": 1080,
        "official": true,
        "published_at": "2010-07-22T00:00:00.000Z",
        "country": "us",
        "language": "en"
    })
}

/// `POST /sync/favorites` response.
pub fn favorites_post_json() -> Value {
    json!({
        "added": {"movies": 1, "shows": 1},
        "existing": {"movies": 0, "shows": 0},
        "not_found": {
            "movies": [{"ids": {"imdb": "tt0000111"}}],
            "shows": []
        }
    })
}

/// `POST /sync/favorites/remove` response.
pub fn favorites_remove_json() -> Value {
    json!({
        "deleted": {"movies": 1, "shows": 0},
        "not_found": {
            "movies": [],
            "shows": [{"ids": {"trakt": 9999999}}]
        }
    })
}

/// `POST /sync/watchlist` response.
pub fn watchlist_post_json() -> Value {
    json!({
        "added": {"movies": 1, "shows": 1, "seasons": 1, "episodes": 2},
        "existing": {"movies": 0, "shows": 0, "seasons": 0, "episodes": 0},
        "not_found": {
            "movies": [{"ids": {"imdb": "tt0000111"}}],
            "shows": [],
            "seasons": [],
            "episodes": []
        },
        "list": {
            "updated_at": "2022-04-27T21:40:41.000Z",
            "item_count": 5
        }
    })
}

/// `POST /users/hidden/calendar` response.
pub fn hide_post_json() -> Value {
    json!({
        "added": {"movies": 1, "shows": 2, "seasons": 2, "users": 0},
        "not_found": {
            "movies": [{"ids": {"imdb": "tt0000111"}}],
            "shows": [],
            "seasons": [],
            "users": []
        }
    })
}

/// `POST /users/hidden/calendar/remove` response.
pub fn unhide_post_json() -> Value {
    json!({
        "deleted": {"movies": 1, "shows": 2, "seasons": 2, "users": 1},
        "not_found": {
            "movies": [],
            "shows": [],
            "seasons": [],
            "users": [{"ids": {"slug": "deleted-user"}}]
        }
    })
}

/// `POST /users/sean/lists/star-wars-in-machete-order/items` response.
pub fn list_post_json() -> Value {
    json!({
        "added": {"movies": 1, "shows": 1, "seasons": 1, "episodes": 2, "people": 1},
        "existing": {"movies": 0, "shows": 0, "seasons": 0, "episodes": 0, "people": 0},
        "not_found": {
            "movies": [{"ids": {"imdb": "tt0000111"}}],
            "shows": [],
            "seasons": [],
            "episodes": [],
            "people": []
        }
    })
}

pub fn full_movie() -> Movie {
    Movie {
        tagline: Some("The Game Has Changed.".into()),
        overview: Some("Sam Flynn investigates his father's disappearance.".into()),
        released: NaiveDate::from_ymd_opt(2010, 12, 16),
        runtime: Some(125),
        country: Some("us".into()),
        trailer: Some("https://youtube.com/watch?v=L9szn1QQfas".into()),
        homepage: Some("http://disney.go.com/tron/".into()),
        status: Some("released".into()),
        rating: Some(8.0),
        votes: Some(111),
        comment_count: Some(92),
        updated_at: Some(Utc.with_ymd_and_hms(2014, 7, 23, 3, 21, 46).unwrap()),
        language: Some("en".into()),
        available_translations: Some(vec!["en".into(), "de".into()]),
        genres: Some(vec!["action".into()]),
        certification: Some("PG-13".into()),
        ..Movie::new("TRON: Legacy", Some(2010), tron_ids())
    }
}

pub fn full_show() -> Show {
    let ids = ShowIds {
        trakt: 353,
        slug: "game-of-thrones".into(),
        tvdb: Some(121361),
        imdb: Some("tt0944947".into()),
        tmdb: Some(1399),
        tv_rage: Some(24493),
    };
    Show {
        overview: Some("Seven noble families fight for control of Westeros.".into()),
        first_aired: Some(Utc.with_ymd_and_hms(2011, 4, 18, 1, 0, 0).unwrap()),
        runtime: Some(60),
        certification: Some("TV-MA".into()),
        network: Some("HBO".into()),
        country: Some("us".into()),
        trailer: Some("https://youtube.com/watch?v=bjqEWgDVPe0".into()),
        homepage: Some("http://www.hbo.com/game-of-thrones".into()),
        status: Some("ended".into()),
        rating: Some(9.2),
        votes: Some(111),
        comment_count: Some(92),
        updated_at: Some(Utc.with_ymd_and_hms(2014, 8, 22, 8, 32, 6).unwrap()),
        language: Some("en".into()),
        available_translations: Some(vec!["en".into()]),
        genres: Some(vec!["drama".into(), "fantasy".into()]),
        aired_episodes: Some(73),
        ..Show::new("Game of Thrones", Some(2011), ids)
    }
}

pub fn release(release_type: ReleaseType, note: Option<&str>) -> MovieRelease {
    MovieRelease {
        country: "us".into(),
        certification: "PG".into(),
        release_date: NaiveDate::from_ymd_opt(2010, 12, 17).unwrap(),
        release_type,
        note: note.map(str::to_owned),
    }
}

pub fn favorites_post_result() -> FavoritesItemPostResult {
    FavoritesItemPostResult {
        added: ObjectCount { movies: 1, shows: 1 },
        existing: ObjectCount { movies: 0, shows: 0 },
        not_found: NotFound {
            movies: vec![SyncId::imdb("tt0000111")],
            shows: vec![],
        },
    }
}
