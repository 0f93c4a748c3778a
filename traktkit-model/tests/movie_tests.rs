mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::{
    full_movie, full_show, movie_full_json, movie_min_json, show_min_json, tron_ids, video_json,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use traktkit_model::{
    DecodeError, FavoritedMovie, FavoritedShow, Movie, MovieStats, Show, Studio, StudioIds, Video,
    decode, decode_list, decode_value, encode, encode_value,
};

// ── Movie ────────────────────────────────────────────────────────

#[test]
fn decode_minimal_movie() {
    let movie: Movie = decode_value(&movie_min_json()).unwrap();
    assert_eq!(movie, Movie::new("TRON: Legacy", Some(2010), tron_ids()));
}

#[test]
fn minimal_movie_reencodes_without_extended_keys() {
    let movie = Movie::new("TRON: Legacy", Some(2010), tron_ids());
    assert_eq!(encode_value(&movie).unwrap(), movie_min_json());
}

#[test]
fn decode_full_movie() {
    let movie: Movie = decode_value(&movie_full_json()).unwrap();
    assert_eq!(movie.tagline.as_deref(), Some("The Game Has Changed."));
    assert_eq!(movie.released, NaiveDate::from_ymd_opt(2010, 12, 16));
    assert_eq!(movie.runtime, Some(125));
    assert_eq!(movie.trailer, None);
    assert_eq!(movie.rating, Some(8.0));
    assert_eq!(
        movie.updated_at,
        Some(Utc.with_ymd_and_hms(2014, 7, 23, 3, 21, 46).unwrap())
    );
    assert_eq!(movie.available_translations, Some(vec!["en".to_owned()]));
    assert_eq!(movie.genres, Some(vec!["action".to_owned()]));
    assert_eq!(movie.certification.as_deref(), Some("PG-13"));
}

#[test]
fn null_year_is_none() {
    let mut payload = movie_min_json();
    payload["year"] = json!(null);
    let movie: Movie = decode_value(&payload).unwrap();
    assert_eq!(movie.year, None);
}

#[test]
fn movie_without_ids_fails() {
    let mut payload = movie_min_json();
    payload.as_object_mut().unwrap().remove("ids");
    let err = decode_value::<Movie>(&payload).unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), "Movie.ids at /ids");
}

#[test]
fn movie_ids_without_slug_fails_with_nested_path() {
    let mut payload = movie_min_json();
    payload["ids"].as_object_mut().unwrap().remove("slug");
    let err = decode_value::<Movie>(&payload).unwrap_err();
    assert!(matches!(err, DecodeError::MissingField { .. }));
    assert_eq!(err.path().unwrap().to_string(), "MovieIds.slug at /ids/slug");
}

#[test]
fn integer_rating_is_accepted() {
    let mut payload = movie_full_json();
    payload["rating"] = json!(8);
    let movie: Movie = decode_value(&payload).unwrap();
    assert_eq!(movie.rating, Some(8.0));
}

#[test]
fn malformed_released_date_fails() {
    let mut payload = movie_full_json();
    payload["released"] = json!("December 16, 2010");
    let err = decode_value::<Movie>(&payload).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedDate { .. }));
}

#[test]
fn malformed_updated_at_fails() {
    let mut payload = movie_full_json();
    payload["updated_at"] = json!("yesterday");
    let err = decode_value::<Movie>(&payload).unwrap_err();
    assert_eq!(err.path().unwrap().field(), Some("updated_at"));
}

#[test]
fn full_movie_roundtrips_through_bytes() {
    let movie = full_movie();
    let decoded: Movie = decode(&encode(&movie).unwrap()).unwrap();
    assert_eq!(decoded, movie);
}

#[test]
fn tiny_rating_is_exact_through_bytes() {
    let movie = Movie {
        rating: Some(1.0715660391465826e-75),
        ..full_movie()
    };
    let decoded: Movie = decode(&encode(&movie).unwrap()).unwrap();
    assert_eq!(decoded.rating, movie.rating);
    assert_eq!(
        decoded.rating.map(f64::to_bits),
        Some(1.0715660391465826e-75f64.to_bits())
    );
}

#[test]
fn timestamps_encode_with_millis() {
    let value = encode_value(&full_movie()).unwrap();
    assert_eq!(value["updated_at"], json!("2014-07-23T03:21:46.000Z"));
    assert_eq!(value["released"], json!("2010-12-16"));
}

#[test]
fn non_finite_rating_cannot_encode() {
    let movie = Movie {
        rating: Some(f64::NAN),
        ..full_movie()
    };
    assert!(encode_value(&movie).is_err());
}

// ── Favorites and stats ──────────────────────────────────────────

#[test]
fn decode_favorited_movies() {
    let payload = json!([
        {"user_count": 155291, "movie": movie_min_json()},
        {"user_count": 0, "movie": movie_min_json()}
    ]);
    let bytes = serde_json::to_vec(&payload).unwrap();
    let favorites: Vec<FavoritedMovie> = decode_list(&bytes).unwrap();
    assert_eq!(favorites[0].user_count, 155291);
    assert_eq!(favorites[1].movie.ids.slug, "tron-legacy-2010");
}

#[test]
fn favorited_movie_nested_error_path() {
    let mut inner = movie_min_json();
    inner["ids"]["trakt"] = json!("343");
    let payload = json!({"user_count": 1, "movie": inner});
    let err = decode_value::<FavoritedMovie>(&payload).unwrap_err();
    let path = err.path().unwrap();
    assert_eq!(path.entity(), "MovieIds");
    assert_eq!(path.pointer(), "/movie/ids/trakt");
}

#[test]
fn decode_movie_stats() {
    let payload = json!({
        "watchers": 39204,
        "plays": 51033,
        "collectors": 27379,
        "comments": 36,
        "lists": 4561,
        "votes": 7866,
        "favorited": 9
    });
    let stats: MovieStats = decode_value(&payload).unwrap();
    assert_eq!(
        stats,
        MovieStats {
            watchers: 39204,
            plays: 51033,
            collectors: 27379,
            comments: 36,
            lists: 4561,
            votes: 7866,
            favorited: 9,
        }
    );
    assert_eq!(encode_value(&stats).unwrap(), payload);
}

#[test]
fn movie_stats_missing_counter_fails() {
    let payload = json!({
        "watchers": 1,
        "plays": 1,
        "collectors": 1,
        "comments": 1,
        "lists": 1,
        "votes": 1
    });
    let err = decode_value::<MovieStats>(&payload).unwrap_err();
    assert_eq!(err.path().unwrap().field(), Some("favorited"));
}

// ── Show ─────────────────────────────────────────────────────────

#[test]
fn decode_minimal_show_maps_tvrage() {
    let mut payload = show_min_json();
    payload["ids"]["tvrage"] = json!(24493);
    let show: Show = decode_value(&payload).unwrap();
    assert_eq!(show.ids.tv_rage, Some(24493));
    assert_eq!(show.ids.tvdb, Some(121361));
}

#[test]
fn null_tvrage_is_omitted_on_encode() {
    let show: Show = decode_value(&show_min_json()).unwrap();
    assert_eq!(show.ids.tv_rage, None);
    let value = encode_value(&show).unwrap();
    assert!(value["ids"].get("tvrage").is_none());
    assert!(value["ids"].get("tv_rage").is_none());
}

#[test]
fn full_show_roundtrips() {
    let show = full_show();
    let value = encode_value(&show).unwrap();
    assert_eq!(value["first_aired"], json!("2011-04-18T01:00:00.000Z"));
    assert_eq!(value["ids"]["tvrage"], json!(24493));
    let decoded: Show = decode_value(&value).unwrap();
    assert_eq!(decoded, show);
}

#[test]
fn decode_favorited_show() {
    let payload = json!({"user_count": 42, "show": show_min_json()});
    let favorite: FavoritedShow = decode_value(&payload).unwrap();
    assert_eq!(favorite.user_count, 42);
    assert_eq!(favorite.show.title, "Game of Thrones");
}

// ── Studio and video ─────────────────────────────────────────────

#[test]
fn decode_studio() {
    let payload = json!({
        "name": "Walt Disney Pictures",
        "country": "us",
        "ids": {"trakt": 2, "slug": "walt-disney-pictures", "tmdb": 2}
    });
    let studio: Studio = decode_value(&payload).unwrap();
    assert_eq!(
        studio,
        Studio {
            name: "Walt Disney Pictures".into(),
            country: "us".into(),
            ids: StudioIds {
                trakt: 2,
                slug: "walt-disney-pictures".into(),
                tmdb: 2,
            },
        }
    );
    assert_eq!(encode_value(&studio).unwrap(), payload);
}

#[test]
fn studio_ids_require_tmdb() {
    let payload = json!({
        "name": "Walt Disney Pictures",
        "country": "us",
        "ids": {"trakt": 2, "slug": "walt-disney-pictures"}
    });
    let err = decode_value::<Studio>(&payload).unwrap_err();
    assert_eq!(err.path().unwrap().pointer(), "/ids/tmdb");
}

#[test]
fn decode_video_maps_type_key() {
    let video: Video = decode_value(&video_json()).unwrap();
    assert_eq!(video.video_type, "trailer");
    assert!(video.official);
    assert_eq!(
        video.published_at,
        Utc.with_ymd_and_hms(2010, 7, 22, 0, 0, 0).unwrap()
    );
    assert_eq!(encode_value(&video).unwrap(), video_json());
}

#[test]
fn video_official_must_be_bool() {
    let mut payload = video_json();
    payload["official"] = json!("yes");
    let err = decode_value::<Video>(&payload).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TypeMismatch {
            expected: "bool",
            actual: "string",
            ..
        }
    ));
}
