//! # API Module
//!
//! HTTP route handlers of the facade. Each lookup handler reads the `q`
//! query parameter, runs one search against Spotify, follows up with detail
//! lookups where the response needs them, and answers with the simplified
//! JSON shape from [`crate::types`].
//!
//! ## Endpoints
//!
//! - [`songs`] - `GET /spotify/songs?q=` first matching track
//! - [`artist_short`] - `GET /spotify/artist/short?q=` artist summary with release counters
//! - [`artist_full`] - `GET /spotify/artist/full?q=` top tracks and releases
//! - [`album`] - `GET /spotify/album?q=` album detail with track list
//! - [`health`] - `GET /health` liveness and version
//!
//! A search without hits is answered with HTTP 200 and
//! `{"success": false, "message": ...}`. Failures are [`ApiError`]s and render
//! as plain-text bodies with the matching status.
//!
//! Handlers receive the shared [`crate::spotify::SpotifyClient`] through an
//! axum `Extension`.

mod album;
mod artist;
mod health;
mod songs;

use std::collections::HashMap;

pub use album::album;
pub use artist::{artist_full, artist_short};
pub use health::health;
pub use songs::songs;

use crate::error::ApiError;

/// Returns the non-empty value of query parameter `name`.
fn required_param<'a>(params: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ApiError> {
    params
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::missing_query(name))
}
