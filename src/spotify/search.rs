use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    spotify::SpotifyClient,
    types::{AlbumRef, AlbumSearchResponse, ArtistSearchResponse, Track, TrackSearchResponse},
};

/// Searches tracks matching `query` and returns at most `limit` hits.
///
/// Calls `GET /search?q={query}&type=track&limit={limit}`. The query is
/// percent-encoded by the HTTP client.
pub async fn search_tracks(
    client: &SpotifyClient,
    query: &str,
    limit: u32,
) -> Result<Vec<Track>, ApiError> {
    let limit = limit.to_string();
    let res: TrackSearchResponse = client
        .get_json(
            "/search",
            &[("q", query), ("type", "track"), ("limit", limit.as_str())],
        )
        .await?;

    Ok(res.tracks.items)
}

/// Searches artists matching `query`.
///
/// Generic over the artist record so callers that only need an id and a
/// name don't require the full artist object to be present.
pub async fn search_artists<A: DeserializeOwned>(
    client: &SpotifyClient,
    query: &str,
    limit: u32,
) -> Result<Vec<A>, ApiError> {
    let limit = limit.to_string();
    let res: ArtistSearchResponse<A> = client
        .get_json(
            "/search",
            &[("q", query), ("type", "artist"), ("limit", limit.as_str())],
        )
        .await?;

    Ok(res.artists.items)
}

/// Searches albums matching `query`, returning only the ids of the hits.
pub async fn search_albums(
    client: &SpotifyClient,
    query: &str,
    limit: u32,
) -> Result<Vec<AlbumRef>, ApiError> {
    let limit = limit.to_string();
    let res: AlbumSearchResponse = client
        .get_json(
            "/search",
            &[("q", query), ("type", "album"), ("limit", limit.as_str())],
        )
        .await?;

    Ok(res.albums.items)
}
