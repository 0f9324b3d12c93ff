use std::{collections::HashMap, sync::Arc};

use axum::{Extension, Json, extract::Query};

use crate::{
    api::required_param,
    error::ApiError,
    mapping::{self, NO_ARTIST_FOUND},
    spotify::{SpotifyClient, artists, search},
    types::{Artist, ArtistFullResponse, ArtistRef, ArtistShortResponse, Lookup, NotFound},
};

/// Artist summary: search hit plus per-type release counters taken from the
/// artist's albums.
pub async fn artist_short(
    Query(params): Query<HashMap<String, String>>,
    Extension(spotify): Extension<Arc<SpotifyClient>>,
) -> Result<Json<Lookup<ArtistShortResponse>>, ApiError> {
    let query = required_param(&params, "q")?;

    let Some(artist) = search::search_artists::<Artist>(&spotify, query, 1)
        .await?
        .into_iter()
        .next()
    else {
        return Ok(Json(Lookup::NotFound(NotFound::new(NO_ARTIST_FOUND))));
    };

    let albums = artists::get_artist_albums(&spotify, &artist.id).await?;

    Ok(Json(Lookup::Found(mapping::artist_short_response(
        artist, &albums,
    ))))
}

/// Artist detail: top tracks and the release list with counters.
pub async fn artist_full(
    Query(params): Query<HashMap<String, String>>,
    Extension(spotify): Extension<Arc<SpotifyClient>>,
) -> Result<Json<Lookup<ArtistFullResponse>>, ApiError> {
    let query = required_param(&params, "q")?;

    let Some(artist) = search::search_artists::<ArtistRef>(&spotify, query, 1)
        .await?
        .into_iter()
        .next()
    else {
        return Ok(Json(Lookup::NotFound(NotFound::new(NO_ARTIST_FOUND))));
    };

    let top_tracks = artists::get_artist_top_tracks(&spotify, &artist.id).await?;
    let albums = artists::get_artist_albums(&spotify, &artist.id).await?;

    Ok(Json(Lookup::Found(mapping::artist_full_response(
        artist, top_tracks, albums,
    ))))
}
