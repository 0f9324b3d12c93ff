use std::{collections::HashMap, sync::Arc};

use axum::{Extension, Json, extract::Query};

use crate::{
    api::required_param,
    error::ApiError,
    mapping::{self, NO_TRACKS_FOUND},
    spotify::{SpotifyClient, search},
    types::{Lookup, NotFound, TrackResponse},
};

pub async fn songs(
    Query(params): Query<HashMap<String, String>>,
    Extension(spotify): Extension<Arc<SpotifyClient>>,
) -> Result<Json<Lookup<TrackResponse>>, ApiError> {
    let query = required_param(&params, "q")?;

    let Some(track) = search::search_tracks(&spotify, query, 1)
        .await?
        .into_iter()
        .next()
    else {
        return Ok(Json(Lookup::NotFound(NotFound::new(NO_TRACKS_FOUND))));
    };

    Ok(Json(Lookup::Found(mapping::track_response(track))))
}
