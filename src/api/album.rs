use std::{collections::HashMap, sync::Arc};

use axum::{Extension, Json, extract::Query};

use crate::{
    api::required_param,
    error::ApiError,
    mapping::{self, NO_ALBUM_FOUND},
    spotify::{SpotifyClient, albums, search},
    types::{AlbumResponse, Lookup, NotFound},
};

pub async fn album(
    Query(params): Query<HashMap<String, String>>,
    Extension(spotify): Extension<Arc<SpotifyClient>>,
) -> Result<Json<Lookup<AlbumResponse>>, ApiError> {
    let query = required_param(&params, "q")?;

    let Some(hit) = search::search_albums(&spotify, query, 1)
        .await?
        .into_iter()
        .next()
    else {
        return Ok(Json(Lookup::NotFound(NotFound::new(NO_ALBUM_FOUND))));
    };

    let album = albums::get_album(&spotify, &hit.id).await?;

    Ok(Json(Lookup::Found(mapping::album_response(album))))
}
