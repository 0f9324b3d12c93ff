use crate::{
    error::ApiError,
    spotify::SpotifyClient,
    types::{ArtistAlbum, Page, TopTrack, TopTracksResponse},
};

/// Retrieves the first page of an artist's releases (`GET /artists/{id}/albums`).
///
/// Spotify's default page size applies; releases beyond the first page are
/// not fetched.
pub async fn get_artist_albums(
    client: &SpotifyClient,
    artist_id: &str,
) -> Result<Vec<ArtistAlbum>, ApiError> {
    let path = format!("/artists/{artist_id}/albums");
    let res: Page<ArtistAlbum> = client.get_json(&path, &[]).await?;
    Ok(res.items)
}

/// Retrieves an artist's top tracks in the client's configured market.
pub async fn get_artist_top_tracks(
    client: &SpotifyClient,
    artist_id: &str,
) -> Result<Vec<TopTrack>, ApiError> {
    let path = format!("/artists/{artist_id}/top-tracks");
    let res: TopTracksResponse = client
        .get_json(&path, &[("market", client.market())])
        .await?;
    Ok(res.tracks)
}
