use crate::{error::ApiError, spotify::SpotifyClient, types::Album};

/// Retrieves the full album record, including its first page of tracks.
pub async fn get_album(client: &SpotifyClient, album_id: &str) -> Result<Album, ApiError> {
    client.get_json(&format!("/albums/{album_id}"), &[]).await
}
