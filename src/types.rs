use serde::{Deserialize, Serialize};

// Upstream records. Only the fields the mappers read are declared; each one is
// required, so a missing or mistyped field fails deserialization.

#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackSearchResponse {
    pub tracks: Page<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistSearchResponse<A> {
    pub artists: Page<A>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumSearchResponse {
    pub albums: Page<AlbumRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub popularity: u32,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
    pub images: Vec<ArtistImage>,
    pub genres: Vec<String>,
    pub followers: Followers,
    pub popularity: u32,
}

/// Identity of an artist search hit, for lookups that only need the id.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    pub total: u64,
}

/// Artist picture. Spotify may send null dimensions here, and only the url
/// is used.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistImage {
    pub url: String,
}

/// Album cover with required dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub id: String,
}

/// Entry of `GET /artists/{id}/albums`.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistAlbum {
    pub name: String,
    pub album_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<TopTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTrack {
    pub name: String,
    pub popularity: u32,
}

/// Body of `GET /albums/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub name: String,
    pub artists: Vec<AlbumArtist>,
    pub release_date: String,
    pub total_tracks: u32,
    pub popularity: u32,
    pub album_type: String,
    pub external_urls: ExternalUrls,
    pub images: Vec<Image>,
    pub tracks: Page<AlbumTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumTrack {
    pub name: String,
    pub duration_ms: u64,
    pub track_number: u32,
    pub external_urls: ExternalUrls,
}

// Facade responses.

/// Payload for a lookup that found nothing. Sent with HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotFound {
    pub success: bool,
    pub message: String,
}

impl NotFound {
    pub fn new(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// Either a populated lookup response or a [`NotFound`] payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    NotFound(NotFound),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackResponse {
    pub success: bool,
    pub track: TrackInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrackInfo {
    pub name: String,
    #[serde(rename = "fullTitle")]
    pub full_title: String,
    pub id: String,
    pub url: String,
    pub preview_url: String,
    pub duration: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistShortResponse {
    pub success: bool,
    pub artist: ArtistInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInfo {
    pub name: String,
    pub id: String,
    pub url: String,
    pub image: String,
    pub genres: Vec<String>,
    pub followers: u64,
    pub popularity: u32,
    /// Not exposed by the public Web API, never populated.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub monthly_listeners: Option<u64>,
    pub albums: u32,
    pub singles: u32,
    pub compilations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistFullResponse {
    pub success: bool,
    pub artist: ArtistFullInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArtistFullInfo {
    pub name: String,
    pub top_tracks: Vec<TopTrackInfo>,
    pub albums: Vec<AlbumBasicInfo>,
    pub album_stats: AlbumStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TopTrackInfo {
    pub name: String,
    pub popularity: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumBasicInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumStats {
    pub album: u32,
    pub single: u32,
    pub compilation: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlbumResponse {
    pub success: bool,
    pub album: AlbumInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlbumInfo {
    pub name: String,
    pub artists: Vec<ArtistBasic>,
    pub release_date: String,
    /// Not returned for albums by the Web API, always empty.
    pub genres: Vec<String>,
    pub total_tracks: u32,
    pub popularity: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub images: Vec<ImageInfo>,
    pub tracks: Vec<TrackBasic>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtistBasic {
    pub name: String,
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageInfo {
    pub url: String,
    pub height: u32,
    pub width: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrackBasic {
    pub name: String,
    /// Track length in milliseconds.
    pub duration: u64,
    pub track_number: u32,
    pub url: String,
}
