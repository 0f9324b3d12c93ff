//! Reshapes upstream records into the facade's response payloads.
//!
//! All functions here are pure. The upstream records were already validated
//! when they were deserialized, so mapping itself cannot fail.

use crate::{
    types::{
        Album, AlbumBasicInfo, AlbumInfo, AlbumResponse, Artist, ArtistAlbum, ArtistBasic,
        ArtistFullInfo, ArtistFullResponse, ArtistInfo, ArtistRef, ArtistShortResponse,
        ImageInfo, TopTrack, TopTrackInfo, Track, TrackBasic, TrackInfo, TrackResponse,
    },
    utils::{album_stats, first_image_url, format_duration},
};

pub const NO_TRACKS_FOUND: &str = "No tracks found";
pub const NO_ARTIST_FOUND: &str = "No artist found";
pub const NO_ALBUM_FOUND: &str = "No album found";

/// Track lookup payload with the duration rendered as `m:ss`.
pub fn track_response(track: Track) -> TrackResponse {
    TrackResponse {
        success: true,
        track: TrackInfo {
            duration: format_duration(track.duration_ms),
            duration_ms: track.duration_ms,
            popularity: track.popularity,
            url: track.external_urls.spotify,
            id: track.id,
            name: track.name,
            ..TrackInfo::default()
        },
    }
}

/// Artist summary. `albums` is the artist's release list, used only for the
/// per-type counters.
pub fn artist_short_response(artist: Artist, albums: &[ArtistAlbum]) -> ArtistShortResponse {
    let stats = album_stats(albums);

    ArtistShortResponse {
        success: true,
        artist: ArtistInfo {
            image: first_image_url(&artist.images),
            name: artist.name,
            id: artist.id,
            url: artist.external_urls.spotify,
            genres: artist.genres,
            followers: artist.followers.total,
            popularity: artist.popularity,
            monthly_listeners: None,
            albums: stats.album,
            singles: stats.single,
            compilations: stats.compilation,
        },
    }
}

/// Artist detail payload: top tracks, release list and per-type counters.
pub fn artist_full_response(
    artist: ArtistRef,
    top_tracks: Vec<TopTrack>,
    albums: Vec<ArtistAlbum>,
) -> ArtistFullResponse {
    let album_stats = album_stats(&albums);

    ArtistFullResponse {
        success: true,
        artist: ArtistFullInfo {
            name: artist.name,
            top_tracks: top_tracks
                .into_iter()
                .map(|t| TopTrackInfo {
                    name: t.name,
                    popularity: t.popularity,
                })
                .collect(),
            albums: albums
                .into_iter()
                .map(|a| AlbumBasicInfo {
                    name: a.name,
                    kind: a.album_type,
                })
                .collect(),
            album_stats,
        },
    }
}

/// Album detail payload with artists, cover images and track list.
pub fn album_response(album: Album) -> AlbumResponse {
    AlbumResponse {
        success: true,
        album: AlbumInfo {
            name: album.name,
            artists: album
                .artists
                .into_iter()
                .map(|a| ArtistBasic {
                    name: a.name,
                    id: a.id,
                    url: a.external_urls.spotify,
                })
                .collect(),
            release_date: album.release_date,
            genres: Vec::new(),
            total_tracks: album.total_tracks,
            popularity: album.popularity,
            kind: album.album_type,
            url: album.external_urls.spotify,
            images: album
                .images
                .into_iter()
                .map(|i| ImageInfo {
                    url: i.url,
                    height: i.height,
                    width: i.width,
                })
                .collect(),
            tracks: album
                .tracks
                .items
                .into_iter()
                .map(|t| TrackBasic {
                    name: t.name,
                    duration: t.duration_ms,
                    track_number: t.track_number,
                    url: t.external_urls.spotify,
                })
                .collect(),
        },
    }
}
