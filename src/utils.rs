use crate::types::{AlbumStats, ArtistAlbum, ArtistImage};

/// Formats a millisecond duration as `minutes:seconds`.
///
/// Sub-second remainders are truncated, seconds are zero-padded to two
/// digits and minutes are not wrapped into hours.
///
/// ```
/// assert_eq!(format_duration(200_040), "3:20");
/// assert_eq!(format_duration(0), "0:00");
/// ```
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Tallies an artist's releases by `album_type`.
///
/// Only the exact strings `album`, `single` and `compilation` are counted;
/// anything else (e.g. `appears_on`) is left out of all three buckets.
pub fn album_stats(albums: &[ArtistAlbum]) -> AlbumStats {
    albums
        .iter()
        .fold(AlbumStats::default(), |mut stats, album| {
            match album.album_type.as_str() {
                "album" => stats.album += 1,
                "single" => stats.single += 1,
                "compilation" => stats.compilation += 1,
                _ => {}
            }
            stats
        })
}

/// Url of the first image, or an empty string when there is none.
pub fn first_image_url(images: &[ArtistImage]) -> String {
    images
        .first()
        .map(|image| image.url.clone())
        .unwrap_or_default()
}
