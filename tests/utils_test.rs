use sporlapi::types::{AlbumStats, ArtistAlbum, ArtistImage};
use sporlapi::utils::*;

// Helper function to create a release entry as returned by /artists/{id}/albums
fn create_test_album(name: &str, album_type: &str) -> ArtistAlbum {
    ArtistAlbum {
        name: name.to_string(),
        album_type: album_type.to_string(),
    }
}

fn create_test_image(url: &str) -> ArtistImage {
    ArtistImage {
        url: url.to_string(),
    }
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(200_040), "3:20");
    assert_eq!(format_duration(0), "0:00");

    // Sub-second remainder is truncated
    assert_eq!(format_duration(999), "0:00");
    assert_eq!(format_duration(59_999), "0:59");

    // Seconds are zero-padded
    assert_eq!(format_duration(61_000), "1:01");

    // Minutes are not wrapped into hours
    assert_eq!(format_duration(3_600_000), "60:00");
    assert_eq!(format_duration(7_325_000), "122:05");
}

#[test]
fn test_format_duration_shape() {
    for ms in (0..5_000_000u64).step_by(7_919) {
        let formatted = format_duration(ms);
        let (minutes, seconds) = formatted.split_once(':').unwrap();

        assert_eq!(seconds.len(), 2, "seconds not padded in {formatted}");
        let minutes: u64 = minutes.parse().unwrap();
        let seconds: u64 = seconds.parse().unwrap();
        assert!(seconds < 60);
        assert_eq!(minutes * 60 + seconds, ms / 1000);
    }
}

#[test]
fn test_album_stats() {
    let albums = vec![
        create_test_album("Debut", "album"),
        create_test_album("Lead Single", "single"),
        create_test_album("Second Single", "single"),
        create_test_album("Greatest Hits", "compilation"),
        create_test_album("Sophomore", "album"),
        create_test_album("Third Single", "single"),
    ];

    let stats = album_stats(&albums);

    assert_eq!(
        stats,
        AlbumStats {
            album: 2,
            single: 3,
            compilation: 1,
        }
    );
    assert_eq!(
        (stats.album + stats.single + stats.compilation) as usize,
        albums.len()
    );
}

#[test]
fn test_album_stats_drops_unknown_types() {
    let albums = vec![
        create_test_album("Debut", "album"),
        create_test_album("Feature", "appears_on"),
        create_test_album("Shouting", "ALBUM"), // Exact match only
        create_test_album("Blank", ""),
    ];

    let stats = album_stats(&albums);

    assert_eq!(stats.album, 1);
    assert_eq!(stats.single, 0);
    assert_eq!(stats.compilation, 0);
}

#[test]
fn test_album_stats_empty() {
    assert_eq!(album_stats(&[]), AlbumStats::default());
}

#[test]
fn test_first_image_url() {
    let images = vec![
        create_test_image("https://i.scdn.co/image/large"),
        create_test_image("https://i.scdn.co/image/small"),
    ];
    assert_eq!(first_image_url(&images), "https://i.scdn.co/image/large");

    // No images yields an empty string
    assert_eq!(first_image_url(&[]), "");
}
