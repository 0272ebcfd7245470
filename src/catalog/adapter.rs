//! Converts catalog DTOs into our domain [`Song`] type.

use super::dto;
use crate::model::Song;

/// Convert a catalog track item into a domain song.
///
/// Absent upstream fields stay `None` rather than becoming empty strings,
/// so record building can tell "unknown" from "known empty".
pub fn to_song(item: dto::TrackItem) -> Song {
    Song {
        id: item.id.to_string(),
        title: item.title,
        artist: item.artist.name,
        cover_image: item.album.as_ref().and_then(|a| a.cover_medium.clone()),
        preview_url: item.preview,
        in_album: item.album.and_then(|a| a.title),
        duration: item.duration.map(format_duration),
        in_language: None,
        date_published: None,
        genre: None,
    }
}

/// Format a duration in seconds as "m:ss".
fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::dto::{AlbumItem, ArtistItem, TrackItem};

    fn item() -> TrackItem {
        TrackItem {
            id: 42,
            title: "Song Title".to_string(),
            artist: ArtistItem {
                name: "Song Artist".to_string(),
            },
            album: Some(AlbumItem {
                title: Some("Song Album".to_string()),
                cover_medium: Some("https://cdn.example.com/42.jpg".to_string()),
            }),
            preview: Some("https://cdn.example.com/42.mp3".to_string()),
            duration: Some(225),
        }
    }

    #[test]
    fn test_full_item_maps_all_fields() {
        let song = to_song(item());
        assert_eq!(song.id, "42");
        assert_eq!(song.title, "Song Title");
        assert_eq!(song.artist, "Song Artist");
        assert_eq!(song.in_album.as_deref(), Some("Song Album"));
        assert_eq!(song.cover_image.as_deref(), Some("https://cdn.example.com/42.jpg"));
        assert_eq!(song.duration.as_deref(), Some("3:45"));
    }

    #[test]
    fn test_absent_fields_stay_none() {
        let mut sparse = item();
        sparse.album = None;
        sparse.preview = None;
        sparse.duration = None;

        let song = to_song(sparse);
        assert!(song.in_album.is_none());
        assert!(song.cover_image.is_none());
        assert!(song.preview_url.is_none());
        assert!(song.duration.is_none());
        assert!(song.genre.is_none());
    }

    #[test]
    fn test_duration_zero_pads_seconds() {
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(60), "1:00");
        assert_eq!(format_duration(9), "0:09");
    }
}
