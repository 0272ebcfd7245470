//! Catalog search API Data Transfer Objects
//!
//! The catalog search endpoint returns a JSON envelope with a `data` array
//! of track items. Each item carries a numeric id, title, nested artist and
//! album objects, and an optional 30-second preview URL. No API key is
//! required.

use serde::{Deserialize, Serialize};

/// Top-level search response envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Matching tracks, best match first
    pub data: Vec<TrackItem>,
}

/// A single track in the search results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrackItem {
    /// Catalog-assigned numeric id
    pub id: u64,
    /// Track title
    pub title: String,
    /// Artist for this track
    pub artist: ArtistItem,
    /// Album the track appears on
    pub album: Option<AlbumItem>,
    /// URL to a 30-second preview clip
    pub preview: Option<String>,
    /// Track duration in seconds
    pub duration: Option<u64>,
}

/// Artist object nested in a track item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistItem {
    /// Artist display name
    pub name: String,
}

/// Album object nested in a track item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumItem {
    /// Album title
    pub title: Option<String>,
    /// Medium-size cover image URL
    pub cover_medium: Option<String>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "data": [{
                "id": 3135556,
                "title": "Harder, Better, Faster, Stronger",
                "artist": { "name": "Daft Punk" },
                "album": {
                    "title": "Discovery",
                    "cover_medium": "https://cdn.example.com/cover/3135556-250.jpg"
                },
                "preview": "https://cdn.example.com/preview/3135556.mp3",
                "duration": 224
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].artist.name, "Daft Punk");
        assert_eq!(response.data[0].duration, Some(224));
    }

    #[test]
    fn test_parse_minimal_item() {
        // Some catalog entries omit album, preview and duration entirely
        let json = r#"{
            "data": [{
                "id": 1,
                "title": "Obscure B-Side",
                "artist": { "name": "Nobody" }
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse minimal item");
        assert!(response.data[0].album.is_none());
        assert!(response.data[0].preview.is_none());
    }

    #[test]
    fn test_parse_empty_results() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"data": []}"#).expect("Should parse empty results");
        assert!(response.data.is_empty());
    }
}
