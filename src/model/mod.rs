//! Core data models for recommendation cycles.
//!
//! Defines the primary entities: [`Song`], [`SongSelection`], and
//! [`PlaylistRecord`]. These are OUR types - catalog and LLM responses get
//! converted into them via adapters, and the pod gateway serializes them
//! out as RDF without ever mutating them.

use chrono::{DateTime, Utc};

/// Maximum number of songs in a selection set.
pub const MAX_SELECTED_SONGS: usize = 5;

/// A catalog or recommended track.
///
/// Optional fields stay `None` when the source didn't provide them, so
/// downstream code can distinguish "unknown" from "known empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Catalog-assigned id, or `rec-<n>` for LLM-derived entries
    pub id: String,
    /// Track title
    pub title: String,
    /// Artist name; `"Unknown"` when unparseable
    pub artist: String,
    /// Cover image URL
    pub cover_image: Option<String>,
    /// 30-second preview clip URL
    pub preview_url: Option<String>,
    /// Album name
    pub in_album: Option<String>,
    /// Formatted duration (e.g. "3:45")
    pub duration: Option<String>,
    /// Language, if known
    pub in_language: Option<String>,
    /// Release date
    pub date_published: Option<String>,
    /// Genre, if known
    pub genre: Option<String>,
}

impl Song {
    /// Create a song with just id, title and artist; descriptive fields unset.
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            cover_image: None,
            preview_url: None,
            in_album: None,
            duration: None,
            in_language: None,
            date_published: None,
            genre: None,
        }
    }
}

/// Ordered set of user-selected songs, capped at [`MAX_SELECTED_SONGS`].
///
/// Adding a duplicate id or a sixth song is a no-op; the set is never
/// silently truncated or reordered.
#[derive(Debug, Clone, Default)]
pub struct SongSelection {
    songs: Vec<Song>,
}

impl SongSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a song. Returns `true` if it was taken, `false` when the set is
    /// full or the id is already present.
    pub fn add(&mut self, song: Song) -> bool {
        if self.songs.len() >= MAX_SELECTED_SONGS {
            return false;
        }
        if self.songs.iter().any(|s| s.id == song.id) {
            return false;
        }
        self.songs.push(song);
        true
    }

    /// Remove a song by id. Returns `true` if something was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.songs.len();
        self.songs.retain(|s| s.id != id);
        self.songs.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }
}

/// The unit persisted to the pod: one checkpoint of a recommendation cycle.
///
/// Built once, handed to the storage gateway, never mutated afterwards.
/// Pre- and post-recommendation checkpoints are separate records with
/// separate identifiers; they are never merged into one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRecord {
    /// Freshly generated per save, unique
    pub identifier: String,
    /// When this record was built
    pub created: DateTime<Utc>,
    /// Free-text user intent, may be empty
    pub description: String,
    /// The user's selection, in order (1-5 entries)
    pub selected_songs: Vec<Song>,
    /// Parsed recommendations; empty for the pre-recommendation checkpoint
    pub recommended_songs: Vec<Song>,
}

impl PlaylistRecord {
    /// Assemble a record from a selection and (optionally) recommendations.
    ///
    /// The caller is responsible for rejecting empty selections before
    /// reaching this point; the builder itself does not fail.
    pub fn build(
        description: impl Into<String>,
        selected_songs: Vec<Song>,
        recommended_songs: Vec<Song>,
    ) -> Self {
        Self {
            identifier: uuid::Uuid::new_v4().to_string(),
            created: Utc::now(),
            description: description.into(),
            selected_songs,
            recommended_songs,
        }
    }
}
