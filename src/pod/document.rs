//! Mapping between [`PlaylistRecord`] and its Turtle document.
//!
//! One subject carries the playlist-level data (identifier, creation time,
//! description, links to song subjects); each song gets its own subject
//! with literal properties for whatever descriptive fields are present.

use chrono::{DateTime, Utc};

use super::turtle::{self, Triple, TurtleWriter};
use super::vocab;
use crate::model::{PlaylistRecord, Song};

/// Serialize a record into the Turtle document stored at `location`.
pub fn record_to_turtle(record: &PlaylistRecord, location: &str) -> String {
    let mut writer = TurtleWriter::new();
    let playlist = format!("{location}#playlist");

    writer.iri(&playlist, vocab::RDF_TYPE, vocab::app::SESSION);
    writer.literal(&playlist, vocab::schema::IDENTIFIER, &record.identifier);
    writer.literal(&playlist, vocab::dcterms::CREATED, &record.created.to_rfc3339());
    if !record.description.is_empty() {
        writer.literal(&playlist, vocab::app::DESCRIPTION, &record.description);
    }

    for (i, song) in record.selected_songs.iter().enumerate() {
        let subject = format!("{location}#sel-{i}");
        writer.iri(&playlist, vocab::app::SELECTED, &subject);
        write_song(&mut writer, &subject, song);
    }
    for (i, song) in record.recommended_songs.iter().enumerate() {
        let subject = format!("{location}#rec-{i}");
        writer.iri(&playlist, vocab::app::RECOMMENDED, &subject);
        write_song(&mut writer, &subject, song);
    }

    writer.to_turtle()
}

fn write_song(writer: &mut TurtleWriter, subject: &str, song: &Song) {
    writer.iri(subject, vocab::RDF_TYPE, vocab::schema::MUSIC_RECORDING);
    writer.literal(subject, vocab::schema::IDENTIFIER, &song.id);
    writer.literal(subject, vocab::schema::NAME, &song.title);
    writer.literal(subject, vocab::schema::BY_ARTIST, &song.artist);
    writer.opt_literal(subject, vocab::schema::THUMBNAIL, song.cover_image.as_deref());
    writer.opt_literal(subject, vocab::app::PREVIEW, song.preview_url.as_deref());
    writer.opt_literal(subject, vocab::schema::IN_ALBUM, song.in_album.as_deref());
    writer.opt_literal(subject, vocab::schema::DURATION, song.duration.as_deref());
    writer.opt_literal(subject, vocab::schema::IN_LANGUAGE, song.in_language.as_deref());
    writer.opt_literal(subject, vocab::schema::DATE_PUBLISHED, song.date_published.as_deref());
    writer.opt_literal(subject, vocab::schema::GENRE, song.genre.as_deref());
}

/// Rebuild a record from a scanned document.
///
/// Tolerant by design: missing literals fall back to placeholders rather
/// than failing, since pod documents may have been edited by other apps.
pub fn record_from_document(location: &str, document: &str) -> PlaylistRecord {
    let triples = turtle::scan(document);
    let playlist = format!("{location}#playlist");

    let identifier = turtle::literal_of(&triples, &playlist, vocab::schema::IDENTIFIER)
        .map(str::to_string)
        .unwrap_or_else(|| location.to_string());
    let created = turtle::literal_of(&triples, &playlist, vocab::dcterms::CREATED)
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);
    let description = turtle::literal_of(&triples, &playlist, vocab::app::DESCRIPTION)
        .unwrap_or_default()
        .to_string();

    PlaylistRecord {
        identifier,
        created,
        description,
        selected_songs: read_songs(&triples, location, "sel"),
        recommended_songs: read_songs(&triples, location, "rec"),
    }
}

fn read_songs(triples: &[Triple], location: &str, kind: &str) -> Vec<Song> {
    let mut songs = Vec::new();
    for i in 0.. {
        let subject = format!("{location}#{kind}-{i}");
        if !triples.iter().any(|t| t.subject == subject) {
            break;
        }
        let get = |predicate| turtle::literal_of(triples, &subject, predicate);
        songs.push(Song {
            id: get(vocab::schema::IDENTIFIER).unwrap_or("unknown").to_string(),
            title: get(vocab::schema::NAME).unwrap_or("Unknown").to_string(),
            artist: get(vocab::schema::BY_ARTIST).unwrap_or("Unknown").to_string(),
            cover_image: get(vocab::schema::THUMBNAIL).map(str::to_string),
            preview_url: get(vocab::app::PREVIEW).map(str::to_string),
            in_album: get(vocab::schema::IN_ALBUM).map(str::to_string),
            duration: get(vocab::schema::DURATION).map(str::to_string),
            in_language: get(vocab::schema::IN_LANGUAGE).map(str::to_string),
            date_published: get(vocab::schema::DATE_PUBLISHED).map(str::to_string),
            genre: get(vocab::schema::GENRE).map(str::to_string),
        });
    }
    songs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PlaylistRecord {
        let mut selected = Song::new("3135556", "Harder, Better, Faster, Stronger", "Daft Punk");
        selected.in_album = Some("Discovery".to_string());
        selected.duration = Some("3:44".to_string());
        let recommended = Song::new("rec-0", "One More Time", "Daft Punk");
        PlaylistRecord::build("for studying", vec![selected], vec![recommended])
    }

    const LOCATION: &str = "https://user.pod.example/recommendations/abc-playlist.ttl";

    #[test]
    fn test_document_round_trip() {
        let original = record();
        let document = record_to_turtle(&original, LOCATION);
        let restored = record_from_document(LOCATION, &document);

        assert_eq!(restored.identifier, original.identifier);
        assert_eq!(restored.description, "for studying");
        assert_eq!(restored.selected_songs.len(), 1);
        assert_eq!(restored.selected_songs[0].title, "Harder, Better, Faster, Stronger");
        assert_eq!(restored.selected_songs[0].in_album.as_deref(), Some("Discovery"));
        assert!(restored.selected_songs[0].genre.is_none());
        assert_eq!(restored.recommended_songs.len(), 1);
        assert_eq!(restored.recommended_songs[0].artist, "Daft Punk");
    }

    #[test]
    fn test_pre_checkpoint_has_no_recommended_subjects() {
        let record = PlaylistRecord::build("", vec![Song::new("1", "A", "B")], vec![]);
        let document = record_to_turtle(&record, LOCATION);
        assert!(!document.contains("#rec-0"));
        // Empty description stays absent rather than becoming ""
        assert!(!document.contains(vocab::app::DESCRIPTION));
    }

    #[test]
    fn test_song_order_survives_round_trip() {
        let songs: Vec<Song> = (0..5)
            .map(|n| Song::new(format!("id-{n}"), format!("T{n}"), format!("A{n}")))
            .collect();
        let record = PlaylistRecord::build("d", songs.clone(), vec![]);
        let restored = record_from_document(LOCATION, &record_to_turtle(&record, LOCATION));
        assert_eq!(restored.selected_songs, songs);
    }

    #[test]
    fn test_foreign_document_degrades_gracefully() {
        let restored = record_from_document(LOCATION, "<https://x/#s> <https://y/p> \"z\" .");
        assert_eq!(restored.identifier, LOCATION);
        assert!(restored.selected_songs.is_empty());
        assert!(restored.description.is_empty());
    }
}
