//! Turns unstructured LLM reply text into an ordered list of song stubs.
//!
//! The parser is pure and never fails: lines it cannot make sense of
//! degrade to a song with the whole line as title and `"Unknown"` as
//! artist. Downstream persistence relies on always getting a usable
//! sequence back, so keep that policy intact.

use crate::model::Song;

/// Artist placeholder for lines with no recognizable separator
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Parse reply text into songs, one per non-empty line.
///
/// Each kept line is matched against
/// `<optional ordinal and punctuation><title> by <artist>` with a
/// case-insensitive separator keyword. Ids are assigned as `rec-<n>` with
/// `n` the 0-based index among kept lines.
pub fn parse(text: &str) -> Vec<Song> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| parse_line(index, line))
        .collect()
}

fn parse_line(index: usize, line: &str) -> Song {
    let body = strip_ordinal(line);

    if let Some((title, artist)) = split_on_by(body) {
        let title = title.trim();
        let artist = artist.trim();
        if !title.is_empty() && !artist.is_empty() {
            return Song::new(format!("rec-{index}"), title, artist);
        }
    }

    Song::new(format!("rec-{index}"), body.trim(), UNKNOWN_ARTIST)
}

/// Strip a leading list marker: either `<digits><punct>` ("1." / "2)" /
/// "3:" / "4 -") or a lone bullet. Titles that merely start with digits
/// ("99 Luftballons") are left alone.
fn strip_ordinal(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < line.len() {
        let trimmed = rest.trim_start();
        if let Some(stripped) = trimmed
            .strip_prefix('.')
            .or_else(|| trimmed.strip_prefix(')'))
            .or_else(|| trimmed.strip_prefix(':'))
            .or_else(|| trimmed.strip_prefix('-'))
        {
            return stripped.trim_start();
        }
        // Digits with no list punctuation are part of the title
        return line;
    }
    // Bullet markers without an ordinal
    if let Some(stripped) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return stripped.trim_start();
    }
    line
}

/// Split on the last case-insensitive `" by "`, so titles that themselves
/// contain "by" ("Stand by Me by Ben E. King") keep their artist.
fn split_on_by(line: &str) -> Option<(&str, &str)> {
    const SEP: &[u8] = b" by ";
    let bytes = line.as_bytes();
    let mut found = None;
    let mut i = 0;
    while i + SEP.len() <= bytes.len() {
        if bytes[i..i + SEP.len()].eq_ignore_ascii_case(SEP) {
            found = Some(i);
        }
        i += 1;
    }
    found.map(|i| (&line[..i], &line[i + SEP.len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbered_list() {
        let songs = parse("1. Bohemian Rhapsody by Queen\n2. Imagine by John Lennon");
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].title, "Bohemian Rhapsody");
        assert_eq!(songs[0].artist, "Queen");
        assert_eq!(songs[1].title, "Imagine");
        assert_eq!(songs[1].artist, "John Lennon");
    }

    #[test]
    fn test_parse_assigns_rec_ids_over_kept_lines() {
        let songs = parse("\n\nFirst by A\n\nSecond by B\n");
        assert_eq!(songs[0].id, "rec-0");
        assert_eq!(songs[1].id, "rec-1");
    }

    #[test]
    fn test_freeform_line_gets_unknown_artist() {
        let songs = parse("Some freeform line with no separator");
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Some freeform line with no separator");
        assert_eq!(songs[0].artist, UNKNOWN_ARTIST);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_separator_is_case_insensitive() {
        let songs = parse("Imagine BY John Lennon");
        assert_eq!(songs[0].title, "Imagine");
        assert_eq!(songs[0].artist, "John Lennon");
    }

    #[test]
    fn test_title_containing_by_uses_last_separator() {
        let songs = parse("Stand by Me by Ben E. King");
        assert_eq!(songs[0].title, "Stand by Me");
        assert_eq!(songs[0].artist, "Ben E. King");
    }

    #[test]
    fn test_numeric_title_is_not_an_ordinal() {
        let songs = parse("99 Luftballons by Nena");
        assert_eq!(songs[0].title, "99 Luftballons");
        assert_eq!(songs[0].artist, "Nena");
    }

    #[test]
    fn test_bullet_markers_stripped() {
        let songs = parse("- Hurt by Johnny Cash\n* One by U2");
        assert_eq!(songs[0].title, "Hurt");
        assert_eq!(songs[1].title, "One");
        assert_eq!(songs[1].artist, "U2");
    }

    #[test]
    fn test_paren_and_dash_ordinals() {
        let songs = parse("1) Yesterday by The Beatles\n2 - Help by The Beatles");
        assert_eq!(songs[0].title, "Yesterday");
        assert_eq!(songs[1].title, "Help");
    }

    #[test]
    fn test_dangling_separator_degrades() {
        // "by" with nothing after it isn't a usable split
        let songs = parse("Trailing by ");
        assert_eq!(songs[0].title, "Trailing by");
        assert_eq!(songs[0].artist, UNKNOWN_ARTIST);
    }
}
