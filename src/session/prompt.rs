//! Deterministic prompt construction for the recommendation request.
//!
//! The format is fixed so that identical inputs always produce identical
//! prompts, and so that the reply format we ask for is the one
//! [`parser`](crate::recommend::parser) knows how to read back.

use crate::model::Song;

/// How many recommendations to ask for
const RECOMMENDATION_LIMIT: usize = 10;

/// Placeholder when the user gave no description
const NO_NOTES: &str = "N/A";

/// Build the prompt for a selection and free-text description.
///
/// Songs are numbered from 1 in selection order; an empty (or
/// whitespace-only) description is substituted with `"N/A"`.
pub fn build_prompt(songs: &[Song], description: &str) -> String {
    let mut prompt = String::from("I like the following songs:\n");
    for (i, song) in songs.iter().enumerate() {
        prompt.push_str(&format!("{}. {} by {}\n", i + 1, song.title, song.artist));
    }

    let notes = description.trim();
    prompt.push_str(&format!(
        "Listener notes: {}\n",
        if notes.is_empty() { NO_NOTES } else { notes }
    ));
    prompt.push_str(&format!(
        "Recommend {RECOMMENDATION_LIMIT} similar songs. \
         Reply with one song per line, formatted exactly as: Title by Artist"
    ));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn songs() -> Vec<Song> {
        vec![
            Song::new("1", "Bohemian Rhapsody", "Queen"),
            Song::new("2", "Imagine", "John Lennon"),
        ]
    }

    #[test]
    fn test_songs_numbered_from_one_in_order() {
        let prompt = build_prompt(&songs(), "for studying");
        let first = prompt.find("1. Bohemian Rhapsody by Queen").unwrap();
        let second = prompt.find("2. Imagine by John Lennon").unwrap();
        assert!(first < second);
        assert!(prompt.contains("Listener notes: for studying"));
    }

    #[test]
    fn test_empty_description_becomes_na() {
        let prompt = build_prompt(&songs(), "");
        assert!(prompt.contains("Listener notes: N/A"));
        let prompt = build_prompt(&songs(), "   ");
        assert!(prompt.contains("Listener notes: N/A"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&songs(), "x"), build_prompt(&songs(), "x"));
    }
}
