//! Note parsing for slipbox
//!
//! A note is a plain-text file whose name starts with its id. Links are
//! written inline as marker-prefixed words (the zetteldeft convention),
//! e.g. `see also §202001011200` with the default `§` marker.

use std::collections::HashSet;

use crate::error::{Result, SlipboxError};

/// A single note in the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Note identifier, derived from the source file name
    pub id: String,

    /// Link tokens this note contains, marker prefix included, deduplicated
    pub outgoing_links: HashSet<String>,

    /// Ids of notes that link here, populated by `Collection::build`
    pub incoming_links: Vec<String>,
}

impl Note {
    /// Parse a note from its source text
    ///
    /// Scans lines containing the marker; on those lines every
    /// whitespace-delimited word starting with the marker is recorded as an
    /// outgoing link, exactly as written. Punctuation glued to a token is
    /// part of the token.
    #[tracing::instrument(skip(text))]
    pub fn parse(id: &str, text: &str, marker: char) -> Self {
        let outgoing_links = extract_links(text, marker);
        tracing::debug!(links = outgoing_links.len(), "parsed note");

        Note {
            id: id.to_string(),
            outgoing_links,
            incoming_links: Vec::new(),
        }
    }

    /// True when the note neither links out nor is linked to
    pub fn is_orphan(&self) -> bool {
        self.outgoing_links.is_empty() && self.incoming_links.is_empty()
    }

    /// One-line summary of the note body
    pub fn summary(&self) -> Result<String> {
        Err(SlipboxError::Unimplemented {
            feature: "note summary",
        })
    }
}

/// Extract marker-prefixed link tokens from note text
///
/// Returns a set: a token repeated anywhere in the note counts once.
pub fn extract_links(text: &str, marker: char) -> HashSet<String> {
    let mut links = HashSet::new();

    for line in text.lines() {
        if !line.contains(marker) {
            continue;
        }
        for word in line.split_whitespace() {
            if word.starts_with(marker) {
                links.insert(word.to_string());
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collects_marker_words() {
        let note = Note::parse("a", "intro line\nsee §b and §c here\n", '§');
        assert_eq!(note.id, "a");
        assert_eq!(note.outgoing_links.len(), 2);
        assert!(note.outgoing_links.contains("§b"));
        assert!(note.outgoing_links.contains("§c"));
        assert!(note.incoming_links.is_empty());
    }

    #[test]
    fn test_marker_must_start_the_word() {
        let links = extract_links("see§b mid-word, §c real", '§');
        assert_eq!(links.len(), 1);
        assert!(links.contains("§c"));
    }

    #[test]
    fn test_repeated_token_counts_once() {
        let links = extract_links("§b again §b\nand once more §b", '§');
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_punctuation_stays_in_token() {
        let links = extract_links("as shown in §b.", '§');
        assert!(links.contains("§b."));
        assert!(!links.contains("§b"));
    }

    #[test]
    fn test_bare_marker_is_a_token() {
        let links = extract_links("a stray § sits here", '§');
        assert_eq!(links.len(), 1);
        assert!(links.contains("§"));
    }

    #[test]
    fn test_custom_ascii_marker() {
        let links = extract_links("see @b and §c", '@');
        assert_eq!(links.len(), 1);
        assert!(links.contains("@b"));
    }

    #[test]
    fn test_no_links_in_plain_text() {
        assert!(extract_links("nothing to see here\n", '§').is_empty());
        assert!(extract_links("", '§').is_empty());
    }

    #[test]
    fn test_is_orphan() {
        let mut note = Note::parse("a", "no links", '§');
        assert!(note.is_orphan());

        note.incoming_links.push("b".to_string());
        assert!(!note.is_orphan());

        let linked = Note::parse("c", "see §d", '§');
        assert!(!linked.is_orphan());
    }

    #[test]
    fn test_summary_not_yet_supported() {
        let note = Note::parse("a", "body text", '§');
        let err = note.summary().unwrap_err();
        assert!(matches!(
            err,
            SlipboxError::Unimplemented {
                feature: "note summary"
            }
        ));
    }
}
