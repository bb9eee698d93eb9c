//! In-memory link graph over a set of notes
//!
//! `Collection::build` is a batch computation over a snapshot of note
//! sources: parse every note, record forward links and the reverse index,
//! resolve back-references, then derive the orphan set. The collection is
//! read-only afterwards.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{Result, SlipboxError};
use crate::note::Note;

/// Aggregate statistics over a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub note_count: usize,
    pub link_count: usize,
    pub orphan_count: usize,
}

/// A set of notes plus the link graph between them
#[derive(Debug)]
pub struct Collection {
    marker: char,
    notes: HashMap<String, Note>,
    /// Total (note, outgoing link) pairs across surviving notes
    link_count: usize,
    /// Link token -> ids of notes containing it, in processing order
    reverse_index: HashMap<String, Vec<String>>,
    orphans: HashSet<String>,
}

impl Collection {
    /// Build a collection from `(id, text)` note sources
    ///
    /// When two sources share an id the later text wins; the note keeps its
    /// first position in processing order. Counts and indices are computed
    /// over the surviving notes only, so `link_count` always equals the sum
    /// of `outgoing_links` sizes.
    pub fn build(marker: char, sources: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut notes: HashMap<String, Note> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for (id, text) in sources {
            let note = Note::parse(&id, &text, marker);
            if notes.insert(id.clone(), note).is_some() {
                tracing::warn!(id = %id, "duplicate note id, later source replaces earlier");
            } else {
                order.push(id);
            }
        }

        let mut link_count = 0;
        let mut reverse_index: HashMap<String, Vec<String>> = HashMap::new();
        for id in &order {
            let note = &notes[id];
            link_count += note.outgoing_links.len();
            for token in &note.outgoing_links {
                reverse_index
                    .entry(token.clone())
                    .or_default()
                    .push(id.clone());
            }
        }

        // Back-references: each token resolves to at most one note, found by
        // dropping the marker prefix. Tokens naming a note outside the
        // collection are candidate widows and are skipped.
        for (token, referrers) in &reverse_index {
            let target = token.strip_prefix(marker).unwrap_or(token.as_str());
            match notes.get_mut(target) {
                Some(note) => note.incoming_links = referrers.clone(),
                None => tracing::debug!(token = %token, "link target not in collection"),
            }
        }

        let mut collection = Collection {
            marker,
            notes,
            link_count,
            reverse_index,
            orphans: HashSet::new(),
        };
        collection.orphans = collection.find_orphans();

        tracing::debug!(
            notes = collection.notes.len(),
            links = collection.link_count,
            orphans = collection.orphans.len(),
            "built collection"
        );

        collection
    }

    /// Marker character the collection was built with
    pub fn marker(&self) -> char {
        self.marker
    }

    /// Number of notes in the collection
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Total count of (note, outgoing link) pairs
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    /// Look up a note by id
    pub fn get_note(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    /// Iterate over all notes, in no particular order
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.notes.values()
    }

    /// Ids of the notes containing a link token, in processing order
    pub fn referrers(&self, token: &str) -> &[String] {
        self.reverse_index
            .get(token)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Orphan set computed at build time
    pub fn orphans(&self) -> &HashSet<String> {
        &self.orphans
    }

    /// Notes with neither outgoing nor incoming links
    ///
    /// Only meaningful once back-references have been resolved, which
    /// `build` guarantees before this is ever reachable.
    pub fn find_orphans(&self) -> HashSet<String> {
        self.notes
            .values()
            .filter(|note| note.is_orphan())
            .map(|note| note.id.clone())
            .collect()
    }

    /// Link tokens whose target note does not exist in the collection
    pub fn find_widows(&self) -> Result<Vec<String>> {
        Err(SlipboxError::Unimplemented {
            feature: "widow detection",
        })
    }

    /// The three headline counts
    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            note_count: self.notes.len(),
            link_count: self.link_count,
            orphan_count: self.orphans.len(),
        }
    }

    /// Human-readable statistics line
    pub fn summary(&self) -> String {
        let stats = self.stats();
        format!(
            "Slip box has {} notes, {} links, and {} orphans.",
            stats.note_count, stats.link_count, stats.orphan_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let collection = Collection::build('§', Vec::new());
        assert_eq!(collection.note_count(), 0);
        assert_eq!(collection.link_count(), 0);
        assert!(collection.orphans().is_empty());
        assert_eq!(
            collection.summary(),
            "Slip box has 0 notes, 0 links, and 0 orphans."
        );
    }

    #[test]
    fn test_back_references_reach_linked_notes() {
        let collection = Collection::build(
            '§',
            sources(&[
                ("a", "no links here"),
                ("b", "see §a"),
                ("c", "see §a and §b"),
            ]),
        );

        assert_eq!(collection.link_count(), 3);
        assert_eq!(collection.get_note("a").unwrap().incoming_links, ["b", "c"]);
        assert_eq!(collection.get_note("b").unwrap().incoming_links, ["c"]);
        assert!(collection.get_note("c").unwrap().incoming_links.is_empty());
        assert!(collection.orphans().is_empty());
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let collection = Collection::build(
            '§',
            sources(&[("a", "no links here"), ("b", "see §a"), ("c", "see §z")]),
        );

        // §z resolves to nothing; the link still counts, and c is no orphan
        assert_eq!(collection.link_count(), 2);
        assert_eq!(collection.get_note("a").unwrap().incoming_links, ["b"]);
        assert!(collection.get_note("z").is_none());
        assert!(collection.orphans().is_empty());
    }

    #[test]
    fn test_single_unlinked_note_is_orphan() {
        let collection = Collection::build('§', sources(&[("a", "just text")]));
        assert_eq!(collection.link_count(), 0);
        assert_eq!(collection.orphans().len(), 1);
        assert!(collection.orphans().contains("a"));
    }

    #[test]
    fn test_mutual_links_leave_no_orphans() {
        let collection = Collection::build('§', sources(&[("a", "see §b"), ("b", "see §a")]));
        assert_eq!(collection.link_count(), 2);
        assert!(collection.orphans().is_empty());
    }

    #[test]
    fn test_self_link_back_references_itself() {
        let collection = Collection::build('§', sources(&[("a", "see §a")]));
        assert_eq!(collection.link_count(), 1);
        assert_eq!(collection.get_note("a").unwrap().incoming_links, ["a"]);
        assert!(collection.orphans().is_empty());
    }

    #[test]
    fn test_duplicate_id_last_source_wins() {
        let collection = Collection::build(
            '§',
            sources(&[("a", "see §b"), ("b", "text"), ("a", "no links now")]),
        );

        assert_eq!(collection.note_count(), 2);
        assert!(collection.get_note("a").unwrap().outgoing_links.is_empty());
        assert_eq!(collection.link_count(), 0);
        assert_eq!(collection.orphans().len(), 2);
    }

    #[test]
    fn test_referrers_keep_processing_order() {
        let collection = Collection::build(
            '§',
            sources(&[("a", ""), ("c", "see §a"), ("b", "see §a")]),
        );

        // input order, not lexical order
        assert_eq!(collection.referrers("§a"), ["c", "b"]);
        assert_eq!(collection.get_note("a").unwrap().incoming_links, ["c", "b"]);
        assert!(collection.referrers("§zzz").is_empty());
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let input = sources(&[("a", "see §b"), ("b", "text"), ("c", "alone")]);

        let first = Collection::build('§', input.clone());
        let second = Collection::build('§', input);

        assert_eq!(first.note_count(), second.note_count());
        assert_eq!(first.link_count(), second.link_count());
        assert_eq!(first.orphans(), second.orphans());
        let mut first_ids: Vec<&String> = first.notes().map(|note| &note.id).collect();
        let mut second_ids: Vec<&String> = second.notes().map(|note| &note.id).collect();
        first_ids.sort();
        second_ids.sort();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_alternate_marker() {
        let collection = Collection::build('@', sources(&[("a", "ping @b"), ("b", "quiet")]));
        assert_eq!(collection.link_count(), 1);
        assert_eq!(collection.get_note("b").unwrap().incoming_links, ["a"]);
        assert!(collection.orphans().is_empty());
        assert_eq!(collection.marker(), '@');
    }

    #[test]
    fn test_widows_not_yet_supported() {
        let collection = Collection::build('§', Vec::new());
        let err = collection.find_widows().unwrap_err();
        assert!(matches!(
            err,
            SlipboxError::Unimplemented {
                feature: "widow detection"
            }
        ));
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let collection = Collection::build('§', sources(&[("a", "see §b"), ("b", "")]));
        let value = serde_json::to_value(collection.stats()).unwrap();
        assert_eq!(value["note_count"], 2);
        assert_eq!(value["link_count"], 1);
        assert_eq!(value["orphan_count"], 0);
    }
}
