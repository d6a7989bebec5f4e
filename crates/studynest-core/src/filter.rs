//! Note filtering for the dashboard.
//!
//! Filtering is a linear scan: the section narrows the list first, then the
//! search query. Both must match. Input order is preserved.

use crate::models::{Note, Section};
use crate::util::contains_ignore_case;

/// Filter notes by section and case-insensitive search query.
#[must_use]
pub fn filter_notes(notes: &[Note], section: Section, search_query: &str) -> Vec<Note> {
    let query = search_query.to_lowercase();

    notes
        .iter()
        .filter(|note| note_matches_section(note, section))
        .filter(|note| note_matches_query(note, &query))
        .cloned()
        .collect()
}

/// Only the shared and starred sections narrow the list.
#[must_use]
pub const fn note_matches_section(note: &Note, section: Section) -> bool {
    match section {
        Section::SharedNotes => note.is_shared,
        Section::Starred => note.is_starred,
        _ => true,
    }
}

/// `query` must already be lowercase. An empty query matches everything.
fn note_matches_query(note: &Note, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    contains_ignore_case(&note.title, query)
        || contains_ignore_case(&note.content, query)
        || note.tags.iter().any(|tag| contains_ignore_case(tag, query))
}

/// What the dashboard shows when the filtered list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub heading: &'static str,
    pub message: &'static str,
    /// Offer the "Create Your First Note" button
    pub offers_create: bool,
}

impl EmptyState {
    #[must_use]
    pub const fn for_query(search_query: &str) -> Self {
        if search_query.is_empty() {
            Self {
                heading: "No notes found",
                message: "Start creating your first note!",
                offers_create: true,
            }
        } else {
            Self {
                heading: "No notes found",
                message: "Try adjusting your search terms",
                offers_create: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_notes;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|note| note.id.as_str()).collect()
    }

    #[test]
    fn non_filtering_sections_keep_everything_in_order() {
        let notes = mock_notes(Utc::now());
        for section in [
            Section::Dashboard,
            Section::MyNotes,
            Section::Tags,
            Section::AiAssistant,
            Section::Archive,
            Section::Trash,
        ] {
            assert_eq!(filter_notes(&notes, section, ""), notes, "{section}");
        }
    }

    #[test]
    fn shared_section_is_sound_and_complete() {
        let notes = mock_notes(Utc::now());
        let filtered = filter_notes(&notes, Section::SharedNotes, "");
        assert!(filtered.iter().all(|note| note.is_shared));
        assert_eq!(
            filtered.len(),
            notes.iter().filter(|note| note.is_shared).count()
        );
        assert_eq!(ids(&filtered), vec!["2", "5"]);
    }

    #[test]
    fn starred_section_is_sound_and_complete() {
        let notes = mock_notes(Utc::now());
        let filtered = filter_notes(&notes, Section::Starred, "");
        assert!(filtered.iter().all(|note| note.is_starred));
        assert_eq!(
            filtered.len(),
            notes.iter().filter(|note| note.is_starred).count()
        );
        assert_eq!(ids(&filtered), vec!["1", "4"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let notes = mock_notes(Utc::now());
        let filtered = filter_notes(&notes, Section::MyNotes, "REACT");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "React Best Practices");
    }

    #[test]
    fn search_matches_content() {
        let notes = mock_notes(Utc::now());
        let filtered = filter_notes(&notes, Section::MyNotes, "Q4");
        assert_eq!(ids(&filtered), vec!["3"]);
    }

    #[test]
    fn search_matches_tags() {
        let notes = mock_notes(Utc::now());
        let filtered = filter_notes(&notes, Section::Dashboard, "study");
        assert_eq!(ids(&filtered), vec!["1", "4"]);
    }

    #[test]
    fn section_and_query_are_anded() {
        let notes = mock_notes(Utc::now());
        // "React" only matches note 2, which is not starred
        let filtered = filter_notes(&notes, Section::Starred, "React");
        assert!(filtered.is_empty());

        let empty = EmptyState::for_query("React");
        assert!(!empty.offers_create);
        assert_eq!(empty.message, "Try adjusting your search terms");
    }

    #[test]
    fn empty_state_without_query_offers_create() {
        let empty = EmptyState::for_query("");
        assert!(empty.offers_create);
        assert_eq!(empty.heading, "No notes found");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_notes(&[], Section::Starred, "anything").is_empty());
    }
}
