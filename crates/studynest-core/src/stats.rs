//! Note counts shown in the sidebar.

use crate::models::{Note, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteStats {
    pub total: usize,
    pub shared: usize,
    pub starred: usize,
}

impl NoteStats {
    /// Count notes. Cheap enough to rerun on every render.
    #[must_use]
    pub fn from_notes(notes: &[Note]) -> Self {
        Self {
            total: notes.len(),
            shared: notes.iter().filter(|note| note.is_shared).count(),
            starred: notes.iter().filter(|note| note.is_starred).count(),
        }
    }

    /// Badge count for a sidebar item, if that item carries one
    #[must_use]
    pub const fn count_for(&self, section: Section) -> Option<usize> {
        match section {
            Section::Dashboard | Section::MyNotes => Some(self.total),
            Section::SharedNotes => Some(self.shared),
            Section::Starred => Some(self.starred),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_notes;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    #[test]
    fn mock_stats() {
        let stats = NoteStats::from_notes(&mock_notes(Utc::now()));
        assert_eq!(
            stats,
            NoteStats {
                total: 5,
                shared: 2,
                starred: 2,
            }
        );
    }

    #[test]
    fn badge_counts_per_section() {
        let stats = NoteStats {
            total: 5,
            shared: 2,
            starred: 1,
        };
        assert_eq!(stats.count_for(Section::Dashboard), Some(5));
        assert_eq!(stats.count_for(Section::MyNotes), Some(5));
        assert_eq!(stats.count_for(Section::SharedNotes), Some(2));
        assert_eq!(stats.count_for(Section::Starred), Some(1));
        assert_eq!(stats.count_for(Section::Tags), None);
        assert_eq!(stats.count_for(Section::Trash), None);
    }

    #[test]
    fn empty_list_has_zero_stats() {
        assert_eq!(NoteStats::from_notes(&[]), NoteStats::default());
    }
}
