//! Application state management
//!
//! Dashboard state shared via a Dioxus context provider.

use std::sync::Arc;

use dioxus::prelude::*;

use studynest_core::filter::filter_notes;
use studynest_core::source::{ActionHandler, NoteSource};
use studynest_core::stats::NoteStats;
use studynest_core::{Note, User, ViewState};

use crate::theme::ResolvedTheme;

/// Global dashboard state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Every note supplied by the note source
    pub notes: Signal<Vec<Note>>,
    /// Signed-in user, `None` when signed out
    pub user: Signal<Option<User>>,
    /// Sidebar, section, layout and search state
    pub view: Signal<ViewState>,
    /// Resolved theme (light/dark based on config and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Where user intents go
    pub actions: Signal<Arc<dyn ActionHandler>>,
}

impl AppState {
    /// Notes to display for the active section and search query
    #[must_use]
    pub fn filtered_notes(&self) -> Vec<Note> {
        let view = self.view.read();
        filter_notes(&self.notes.read(), view.active_section, &view.search_query)
    }

    #[must_use]
    pub fn note_stats(&self) -> NoteStats {
        NoteStats::from_notes(&self.notes.read())
    }

    /// Handle for dispatching user intents
    #[must_use]
    pub fn actions(&self) -> Arc<dyn ActionHandler> {
        self.actions.read().clone()
    }
}

/// Load notes for the first render. A failing source leaves the list empty.
pub fn load_notes_or_empty(source: &impl NoteSource) -> Vec<Note> {
    match source.load_notes() {
        Ok(notes) => {
            tracing::info!("Loaded {} notes", notes.len());
            notes
        }
        Err(e) => {
            tracing::error!("Failed to load notes: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use studynest_core::source::MockNoteSource;

    struct BrokenSource;

    impl NoteSource for BrokenSource {
        fn load_notes(&self) -> studynest_core::Result<Vec<Note>> {
            Err(studynest_core::Error::Source("backend offline".to_string()))
        }
    }

    #[test]
    fn failing_source_renders_empty_list() {
        assert!(load_notes_or_empty(&BrokenSource).is_empty());
    }

    #[test]
    fn mock_source_loads_notes() {
        assert_eq!(load_notes_or_empty(&MockNoteSource::default()).len(), 5);
    }
}
