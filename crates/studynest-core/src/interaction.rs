//! Interaction state for menus and quick actions.
//!
//! Every menu is an independent two-state toggle owned by the component that
//! renders it. There is no dismiss-on-blur: menus only close through their
//! own controls.

use std::fmt;

use crate::models::NoteId;

/// Open/closed flag for a dropdown menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Floating action button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FabState {
    #[default]
    Collapsed,
    Expanded,
}

impl FabState {
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Main button click
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    /// State after any secondary action fires
    #[must_use]
    pub const fn after_action(self) -> Self {
        Self::Collapsed
    }
}

/// Secondary actions offered by the floating action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickAction {
    NewNote,
    VoiceNote,
    AiAssist,
    Template,
}

impl QuickAction {
    /// Top to bottom, as stacked above the main button
    pub const ALL: [Self; 4] = [Self::NewNote, Self::VoiceNote, Self::AiAssist, Self::Template];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewNote => "New Note",
            Self::VoiceNote => "Voice Note",
            Self::AiAssist => "AI Assist",
            Self::Template => "Template",
        }
    }
}

impl fmt::Display for QuickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the user asked to do with a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteActionKind {
    Edit,
    Share,
    Star,
    Delete,
}

impl NoteActionKind {
    /// Menu label. Starring a starred note reads as "Unstar".
    #[must_use]
    pub const fn menu_label(self, is_starred: bool) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Share => "Share",
            Self::Star if is_starred => "Unstar",
            Self::Star => "Star",
            Self::Delete => "Delete",
        }
    }
}

/// A note intent bubbled up from a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteAction {
    pub kind: NoteActionKind,
    pub note_id: NoteId,
}

impl NoteAction {
    #[must_use]
    pub const fn new(kind: NoteActionKind, note_id: NoteId) -> Self {
        Self { kind, note_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fab_starts_collapsed_and_toggles() {
        let state = FabState::default();
        assert!(!state.is_expanded());
        assert!(state.toggled().is_expanded());
        assert_eq!(state.toggled().toggled(), FabState::Collapsed);
    }

    #[test]
    fn fab_collapses_after_any_action() {
        assert_eq!(FabState::Expanded.after_action(), FabState::Collapsed);
        assert_eq!(FabState::Collapsed.after_action(), FabState::Collapsed);
    }

    #[test]
    fn menu_toggle_only_closes_explicitly() {
        let mut menu = MenuToggle::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn independent_menus_do_not_interact() {
        let mut profile = MenuToggle::default();
        let mut card = MenuToggle::default();
        profile.toggle();
        card.toggle();
        card.close();
        assert!(profile.is_open());
        assert!(!card.is_open());
    }

    #[test]
    fn star_label_reflects_current_state() {
        assert_eq!(NoteActionKind::Star.menu_label(false), "Star");
        assert_eq!(NoteActionKind::Star.menu_label(true), "Unstar");
        assert_eq!(NoteActionKind::Delete.menu_label(true), "Delete");
    }

    #[test]
    fn quick_actions_in_display_order() {
        let labels: Vec<_> = QuickAction::ALL.iter().map(|action| action.label()).collect();
        assert_eq!(labels, ["New Note", "Voice Note", "AI Assist", "Template"]);
    }
}
