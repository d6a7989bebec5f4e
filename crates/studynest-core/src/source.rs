//! Contracts between the dashboard and whatever backs it.
//!
//! The dashboard only needs three things from the outside world: notes to
//! show, the signed-in user, and somewhere to send user intents. The shipped
//! implementations are in-memory stand-ins; intents are logged, not applied.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::interaction::{NoteAction, QuickAction};
use crate::mock::{mock_notes, mock_user};
use crate::models::{Note, User};

/// Supplies the notes shown on the dashboard
pub trait NoteSource {
    fn load_notes(&self) -> Result<Vec<Note>>;
}

/// Supplies the signed-in user, if any
pub trait SessionProvider {
    fn current_user(&self) -> Option<User>;
}

/// Receives user intents bubbled up from the UI
pub trait ActionHandler: Send + Sync {
    fn note_action(&self, action: &NoteAction);

    fn quick_action(&self, action: QuickAction);

    /// Empty-state "Create Your First Note" button
    fn create_first_note(&self);

    fn sign_out(&self);

    fn sign_in(&self);

    fn sign_up(&self);
}

/// Fixed sample notes, timestamped relative to a reference instant
#[derive(Debug, Clone, Copy)]
pub struct MockNoteSource {
    now: DateTime<Utc>,
}

impl MockNoteSource {
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Default for MockNoteSource {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl NoteSource for MockNoteSource {
    fn load_notes(&self) -> Result<Vec<Note>> {
        Ok(mock_notes(self.now))
    }
}

/// Session that is either the demo user or signed out
#[derive(Debug, Clone, Default)]
pub struct MockSession {
    user: Option<User>,
}

impl MockSession {
    #[must_use]
    pub fn signed_in() -> Self {
        Self {
            user: Some(mock_user()),
        }
    }

    #[must_use]
    pub const fn signed_out() -> Self {
        Self { user: None }
    }
}

impl SessionProvider for MockSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

/// Handler that records every intent in the log and does nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingActionHandler;

impl ActionHandler for LoggingActionHandler {
    fn note_action(&self, action: &NoteAction) {
        tracing::info!("{:?} note: {}", action.kind, action.note_id);
    }

    fn quick_action(&self, action: QuickAction) {
        tracing::info!("Quick action: {}", action);
    }

    fn create_first_note(&self) {
        tracing::info!("Create first note");
    }

    fn sign_out(&self) {
        tracing::info!("Sign out requested");
    }

    fn sign_in(&self) {
        tracing::info!("Sign in requested");
    }

    fn sign_up(&self) {
        tracing::info!("Sign up requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::NoteActionKind;
    use crate::models::NoteId;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<String>>,
    }

    impl RecordingHandler {
        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl ActionHandler for RecordingHandler {
        fn note_action(&self, action: &NoteAction) {
            self.push(format!("{:?}:{}", action.kind, action.note_id));
        }

        fn quick_action(&self, action: QuickAction) {
            self.push(action.label().to_string());
        }

        fn create_first_note(&self) {
            self.push("create-first".to_string());
        }

        fn sign_out(&self) {
            self.push("sign-out".to_string());
        }

        fn sign_in(&self) {
            self.push("sign-in".to_string());
        }

        fn sign_up(&self) {
            self.push("sign-up".to_string());
        }
    }

    #[test]
    fn mock_source_loads_five_notes() {
        let notes = MockNoteSource::default().load_notes().unwrap();
        assert_eq!(notes.len(), 5);
    }

    #[test]
    fn mock_source_is_relative_to_reference_time() {
        let now = Utc::now();
        let notes = MockNoteSource::new(now).load_notes().unwrap();
        assert_eq!((now - notes[0].last_modified).num_hours(), 2);
    }

    #[test]
    fn sessions() {
        assert_eq!(
            MockSession::signed_in().current_user().map(|user| user.name),
            Some("Alex Johnson".to_string())
        );
        assert_eq!(MockSession::signed_out().current_user(), None);
    }

    #[test]
    fn handler_is_usable_as_trait_object() {
        let recorder = RecordingHandler::default();
        {
            let handler: &dyn ActionHandler = &recorder;
            handler.note_action(&NoteAction::new(NoteActionKind::Star, NoteId::new("4")));
            handler.quick_action(QuickAction::VoiceNote);
            handler.sign_out();
        }
        assert_eq!(
            *recorder.events.lock().unwrap(),
            vec!["Star:4", "Voice Note", "sign-out"]
        );
    }

    #[test]
    fn logging_handler_accepts_every_intent() {
        let handler = LoggingActionHandler;
        handler.note_action(&NoteAction::new(NoteActionKind::Delete, NoteId::new("1")));
        for action in QuickAction::ALL {
            handler.quick_action(action);
        }
        handler.create_first_note();
        handler.sign_in();
        handler.sign_up();
    }
}
