//! Data models for StudyNest

mod note;
mod section;
mod settings;
mod user;
mod view;

pub use note::{ColorTheme, Note, NoteId, MAX_VISIBLE_TAGS};
pub use section::{Section, SectionGroup};
pub use settings::ThemeMode;
pub use user::User;
pub use view::{ViewMode, ViewState};
