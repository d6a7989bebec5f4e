//! UI Components
//!
//! Presentation components for the dashboard. They receive data as props and
//! report user intents through callbacks.

mod floating_action_button;
mod navbar;
mod note_card;
mod search_bar;
mod sidebar;
mod ui;

pub use floating_action_button::FloatingActionButton;
pub use navbar::Navbar;
pub use note_card::NoteCard;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
pub use ui::{ButtonVariant, UiButton, UI_STYLES};
