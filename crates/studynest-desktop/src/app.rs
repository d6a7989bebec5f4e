//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use studynest_core::config::DashboardConfig;
use studynest_core::source::{
    ActionHandler, LoggingActionHandler, MockNoteSource, MockSession, SessionProvider,
};
use studynest_core::ViewState;

use crate::components::UI_STYLES;
use crate::state::{load_notes_or_empty, AppState};
use crate::theme::resolve_theme;
use crate::views::Dashboard;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<DashboardConfig>();

    let notes = use_signal(|| load_notes_or_empty(&MockNoteSource::default()));
    let user = use_signal(|| MockSession::signed_in().current_user());
    let view = use_signal(|| ViewState::from_config(&config));
    let theme = use_signal(|| resolve_theme(config.theme));
    let actions = use_signal(|| -> Arc<dyn ActionHandler> { Arc::new(LoggingActionHandler) });

    use_context_provider(|| AppState {
        notes,
        user,
        view,
        theme,
        actions,
    });

    let current_theme = theme();
    let colors = current_theme.palette();

    rsx! {
        style { "{UI_STYLES}" }

        div {
            class: "app-container",
            "data-theme": current_theme.as_attr(),
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Dashboard {}
        }
    }
}
