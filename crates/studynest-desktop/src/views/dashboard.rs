//! Dashboard view - the main application screen

use chrono::Utc;
use dioxus::prelude::*;

use studynest_core::filter::EmptyState;
use studynest_core::interaction::{NoteAction, NoteActionKind, QuickAction};
use studynest_core::{NoteId, Section, ViewMode};

use crate::components::{
    ButtonVariant, FloatingActionButton, Navbar, NoteCard, SearchBar, Sidebar, UiButton,
};
use crate::state::AppState;

/// Dashboard composing the navbar, sidebar, notes and quick actions
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let view = (state.view)();
    let notes = state.filtered_notes();
    let stats = state.note_stats();
    let user = (state.user)();
    let now = Utc::now();
    let heading = view.active_section.title();

    let dispatch = move |kind: NoteActionKind, note_id: &NoteId| {
        state
            .actions()
            .note_action(&NoteAction::new(kind, note_id.clone()));
    };
    let quick = move |action: QuickAction| state.actions().quick_action(action);

    let layout = match view.view_mode {
        ViewMode::Grid => {
            "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px;"
        }
        ViewMode::List => "display: flex; flex-direction: column; gap: 16px;",
    };
    let empty_state = notes
        .is_empty()
        .then(|| EmptyState::for_query(&view.search_query));

    rsx! {
        div {
            class: "dashboard",
            style: "min-height: 100vh;",

            Navbar {
                user,
                on_menu_toggle: move |()| state.view.write().toggle_sidebar(),
                on_sign_out: move |()| state.actions().sign_out(),
                on_sign_in: move |()| state.actions().sign_in(),
                on_sign_up: move |()| state.actions().sign_up(),
            }

            div {
                style: "display: flex; height: calc(100vh - 64px);",

                Sidebar {
                    is_open: view.sidebar_open,
                    active_section: view.active_section,
                    note_stats: stats,
                    on_section_change: move |section: Section| {
                        tracing::debug!("Switching to section {}", section);
                        state.view.write().select_section(section);
                    },
                }

                main {
                    style: "flex: 1; overflow: auto;",

                    div {
                        style: "padding: 24px;",

                        div {
                            style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                            h1 {
                                style: "margin: 0; font-size: 28px; font-weight: 700; color: {colors.text_primary};",
                                "{heading}"
                            }
                            div {
                                style: "display: flex; gap: 8px;",
                                UiButton {
                                    variant: ButtonVariant::selected(view.view_mode == ViewMode::Grid),
                                    title: "Grid view",
                                    onclick: move |_| state.view.write().set_view_mode(ViewMode::Grid),
                                    "▦"
                                }
                                UiButton {
                                    variant: ButtonVariant::selected(view.view_mode == ViewMode::List),
                                    title: "List view",
                                    onclick: move |_| state.view.write().set_view_mode(ViewMode::List),
                                    "☰"
                                }
                            }
                        }

                        div {
                            style: "display: flex; align-items: center; gap: 16px; margin-bottom: 24px;",
                            SearchBar {
                                value: view.search_query.clone(),
                                on_change: move |query: String| state.view.write().set_search_query(query),
                            }
                            UiButton { variant: ButtonVariant::Outline, "⛛ Filter" }
                            UiButton { variant: ButtonVariant::Outline, "⇅ Sort" }
                        }

                        div {
                            class: "notes-{view.view_mode}",
                            style: "{layout}",
                            for note in notes {
                                {
                                    let id = note.id.clone();
                                    let (edit_id, share_id, star_id, delete_id) =
                                        (id.clone(), id.clone(), id.clone(), id.clone());
                                    rsx! {
                                        NoteCard {
                                            key: "{id}",
                                            note,
                                            now,
                                            on_edit: move |()| dispatch(NoteActionKind::Edit, &edit_id),
                                            on_share: move |()| dispatch(NoteActionKind::Share, &share_id),
                                            on_star: move |()| dispatch(NoteActionKind::Star, &star_id),
                                            on_delete: move |()| dispatch(NoteActionKind::Delete, &delete_id),
                                        }
                                    }
                                }
                            }
                        }

                        if let Some(empty) = empty_state {
                            EmptyNotes { empty }
                        }
                    }
                }
            }

            FloatingActionButton {
                on_create_note: move |()| quick(QuickAction::NewNote),
                on_voice_note: move |()| quick(QuickAction::VoiceNote),
                on_ai_assist: move |()| quick(QuickAction::AiAssist),
                on_template: move |()| quick(QuickAction::Template),
            }
        }
    }
}

#[component]
fn EmptyNotes(empty: EmptyState) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "empty-state",
            style: "text-align: center; padding: 48px 0;",
            div {
                style: "
                    width: 96px;
                    height: 96px;
                    margin: 0 auto 16px auto;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 40px;
                    background: linear-gradient(135deg, {colors.highlight}, {colors.accent});
                    color: {colors.accent_text};
                ",
                "⌕"
            }
            h3 { style: "margin: 0 0 8px 0; font-size: 18px; font-weight: 600;", "{empty.heading}" }
            p { style: "margin: 0 0 16px 0; color: {colors.text_muted};", "{empty.message}" }
            if empty.offers_create {
                UiButton {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| state.actions().create_first_note(),
                    "Create Your First Note"
                }
            }
        }
    }
}
