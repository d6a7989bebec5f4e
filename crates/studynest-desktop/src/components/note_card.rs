//! Note card component

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use studynest_core::format::format_last_modified;
use studynest_core::interaction::{MenuToggle, NoteActionKind};
use studynest_core::Note;

use super::ui::{fire, Badge, ButtonVariant, UiButton};
use crate::state::AppState;

/// A single note rendered in the dashboard grid or list.
///
/// Clicking the card asks to edit the note. The "⋮" menu offers star, share
/// and delete; picking one fires the callback and closes the menu.
#[component]
pub fn NoteCard(
    note: Note,
    now: DateTime<Utc>,
    on_edit: Option<EventHandler>,
    on_share: Option<EventHandler>,
    on_star: Option<EventHandler>,
    on_delete: Option<EventHandler>,
) -> Element {
    let state = use_context::<AppState>();
    let theme = (state.theme)();
    let colors = theme.palette();
    let accent = theme.note_colors(note.color_theme);
    let mut menu = use_signal(MenuToggle::default);

    let mut menu_action = move |evt: MouseEvent, handler: Option<EventHandler>| {
        evt.stop_propagation();
        fire(handler);
        menu.write().close();
    };

    let (shown_tags, hidden_tags) = note.visible_tags();
    let shown_tags = shown_tags.to_vec();
    let title = note.display_title().to_string();
    let content = note.display_content().to_string();
    let modified = format_last_modified(note.last_modified, now);
    let star_label = NoteActionKind::Star.menu_label(note.is_starred);

    rsx! {
        div {
            class: "note-card",
            style: "
                cursor: pointer;
                border-radius: 12px;
                background: {accent.background};
                border: 1px solid {colors.border};
                border-left: 4px solid {accent.border};
            ",
            onclick: move |_| fire(on_edit),

            div {
                style: "padding: 20px;",

                div {
                    style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 12px;",

                    div {
                        style: "display: flex; align-items: flex-start; gap: 8px; flex: 1;",
                        h3 {
                            class: "note-title",
                            style: "
                                margin: 0;
                                font-size: 17px;
                                font-weight: 600;
                                color: {colors.text_primary};
                                display: -webkit-box;
                                -webkit-line-clamp: 2;
                                -webkit-box-orient: vertical;
                                overflow: hidden;
                            ",
                            "{title}"
                        }
                        if note.is_starred {
                            span {
                                title: "Starred",
                                style: "color: {colors.warning}; margin-top: 2px;",
                                "★"
                            }
                        }
                    }

                    div {
                        style: "position: relative;",

                        UiButton {
                            extra_class: "note-card-menu-button",
                            title: "Note actions",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                menu.write().toggle();
                            },
                            "⋮"
                        }

                        if menu().is_open() {
                            div {
                                class: "note-card-menu",
                                style: "
                                    position: absolute;
                                    right: 0;
                                    margin-top: 4px;
                                    width: 144px;
                                    padding: 4px;
                                    background: {colors.bg_card};
                                    border: 1px solid {colors.border};
                                    border-radius: 8px;
                                    box-shadow: var(--sn-shadow);
                                    z-index: 20;
                                ",
                                onclick: move |evt| evt.stop_propagation(),

                                UiButton {
                                    block: true,
                                    onclick: move |evt| menu_action(evt, on_star),
                                    "★ {star_label}"
                                }
                                UiButton {
                                    block: true,
                                    onclick: move |evt| menu_action(evt, on_share),
                                    "⇪ Share"
                                }
                                UiButton {
                                    variant: ButtonVariant::Danger,
                                    block: true,
                                    onclick: move |evt| menu_action(evt, on_delete),
                                    "🗑 Delete"
                                }
                            }
                        }
                    }
                }

                p {
                    class: "note-preview",
                    style: "
                        margin: 0 0 16px 0;
                        font-size: 13px;
                        line-height: 1.6;
                        color: {colors.text_muted};
                        display: -webkit-box;
                        -webkit-line-clamp: 3;
                        -webkit-box-orient: vertical;
                        overflow: hidden;
                    ",
                    "{content}"
                }

                if !shown_tags.is_empty() {
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 16px;",
                        for (index, tag) in shown_tags.into_iter().enumerate() {
                            Badge { key: "{index}", "{tag}" }
                        }
                        if hidden_tags > 0 {
                            Badge { outline: true, "+{hidden_tags}" }
                        }
                    }
                }

                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        font-size: 12px;
                        color: {colors.text_muted};
                    ",
                    div {
                        style: "display: flex; align-items: center; gap: 12px;",
                        span { "🗓 {modified}" }
                        if note.shows_collaborators() {
                            span { title: "Collaborators", "👥 {note.collaborators}" }
                        }
                    }
                    if note.is_shared {
                        span { style: "color: {colors.accent};", "⇪ Shared" }
                    }
                }
            }
        }
    }
}
