//! Collapsible sidebar with section navigation and quick stats

use dioxus::prelude::*;

use studynest_core::stats::NoteStats;
use studynest_core::Section;

use super::ui::{ButtonVariant, UiButton};
use crate::state::AppState;

const OPEN_WIDTH: &str = "256px";
const COLLAPSED_WIDTH: &str = "64px";

const fn section_icon(section: Section) -> &'static str {
    match section {
        Section::Dashboard => "⌂",
        Section::MyNotes => "🗎",
        Section::SharedNotes => "⇪",
        Section::Starred => "★",
        Section::Tags => "#",
        Section::AiAssistant => "✦",
        Section::Collaborators => "👥",
        Section::Archive => "🗄",
        Section::Trash => "🗑",
        Section::Settings => "⚙",
    }
}

/// Sidebar listing sections, AI shortcuts, stats and secondary items.
///
/// When collapsed only the icons of the main and secondary items remain.
#[component]
pub fn Sidebar(
    #[props(default = true)] is_open: bool,
    #[props(default)] active_section: Section,
    #[props(default)] note_stats: NoteStats,
    on_section_change: Option<EventHandler<Section>>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let width = if is_open { OPEN_WIDTH } else { COLLAPSED_WIDTH };

    let select = move |section: Section| {
        if let Some(handler) = on_section_change {
            handler.call(section);
        }
    };

    rsx! {
        aside {
            class: "sidebar",
            style: "
                width: {width};
                height: 100%;
                display: flex;
                flex-direction: column;
                box-sizing: border-box;
                background: {colors.bg_card};
                border-right: 1px solid {colors.border};
            ",

            div {
                style: "padding: 16px; flex: 1; overflow-y: auto;",

                div {
                    style: "display: flex; flex-direction: column; gap: 4px; margin-bottom: 24px;",
                    for section in Section::PRIMARY {
                        NavItem {
                            key: "{section}",
                            section,
                            is_open,
                            is_active: active_section == section,
                            count: note_stats.count_for(section),
                            onclick: move |_| select(section),
                        }
                    }
                }

                if is_open {
                    div {
                        style: "margin-bottom: 24px;",
                        h3 {
                            style: "
                                margin: 0 0 8px 0;
                                padding: 0 8px;
                                font-size: 11px;
                                font-weight: 600;
                                text-transform: uppercase;
                                letter-spacing: 0.08em;
                                color: {colors.text_muted};
                            ",
                            "AI Features"
                        }
                        div {
                            style: "display: flex; flex-direction: column; gap: 4px;",
                            for section in Section::AI_FEATURES {
                                NavItem {
                                    key: "{section}",
                                    section,
                                    is_open,
                                    is_active: active_section == section,
                                    onclick: move |_| select(section),
                                }
                            }
                        }
                    }

                    QuickStats { stats: note_stats }
                }
            }

            div {
                style: "padding: 16px; border-top: 1px solid {colors.border};",
                div {
                    style: "display: flex; flex-direction: column; gap: 4px;",
                    for section in Section::SECONDARY {
                        NavItem {
                            key: "{section}",
                            section,
                            is_open,
                            is_active: active_section == section,
                            onclick: move |_| select(section),
                        }
                    }
                }
            }
        }
    }
}

/// Navigation row. Count badges only appear when non-zero and expanded.
#[component]
fn NavItem(
    section: Section,
    is_open: bool,
    is_active: bool,
    count: Option<usize>,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let justify = if is_open { "flex-start" } else { "center" };
    let icon_color = if is_active {
        colors.accent
    } else {
        colors.text_primary
    };
    let active_border = if is_active {
        colors.accent
    } else {
        "transparent"
    };
    let badge = count.filter(|count| is_open && *count > 0);
    let icon = section_icon(section);
    let label = section.label();

    rsx! {
        UiButton {
            variant: ButtonVariant::selected(is_active),
            block: true,
            title: label,
            style: "justify-content: {justify}; border-right: 2px solid {active_border};",
            onclick: move |evt| onclick.call(evt),

            span { style: "width: 20px; text-align: center; color: {icon_color};", "{icon}" }
            if is_open {
                span { style: "flex: 1; text-align: left;", "{label}" }
            }
            if let Some(count) = badge {
                span {
                    style: "
                        margin-left: auto;
                        font-size: 11px;
                        padding: 2px 8px;
                        border-radius: 999px;
                        background: {colors.bg_secondary};
                        color: {colors.text_muted};
                    ",
                    "{count}"
                }
            }
        }
    }
}

#[component]
fn QuickStats(stats: NoteStats) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "
                padding: 16px;
                margin-bottom: 24px;
                border-radius: 8px;
                background: {colors.bg_secondary};
            ",
            h3 { style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 600;", "Quick Stats" }
            StatRow { label: "Total Notes", value: stats.total }
            StatRow { label: "Shared", value: stats.shared }
            StatRow { label: "Starred", value: stats.starred }
        }
    }
}

#[component]
fn StatRow(label: &'static str, value: usize) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; font-size: 13px; margin-bottom: 8px;",
            span { style: "color: {colors.text_muted};", "{label}" }
            span { style: "font-weight: 500;", "{value}" }
        }
    }
}
