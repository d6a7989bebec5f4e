//! Floating action button with a stack of quick actions

use dioxus::prelude::*;

use studynest_core::interaction::{FabState, QuickAction};

use super::ui::fire;
use crate::state::AppState;

/// Expanding "+" button pinned to the bottom-right corner.
///
/// Any quick action collapses the stack after firing.
#[component]
pub fn FloatingActionButton(
    on_create_note: Option<EventHandler>,
    on_voice_note: Option<EventHandler>,
    on_ai_assist: Option<EventHandler>,
    on_template: Option<EventHandler>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut fab = use_signal(FabState::default);

    let handler_for = move |action: QuickAction| match action {
        QuickAction::NewNote => on_create_note,
        QuickAction::VoiceNote => on_voice_note,
        QuickAction::AiAssist => on_ai_assist,
        QuickAction::Template => on_template,
    };

    let expanded = fab().is_expanded();
    let stack_style = if expanded {
        "opacity: 1; transform: scale(1); margin-bottom: 16px;"
    } else {
        "opacity: 0; transform: scale(0.5); pointer-events: none;"
    };
    let rotation = if expanded { "rotate(45deg)" } else { "none" };

    rsx! {
        div {
            class: "fab",
            style: "position: fixed; bottom: 24px; right: 24px; z-index: 50;",

            div {
                class: "fab-actions",
                style: "display: flex; flex-direction: column; align-items: flex-end; gap: 12px; {stack_style}",

                for action in QuickAction::ALL {
                    {
                        let (glyph, background) = action_style(action, colors);
                        let label = action.label();
                        rsx! {
                            div {
                                key: "{label}",
                                style: "display: flex; align-items: center; gap: 12px;",
                                span {
                                    style: "
                                        padding: 8px 12px;
                                        border-radius: 8px;
                                        font-size: 13px;
                                        font-weight: 500;
                                        white-space: nowrap;
                                        background: {colors.bg_card};
                                        box-shadow: var(--sn-shadow);
                                    ",
                                    "{label}"
                                }
                                button {
                                    title: "{label}",
                                    style: "
                                        width: 48px;
                                        height: 48px;
                                        border: none;
                                        border-radius: 50%;
                                        cursor: pointer;
                                        color: #ffffff;
                                        font-size: 18px;
                                        background: {background};
                                        box-shadow: var(--sn-shadow);
                                    ",
                                    onclick: move |_| {
                                        fire(handler_for(action));
                                        fab.set(fab().after_action());
                                    },
                                    "{glyph}"
                                }
                            }
                        }
                    }
                }
            }

            button {
                class: "fab-main",
                title: "Quick actions",
                style: "
                    float: right;
                    width: 56px;
                    height: 56px;
                    border: none;
                    border-radius: 50%;
                    cursor: pointer;
                    color: #ffffff;
                    font-size: 26px;
                    background: linear-gradient(135deg, {colors.accent}, {colors.highlight});
                    box-shadow: var(--sn-shadow);
                    transform: {rotation};
                ",
                onclick: move |_| fab.set(fab().toggled()),
                "+"
            }
        }
    }
}

const fn action_style(
    action: QuickAction,
    colors: &crate::theme::ColorPalette,
) -> (&'static str, &'static str) {
    match action {
        QuickAction::NewNote => ("🗎", colors.accent),
        QuickAction::VoiceNote => ("🎤", colors.highlight),
        QuickAction::AiAssist => ("✦", colors.warning),
        QuickAction::Template => ("▤", colors.success),
    }
}
