//! Top navigation bar: branding, search, notifications, profile menu

use dioxus::prelude::*;

use studynest_core::interaction::MenuToggle;
use studynest_core::User;

use super::ui::{fire, ButtonVariant, UiButton};
use crate::state::AppState;

/// Navigation bar.
///
/// The search field here is decorative; the dashboard owns the working one.
#[component]
pub fn Navbar(
    user: Option<User>,
    on_menu_toggle: Option<EventHandler>,
    on_sign_out: Option<EventHandler>,
    on_sign_in: Option<EventHandler>,
    on_sign_up: Option<EventHandler>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut profile_menu = use_signal(MenuToggle::default);

    rsx! {
        nav {
            class: "navbar",
            style: "
                height: 64px;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 0 24px;
                background: {colors.bg_card};
                border-bottom: 1px solid {colors.border};
            ",

            div {
                style: "display: flex; align-items: center; gap: 16px;",

                UiButton {
                    title: "Toggle sidebar",
                    onclick: move |_| fire(on_menu_toggle),
                    "☰"
                }

                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    div {
                        style: "
                            width: 32px;
                            height: 32px;
                            border-radius: 8px;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background: linear-gradient(135deg, {colors.accent}, {colors.highlight});
                            color: #ffffff;
                            font-weight: 700;
                            font-size: 13px;
                        ",
                        "SN"
                    }
                    h1 {
                        style: "margin: 0; font-size: 20px; font-weight: 700; color: {colors.accent};",
                        "StudyNest"
                    }
                }
            }

            div {
                style: "flex: 1; max-width: 512px; margin: 0 32px;",
                input {
                    r#type: "text",
                    placeholder: "Search notes with AI...",
                    style: "
                        width: 100%;
                        box-sizing: border-box;
                        padding: 8px 16px;
                        border: 1px solid {colors.border};
                        border-radius: 8px;
                        background: {colors.bg_secondary};
                        color: {colors.text_primary};
                        outline: none;
                    ",
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 12px;",

                UiButton {
                    title: "Notifications",
                    style: "position: relative;",
                    "🔔"
                    span {
                        style: "
                            position: absolute;
                            top: 2px;
                            right: 2px;
                            width: 8px;
                            height: 8px;
                            border-radius: 50%;
                            background: {colors.highlight};
                        ",
                    }
                }

                if let Some(user) = user {
                    div {
                        style: "position: relative;",

                        UiButton {
                            onclick: move |_| profile_menu.write().toggle(),
                            Avatar { avatar: user.avatar_url(), name: user.name.clone() }
                            span { style: "font-weight: 500;", "{user.name}" }
                        }

                        if profile_menu().is_open() {
                            div {
                                class: "profile-menu",
                                style: "
                                    position: absolute;
                                    right: 0;
                                    margin-top: 8px;
                                    width: 192px;
                                    background: {colors.bg_card};
                                    border: 1px solid {colors.border};
                                    border-radius: 8px;
                                    box-shadow: var(--sn-shadow);
                                    z-index: 50;
                                ",
                                div {
                                    style: "padding: 12px; border-bottom: 1px solid {colors.border};",
                                    p { style: "margin: 0; font-weight: 500;", "{user.name}" }
                                    p {
                                        style: "margin: 0; font-size: 12px; color: {colors.text_muted};",
                                        "{user.email}"
                                    }
                                }
                                div {
                                    style: "padding: 4px;",
                                    UiButton {
                                        variant: ButtonVariant::Danger,
                                        block: true,
                                        onclick: move |_| fire(on_sign_out),
                                        "⎋ Sign Out"
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        style: "display: flex; gap: 8px;",
                        UiButton {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| fire(on_sign_in),
                            "Sign In"
                        }
                        UiButton {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| fire(on_sign_up),
                            "Sign Up"
                        }
                    }
                }
            }
        }
    }
}

/// Profile picture, or a placeholder glyph when there is none
#[component]
fn Avatar(avatar: Option<String>, name: String) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        if let Some(src) = avatar {
            img {
                src: "{src}",
                alt: "{name}",
                style: "width: 24px; height: 24px; border-radius: 50%;",
            }
        } else {
            div {
                style: "
                    width: 24px;
                    height: 24px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, {colors.highlight}, {colors.accent});
                    color: #ffffff;
                    font-size: 12px;
                ",
                "👤"
            }
        }
    }
}
