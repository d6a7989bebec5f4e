//! Search bar component

use dioxus::prelude::*;

use crate::state::AppState;

/// Search input for filtering the dashboard's notes
#[component]
pub fn SearchBar(value: String, on_change: EventHandler<String>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "search-bar",
            style: "position: relative; flex: 1; max-width: 448px;",

            span {
                style: "
                    position: absolute;
                    left: 12px;
                    top: 50%;
                    transform: translateY(-50%);
                    color: {colors.text_muted};
                ",
                "⌕"
            }
            input {
                r#type: "text",
                placeholder: "Search your notes...",
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
                style: "
                    width: 100%;
                    box-sizing: border-box;
                    padding: 8px 12px 8px 36px;
                    border: 1px solid {colors.border};
                    border-radius: 8px;
                    font-size: 14px;
                    background: {colors.bg_card};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }
        }
    }
}
