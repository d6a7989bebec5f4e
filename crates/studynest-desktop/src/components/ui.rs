//! Shared UI primitives: buttons, badges, and the stylesheet they rely on.

use dioxus::prelude::*;

/// Styles for classes that need hover/transition rules. Colors come from the
/// CSS variables set per `data-theme`.
pub const UI_STYLES: &str = r#"
.app-container[data-theme="light"] {
    --sn-bg: #f5f6fb;
    --sn-card: #ffffff;
    --sn-text: #1f2333;
    --sn-muted: #6b7085;
    --sn-border: #e1e4ee;
    --sn-accent: #5b5bd6;
    --sn-accent-soft: rgba(91, 91, 214, 0.12);
    --sn-destructive: #d64545;
    --sn-shadow: 0 8px 24px rgba(31, 35, 51, 0.12);
}

.app-container[data-theme="dark"] {
    --sn-bg: #14151c;
    --sn-card: #22242f;
    --sn-text: #e8e9f1;
    --sn-muted: #9a9db1;
    --sn-border: #33364a;
    --sn-accent: #8b8bf0;
    --sn-accent-soft: rgba(139, 139, 240, 0.16);
    --sn-destructive: #f07a7a;
    --sn-shadow: 0 8px 24px rgba(0, 0, 0, 0.45);
}

.ui-button {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    border-radius: 8px;
    padding: 6px 10px;
    font-size: 13px;
    font-weight: 500;
    border: 1px solid transparent;
    cursor: pointer;
    background: transparent;
    color: var(--sn-text);
    transition: background-color 150ms ease, color 150ms ease, border-color 150ms ease;
}

.ui-button--block {
    width: 100%;
    justify-content: flex-start;
}

.ui-button--primary {
    background: linear-gradient(135deg, var(--sn-accent), #c05bd6);
    color: #ffffff;
}

.ui-button--secondary {
    background: var(--sn-accent-soft);
    color: var(--sn-accent);
}

.ui-button--outline {
    border-color: var(--sn-border);
    background: var(--sn-card);
}

.ui-button--ghost:hover,
.ui-button--outline:hover {
    background: var(--sn-accent-soft);
}

.ui-button--danger {
    color: var(--sn-destructive);
}

.ui-button--danger:hover {
    background: rgba(214, 69, 69, 0.1);
}

.ui-badge {
    display: inline-block;
    font-size: 11px;
    padding: 2px 8px;
    border-radius: 999px;
    background: var(--sn-accent-soft);
    color: var(--sn-text);
}

.ui-badge--outline {
    background: transparent;
    border: 1px solid var(--sn-border);
}

.note-card {
    transition: transform 200ms ease, box-shadow 200ms ease;
}

.note-card:hover {
    transform: translateY(-4px);
    box-shadow: var(--sn-shadow);
}

.note-card .note-card-menu-button {
    opacity: 0;
    transition: opacity 150ms ease;
}

.note-card:hover .note-card-menu-button {
    opacity: 1;
}

.fab-actions {
    transition: opacity 300ms ease, transform 300ms ease;
    transform-origin: bottom;
}

.fab-main {
    transition: transform 300ms ease;
}

.sidebar {
    transition: width 300ms ease;
}
"#;

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    #[default]
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Secondary => "ui-button--secondary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
            Self::Danger => "ui-button--danger",
        }
    }

    /// Highlighted when active, plain otherwise
    pub const fn selected(is_active: bool) -> Self {
        if is_active {
            Self::Secondary
        } else {
            Self::Ghost
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] block: bool,
    /// Extra classes appended to the variant classes
    #[props(into, default)]
    extra_class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut class_name = format!("ui-button {}", variant.class());
    if block {
        class_name.push_str(" ui-button--block");
    }
    if !extra_class.is_empty() {
        class_name.push(' ');
        class_name.push_str(&extra_class);
    }

    rsx! {
        button {
            class: "{class_name}",
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn Badge(#[props(default)] outline: bool, children: Element) -> Element {
    let class_name = if outline {
        "ui-badge ui-badge--outline"
    } else {
        "ui-badge"
    };

    rsx! {
        span { class: class_name, {children} }
    }
}

/// Invoke an optional callback
pub fn fire(handler: Option<EventHandler>) {
    if let Some(handler) = handler {
        handler.call(());
    }
}
