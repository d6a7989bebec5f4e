//! Theme configuration for the dashboard

use std::sync::OnceLock;

pub use studynest_core::models::ThemeMode;
use studynest_core::ColorTheme;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Value for the `data-theme` attribute
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if is_system_dark_mode() {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    // AppsUseLightTheme: 0 = dark, 1 = light
    let output = Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout).contains("0x0"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light mode.", e);
            false
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output();

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light mode.", e);
            false
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
fn detect_system_dark_mode() -> bool {
    tracing::debug!("Unsupported platform for system theme detection, using light mode");
    false
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_card: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub highlight: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub destructive: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#f5f6fb",
    bg_secondary: "#eef0f7",
    bg_card: "#ffffff",
    text_primary: "#1f2333",
    text_muted: "#6b7085",
    border: "#e1e4ee",
    accent: "#5b5bd6",
    accent_text: "#ffffff",
    highlight: "#c05bd6",
    warning: "#e6a23c",
    success: "#2f9e6e",
    destructive: "#d64545",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#14151c",
    bg_secondary: "#1b1d26",
    bg_card: "#22242f",
    text_primary: "#e8e9f1",
    text_muted: "#9a9db1",
    border: "#33364a",
    accent: "#8b8bf0",
    accent_text: "#14151c",
    highlight: "#d78bf0",
    warning: "#f0c060",
    success: "#5ccf9a",
    destructive: "#f07a7a",
};

/// Card tint and left border for a note color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteColors {
    pub background: &'static str,
    pub border: &'static str,
}

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    /// Card colors for a note. Each note color borrows its border from a
    /// palette role so the accents stay readable in both themes.
    #[must_use]
    pub const fn note_colors(self, color: ColorTheme) -> NoteColors {
        let palette = self.palette();
        let dark = matches!(self, Self::Dark);
        match color {
            ColorTheme::Yellow => NoteColors {
                background: if dark { "#2c2818" } else { "#fff8e1" },
                border: palette.warning,
            },
            ColorTheme::Blue => NoteColors {
                background: if dark { "#1c2233" } else { "#eaf1ff" },
                border: palette.accent,
            },
            ColorTheme::Green => NoteColors {
                background: if dark { "#182a22" } else { "#e8f7ef" },
                border: palette.success,
            },
            ColorTheme::Purple => NoteColors {
                background: if dark { "#281c33" } else { "#f4eaff" },
                border: palette.highlight,
            },
            ColorTheme::Pink => NoteColors {
                background: if dark { "#331c26" } else { "#ffebf1" },
                border: palette.destructive,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_system() {
        assert_eq!(resolve_theme(ThemeMode::Light), ResolvedTheme::Light);
        assert_eq!(resolve_theme(ThemeMode::Dark), ResolvedTheme::Dark);
    }

    #[test]
    fn every_note_color_has_distinct_background() {
        for theme in [ResolvedTheme::Light, ResolvedTheme::Dark] {
            let backgrounds: std::collections::HashSet<_> = ColorTheme::ALL
                .iter()
                .map(|color| theme.note_colors(*color).background)
                .collect();
            assert_eq!(backgrounds.len(), ColorTheme::ALL.len());
        }
    }

    #[test]
    fn default_note_color_uses_accent_border() {
        let colors = ResolvedTheme::Light.note_colors(ColorTheme::default());
        assert_eq!(colors.border, LIGHT_PALETTE.accent);
    }
}
