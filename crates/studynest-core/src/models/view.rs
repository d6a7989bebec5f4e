//! Dashboard view state

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Section;
use crate::config::DashboardConfig;
use crate::error::Error;

/// Note layout on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(Error::InvalidInput(format!("unknown view mode '{other}'"))),
        }
    }
}

/// Ephemeral UI state owned by the dashboard. Lost on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub sidebar_open: bool,
    pub active_section: Section,
    pub view_mode: ViewMode,
    pub search_query: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            active_section: Section::default(),
            view_mode: ViewMode::default(),
            search_query: String::new(),
        }
    }
}

impl ViewState {
    /// Initial state seeded from user configuration
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            sidebar_open: config.sidebar_open,
            active_section: config.default_section,
            view_mode: config.view_mode,
            search_query: String::new(),
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_state_matches_first_load() {
        let state = ViewState::default();
        assert!(state.sidebar_open);
        assert_eq!(state.active_section, Section::MyNotes);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn toggle_sidebar_flips() {
        let mut state = ViewState::default();
        state.toggle_sidebar();
        assert!(!state.sidebar_open);
        state.toggle_sidebar();
        assert!(state.sidebar_open);
    }

    #[test]
    fn from_config_uses_configured_defaults() {
        let config = DashboardConfig {
            sidebar_open: false,
            default_section: Section::Starred,
            view_mode: ViewMode::List,
            ..DashboardConfig::default()
        };
        let state = ViewState::from_config(&config);
        assert_eq!(
            state,
            ViewState {
                sidebar_open: false,
                active_section: Section::Starred,
                view_mode: ViewMode::List,
                search_query: String::new(),
            }
        );
    }

    #[test]
    fn view_mode_parse() {
        assert_eq!("LIST".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert!("table".parse::<ViewMode>().is_err());
    }
}
