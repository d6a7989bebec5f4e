//! Dashboard configuration.
//!
//! A small JSON file with initial view preferences. Every key is optional and
//! a missing file means "use the defaults".

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Section, ThemeMode, ViewMode};
use crate::util::normalize_text_option;

const CONFIG_FILE_NAME: &str = "dashboard.json";
const CONFIG_DIR_NAME: &str = "studynest";

/// Environment variable pointing at an explicit config file
pub const CONFIG_PATH_ENV: &str = "STUDYNEST_CONFIG";

const DEFAULT_WINDOW_TITLE: &str = "StudyNest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub theme: ThemeMode,
    pub sidebar_open: bool,
    pub default_section: Section,
    pub view_mode: ViewMode,
    pub window_title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            sidebar_open: true,
            default_section: Section::default(),
            view_mode: ViewMode::default(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

/// Config file location: `$STUDYNEST_CONFIG`, else the platform config dir.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = normalize_text_option(std::env::var(CONFIG_PATH_ENV).ok()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl DashboardConfig {
    pub fn load() -> Result<Self> {
        let Some(path) = default_config_path() else {
            tracing::debug!("No config directory for this platform, using defaults");
            return Ok(Self::default());
        };
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!("Failed to parse {}: {}", path.display(), error))
        })?;
        config.normalize();
        tracing::info!("Loaded dashboard config from {}", path.display());
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut normalized = self.clone();
        normalized.normalize();
        std::fs::write(path, serde_json::to_string_pretty(&normalized)?)?;
        Ok(())
    }

    fn normalize(&mut self) {
        self.window_title = normalize_text_option(Some(self.window_title.clone()))
            .unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_absent_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "view_mode": "list", "theme": "dark" }"#).unwrap();

        let config = DashboardConfig::load_from_path(&path).unwrap();
        assert_eq!(
            config,
            DashboardConfig {
                theme: ThemeMode::Dark,
                view_mode: ViewMode::List,
                ..DashboardConfig::default()
            }
        );
    }

    #[test]
    fn section_is_read_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "default_section": "shared-notes" }"#).unwrap();

        let config = DashboardConfig::load_from_path(&path).unwrap();
        assert_eq!(config.default_section, Section::SharedNotes);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "view_mode": "table" }"#).unwrap();

        let error = DashboardConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }

    #[test]
    fn blank_window_title_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "window_title": "   " }"#).unwrap();

        let config = DashboardConfig::load_from_path(&path).unwrap();
        assert_eq!(config.window_title, "StudyNest");
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = DashboardConfig {
            sidebar_open: false,
            default_section: Section::Starred,
            ..DashboardConfig::default()
        };

        config.save_to_path(&path).unwrap();
        assert_eq!(DashboardConfig::load_from_path(&path).unwrap(), config);
    }
}
