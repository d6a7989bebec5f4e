//! Dashboard sections
//!
//! A section is a named view over the note collection. Only a few of them
//! narrow the list (see [`crate::filter`]); the rest are navigation targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Sidebar group a section is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionGroup {
    Primary,
    AiFeatures,
    Secondary,
}

/// Navigation section ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Dashboard,
    #[default]
    MyNotes,
    SharedNotes,
    Starred,
    Tags,
    AiAssistant,
    Collaborators,
    Archive,
    Trash,
    Settings,
}

impl Section {
    /// Main navigation, in sidebar order
    pub const PRIMARY: [Self; 5] = [
        Self::Dashboard,
        Self::MyNotes,
        Self::SharedNotes,
        Self::Starred,
        Self::Tags,
    ];

    pub const AI_FEATURES: [Self; 2] = [Self::AiAssistant, Self::Collaborators];

    pub const SECONDARY: [Self; 3] = [Self::Archive, Self::Trash, Self::Settings];

    /// Stable id used in configuration and logs
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::MyNotes => "my-notes",
            Self::SharedNotes => "shared-notes",
            Self::Starred => "starred",
            Self::Tags => "tags",
            Self::AiAssistant => "ai-assistant",
            Self::Collaborators => "collaborators",
            Self::Archive => "archive",
            Self::Trash => "trash",
            Self::Settings => "settings",
        }
    }

    /// Sidebar label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::MyNotes => "My Notes",
            Self::SharedNotes => "Shared Notes",
            Self::Starred => "Starred",
            Self::Tags => "Tags",
            Self::AiAssistant => "AI Assistant",
            Self::Collaborators => "Collaborators",
            Self::Archive => "Archive",
            Self::Trash => "Trash",
            Self::Settings => "Settings",
        }
    }

    /// Page heading shown above the note grid.
    ///
    /// Sections without a dedicated page fall back to "My Notes".
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::SharedNotes => "Shared Notes",
            Self::Starred => "Starred Notes",
            Self::Tags => "Tags",
            _ => "My Notes",
        }
    }

    #[must_use]
    pub const fn group(self) -> SectionGroup {
        match self {
            Self::Dashboard | Self::MyNotes | Self::SharedNotes | Self::Starred | Self::Tags => {
                SectionGroup::Primary
            }
            Self::AiAssistant | Self::Collaborators => SectionGroup::AiFeatures,
            Self::Archive | Self::Trash | Self::Settings => SectionGroup::Secondary,
        }
    }

    /// Every section in sidebar order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::PRIMARY
            .into_iter()
            .chain(Self::AI_FEATURES)
            .chain(Self::SECONDARY)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        Self::all()
            .find(|section| section.id() == id)
            .ok_or_else(|| Error::InvalidInput(format!("unknown section '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_every_section_id() {
        for section in Section::all() {
            assert_eq!(section.id().parse::<Section>().unwrap(), section);
        }
        assert!("inbox".parse::<Section>().is_err());
    }

    #[test]
    fn titles_fall_back_to_my_notes() {
        assert_eq!(Section::Starred.title(), "Starred Notes");
        assert_eq!(Section::SharedNotes.title(), "Shared Notes");
        assert_eq!(Section::Trash.title(), "My Notes");
        assert_eq!(Section::AiAssistant.title(), "My Notes");
    }

    #[test]
    fn groups_match_sidebar_layout() {
        assert!(Section::PRIMARY
            .iter()
            .all(|section| section.group() == SectionGroup::Primary));
        assert_eq!(Section::Collaborators.group(), SectionGroup::AiFeatures);
        assert_eq!(Section::Settings.group(), SectionGroup::Secondary);
        assert_eq!(Section::all().count(), 10);
    }

    #[test]
    fn serializes_as_kebab_case_id() {
        let json = serde_json::to_string(&Section::SharedNotes).unwrap();
        assert_eq!(json, "\"shared-notes\"");
    }
}
