//! Note model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Tags rendered on a card before the rest collapse into a "+N" badge.
pub const MAX_VISIBLE_TAGS: usize = 3;

const UNTITLED_NOTE: &str = "Untitled Note";
const EMPTY_CONTENT: &str = "No content";

/// A unique identifier for a note.
///
/// Ids are opaque strings. Sources may use any scheme; freshly created notes
/// get a UUID v7 so they sort by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap an existing id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a new unique id using UUID v7
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Accent color of a note card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Yellow,
    #[default]
    Blue,
    Green,
    Purple,
    Pink,
}

impl ColorTheme {
    pub const ALL: [Self; 5] = [
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Pink,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown color theme '{s}'")))
    }
}

/// A note shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    pub title: String,
    /// Plain text body
    pub content: String,
    /// Ordered, as authored
    #[serde(default)]
    pub tags: Vec<String>,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default)]
    pub is_shared: bool,
    /// Number of people the note is shared with
    #[serde(default)]
    pub collaborators: u32,
    #[serde(default)]
    pub color_theme: ColorTheme,
}

impl Note {
    /// Create an unstarred, unshared blue note modified now
    #[must_use]
    pub fn new(
        id: impl Into<NoteId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            last_modified: Utc::now(),
            is_starred: false,
            is_shared: false,
            collaborators: 0,
            color_theme: ColorTheme::default(),
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = last_modified;
        self
    }

    #[must_use]
    pub fn starred(mut self) -> Self {
        self.is_starred = true;
        self
    }

    /// Mark the note as shared with `collaborators` people
    #[must_use]
    pub fn shared_with(mut self, collaborators: u32) -> Self {
        self.is_shared = true;
        self.collaborators = collaborators;
        self
    }

    #[must_use]
    pub fn with_collaborators(mut self, collaborators: u32) -> Self {
        self.collaborators = collaborators;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color_theme: ColorTheme) -> Self {
        self.color_theme = color_theme;
        self
    }

    /// Title to render, falling back to a placeholder for empty titles
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_NOTE
        } else {
            &self.title
        }
    }

    /// Content preview to render, falling back to a placeholder
    #[must_use]
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            EMPTY_CONTENT
        } else {
            &self.content
        }
    }

    /// Tags shown on the card and the number hidden behind the overflow badge
    #[must_use]
    pub fn visible_tags(&self) -> (&[String], usize) {
        let shown = self.tags.len().min(MAX_VISIBLE_TAGS);
        (&self.tags[..shown], self.tags.len() - shown)
    }

    /// Collaborator count is only meaningful for shared notes
    #[must_use]
    pub const fn shows_collaborators(&self) -> bool {
        self.is_shared && self.collaborators > 0
    }
}
