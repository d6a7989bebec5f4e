//! Signed-in user shown in the navbar

use serde::{Deserialize, Serialize};

use crate::util::normalize_text_option;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    /// Image reference for the profile picture
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Avatar reference, treating blank strings as missing
    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        normalize_text_option(self.avatar.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_avatar_is_missing() {
        let user = User::new("Alex", "alex@example.com").with_avatar("  ");
        assert_eq!(user.avatar_url(), None);
    }

    #[test]
    fn avatar_is_trimmed() {
        let user = User::new("Alex", "alex@example.com").with_avatar(" me.png ");
        assert_eq!(user.avatar_url().as_deref(), Some("me.png"));
    }
}
