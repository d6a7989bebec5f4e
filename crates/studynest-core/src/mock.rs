//! Demonstration data for the dashboard.

use chrono::{DateTime, Duration, Utc};

use crate::models::{ColorTheme, Note, User};

/// The five sample notes, modified at fixed offsets before `now`
#[must_use]
pub fn mock_notes(now: DateTime<Utc>) -> Vec<Note> {
    vec![
        Note::new(
            "1",
            "Machine Learning Fundamentals",
            "Introduction to supervised and unsupervised learning algorithms. Key concepts include linear regression, decision trees, neural networks...",
        )
        .with_tags(["ML", "AI", "Study"])
        .with_last_modified(now - Duration::hours(2))
        .starred()
        .with_color(ColorTheme::Blue)
        .with_collaborators(3),
        Note::new(
            "2",
            "React Best Practices",
            "Component composition, state management with hooks, performance optimization techniques, and testing strategies...",
        )
        .with_tags(["React", "Frontend", "JavaScript"])
        .with_last_modified(now - Duration::hours(5))
        .with_color(ColorTheme::Green)
        .shared_with(2),
        Note::new(
            "3",
            "Project Planning Meeting Notes",
            "Discussed timeline for Q4 deliverables, resource allocation, and key milestones. Action items assigned to team leads...",
        )
        .with_tags(["Meeting", "Planning", "Work"])
        .with_last_modified(now - Duration::days(1))
        .with_color(ColorTheme::Yellow),
        Note::new(
            "4",
            "Data Structures & Algorithms",
            "Comprehensive study guide covering arrays, linked lists, trees, graphs, sorting algorithms, and time complexity analysis...",
        )
        .with_tags(["DSA", "Programming", "Study"])
        .with_last_modified(now - Duration::days(3))
        .starred()
        .with_color(ColorTheme::Purple),
        Note::new(
            "5",
            "UX Design Principles",
            "User-centered design approach, accessibility guidelines, color theory, typography, and responsive design patterns...",
        )
        .with_tags(["Design", "UX", "UI"])
        .with_last_modified(now - Duration::weeks(1))
        .with_color(ColorTheme::Pink)
        .shared_with(5),
    ]
}

/// Demo account shown in the navbar
#[must_use]
pub fn mock_user() -> User {
    User::new("Alex Johnson", "alex@studynest.com").with_avatar("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mock_ids_are_unique() {
        let notes = mock_notes(Utc::now());
        let ids: HashSet<_> = notes.iter().map(|note| note.id.clone()).collect();
        assert_eq!(ids.len(), notes.len());
    }

    #[test]
    fn mock_notes_are_newest_first() {
        let notes = mock_notes(Utc::now());
        assert!(notes
            .windows(2)
            .all(|pair| pair[0].last_modified > pair[1].last_modified));
    }

    #[test]
    fn mock_user_has_no_avatar() {
        assert_eq!(mock_user().avatar_url(), None);
    }
}
