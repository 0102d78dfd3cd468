//! Note model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::display_text;

/// Server-assigned identifier of a row in the `notes` table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the string representation of this ID
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
        Self(value.to_string())
    }
}

/// A note row as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, generated by the backend on insert
    pub id: NoteId,
    /// Owner of the note
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Title truncated for list rows
    #[must_use]
    pub fn title_preview(&self, limit: usize) -> String {
        display_text(&self.title, limit)
    }

    /// Content truncated for list rows
    #[must_use]
    pub fn content_preview(&self, limit: usize) -> String {
        display_text(&self.content, limit)
    }

    /// Creation time rendered in the device's local timezone
    #[must_use]
    pub fn created_at_local(&self) -> String {
        self.created_at
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M")
            .to_string()
    }

    /// Replace the user-editable fields, leaving server fields untouched
    pub fn apply(&mut self, changes: &NoteChanges) {
        self.title.clone_from(&changes.title);
        self.content.clone_from(&changes.content);
    }
}

/// Insert payload for a new note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub user_id: String,
}

/// Update payload for an existing note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteChanges {
    pub title: String,
    pub content: String,
}

impl NoteChanges {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Note {
        serde_json::from_str(
            r#"{
                "id": "6d1c9c3e-2f7b-4f7e-9a59-0c4a3b3f1d2e",
                "user_id": "user-1",
                "title": "Groceries",
                "content": "Milk, eggs",
                "created_at": "2024-05-01T10:00:00+00:00",
                "updated_at": "2024-05-01T10:00:00.123456+00:00"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn note_deserializes_from_table_row() {
        let note = sample();
        assert_eq!(note.id.as_str(), "6d1c9c3e-2f7b-4f7e-9a59-0c4a3b3f1d2e");
        assert_eq!(note.user_id, "user-1");
        assert_eq!(note.title, "Groceries");
        assert!(note.updated_at > note.created_at);
    }

    #[test]
    fn apply_replaces_only_editable_fields() {
        let mut note = sample();
        let before = note.clone();
        note.apply(&NoteChanges::new("Errands", "Post office"));

        assert_eq!(note.title, "Errands");
        assert_eq!(note.content, "Post office");
        assert_eq!(note.id, before.id);
        assert_eq!(note.created_at, before.created_at);
        assert_eq!(note.updated_at, before.updated_at);
    }

    #[test]
    fn previews_truncate() {
        let note = sample();
        assert_eq!(note.title_preview(4), "Groc...");
        assert_eq!(note.content_preview(50), "Milk, eggs");
    }

    #[test]
    fn note_id_serializes_as_plain_string() {
        let id = NoteId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
