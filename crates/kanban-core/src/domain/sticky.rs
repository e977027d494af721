//! Sticky Entity
//!
//! A single colored card on the board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::column::Column;

/// A kanban card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sticky {
    /// Opaque unique identifier
    pub id: String,
    /// Free-text label
    pub text: String,
    /// Hex color (e.g., "#4c90e1")
    pub color: String,
    /// Lane the sticky belongs to
    pub column: Column,
    /// Creation time, never changes after creation
    pub created_at: DateTime<Utc>,
}

impl Sticky {
    /// Create a sticky with a fresh v4 id
    pub fn new(text: String, color: String, column: Column, created_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text,
            color,
            column,
            created_at,
        }
    }

    pub fn is_done(&self) -> bool {
        self.column == Column::Done
    }
}

/// Partial update for a sticky. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickyPatch {
    pub text: Option<String>,
    pub color: Option<String>,
    pub column: Option<Column>,
}

impl StickyPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Default::default() }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self { color: Some(color.into()), ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_creation() {
        let now = Utc::now();
        let sticky = Sticky::new("Write tests".to_string(), "#4c90e1".to_string(), Column::ToDo, now);
        assert_eq!(sticky.text, "Write tests");
        assert_eq!(sticky.created_at, now);
        assert!(!sticky.is_done());
        assert_eq!(sticky.id.len(), 36);
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Utc::now();
        let a = Sticky::new("a".to_string(), "#fff".to_string(), Column::Backlog, now);
        let b = Sticky::new("b".to_string(), "#fff".to_string(), Column::Backlog, now);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ignores_transient_fields_on_deserialize() {
        let json = r##"{
            "id": "abc",
            "text": "Legacy",
            "color": "#ed706a",
            "column": "Done",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "isEditing": false
        }"##;
        let sticky: Sticky = serde_json::from_str(json).unwrap();
        assert_eq!(sticky.id, "abc");
        assert!(sticky.is_done());
    }

    #[test]
    fn test_patch_helpers() {
        assert_eq!(StickyPatch::default(), StickyPatch { text: None, color: None, column: None });
        assert_eq!(StickyPatch::text("x").text.as_deref(), Some("x"));
        assert_eq!(StickyPatch::color("#fff").color.as_deref(), Some("#fff"));
    }
}
