//! Column Enum
//!
//! The fixed set of lanes a sticky can live in.

use serde::{Deserialize, Serialize};

/// A board lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Column {
    #[default]
    Backlog,
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    /// Target of bulk cleanup
    Done,
}

impl Column {
    /// Rendering order, left to right
    pub const ALL: [Column; 4] = [Column::Backlog, Column::ToDo, Column::InProgress, Column::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Backlog => "Backlog",
            Column::ToDo => "To Do",
            Column::InProgress => "In Progress",
            Column::Done => "Done",
        }
    }

    /// Column to the left, if any
    pub fn previous(&self) -> Option<Self> {
        let idx = Column::ALL.iter().position(|c| c == self)?;
        idx.checked_sub(1).map(|i| Column::ALL[i])
    }

    /// Column to the right, if any
    pub fn next(&self) -> Option<Self> {
        let idx = Column::ALL.iter().position(|c| c == self)?;
        Column::ALL.get(idx + 1).copied()
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_serialization_uses_display_names() {
        assert_eq!(serde_json::to_string(&Column::ToDo).unwrap(), "\"To Do\"");
        let parsed: Column = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(parsed, Column::InProgress);
    }

    #[test]
    fn test_column_neighbours() {
        assert_eq!(Column::Backlog.previous(), None);
        assert_eq!(Column::Backlog.next(), Some(Column::ToDo));
        assert_eq!(Column::Done.next(), None);
        assert_eq!(Column::Done.previous(), Some(Column::InProgress));
    }
}
