//! Backup Codec
//!
//! Export and import of the whole board as a JSON file. The format is the
//! persisted `BoardState` itself, pretty-printed.

use chrono::{DateTime, Utc};

use crate::domain::{BoardState, DomainError, DomainResult};

/// Stamp the backup time on `state` and serialize it
pub fn export_backup(state: &mut BoardState, now: DateTime<Utc>) -> DomainResult<String> {
    state.mark_backed_up(now);
    serde_json::to_string_pretty(state).map_err(|e| DomainError::Internal(e.to_string()))
}

/// Export `state` and hand the file to `deliver` as `(file_name, json)`.
///
/// The backup date is stamped on `state` only when `deliver` succeeds; a
/// failed delivery leaves `state` untouched. Returns the file name.
pub fn deliver_backup<E: std::fmt::Display>(
    state: &mut BoardState,
    now: DateTime<Utc>,
    deliver: impl FnOnce(&str, &str) -> Result<(), E>,
) -> DomainResult<String> {
    let mut stamped = state.clone();
    let json = export_backup(&mut stamped, now)?;
    let file_name = backup_file_name(now);
    deliver(&file_name, &json).map_err(|e| DomainError::Internal(format!("backup could not be saved: {}", e)))?;
    *state = stamped;
    Ok(file_name)
}

/// Parse a backup file into a board ready to replace the current one
pub fn import_backup(content: &str, now: DateTime<Utc>) -> DomainResult<BoardState> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| DomainError::InvalidInput(format!("Invalid backup file: {}", e)))?;

    if !value.get("stickies").is_some_and(|s| s.is_array()) {
        return Err(DomainError::InvalidInput(
            "Invalid backup file: missing or invalid stickies array".to_string(),
        ));
    }

    let mut state: BoardState = serde_json::from_value(value)
        .map_err(|e| DomainError::InvalidInput(format!("Invalid backup file: {}", e)))?;

    if let Some(id) = state.duplicate_id() {
        return Err(DomainError::InvalidInput(format!(
            "Invalid backup file: sticky id {} appears more than once",
            id
        )));
    }

    state.normalize();
    state.mark_backed_up(now);
    Ok(state)
}

/// Download name for a backup taken at `now`
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!("kanban-backup-{}.json", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Column;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_export_marks_backup_date() {
        let mut state = BoardState::default();
        state.add_sticky("Ship it", "#4c90e1", Column::ToDo, now()).unwrap();

        let json = export_backup(&mut state, now()).unwrap();

        assert_eq!(state.last_backup_date, Some(now()));
        assert!(json.contains("\"lastBackupDate\""));
        assert!(json.contains("\"usedColors\""));
        assert!(json.contains("\n  \"stickies\""));
    }

    #[test]
    fn test_deliver_backup_stamps_after_delivery() {
        let mut state = BoardState::default();
        state.add_sticky("Ship it", "#4c90e1", Column::ToDo, now()).unwrap();
        let mut delivered = None;

        let file_name = deliver_backup(&mut state, now(), |name: &str, json: &str| {
            delivered = Some((name.to_string(), json.to_string()));
            Ok::<(), String>(())
        })
        .unwrap();

        assert_eq!(file_name, "kanban-backup-2026-10-16.json");
        assert_eq!(state.last_backup_date, Some(now()));
        let (name, json) = delivered.expect("Nothing delivered");
        assert_eq!(name, file_name);
        assert!(json.contains("Ship it"));
    }

    #[test]
    fn test_failed_delivery_is_not_a_backup() {
        let mut state = BoardState::default();
        state.add_sticky("Ship it", "#4c90e1", Column::ToDo, now()).unwrap();
        let before = state.clone();

        let result = deliver_backup(&mut state, now(), |_: &str, _: &str| Err("no document"));

        assert!(matches!(result, Err(DomainError::Internal(_))));
        assert_eq!(state, before);
        assert!(state.needs_backup_reminder(now(), chrono::Duration::days(7)));
    }

    #[test]
    fn test_export_then_import_keeps_board() {
        let mut state = BoardState::default();
        state.add_sticky("one", "#4c90e1", Column::Backlog, now()).unwrap();
        state.add_sticky("two", "#000000", Column::Done, now()).unwrap();
        let json = export_backup(&mut state, now()).unwrap();

        let later = now() + chrono::Duration::days(2);
        let imported = import_backup(&json, later).unwrap();

        assert_eq!(imported.stickies, state.stickies);
        assert_eq!(imported.used_colors, state.used_colors);
        assert_eq!(imported.last_backup_date, Some(later));
    }

    #[test]
    fn test_import_legacy_file() {
        let content = r##"{
            "stickies": [
                { "id": "1", "text": "Old", "color": "#ABCDEF", "column": "To Do",
                  "createdAt": "2024-01-02T03:04:05.000Z", "isEditing": false }
            ],
            "usedColors": ["#4c90e1"],
            "lastBackupDate": null
        }"##;

        let state = import_backup(content, now()).unwrap();

        assert_eq!(state.stickies.len(), 1);
        assert_eq!(state.stickies[0].color, "#abcdef");
        assert_eq!(state.used_colors, vec!["#4c90e1", "#abcdef"]);
        assert!(!state.disable_backup_reminders);
        assert_eq!(state.last_backup_date, Some(now()));
    }

    #[test]
    fn test_import_rejects_missing_stickies() {
        let err = import_backup(r#"{ "usedColors": [] }"#, now()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidInput("Invalid backup file: missing or invalid stickies array".to_string())
        );
        assert!(import_backup(r#"{ "stickies": {} }"#, now()).is_err());
    }

    #[test]
    fn test_import_rejects_garbage() {
        assert!(matches!(import_backup("not json", now()), Err(DomainError::InvalidInput(_))));
        assert!(import_backup(r#"{ "stickies": [ { "id": 1 } ] }"#, now()).is_err());
    }

    #[test]
    fn test_import_rejects_duplicate_ids() {
        let content = r##"{
            "stickies": [
                { "id": "same", "text": "a", "color": "#fff", "column": "Done", "createdAt": "2024-01-02T03:04:05Z" },
                { "id": "same", "text": "b", "color": "#fff", "column": "Done", "createdAt": "2024-01-02T03:04:05Z" }
            ]
        }"##;
        assert!(import_backup(content, now()).is_err());
    }

    #[test]
    fn test_backup_file_name() {
        assert_eq!(backup_file_name(now()), "kanban-backup-2026-10-16.json");
    }
}
