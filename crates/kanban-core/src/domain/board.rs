//! Board State
//!
//! The whole board: ordered stickies, the used-colors palette and the
//! backup-reminder bookkeeping. Every UI mutation goes through a method here.
//!
//! Invariants kept by every method:
//! - every sticky color is present in `used_colors`
//! - `used_colors` has no duplicates
//! - reordering inside a column never changes which stickies it holds

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::color::{normalize_color, DEFAULT_PALETTE};
use super::column::Column;
use super::error::{DomainError, DomainResult};
use super::sticky::{Sticky, StickyPatch};

/// Where a dragged sticky lands relative to its drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Before,
    #[default]
    After,
}

/// Full persisted board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    /// All stickies; order matters within a column
    pub stickies: Vec<Sticky>,
    /// Previously used colors, offered as suggestions
    #[serde(default = "default_used_colors")]
    pub used_colors: Vec<String>,
    /// When the board was last exported or imported
    #[serde(default)]
    pub last_backup_date: Option<DateTime<Utc>>,
    /// User opted out of backup reminders
    #[serde(default)]
    pub disable_backup_reminders: bool,
}

fn default_used_colors() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            stickies: Vec::new(),
            used_colors: default_used_colors(),
            last_backup_date: None,
            disable_backup_reminders: false,
        }
    }
}

impl BoardState {
    /// Empty board seeded with a custom palette
    pub fn with_palette(palette: &[String]) -> Self {
        let mut state = Self {
            used_colors: Vec::new(),
            ..Default::default()
        };
        for color in palette {
            state.remember_color(&normalize_or_keep(color));
        }
        state
    }

    // ========================
    // Queries
    // ========================

    pub fn get(&self, id: &str) -> Option<&Sticky> {
        self.stickies.iter().find(|s| s.id == id)
    }

    /// Stickies of one column in rendering order
    pub fn stickies_in(&self, column: Column) -> impl Iterator<Item = &Sticky> + '_ {
        self.stickies.iter().filter(move |s| s.column == column)
    }

    pub fn count_in(&self, column: Column) -> usize {
        self.stickies_in(column).count()
    }

    /// First id that appears more than once, if any
    pub fn duplicate_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.stickies
            .iter()
            .find(|s| !seen.insert(s.id.as_str()))
            .map(|s| s.id.as_str())
    }

    fn position(&self, id: &str) -> DomainResult<usize> {
        self.stickies
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("sticky {}", id)))
    }

    fn remember_color(&mut self, color: &str) {
        if !self.used_colors.iter().any(|c| c == color) {
            self.used_colors.push(color.to_string());
        }
    }

    // ========================
    // Sticky mutations
    // ========================

    /// Create a sticky at the front of the board and return its id
    pub fn add_sticky(&mut self, text: &str, color: &str, column: Column, now: DateTime<Utc>) -> DomainResult<String> {
        let text = validate_text(text)?;
        let color = normalize_color(color)?;

        let sticky = Sticky::new(text, color, column, now);
        let id = sticky.id.clone();
        self.remember_color(&sticky.color);
        self.stickies.insert(0, sticky);
        Ok(id)
    }

    /// Apply a partial update. Id and creation time never change.
    pub fn update_sticky(&mut self, id: &str, patch: StickyPatch) -> DomainResult<()> {
        let idx = self.position(id)?;
        let text = patch.text.as_deref().map(validate_text).transpose()?;
        let color = patch.color.as_deref().map(normalize_color).transpose()?;

        let sticky = &mut self.stickies[idx];
        if let Some(text) = text {
            sticky.text = text;
        }
        if let Some(column) = patch.column {
            sticky.column = column;
        }
        if let Some(color) = color {
            sticky.color = color.clone();
            self.remember_color(&color);
        }
        Ok(())
    }

    pub fn delete_sticky(&mut self, id: &str) -> DomainResult<Sticky> {
        let idx = self.position(id)?;
        Ok(self.stickies.remove(idx))
    }

    /// Change a sticky's column, keeping its place in the sequence
    pub fn move_sticky(&mut self, id: &str, column: Column) -> DomainResult<()> {
        let idx = self.position(id)?;
        self.stickies[idx].column = column;
        Ok(())
    }

    /// Move `dragged` next to `target` within their shared column.
    ///
    /// Returns `Ok(false)` without touching anything when the two stickies
    /// are the same or live in different columns.
    pub fn reorder_sticky(&mut self, dragged: &str, target: &str, placement: Placement) -> DomainResult<bool> {
        let from = self.position(dragged)?;
        let to = self.position(target)?;
        if from == to || self.stickies[from].column != self.stickies[to].column {
            return Ok(false);
        }

        let sticky = self.stickies.remove(from);
        let target_idx = self.position(target)?;
        let insert_at = match placement {
            Placement::Before => target_idx,
            Placement::After => target_idx + 1,
        };
        self.stickies.insert(insert_at, sticky);
        Ok(true)
    }

    /// Drop `dragged` next to `target`, switching columns if needed
    pub fn relocate_sticky(&mut self, dragged: &str, target: &str, placement: Placement) -> DomainResult<bool> {
        let column = self
            .get(target)
            .map(|s| s.column)
            .ok_or_else(|| DomainError::NotFound(format!("sticky {}", target)))?;
        self.move_sticky(dragged, column)?;
        self.reorder_sticky(dragged, target, placement)
    }

    /// Replace the order of one column.
    ///
    /// `ordered_ids` must be a permutation of the column's current ids. The
    /// column's stickies end up after every other sticky; relative order of
    /// the other columns is kept.
    pub fn reorder_column(&mut self, column: Column, ordered_ids: &[String]) -> DomainResult<()> {
        let (lane, others): (Vec<Sticky>, Vec<Sticky>) =
            self.stickies.iter().cloned().partition(|s| s.column == column);

        if lane.len() != ordered_ids.len() {
            return Err(DomainError::InvalidInput(format!(
                "column {} holds {} stickies, got {} ids",
                column,
                lane.len(),
                ordered_ids.len()
            )));
        }

        let mut by_id: HashMap<String, Sticky> = lane.into_iter().map(|s| (s.id.clone(), s)).collect();
        let mut ordered = Vec::with_capacity(ordered_ids.len());
        for id in ordered_ids {
            let sticky = by_id
                .remove(id)
                .ok_or_else(|| DomainError::InvalidInput(format!("sticky {} is not in column {}", id, column)))?;
            ordered.push(sticky);
        }

        self.stickies = others;
        self.stickies.extend(ordered);
        Ok(())
    }

    /// Remove everything in the Done column, returning how many went
    pub fn delete_done_stickies(&mut self) -> usize {
        let before = self.stickies.len();
        self.stickies.retain(|s| !s.is_done());
        before - self.stickies.len()
    }

    // ========================
    // Palette and reminders
    // ========================

    /// Restore palette and reminder settings. Stickies are kept.
    pub fn reset(&mut self, palette: &[String]) {
        let stickies = std::mem::take(&mut self.stickies);
        *self = Self::with_palette(palette);
        self.stickies = stickies;
        self.normalize();
    }

    pub fn disable_backup_reminders(&mut self) {
        self.disable_backup_reminders = true;
    }

    pub fn mark_backed_up(&mut self, now: DateTime<Utc>) {
        self.last_backup_date = Some(now);
    }

    /// True when reminders are on and the last backup is older than `interval`
    pub fn needs_backup_reminder(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        if self.disable_backup_reminders {
            return false;
        }
        match self.last_backup_date {
            None => true,
            Some(last) => last < now - interval,
        }
    }

    /// Re-establish the palette invariants on state that came from outside
    /// (storage, backup files). Colors that fail validation are kept verbatim.
    pub fn normalize(&mut self) {
        let existing = std::mem::take(&mut self.used_colors);
        for color in &existing {
            self.remember_color(&normalize_or_keep(color));
        }

        for idx in 0..self.stickies.len() {
            let color = normalize_or_keep(&self.stickies[idx].color);
            self.remember_color(&color);
            self.stickies[idx].color = color;
        }
    }
}

fn normalize_or_keep(color: &str) -> String {
    normalize_color(color).unwrap_or_else(|_| color.to_string())
}

fn validate_text(text: &str) -> DomainResult<String> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidInput("sticky text is empty".to_string()));
    }
    Ok(text.to_string())
}
