//! # Undo/Redo Stack
//!
//! Linear history of document snapshots.
//!
//! ## Design
//!
//! - Every content edit pushes a snapshot of the state *before* the edit
//! - Undo pops the newest snapshot and parks the current state on the redo stack
//! - Redo does the reverse
//! - A new edit clears the redo stack (branching discards the old future)
//! - Batches fold several edits into one undo step
//!
//! Snapshots own their data outright. Pushing moves a fresh copy in and
//! restoring moves it back out, so the live document and the history can
//! never share a section, and editing one cannot change the other.

use crate::PreviewDevice;
use folio_model::{Section, SectionId};

/// Captured editor state. The history stacks and dirty flag are not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySnapshot {
    pub sections: Vec<Section>,
    pub selected_section_id: Option<SectionId>,
    pub is_dragging: bool,
    pub preview_mode: bool,
    pub preview_device: PreviewDevice,
    pub portfolio_title: String,
}

/// One undo step
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub snapshot: HistorySnapshot,

    /// Optional description of the edit that followed this snapshot
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct Batch {
    recorded: bool,
    description: Option<String>,
}

/// Undo/redo stacks for one editor document
#[derive(Debug, Clone)]
pub struct UndoStack {
    /// Snapshots before each edit (most recent last)
    past: Vec<HistoryEntry>,

    /// Snapshots of undone states (next redo last)
    future: Vec<HistoryEntry>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<Batch>,
}

impl UndoStack {
    pub const DEFAULT_MAX_LEVELS: usize = 100;

    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(Self::DEFAULT_MAX_LEVELS)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Record the state preceding an edit.
    ///
    /// Inside a batch only the first edit records; later ones still discard
    /// the redo stack.
    pub fn record(&mut self, snapshot: HistorySnapshot, description: Option<String>) {
        self.future.clear();

        if let Some(batch) = &mut self.current_batch {
            if batch.recorded {
                return;
            }
            batch.recorded = true;
            let description = batch.description.clone().or(description);
            self.push_past(HistoryEntry {
                snapshot,
                description,
            });
        } else {
            self.push_past(HistoryEntry {
                snapshot,
                description,
            });
        }
    }

    /// Start a batch of edits (undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(Batch::default());
    }

    /// End the current batch
    pub fn end_batch(&mut self) {
        self.current_batch = None;
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    fn push_past(&mut self, entry: HistoryEntry) {
        self.past.push(entry);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.past.len() > self.max_levels {
            self.past.remove(0);
        }
    }

    /// Step back. `current` is the live state, parked for redo.
    /// Returns the snapshot to restore, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: HistorySnapshot) -> Option<HistorySnapshot> {
        let entry = self.past.pop()?;
        self.current_batch = None;

        self.future.push(HistoryEntry {
            snapshot: current,
            description: entry.description.clone(),
        });

        Some(entry.snapshot)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: HistorySnapshot) -> Option<HistorySnapshot> {
        let entry = self.future.pop()?;
        self.current_batch = None;

        self.push_past(HistoryEntry {
            snapshot: current,
            description: entry.description.clone(),
        });

        Some(entry.snapshot)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.current_batch = None;
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.past
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.future
            .last()
            .and_then(|entry| entry.description.as_deref())
    }

    /// Snapshots on the undo stack, oldest first
    pub fn past(&self) -> impl Iterator<Item = &HistorySnapshot> {
        self.past.iter().map(|entry| &entry.snapshot)
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(title: &str) -> HistorySnapshot {
        HistorySnapshot {
            sections: vec![],
            selected_section_id: None,
            is_dragging: false,
            preview_mode: false,
            preview_device: PreviewDevice::Desktop,
            portfolio_title: title.to_string(),
        }
    }

    #[test]
    fn test_undo_stack_creation() {
        let stack = UndoStack::new();
        assert_eq!(stack.undo_levels(), 0);
        assert_eq!(stack.redo_levels(), 0);
        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert_eq!(stack.max_levels(), 100);
    }

    #[test]
    fn test_record_undo_redo() {
        let mut stack = UndoStack::new();
        stack.record(snapshot("v0"), Some("Rename portfolio".to_string()));

        assert_eq!(stack.undo_description(), Some("Rename portfolio"));

        let restored = stack.undo(snapshot("v1")).unwrap();
        assert_eq!(restored.portfolio_title, "v0");
        assert_eq!(stack.redo_levels(), 1);
        assert_eq!(stack.redo_description(), Some("Rename portfolio"));

        let restored = stack.redo(snapshot("v0")).unwrap();
        assert_eq!(restored.portfolio_title, "v1");
        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut stack = UndoStack::new();
        assert!(stack.undo(snapshot("now")).is_none());
        assert!(stack.redo(snapshot("now")).is_none());
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_new_record_clears_redo() {
        let mut stack = UndoStack::new();
        stack.record(snapshot("v0"), None);
        stack.undo(snapshot("v1"));
        assert_eq!(stack.redo_levels(), 1);

        stack.record(snapshot("v0"), None);
        assert_eq!(stack.redo_levels(), 0);
    }

    #[test]
    fn test_batch_records_once() {
        let mut stack = UndoStack::new();

        stack.begin_batch();
        stack.set_batch_description("Type name");
        stack.record(snapshot("v0"), None);
        stack.record(snapshot("v1"), None);
        stack.record(snapshot("v2"), None);
        stack.end_batch();

        assert_eq!(stack.undo_levels(), 1);
        assert_eq!(stack.undo_description(), Some("Type name"));
        assert_eq!(stack.undo(snapshot("v3")).unwrap().portfolio_title, "v0");
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut stack = UndoStack::with_max_levels(2);

        for i in 0..3 {
            stack.record(snapshot(&format!("v{}", i)), None);
        }

        assert_eq!(stack.undo_levels(), 2);
        // Oldest was dropped
        let oldest: Vec<&str> = stack.past().map(|s| s.portfolio_title.as_str()).collect();
        assert_eq!(oldest, vec!["v1", "v2"]);
    }

    #[test]
    fn test_zero_means_unlimited() {
        let mut stack = UndoStack::with_max_levels(0);
        for i in 0..250 {
            stack.record(snapshot(&format!("v{}", i)), None);
        }
        assert_eq!(stack.undo_levels(), 250);
    }
}
