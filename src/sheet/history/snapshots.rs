//! Bounded, labeled snapshot stack for undo/redo.

use chrono::{DateTime, Local};

use super::MAX_UNDO_DEPTH;

/// Metadata recorded with each committed edit
#[derive(Debug, Clone)]
pub struct UndoEntryMeta {
    pub id: u64,
    pub label: String,
    pub timestamp: DateTime<Local>,
}

/// Past and future stacks of committed state snapshots.
///
/// The top of the past stack is always the current state; undoing moves it
/// to the future stack and exposes the entry below (or the baseline once
/// the past stack is empty). Pushing a new entry clears the future stack:
/// redo after a new edit is deliberately unsupported.
pub struct SnapshotHistory<T> {
    baseline: T,
    past: Vec<(UndoEntryMeta, T)>,
    future: Vec<(UndoEntryMeta, T)>,
    next_id: u64,
}

impl<T: Clone> SnapshotHistory<T> {
    pub fn new(baseline: T) -> Self {
        Self {
            baseline,
            past: Vec::new(),
            future: Vec::new(),
            next_id: 1,
        }
    }

    /// Drop all history and start over from a fresh baseline
    pub fn reset(&mut self, baseline: T) {
        self.baseline = baseline;
        self.past.clear();
        self.future.clear();
    }

    /// Record a committed edit. Clears any pending redo entries and evicts
    /// the oldest entry once the stack is full; the evicted snapshot becomes
    /// the new baseline so undoing all the way back stays coherent.
    pub fn push(&mut self, label: impl Into<String>, snapshot: T) {
        self.future.clear();

        let meta = UndoEntryMeta {
            id: self.next_id,
            label: label.into(),
            timestamp: Local::now(),
        };
        self.next_id += 1;
        self.past.push((meta, snapshot));

        while self.past.len() > MAX_UNDO_DEPTH {
            let (_, evicted) = self.past.remove(0);
            self.baseline = evicted;
        }
    }

    /// Step back one edit; returns the snapshot that is now current.
    /// No-op (returns None) when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&T> {
        let entry = self.past.pop()?;
        self.future.push(entry);
        Some(self.current())
    }

    /// Step forward one undone edit; returns the snapshot that is now
    /// current. No-op (returns None) when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&T> {
        let entry = self.future.pop()?;
        self.past.push(entry);
        self.past.last().map(|(_, snapshot)| snapshot)
    }

    /// The snapshot the sheet should currently show
    pub fn current(&self) -> &T {
        self.past
            .last()
            .map(|(_, snapshot)| snapshot)
            .unwrap_or(&self.baseline)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Metadata of the edit an undo would revert
    pub fn undo_entry(&self) -> Option<&UndoEntryMeta> {
        self.past.last().map(|(meta, _)| meta)
    }

    /// Label of the edit an undo would revert
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_entry().map(|meta| meta.label.as_str())
    }

    /// Label of the edit a redo would reapply
    pub fn redo_label(&self) -> Option<&str> {
        self.future.last().map(|(meta, _)| meta.label.as_str())
    }

    #[allow(dead_code)]
    pub fn undo_count(&self) -> usize {
        self.past.len()
    }

    #[allow(dead_code)]
    pub fn redo_count(&self) -> usize {
        self.future.len()
    }

    /// Metadata of the oldest retained edit
    #[allow(dead_code)]
    pub fn oldest_entry(&self) -> Option<&UndoEntryMeta> {
        self.past.first().map(|(meta, _)| meta)
    }
}
