//! Undo/Redo system for sheet edits.
//!
//! Every discrete edit to the character sheet commits a labeled snapshot of
//! the whole sheet. Undo and redo walk those snapshots; new edits after an
//! undo discard the redo branch.
//!
//! ## Usage
//!
//! - **Ctrl+Z** (Cmd+Z on macOS): Undo the last edit
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone edit
//!
//! Shortcuts are ignored while a text field has focus (so the field's own
//! editing keys keep working) and while a modal dialog is open.
//!
//! ## Module Structure
//!
//! - [`snapshots`] - the bounded snapshot stack
//! - [`systems`] - commit collection and keyboard shortcut systems

mod snapshots;
mod systems;

#[cfg(test)]
mod tests;

// Re-exports
pub use snapshots::{SnapshotHistory, UndoEntryMeta};
pub use systems::{
    apply_redo, apply_undo, handle_redo_shortcut, handle_undo_shortcut, record_commits,
    resolve_chord, CharacterHistory, CommitEdit, HistoryAction,
};

/// Maximum number of edits to keep in history
pub(crate) const MAX_UNDO_DEPTH: usize = 50;
