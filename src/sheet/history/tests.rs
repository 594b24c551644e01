//! Unit tests for the history module.

use super::snapshots::SnapshotHistory;
use super::systems::{resolve_chord, HistoryAction};
use super::MAX_UNDO_DEPTH;

fn history() -> SnapshotHistory<i32> {
    SnapshotHistory::new(0)
}

#[test]
fn test_empty_history_is_a_noop() {
    let mut h = history();
    assert!(!h.can_undo());
    assert!(!h.can_redo());
    assert!(h.undo().is_none());
    assert!(h.redo().is_none());
    assert_eq!(*h.current(), 0);
}

#[test]
fn test_undo_returns_previous_state() {
    let mut h = history();
    h.push("set to 1", 1);
    h.push("set to 2", 2);

    assert_eq!(h.undo().copied(), Some(1));
    assert_eq!(*h.current(), 1);
}

#[test]
fn test_undo_past_first_entry_returns_baseline() {
    let mut h = history();
    h.push("set to 1", 1);

    assert_eq!(h.undo().copied(), Some(0));
    assert!(!h.can_undo());
    assert!(h.undo().is_none());
}

#[test]
fn test_redo_roundtrip() {
    let mut h = history();
    h.push("set to 1", 1);
    h.push("set to 2", 2);

    assert_eq!(h.undo().copied(), Some(1));
    assert_eq!(h.redo_count(), 1);
    assert_eq!(h.redo().copied(), Some(2));
    assert!(!h.can_redo());
}

#[test]
fn test_push_after_undo_discards_redo() {
    let mut h = history();
    h.push("set to 1", 1);
    h.push("set to 2", 2);

    h.undo();
    assert!(h.can_redo());

    h.push("set to 3", 3);
    assert!(!h.can_redo());
    assert!(h.redo().is_none());
    assert_eq!(*h.current(), 3);
}

#[test]
fn test_depth_is_bounded_with_fifo_eviction() {
    let mut h = history();
    for i in 1..=(MAX_UNDO_DEPTH as i32 + 1) {
        h.push(format!("set to {}", i), i);
    }

    assert_eq!(h.undo_count(), MAX_UNDO_DEPTH);
    // Entry #1 was evicted; the oldest retained edit is #2
    assert_eq!(h.oldest_entry().map(|m| m.id), Some(2));

    // Unwinding everything lands on the evicted snapshot, not the original
    // baseline
    let mut last = None;
    while h.can_undo() {
        last = h.undo().copied();
    }
    assert_eq!(last, Some(1));
}

#[test]
fn test_labels_track_undo_and_redo_tops() {
    let mut h = history();
    h.push("Add Whirlwind", 1);
    h.push("Move Whirlwind to Vault", 2);

    assert_eq!(h.undo_label(), Some("Move Whirlwind to Vault"));
    assert_eq!(h.redo_label(), None);

    h.undo();
    assert_eq!(h.undo_label(), Some("Add Whirlwind"));
    assert_eq!(h.redo_label(), Some("Move Whirlwind to Vault"));
}

#[test]
fn test_entry_meta_is_assigned_on_push() {
    let mut h = history();
    h.push("first edit", 1);

    let meta = h.oldest_entry().expect("entry was just pushed");
    assert_eq!(meta.id, 1);
    assert_eq!(meta.label, "first edit");
    assert!(meta.timestamp <= chrono::Local::now());
}

#[test]
fn test_chord_maps_modifier_z_to_undo() {
    assert_eq!(
        resolve_chord(false, true, false, true, false),
        Some(HistoryAction::Undo)
    );
}

#[test]
fn test_chord_maps_redo_variants() {
    // Modifier+Y
    assert_eq!(
        resolve_chord(false, true, false, false, true),
        Some(HistoryAction::Redo)
    );
    // Modifier+Shift+Z
    assert_eq!(
        resolve_chord(false, true, true, true, false),
        Some(HistoryAction::Redo)
    );
}

#[test]
fn test_chord_requires_modifier() {
    assert_eq!(resolve_chord(false, false, false, true, false), None);
    assert_eq!(resolve_chord(false, false, false, false, true), None);
}

#[test]
fn test_chord_suppressed_while_typing() {
    // Same chords as above, but a text field owns the keyboard
    assert_eq!(resolve_chord(true, true, false, true, false), None);
    assert_eq!(resolve_chord(true, true, false, false, true), None);
    assert_eq!(resolve_chord(true, true, true, true, false), None);
}

#[test]
fn test_reset_clears_both_stacks() {
    let mut h = history();
    h.push("a", 1);
    h.push("b", 2);
    h.undo();

    h.reset(9);
    assert!(!h.can_undo());
    assert!(!h.can_redo());
    assert_eq!(*h.current(), 9);
}
