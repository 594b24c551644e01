//! Commit collection and undo/redo keyboard shortcut systems.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::character::persistence::CharacterDirtyState;
use crate::character::CharacterData;
use crate::ui::DialogState;

use super::snapshots::SnapshotHistory;

/// Resource holding the sheet's undo/redo history
#[derive(Resource)]
pub struct CharacterHistory(SnapshotHistory<CharacterData>);

impl Default for CharacterHistory {
    fn default() -> Self {
        Self(SnapshotHistory::new(CharacterData::default()))
    }
}

impl std::ops::Deref for CharacterHistory {
    type Target = SnapshotHistory<CharacterData>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for CharacterHistory {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Message written by UI handlers after a discrete sheet mutation commits
#[derive(Message)]
pub struct CommitEdit {
    pub label: String,
}

impl CommitEdit {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Collects commit messages into history snapshots.
///
/// Several commits landing in one frame describe the same resulting state,
/// so only the last label is recorded. A commit that didn't actually change
/// the sheet (e.g. a focus change with no edit) is dropped.
pub fn record_commits(
    mut events: MessageReader<CommitEdit>,
    mut history: ResMut<CharacterHistory>,
    character: Res<CharacterData>,
    mut dirty_state: ResMut<CharacterDirtyState>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    if *character == *history.current() {
        return;
    }

    history.push(event.label.clone(), character.clone());
    dirty_state.is_dirty = true;

    if let Some(meta) = history.undo_entry() {
        debug!(
            "Committed edit #{} '{}' at {}",
            meta.id,
            meta.label,
            meta.timestamp.format("%H:%M:%S")
        );
    }
}

/// Applies an undo step to the live sheet. Shared by the keyboard shortcut
/// and the toolbar button.
pub fn apply_undo(
    history: &mut CharacterHistory,
    character: &mut CharacterData,
    dirty_state: &mut CharacterDirtyState,
) {
    if let Some(snapshot) = history.undo() {
        *character = snapshot.clone();
        dirty_state.is_dirty = true;
    }
}

/// Applies a redo step to the live sheet
pub fn apply_redo(
    history: &mut CharacterHistory,
    character: &mut CharacterData,
    dirty_state: &mut CharacterDirtyState,
) {
    if let Some(snapshot) = history.redo() {
        *character = snapshot.clone();
        dirty_state.is_dirty = true;
    }
}

/// The platform shortcut modifier: Cmd on macOS, Ctrl elsewhere
fn platform_modifier_pressed(keyboard: &ButtonInput<KeyCode>) -> bool {
    #[cfg(target_os = "macos")]
    {
        keyboard.pressed(KeyCode::SuperLeft) || keyboard.pressed(KeyCode::SuperRight)
    }
    #[cfg(not(target_os = "macos"))]
    {
        keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight)
    }
}

/// Which history action a key chord requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

/// Decode a key chord into a history action.
///
/// `suppressed` is true while a text field owns the keyboard or a modal
/// dialog is open; the chord is ignored entirely so the field's native
/// editing keys keep working.
pub fn resolve_chord(
    suppressed: bool,
    modifier: bool,
    shift: bool,
    z_just_pressed: bool,
    y_just_pressed: bool,
) -> Option<HistoryAction> {
    if suppressed || !modifier {
        return None;
    }
    if z_just_pressed && !shift {
        return Some(HistoryAction::Undo);
    }
    if y_just_pressed || (z_just_pressed && shift) {
        return Some(HistoryAction::Redo);
    }
    None
}

fn chord_action(
    keyboard: &ButtonInput<KeyCode>,
    dialog_state: &DialogState,
    contexts: &mut EguiContexts,
) -> Option<HistoryAction> {
    let typing = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false);
    let shift = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);

    resolve_chord(
        typing || dialog_state.any_modal_open,
        platform_modifier_pressed(keyboard),
        shift,
        keyboard.just_pressed(KeyCode::KeyZ),
        keyboard.just_pressed(KeyCode::KeyY),
    )
}

/// System to handle the undo keyboard shortcut (Ctrl+Z / Cmd+Z)
pub fn handle_undo_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    dialog_state: Res<DialogState>,
    mut history: ResMut<CharacterHistory>,
    mut character: ResMut<CharacterData>,
    mut dirty_state: ResMut<CharacterDirtyState>,
    mut contexts: EguiContexts,
) {
    if chord_action(&keyboard, &dialog_state, &mut contexts) == Some(HistoryAction::Undo) {
        apply_undo(&mut history, &mut character, &mut dirty_state);
    }
}

/// System to handle the redo keyboard shortcut (Ctrl+Y or Ctrl+Shift+Z)
pub fn handle_redo_shortcut(
    keyboard: Res<ButtonInput<KeyCode>>,
    dialog_state: Res<DialogState>,
    mut history: ResMut<CharacterHistory>,
    mut character: ResMut<CharacterData>,
    mut dirty_state: ResMut<CharacterDirtyState>,
    mut contexts: EguiContexts,
) {
    if chord_action(&keyboard, &dialog_state, &mut contexts) == Some(HistoryAction::Redo) {
        apply_redo(&mut history, &mut character, &mut dirty_state);
    }
}
