//! Autosave scheduling for a dirty sheet.
//!
//! Once the sheet has unsaved changes and a file path is known, a countdown
//! starts; each further edit resets it. When it elapses a single save
//! request fires and the countdown disarms until new changes arrive.
//! Clearing the dirty flag (manual save, load, new character) cancels the
//! pending save.

use bevy::prelude::*;

use crate::constants::AUTOSAVE_DELAY_SECS;
use crate::sheet::CommitEdit;

use super::messages::SaveCharacterRequest;
use super::resources::{AsyncCharacterOperation, CharacterDirtyState, CurrentCharacterFile};

/// Debounce state for the pending autosave
#[derive(Resource)]
pub struct Autosave {
    timer: Timer,
    armed: bool,
}

impl Default for Autosave {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(AUTOSAVE_DELAY_SECS, TimerMode::Once),
            armed: false,
        }
    }
}

/// Resets the countdown whenever an edit commits
pub fn rearm_autosave(mut events: MessageReader<CommitEdit>, mut autosave: ResMut<Autosave>) {
    if events.read().last().is_some() {
        autosave.timer.reset();
        autosave.armed = true;
    }
}

/// Ticks the countdown and fires one save request when it elapses
pub fn autosave_system(
    time: Res<Time>,
    mut autosave: ResMut<Autosave>,
    dirty_state: Res<CharacterDirtyState>,
    current_file: Res<CurrentCharacterFile>,
    async_op: Res<AsyncCharacterOperation>,
    mut save_events: MessageWriter<SaveCharacterRequest>,
) {
    if !dirty_state.is_dirty {
        autosave.armed = false;
        return;
    }

    // Dirty without a commit message (undo/redo) still schedules a save
    if !autosave.armed {
        autosave.timer.reset();
        autosave.armed = true;
        return;
    }

    autosave.timer.tick(time.delta());
    if !autosave.timer.is_finished() {
        return;
    }

    let Some(path) = current_file.path.clone() else {
        // Nowhere to save yet; stay armed and retry once a path exists
        autosave.timer.reset();
        return;
    };

    if async_op.is_busy() {
        // An operation is in flight; try again after another delay
        autosave.timer.reset();
        return;
    }

    debug!("Autosaving character to {:?}", path);
    save_events.write(SaveCharacterRequest { path });
    autosave.armed = false;
}
