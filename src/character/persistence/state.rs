//! New-character system.

use bevy::prelude::*;

use crate::character::CharacterData;
use crate::sheet::{CharacterHistory, SwapState};

use super::messages::NewCharacterRequest;
use super::resources::{CharacterDirtyState, CurrentCharacterFile};

/// Resets the sheet to a blank character
pub fn new_character_system(
    mut events: MessageReader<NewCharacterRequest>,
    mut character: ResMut<CharacterData>,
    mut history: ResMut<CharacterHistory>,
    mut swap_state: ResMut<SwapState>,
    mut current_file: ResMut<CurrentCharacterFile>,
    mut dirty_state: ResMut<CharacterDirtyState>,
) {
    for _ in events.read() {
        *character = CharacterData::default();
        history.reset(character.clone());
        swap_state.pending = None;
        current_file.path = None;
        dirty_state.is_dirty = false;
        info!("Started a new character");
    }
}
