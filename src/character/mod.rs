pub mod card;
mod data;
pub mod loadout;
pub mod persistence;

pub use data::{CharacterData, Traits, Vitals};

use bevy::prelude::*;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CharacterData>()
            .init_resource::<persistence::CharacterLoadError>()
            .init_resource::<persistence::CharacterSaveError>()
            .init_resource::<persistence::LoadValidationWarning>()
            .init_resource::<persistence::CurrentCharacterFile>()
            .init_resource::<persistence::CharacterDirtyState>()
            .init_resource::<persistence::UnsavedChangesDialog>()
            .init_resource::<persistence::AsyncCharacterOperation>()
            .init_resource::<persistence::Autosave>()
            .add_message::<persistence::SaveCharacterRequest>()
            .add_message::<persistence::LoadCharacterRequest>()
            .add_message::<persistence::NewCharacterRequest>()
            .add_systems(Startup, persistence::ensure_characters_directory)
            .add_systems(
                Update,
                (
                    persistence::save_character_system
                        .run_if(on_message::<persistence::SaveCharacterRequest>),
                    persistence::load_character_system
                        .run_if(on_message::<persistence::LoadCharacterRequest>),
                    persistence::new_character_system
                        .run_if(on_message::<persistence::NewCharacterRequest>),
                    persistence::poll_save_tasks,
                    persistence::poll_load_tasks,
                    persistence::rearm_autosave,
                    persistence::autosave_system,
                ),
            );
    }
}
