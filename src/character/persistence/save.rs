//! Character save system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::character::CharacterData;
use crate::config::{AddRecentCharacterRequest, UpdateLastCharacterPathRequest};

use super::messages::SaveCharacterRequest;
use super::resources::{
    AsyncCharacterOperation, CharacterDirtyState, CharacterSaveError, CurrentCharacterFile,
    SaveCharacterTask,
};
use super::results::SaveResult;

/// Starts an async save operation
pub fn save_character_system(
    mut commands: Commands,
    mut events: MessageReader<SaveCharacterRequest>,
    character: Res<CharacterData>,
    mut async_op: ResMut<AsyncCharacterOperation>,
) {
    for event in events.read() {
        // Don't start a new save if one is already in progress
        if async_op.is_busy() {
            warn!("Save operation already in progress");
            continue;
        }

        let snapshot = character.clone();
        let path = event.path.clone();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("character")
            .to_string();

        // Mark as saving
        async_op.is_saving = true;
        async_op.operation_description = Some(format!("Saving {}...", file_name));

        // Spawn async task for file I/O
        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            match serde_json::to_string_pretty(&snapshot) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        SaveResult {
                            path,
                            success: false,
                            error: Some(format!("Failed to write file: {}", e)),
                        }
                    } else {
                        SaveResult {
                            path,
                            success: true,
                            error: None,
                        }
                    }
                }
                Err(e) => SaveResult {
                    path,
                    success: false,
                    error: Some(format!("Failed to serialize character: {}", e)),
                },
            }
        });

        commands.spawn(SaveCharacterTask(task));
    }
}

/// Polls save tasks and handles completion
pub fn poll_save_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut SaveCharacterTask)>,
    mut async_op: ResMut<AsyncCharacterOperation>,
    mut current_file: ResMut<CurrentCharacterFile>,
    mut dirty_state: ResMut<CharacterDirtyState>,
    mut save_error: ResMut<CharacterSaveError>,
    mut last_path_events: MessageWriter<UpdateLastCharacterPathRequest>,
    mut recent_events: MessageWriter<AddRecentCharacterRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            // Clear async state
            async_op.is_saving = false;
            async_op.operation_description = None;

            if result.success {
                info!("Character saved to {:?}", result.path);

                // Clear any previous save error
                save_error.message = None;

                // Update current file and config
                current_file.path = Some(result.path.clone());
                last_path_events.write(UpdateLastCharacterPathRequest {
                    path: result.path.clone(),
                });
                recent_events.write(AddRecentCharacterRequest {
                    path: result.path.clone(),
                });

                dirty_state.is_dirty = false;
            } else if let Some(error) = result.error {
                error!("{}", error);
                // Store error for display to user
                save_error.message = Some(error);
            }

            commands.entity(entity).despawn();
        }
    }
}
