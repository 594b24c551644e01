//! Character load system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::catalog::CardCatalog;
use crate::character::CharacterData;
use crate::config::{AddRecentCharacterRequest, UpdateLastCharacterPathRequest};
use crate::sheet::{CharacterHistory, SwapState};

use super::messages::LoadCharacterRequest;
use super::resources::{
    AsyncCharacterOperation, CharacterDirtyState, CharacterLoadError, CurrentCharacterFile,
    LoadCharacterTask, LoadValidationWarning,
};
use super::results::LoadResult;

/// Starts an async load operation (file I/O and parsing only)
pub fn load_character_system(
    mut commands: Commands,
    mut events: MessageReader<LoadCharacterRequest>,
    mut async_op: ResMut<AsyncCharacterOperation>,
) {
    for event in events.read() {
        // Don't start a new load if one is already in progress
        if async_op.is_busy() {
            warn!("Load operation already in progress");
            continue;
        }

        let path = event.path.clone();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("character")
            .to_string();

        // Mark as loading
        async_op.is_loading = true;
        async_op.operation_description = Some(format!("Loading {}...", file_name));

        // Spawn async task for file I/O and parsing
        let task_pool = IoTaskPool::get();
        let task = task_pool.spawn(async move {
            let json = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    return LoadResult {
                        path,
                        character: None,
                        error: Some(format!("Failed to read file: {}", e)),
                    };
                }
            };

            match serde_json::from_str::<CharacterData>(&json) {
                Ok(character) => LoadResult {
                    path,
                    character: Some(character),
                    error: None,
                },
                Err(e) => LoadResult {
                    path,
                    character: None,
                    error: Some(format!("Failed to parse character file: {}", e)),
                },
            }
        });

        commands.spawn(LoadCharacterTask(task));
    }
}

/// Polls load tasks and applies the loaded character
#[allow(clippy::too_many_arguments)]
pub fn poll_load_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut LoadCharacterTask)>,
    mut async_op: ResMut<AsyncCharacterOperation>,
    mut character: ResMut<CharacterData>,
    mut history: ResMut<CharacterHistory>,
    mut swap_state: ResMut<SwapState>,
    mut load_error: ResMut<CharacterLoadError>,
    mut load_warning: ResMut<LoadValidationWarning>,
    catalog: Res<CardCatalog>,
    mut current_file: ResMut<CurrentCharacterFile>,
    mut dirty_state: ResMut<CharacterDirtyState>,
    mut last_path_events: MessageWriter<UpdateLastCharacterPathRequest>,
    mut recent_events: MessageWriter<AddRecentCharacterRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            // Clear async state
            async_op.is_loading = false;
            async_op.operation_description = None;
            load_error.message = None;

            // Handle error
            if let Some(error) = result.error {
                load_error.message = Some(error.clone());
                error!("{}", error);
                commands.entity(entity).despawn();
                continue;
            }

            let Some(loaded) = result.character else {
                commands.entity(entity).despawn();
                continue;
            };

            // Cards the compendium doesn't know still load fine (they carry
            // their own data); surface them so the user knows the browser
            // won't offer them again once removed.
            let unknown_cards: Vec<String> = loaded
                .loadout
                .active
                .iter()
                .chain(loaded.loadout.vault.iter())
                .filter(|c| !catalog.contains(&c.name))
                .map(|c| c.name.clone())
                .collect();

            if !unknown_cards.is_empty() {
                warn!(
                    "Character {:?} holds {} cards unknown to the compendium",
                    result.path,
                    unknown_cards.len()
                );
                load_warning.show = true;
                load_warning.unknown_cards = unknown_cards;
                load_warning.character_path = Some(result.path.clone());
            }

            // Apply the loaded sheet and restart history from it
            *character = loaded;
            history.reset(character.clone());
            swap_state.pending = None;

            info!("Character loaded from {:?}", result.path);

            // Update current file and config
            current_file.path = Some(result.path.clone());
            last_path_events.write(UpdateLastCharacterPathRequest {
                path: result.path.clone(),
            });
            recent_events.write(AddRecentCharacterRequest {
                path: result.path.clone(),
            });

            // Freshly loaded sheet is clean
            dirty_state.is_dirty = false;

            commands.entity(entity).despawn();
        }
    }
}
