use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use bevy::window::WindowCloseRequested;
use bevy_egui::{egui, EguiContexts};
use futures_lite::future;
use std::path::PathBuf;

use crate::character::persistence::{
    sanitize_filename, AsyncCharacterOperation, CharacterDirtyState, CharacterLoadError,
    CharacterSaveError, LoadCharacterRequest, LoadValidationWarning, NewCharacterRequest,
    SaveCharacterRequest, UnsavedChangesDialog,
};
use crate::character::CharacterData;
use crate::config::{AppConfig, ConfigResetNotification, MissingCharacterWarning, SaveConfigRequest};
use crate::paths;
use crate::theme;

#[derive(Resource, Default)]
pub struct FileMenuState {
    /// Confirm discarding unsaved changes before a new character
    pub show_new_confirmation: bool,
    /// Confirm discarding unsaved changes before opening another file
    pub show_open_confirmation: bool,
    /// Spawn the open-file dialog on the next frame
    pub request_open_dialog: bool,
    /// Spawn the save-file dialog on the next frame
    pub request_save_dialog: bool,
    /// Pending async open-file dialog
    pub pending_open: Option<Task<Option<PathBuf>>>,
    /// Pending async save-file dialog
    pub pending_save: Option<Task<Option<PathBuf>>>,
}

impl FileMenuState {
    pub fn any_file_dialog_pending(&self) -> bool {
        self.pending_open.is_some() || self.pending_save.is_some()
    }
}

/// Polls pending file dialogs and renders the discard confirmations
pub fn file_menu_ui(
    mut contexts: EguiContexts,
    mut menu_state: ResMut<FileMenuState>,
    character: Res<CharacterData>,
    mut new_events: MessageWriter<NewCharacterRequest>,
    mut save_events: MessageWriter<SaveCharacterRequest>,
    mut load_events: MessageWriter<LoadCharacterRequest>,
) -> Result {
    // Poll pending open dialog
    if let Some(ref mut task) = menu_state.pending_open
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        menu_state.pending_open = None;
        if let Some(path) = result {
            load_events.write(LoadCharacterRequest { path });
        }
    }

    // Poll pending save dialog
    if let Some(ref mut task) = menu_state.pending_save
        && let Some(result) = future::block_on(future::poll_once(task))
    {
        menu_state.pending_save = None;
        if let Some(path) = result {
            save_events.write(SaveCharacterRequest { path });
        }
    }

    // Spawn requested dialogs
    if menu_state.request_open_dialog {
        menu_state.request_open_dialog = false;
        if menu_state.pending_open.is_none() {
            let task_pool = AsyncComputeTaskPool::get();
            menu_state.pending_open = Some(task_pool.spawn(async {
                rfd::AsyncFileDialog::new()
                    .set_title("Open Character")
                    .add_filter("Character files", &["json"])
                    .set_directory(paths::characters_dir())
                    .pick_file()
                    .await
                    .map(|h| h.path().to_path_buf())
            }));
        }
    }

    if menu_state.request_save_dialog {
        menu_state.request_save_dialog = false;
        if menu_state.pending_save.is_none() {
            let file_name = {
                let sanitized = sanitize_filename(&character.name);
                if sanitized.is_empty() {
                    "character.json".to_string()
                } else {
                    format!("{}.json", sanitized)
                }
            };
            let task_pool = AsyncComputeTaskPool::get();
            menu_state.pending_save = Some(task_pool.spawn(async move {
                rfd::AsyncFileDialog::new()
                    .set_title("Save Character")
                    .add_filter("Character files", &["json"])
                    .set_directory(paths::characters_dir())
                    .set_file_name(file_name)
                    .save_file()
                    .await
                    .map(|h| h.path().to_path_buf())
            }));
        }
    }

    // New character confirmation dialog
    if menu_state.show_new_confirmation {
        egui::Window::new("New Character")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                ui.label("Start a new character? Unsaved changes will be lost.");
                ui.horizontal(|ui| {
                    if ui.button("Discard & New").clicked() {
                        new_events.write(NewCharacterRequest);
                        menu_state.show_new_confirmation = false;
                    }
                    if ui.button("Cancel").clicked() {
                        menu_state.show_new_confirmation = false;
                    }
                });
            });
    }

    // Open confirmation dialog
    if menu_state.show_open_confirmation {
        egui::Window::new("Open Character")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                ui.label("Open another character? Unsaved changes will be lost.");
                ui.horizontal(|ui| {
                    if ui.button("Discard & Open").clicked() {
                        menu_state.request_open_dialog = true;
                        menu_state.show_open_confirmation = false;
                    }
                    if ui.button("Cancel").clicked() {
                        menu_state.show_open_confirmation = false;
                    }
                });
            });
    }

    Ok(())
}

/// Routes window close requests through the unsaved-changes confirmation
pub fn handle_window_close(
    mut events: MessageReader<WindowCloseRequested>,
    dirty_state: Res<CharacterDirtyState>,
    mut dialog: ResMut<UnsavedChangesDialog>,
    mut exit_events: MessageWriter<AppExit>,
) {
    for _ in events.read() {
        if dirty_state.is_dirty {
            dialog.show_close_confirmation = true;
        } else {
            exit_events.write(AppExit::Success);
        }
    }
}

/// Confirmation dialog shown when closing with unsaved changes
pub fn unsaved_changes_dialog_ui(
    mut contexts: EguiContexts,
    mut dialog: ResMut<UnsavedChangesDialog>,
    mut exit_events: MessageWriter<AppExit>,
) -> Result {
    if !dialog.show_close_confirmation {
        return Ok(());
    }

    egui::Window::new("Unsaved Changes")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The sheet has unsaved changes. Quit anyway?");
            ui.horizontal(|ui| {
                if ui.button("Quit Without Saving").clicked() {
                    exit_events.write(AppExit::Success);
                }
                if ui.button("Cancel").clicked() {
                    dialog.show_close_confirmation = false;
                }
            });
        });

    Ok(())
}

/// Modal shown while a save or load task is in flight
pub fn async_operation_modal_ui(
    mut contexts: EguiContexts,
    async_op: Res<AsyncCharacterOperation>,
) -> Result {
    if !async_op.is_busy() {
        return Ok(());
    }

    egui::Window::new("Working")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(
                    async_op
                        .operation_description
                        .as_deref()
                        .unwrap_or("Working..."),
                );
            });
        });

    Ok(())
}

/// Save and load error dialogs
pub fn file_error_dialogs_ui(
    mut contexts: EguiContexts,
    mut save_error: ResMut<CharacterSaveError>,
    mut load_error: ResMut<CharacterLoadError>,
) -> Result {
    let mut clear_save = false;
    if let Some(error) = &save_error.message {
        egui::Window::new("Save Error")
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    ui.colored_label(theme::ui::ERROR_TEXT, error);
                });
                if ui.button("OK").clicked() {
                    clear_save = true;
                }
            });
    }
    if clear_save {
        save_error.message = None;
    }

    let mut clear_load = false;
    if let Some(error) = &load_error.message {
        egui::Window::new("Load Error")
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(contexts.ctx_mut()?, |ui| {
                egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    ui.colored_label(theme::ui::ERROR_TEXT, error);
                });
                if ui.button("OK").clicked() {
                    clear_load = true;
                }
            });
    }
    if clear_load {
        load_error.message = None;
    }

    Ok(())
}

/// Warning listing cards a loaded character holds that the compendium lacks
pub fn load_validation_warning_ui(
    mut contexts: EguiContexts,
    mut warning: ResMut<LoadValidationWarning>,
) -> Result {
    if !warning.show {
        return Ok(());
    }

    let mut close = false;
    egui::Window::new("Unknown Cards")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("This character holds cards the compendium doesn't know:");
            ui.add_space(5.0);
            for name in &warning.unknown_cards {
                ui.colored_label(theme::ui::UNKNOWN_CARD_TEXT, name);
            }
            ui.add_space(5.0);
            ui.label(
                egui::RichText::new(
                    "They load and play normally, but the browser cannot offer them again \
                     once removed.",
                )
                .weak()
                .small(),
            );
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        warning.show = false;
        warning.unknown_cards.clear();
        warning.character_path = None;
    }

    Ok(())
}

/// Renders the missing character warning (shown at startup if the last
/// opened file no longer exists)
pub fn missing_character_warning_ui(
    mut contexts: EguiContexts,
    mut warning: ResMut<MissingCharacterWarning>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    if !warning.show {
        return Ok(());
    }

    egui::Window::new("Character Not Found")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The last opened character file no longer exists:");

            if let Some(ref path) = warning.path {
                ui.add_space(5.0);
                let path_str = path.to_string_lossy();
                let display_path = if path_str.len() > 50 {
                    format!("...{}", &path_str[path_str.len() - 47..])
                } else {
                    path_str.to_string()
                };
                ui.label(egui::RichText::new(display_path).weak())
                    .on_hover_text(path_str.as_ref());
                ui.add_space(10.0);
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    warning.show = false;
                }

                if ui.button("Clear from history").clicked() {
                    config.data.last_character_path = None;
                    config.dirty = true;
                    save_events.write(SaveConfigRequest);
                    warning.show = false;
                }
            });
        });

    Ok(())
}

/// Notification shown when the config file was corrupt and reset
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    let mut close = false;
    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Application settings were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        notification.show = false;
        notification.reason = None;
    }

    Ok(())
}
