use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::character::persistence::{
    CharacterDirtyState, CurrentCharacterFile, LoadCharacterRequest, NewCharacterRequest,
    SaveCharacterRequest,
};
use crate::character::CharacterData;
use crate::config::AppConfig;
use crate::sheet::history::{apply_redo, apply_undo, CharacterHistory};
use crate::theme;

use super::file_menu::FileMenuState;

/// Main toolbar: file operations, undo/redo, and the sheet status readout
#[allow(clippy::too_many_arguments)]
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut history: ResMut<CharacterHistory>,
    mut character: ResMut<CharacterData>,
    mut dirty_state: ResMut<CharacterDirtyState>,
    current_file: Res<CurrentCharacterFile>,
    config: Res<AppConfig>,
    mut menu_state: ResMut<FileMenuState>,
    mut new_events: MessageWriter<NewCharacterRequest>,
    mut save_events: MessageWriter<SaveCharacterRequest>,
    mut load_events: MessageWriter<LoadCharacterRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                if ui.button("New").clicked() {
                    if dirty_state.is_dirty {
                        menu_state.show_new_confirmation = true;
                    } else {
                        new_events.write(NewCharacterRequest);
                    }
                }

                if ui.button("Open...").clicked() {
                    if dirty_state.is_dirty {
                        menu_state.show_open_confirmation = true;
                    } else {
                        menu_state.request_open_dialog = true;
                    }
                }

                if ui.button("Save").clicked() {
                    match current_file.path.clone() {
                        Some(path) => {
                            save_events.write(SaveCharacterRequest { path });
                        }
                        None => menu_state.request_save_dialog = true,
                    }
                }

                if ui.button("Save As...").clicked() {
                    menu_state.request_save_dialog = true;
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                // Undo/redo, disabled when the relevant stack is empty
                let undo_button = ui.add_enabled(history.can_undo(), egui::Button::new("Undo"));
                let undo_hover = history
                    .undo_label()
                    .map(|l| format!("Undo {} (Ctrl+Z)", l))
                    .unwrap_or_else(|| "Nothing to undo".to_string());
                if undo_button.on_hover_text(undo_hover).clicked() {
                    apply_undo(&mut history, &mut character, &mut dirty_state);
                }

                let redo_button = ui.add_enabled(history.can_redo(), egui::Button::new("Redo"));
                let redo_hover = history
                    .redo_label()
                    .map(|l| format!("Redo {} (Ctrl+Y)", l))
                    .unwrap_or_else(|| "Nothing to redo".to_string());
                if redo_button.on_hover_text(redo_hover).clicked() {
                    apply_redo(&mut history, &mut character, &mut dirty_state);
                }

                // Recent characters for one-click reopening
                if !config.data.recent_characters.is_empty() {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Recent:").color(theme::ui::HINT_TEXT));

                    for path in config.data.recent_characters.iter().take(3) {
                        let name = path
                            .file_stem()
                            .and_then(|n| n.to_str())
                            .unwrap_or("character");
                        if ui
                            .small_button(name)
                            .on_hover_text(path.to_string_lossy())
                            .clicked()
                        {
                            if dirty_state.is_dirty {
                                menu_state.show_open_confirmation = true;
                            } else {
                                load_events.write(LoadCharacterRequest { path: path.clone() });
                            }
                        }
                    }
                }

                // Right-aligned sheet status
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if dirty_state.is_dirty {
                        ui.colored_label(theme::ui::DIRTY_INDICATOR, "● unsaved")
                            .on_hover_text("The sheet has changes not yet written to disk");
                    }
                    ui.label(
                        egui::RichText::new(format!(
                            "{} (Level {})",
                            character.name, character.level
                        ))
                        .strong(),
                    );
                });
            });
        });
    Ok(())
}
