mod card_browser;
pub mod file_menu;
mod loadout_panel;
mod sheet_panel;
mod toolbar;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::character::persistence::{
    AsyncCharacterOperation, CharacterLoadError, CharacterSaveError, LoadValidationWarning,
    UnsavedChangesDialog,
};
use crate::config::{ConfigResetNotification, MissingCharacterWarning};
use crate::update::UpdateState;

/// Resource that tracks whether any modal dialog is currently open.
/// Keyboard shortcut handlers check this to avoid acting on input meant
/// for a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block sheet input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
#[allow(clippy::too_many_arguments)]
fn update_dialog_state(
    file_menu: Res<file_menu::FileMenuState>,
    missing_character: Res<MissingCharacterWarning>,
    config_reset: Res<ConfigResetNotification>,
    unsaved_changes: Res<UnsavedChangesDialog>,
    load_validation: Res<LoadValidationWarning>,
    save_error: Res<CharacterSaveError>,
    load_error: Res<CharacterLoadError>,
    async_op: Res<AsyncCharacterOperation>,
    update_state: Res<UpdateState>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = file_menu.show_new_confirmation
        || file_menu.show_open_confirmation
        || file_menu.any_file_dialog_pending()
        || missing_character.show
        || config_reset.show
        || unsaved_changes.show_close_confirmation
        || load_validation.show
        || save_error.message.is_some()
        || load_error.message.is_some()
        || async_op.is_busy()
        || update_state.show_dialog;
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<file_menu::FileMenuState>()
            .init_resource::<card_browser::CardBrowserState>()
            // Panels render in a fixed order: top bar, side panels, then the
            // central sheet last so it takes the remaining space
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    card_browser::card_browser_ui,
                    loadout_panel::loadout_panel_ui,
                    sheet_panel::sheet_panel_ui,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Dialogs/overlays render above the panels
                    file_menu::file_menu_ui,
                    file_menu::unsaved_changes_dialog_ui,
                    file_menu::async_operation_modal_ui,
                    file_menu::file_error_dialogs_ui,
                    file_menu::load_validation_warning_ui,
                    file_menu::missing_character_warning_ui,
                    file_menu::config_reset_notification_ui,
                )
                    .after(sheet_panel::sheet_panel_ui),
            )
            .add_systems(Update, file_menu::handle_window_close)
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
