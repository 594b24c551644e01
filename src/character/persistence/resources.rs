//! Resource types for character persistence state tracking.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::path::PathBuf;

use super::results::{LoadResult, SaveResult};

#[derive(Resource, Default)]
pub struct CharacterLoadError {
    pub message: Option<String>,
}

/// Resource tracking save operation errors for display to user.
#[derive(Resource, Default)]
pub struct CharacterSaveError {
    pub message: Option<String>,
}

/// Resource for load-time validation warnings about cards the compendium
/// does not know. The character still loads; the warning is informational.
#[derive(Resource, Default)]
pub struct LoadValidationWarning {
    /// Whether to show the warning dialog
    pub show: bool,
    /// Card names the loaded character holds that the compendium lacks
    pub unknown_cards: Vec<String>,
    /// The character file that triggered the warning
    pub character_path: Option<PathBuf>,
}

/// Resource tracking async character I/O operations for the modal dialog
#[derive(Resource, Default)]
pub struct AsyncCharacterOperation {
    /// Whether a save operation is in progress
    pub is_saving: bool,
    /// Whether a load operation is in progress
    pub is_loading: bool,
    /// Description of the current operation
    pub operation_description: Option<String>,
}

impl AsyncCharacterOperation {
    pub fn is_busy(&self) -> bool {
        self.is_saving || self.is_loading
    }
}

/// Component for save task
#[derive(Component)]
pub struct SaveCharacterTask(pub Task<SaveResult>);

/// Component for load task
#[derive(Component)]
pub struct LoadCharacterTask(pub Task<LoadResult>);

/// Resource tracking the currently loaded character file path
#[derive(Resource, Default)]
pub struct CurrentCharacterFile {
    pub path: Option<PathBuf>,
}

/// Resource tracking if the current sheet has unsaved changes
#[derive(Resource, Default)]
pub struct CharacterDirtyState {
    pub is_dirty: bool,
}

/// UI state for the unsaved-changes confirmation shown on window close
#[derive(Resource, Default)]
pub struct UnsavedChangesDialog {
    pub show_close_confirmation: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_operation_busy() {
        let mut op = AsyncCharacterOperation::default();
        assert!(!op.is_busy());

        op.is_saving = true;
        assert!(op.is_busy());

        op.is_saving = false;
        op.is_loading = true;
        assert!(op.is_busy());
    }

    #[test]
    fn test_load_validation_warning_default() {
        let warning = LoadValidationWarning::default();
        assert!(!warning.show);
        assert!(warning.unknown_cards.is_empty());
        assert!(warning.character_path.is_none());
    }
}
