//! Character persistence system for saving and loading sheets.
//!
//! Handles async file I/O for character data, including:
//! - Save/load with async task pooling
//! - Compendium validation of loaded cards
//! - Dirty state tracking and debounced autosave
//!
//! ## Module Structure
//!
//! - [`messages`] - Message types for character file operations
//! - [`resources`] - Resource types for state tracking
//! - [`results`] - Result types for async operations
//! - [`helpers`] - Utility functions (directory creation, filename sanitizing)
//! - [`save`] - Save system and task polling
//! - [`load`] - Load system and task polling
//! - [`state`] - New-character system
//! - [`dirty`] - Autosave scheduling

mod dirty;
mod helpers;
mod load;
mod messages;
mod resources;
mod results;
mod save;
mod state;

#[cfg(test)]
mod tests;

// Re-exports - Messages
pub use messages::{LoadCharacterRequest, NewCharacterRequest, SaveCharacterRequest};

// Re-exports - Resources
pub use resources::{
    AsyncCharacterOperation, CharacterDirtyState, CharacterLoadError, CharacterSaveError,
    CurrentCharacterFile, LoadValidationWarning, UnsavedChangesDialog,
};

// Re-exports - Helpers
pub use helpers::{ensure_characters_directory, sanitize_filename};

// Re-exports - Systems
pub use dirty::{autosave_system, rearm_autosave, Autosave};
pub use load::{load_character_system, poll_load_tasks};
pub use save::{poll_save_tasks, save_character_system};
pub use state::new_character_system;
