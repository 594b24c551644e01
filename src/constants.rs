//! Centralized constants used across the application.
//!
//! This module contains magic numbers and rule thresholds that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Maximum number of recent characters to remember in config
pub const MAX_RECENT_CHARACTERS: usize = 5;

/// Domain cards a character may hold in their loadout during creation.
/// Hard cap: additions are blocked at this count until creation is complete.
pub const STARTING_LOADOUT_LIMIT: usize = 2;

/// Loadout cap once character creation is complete.
/// Advisory: move targets are checked against it, additions are not blocked.
pub const LOADOUT_SOFT_LIMIT: usize = 5;

/// Maximum cards the vault can hold
pub const MAX_VAULT_CARDS: usize = 10;

/// Seconds of inactivity before a dirty sheet autosaves (when a file path is known)
pub const AUTOSAVE_DELAY_SECS: f32 = 5.0;
