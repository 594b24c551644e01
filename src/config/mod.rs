use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::MAX_RECENT_CHARACTERS;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    /// Last opened character file (not auto-loaded, just remembered for quick access)
    #[serde(default)]
    pub last_character_path: Option<PathBuf>,

    /// Recently opened characters for quick access, most recent first
    #[serde(default)]
    pub recent_characters: Vec<PathBuf>,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource for the "character file missing" warning dialog
#[derive(Resource, Default)]
pub struct MissingCharacterWarning {
    pub show: bool,
    pub path: Option<PathBuf>,
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to add a character to the recent list
#[derive(Message)]
pub struct AddRecentCharacterRequest {
    pub path: PathBuf,
}

/// Message to update the last character path in config
#[derive(Message)]
pub struct UpdateLastCharacterPathRequest {
    pub path: PathBuf,
}

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Result of loading config from disk
struct LoadConfigResult {
    config: AppConfig,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from disk
fn load_config() -> LoadConfigResult {
    let config_path = get_config_path();

    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        AppConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    AppConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (AppConfigData::default(), None)
    };

    LoadConfigResult {
        config: AppConfig {
            data,
            config_path,
            dirty: false,
        },
        reset_reason,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config();
    config.data = result.config.data;
    config.config_path = result.config.config_path;
    config.dirty = result.config.dirty;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Startup system to check if the last opened character still exists
fn check_last_character_exists(
    config: Res<AppConfig>,
    mut warning: ResMut<MissingCharacterWarning>,
) {
    if let Some(ref path) = config.data.last_character_path
        && !path.exists()
    {
        warning.show = true;
        warning.path = Some(path.clone());
        info!("Last opened character no longer exists: {:?}", path);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to add a character to the recent list
fn add_recent_character_system(
    mut events: MessageReader<AddRecentCharacterRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        // Remove if already in list (to move it to front)
        config.data.recent_characters.retain(|p| p != &event.path);

        // Add to front
        config.data.recent_characters.insert(0, event.path.clone());

        // Trim to max size
        config.data.recent_characters.truncate(MAX_RECENT_CHARACTERS);

        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

/// System to update the last character path
fn update_last_character_path_system(
    mut events: MessageReader<UpdateLastCharacterPathRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        config.data.last_character_path = Some(event.path.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<MissingCharacterWarning>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<AddRecentCharacterRequest>()
            .add_message::<UpdateLastCharacterPathRequest>()
            .add_systems(
                Startup,
                (load_config_system, check_last_character_exists)
                    .chain()
                    .in_set(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                    add_recent_character_system.run_if(on_message::<AddRecentCharacterRequest>),
                    update_last_character_path_system
                        .run_if(on_message::<UpdateLastCharacterPathRequest>),
                ),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert!(data.last_character_path.is_none());
        assert!(data.recent_characters.is_empty());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            last_character_path: Some(PathBuf::from("/path/to/rook.json")),
            recent_characters: vec![
                PathBuf::from("/path/to/rook.json"),
                PathBuf::from("/path/to/marlowe.json"),
            ],
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.last_character_path, data.last_character_path);
        assert_eq!(parsed.recent_characters, data.recent_characters);
    }

    #[test]
    fn test_empty_config_json_uses_defaults() {
        let parsed: AppConfigData = serde_json::from_str("{}").unwrap();
        assert!(parsed.last_character_path.is_none());
        assert!(parsed.recent_characters.is_empty());
    }

    #[test]
    fn test_missing_character_warning_default() {
        let warning = MissingCharacterWarning::default();
        assert!(!warning.show);
        assert!(warning.path.is_none());
    }
}
