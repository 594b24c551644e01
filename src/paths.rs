//! Centralized path resolution for platform-appropriate user data directories.
//!
//! In development mode (cargo run), paths resolve to local directories.
//! In installed mode, paths resolve to platform-specific locations:
//! - Windows: `%APPDATA%\Heartforged\`
//! - macOS: `~/Library/Application Support/Heartforged/`
//! - Linux: `~/.config/heartforged/` (config), `~/.local/share/heartforged/` (data)

use std::path::PathBuf;

/// Returns true when running in development mode (cargo run).
///
/// Detection methods:
/// - `CARGO` env var is set (cargo run sets this)
/// - Debug assertions enabled (debug builds)
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Platform-appropriate config directory.
///
/// - Dev mode: current directory
/// - Linux: `~/.config/heartforged/`
/// - Windows/macOS: same as data_dir
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join("heartforged"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Platform-appropriate data directory.
///
/// - Dev mode: current directory
/// - Windows: `%APPDATA%\Heartforged\`
/// - macOS: `~/Library/Application Support/Heartforged/`
/// - Linux: `~/.local/share/heartforged/`
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join("heartforged"))
}

/// Path to the config file.
///
/// - Dev mode: `./config.json`
/// - Installed: `{config_dir}/config.json`
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("config.json"))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// Directory where character files are kept by default.
///
/// - Dev mode: `./characters/`
/// - Installed: `{data_dir}/characters/`
pub fn characters_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("characters"))
        .unwrap_or_else(|| PathBuf::from("characters"))
}

/// Path to the user compendium file (extends/overrides the built-in SRD cards).
///
/// - Dev mode: `./compendium.json`
/// - Installed: `{data_dir}/compendium.json`
pub fn compendium_file() -> PathBuf {
    data_dir()
        .map(|p| p.join("compendium.json"))
        .unwrap_or_else(|| PathBuf::from("compendium.json"))
}

/// Path to the logs directory.
///
/// - Dev mode: `./logs/`
/// - Installed: `{data_dir}/logs/`
pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Ensure all required directories exist.
///
/// Called early in startup to create config and data directories.
pub fn ensure_directories() -> std::io::Result<()> {
    if is_dev_mode() {
        // In dev mode, directories are local and typically exist
        return Ok(());
    }

    if let Some(config) = config_dir() {
        std::fs::create_dir_all(&config)?;
    }
    if let Some(data) = data_dir() {
        std::fs::create_dir_all(&data)?;
        std::fs::create_dir_all(data.join("logs"))?;
        std::fs::create_dir_all(data.join("characters"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_not_none() {
        // In test mode (debug), should return Some
        assert!(config_dir().is_some());
    }

    #[test]
    fn test_data_dir_not_none() {
        assert!(data_dir().is_some());
    }

    #[test]
    fn test_config_file_has_json_extension() {
        let path = config_file();
        assert!(path.to_string_lossy().ends_with("config.json"));
    }

    #[test]
    fn test_characters_dir_under_data_dir() {
        let path = characters_dir();
        assert!(path.to_string_lossy().ends_with("characters"));
    }

    #[test]
    fn test_dev_mode_returns_local_paths() {
        // In tests, is_dev_mode() should be true due to debug_assertions
        assert!(is_dev_mode());
        assert_eq!(config_dir(), Some(PathBuf::from(".")));
        assert_eq!(data_dir(), Some(PathBuf::from(".")));
    }
}
