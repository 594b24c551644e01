//! Update checking for Heartforged.
//!
//! Fetches a release manifest JSON file on startup, compares versions, and
//! shows a dismissible notice pointing at the release page. Installing the
//! new build is left to the user.
//!
//! The manifest format is generic and can be hosted anywhere (GitHub Pages,
//! S3, any CDN). To migrate away from GitHub, simply change `MANIFEST_URL`
//! to point to the new host.

use bevy::prelude::*;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use futures_lite::future;
use semver::Version;
use serde::Deserialize;

use crate::theme;

/// Current version of the application (from Cargo.toml)
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// URL to the release manifest file.
/// Change this constant to migrate away from GitHub hosting.
const MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/fitz11/heartforged/main/releases/latest.json";

/// Release manifest structure - can be hosted anywhere.
///
/// Example JSON:
/// ```json
/// {
///   "version": "1.2.3",
///   "release_url": "https://github.com/fitz11/heartforged/releases/v1.2.3",
///   "release_notes": "Bug fixes and improvements..."
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct ReleaseManifest {
    /// Latest version string (semver format, e.g., "1.2.3")
    pub version: String,
    /// URL to the release page for manual download
    pub release_url: String,
    /// Release notes/changelog (optional)
    pub release_notes: Option<String>,
}

/// State for the update checker
#[derive(Resource, Default)]
pub struct UpdateState {
    /// Whether we're currently checking for updates
    pub is_checking: bool,
    /// Whether an update is available
    pub update_available: bool,
    /// The latest version available (if any)
    pub latest_version: Option<String>,
    /// URL to the release page
    pub release_url: Option<String>,
    /// Release notes/description
    pub release_notes: Option<String>,
    /// Error message if check failed
    pub error: Option<String>,
    /// Whether to show the update dialog
    pub show_dialog: bool,
    /// Whether the user has dismissed the notification for this session
    pub dismissed: bool,
}

/// Background task for checking updates
#[derive(Component)]
struct UpdateCheckTask(Task<UpdateCheckResult>);

/// Result of an update check
struct UpdateCheckResult {
    update_available: bool,
    latest_version: Option<String>,
    release_url: Option<String>,
    release_notes: Option<String>,
    error: Option<String>,
}

impl UpdateCheckResult {
    fn no_update() -> Self {
        Self {
            update_available: false,
            latest_version: None,
            release_url: None,
            release_notes: None,
            error: None,
        }
    }

    fn error(msg: String) -> Self {
        Self {
            update_available: false,
            latest_version: None,
            release_url: None,
            release_notes: None,
            error: Some(msg),
        }
    }
}

/// Compare versions, returns true if `latest` is newer than `current`
fn is_newer_version(latest: &str, current: &str) -> bool {
    match (Version::parse(latest), Version::parse(current)) {
        (Ok(latest_v), Ok(current_v)) => latest_v > current_v,
        _ => false,
    }
}

/// Check for updates by fetching the release manifest
fn check_for_updates() -> UpdateCheckResult {
    let response = ureq::get(MANIFEST_URL)
        .set("User-Agent", "heartforged-update-checker")
        .call();

    match response {
        Ok(resp) => match resp.into_json::<ReleaseManifest>() {
            Ok(manifest) => {
                let update_available = is_newer_version(&manifest.version, CURRENT_VERSION);

                UpdateCheckResult {
                    update_available,
                    latest_version: Some(manifest.version),
                    release_url: Some(manifest.release_url),
                    release_notes: manifest.release_notes,
                    error: None,
                }
            }
            Err(e) => UpdateCheckResult::error(format!("Failed to parse manifest: {}", e)),
        },
        Err(ureq::Error::Status(404, _)) => {
            // No manifest yet - this is fine
            UpdateCheckResult::no_update()
        }
        Err(e) => UpdateCheckResult::error(format!("Failed to check for updates: {}", e)),
    }
}

/// System to start the update check on startup
fn start_update_check(mut commands: Commands, mut update_state: ResMut<UpdateState>) {
    update_state.is_checking = true;

    let task_pool = AsyncComputeTaskPool::get();
    let task = task_pool.spawn(async move { check_for_updates() });

    commands.spawn(UpdateCheckTask(task));
}

/// System to poll the update check task
fn poll_update_check(
    mut commands: Commands,
    mut update_state: ResMut<UpdateState>,
    mut tasks: Query<(Entity, &mut UpdateCheckTask)>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        if let Some(result) = future::block_on(future::poll_once(&mut task.0)) {
            update_state.is_checking = false;
            update_state.update_available = result.update_available;
            update_state.latest_version = result.latest_version;
            update_state.release_url = result.release_url;
            update_state.release_notes = result.release_notes;
            update_state.error = result.error;

            if let Some(ref error) = update_state.error {
                debug!("Update check failed: {}", error);
            } else if update_state.update_available {
                info!(
                    "Update available: v{}",
                    update_state.latest_version.as_deref().unwrap_or("unknown")
                );
            }

            commands.entity(entity).despawn();
        }
    }
}

/// UI system to show the update notice above the toolbar
pub fn update_indicator_ui(
    mut contexts: EguiContexts,
    mut update_state: ResMut<UpdateState>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    // Only show once the check has finished with an update, and only until
    // the user dismisses it
    if update_state.is_checking || !update_state.update_available || update_state.dismissed {
        return Ok(());
    }

    egui::TopBottomPanel::top("update_indicator")
        .frame(egui::Frame::NONE)
        .show_separator_line(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() - 150.0);

                let version = update_state.latest_version.as_deref().unwrap_or("unknown");

                if ui
                    .colored_label(
                        theme::ui::WARNING_TEXT,
                        format!("Update v{} available", version),
                    )
                    .on_hover_text("Click to view release details")
                    .clicked()
                {
                    update_state.show_dialog = true;
                }
            });
        });

    Ok(())
}

/// UI system to show the update dialog
pub fn update_dialog_ui(
    mut contexts: EguiContexts,
    mut update_state: ResMut<UpdateState>,
) -> Result {
    if !update_state.show_dialog {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let mut open = true;
    let mut dismiss = false;

    egui::Window::new("Update Available")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_min_width(400.0);

            ui.horizontal(|ui| {
                ui.label("Current version:");
                ui.strong(CURRENT_VERSION);
            });

            if let Some(ref version) = update_state.latest_version {
                ui.horizontal(|ui| {
                    ui.label("Latest version:");
                    ui.strong(version);
                });
            }

            if let Some(ref notes) = update_state.release_notes {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Release notes").strong());
                egui::ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                    ui.label(notes);
                });
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("View Release").clicked()
                    && let Some(ref url) = update_state.release_url
                {
                    if let Err(e) = open::that(url) {
                        warn!("Failed to open release page: {}", e);
                    }
                }

                if ui.button("Skip This Version").clicked() {
                    dismiss = true;
                }
            });
        });

    if !open {
        update_state.show_dialog = false;
    }
    if dismiss {
        update_state.show_dialog = false;
        update_state.dismissed = true;
    }

    Ok(())
}

pub struct UpdateCheckerPlugin;

impl Plugin for UpdateCheckerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UpdateState>()
            .add_systems(Startup, start_update_check)
            .add_systems(Update, poll_update_check)
            .add_systems(
                EguiPrimaryContextPass,
                (update_indicator_ui, update_dialog_ui),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_newer_version() {
        assert!(is_newer_version("0.2.0", "0.1.0"));
        assert!(is_newer_version("1.0.0", "0.9.9"));
        assert!(!is_newer_version("0.1.0", "0.1.0"));
        assert!(!is_newer_version("0.1.0", "0.2.0"));
    }

    #[test]
    fn test_is_newer_version_rejects_garbage() {
        assert!(!is_newer_version("not-a-version", "0.1.0"));
        assert!(!is_newer_version("0.2.0", "not-a-version"));
    }

    #[test]
    fn test_manifest_parses_without_notes() {
        let json = r#"{
            "version": "0.2.0",
            "release_url": "https://example.com/releases/v0.2.0"
        }"#;

        let manifest: ReleaseManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.version, "0.2.0");
        assert!(manifest.release_notes.is_none());
    }

    #[test]
    fn test_manifest_roundtrip() {
        let manifest = ReleaseManifest {
            version: "1.2.3".to_string(),
            release_url: "https://example.com/v1.2.3".to_string(),
            release_notes: Some("Fixes".to_string()),
        };

        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: ReleaseManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.version, manifest.version);
        assert_eq!(parsed.release_url, manifest.release_url);
    }

    #[test]
    fn test_current_version_is_valid_semver() {
        assert!(Version::parse(CURRENT_VERSION).is_ok());
    }
}
