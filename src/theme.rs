//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the sheet UI.
//! Modify values here to change the application's color scheme.

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Red for error messages
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::RED;

    /// Amber for the over-capacity loadout warning banner
    pub const WARNING_TEXT: egui::Color32 = egui::Color32::from_rgb(255, 165, 0);

    /// Gold accent for the unsaved-changes indicator
    pub const DIRTY_INDICATOR: egui::Color32 = egui::Color32::from_rgb(230, 190, 80);

    /// Cyan highlight for the card pending a swap
    pub const SWAP_PENDING: egui::Color32 = egui::Color32::from_rgb(80, 200, 220);

    /// Dark grey panel background (loadout side panel)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Dark background for the card browser panel
    pub const BROWSER_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(60, 60, 60);

    /// Pinkish-red for cards a loaded character references but the compendium lacks
    pub const UNKNOWN_CARD_TEXT: egui::Color32 = egui::Color32::from_rgb(200, 100, 100);
}

// ============================================================================
// Domain Colors
// ============================================================================

/// Badge colors for the nine Daggerheart domains
pub mod domain {
    use bevy_egui::egui;

    pub const ARCANA: egui::Color32 = egui::Color32::from_rgb(120, 80, 200);
    pub const BLADE: egui::Color32 = egui::Color32::from_rgb(200, 60, 60);
    pub const BONE: egui::Color32 = egui::Color32::from_rgb(210, 205, 185);
    pub const CODEX: egui::Color32 = egui::Color32::from_rgb(70, 120, 210);
    pub const GRACE: egui::Color32 = egui::Color32::from_rgb(200, 90, 160);
    pub const MIDNIGHT: egui::Color32 = egui::Color32::from_rgb(90, 90, 130);
    pub const SAGE: egui::Color32 = egui::Color32::from_rgb(80, 170, 90);
    pub const SPLENDOR: egui::Color32 = egui::Color32::from_rgb(230, 200, 90);
    pub const VALOR: egui::Color32 = egui::Color32::from_rgb(220, 130, 60);
    pub const DEFAULT: egui::Color32 = egui::Color32::from_rgb(128, 128, 128);

    /// Get the badge color for a domain by display name
    pub fn color_for(name: &str) -> egui::Color32 {
        match name.to_lowercase().as_str() {
            "arcana" => ARCANA,
            "blade" => BLADE,
            "bone" => BONE,
            "codex" => CODEX,
            "grace" => GRACE,
            "midnight" => MIDNIGHT,
            "sage" => SAGE,
            "splendor" => SPLENDOR,
            "valor" => VALOR,
            _ => DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_known_domains() {
        assert_eq!(domain::color_for("Arcana"), domain::ARCANA);
        assert_eq!(domain::color_for("blade"), domain::BLADE);
        assert_eq!(domain::color_for("VALOR"), domain::VALOR);
    }

    #[test]
    fn test_color_for_unknown_domain_is_default() {
        assert_eq!(domain::color_for("chaos"), domain::DEFAULT);
    }
}
