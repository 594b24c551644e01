//! Utility functions for character persistence.

use bevy::prelude::*;

use crate::paths;

/// Startup system that makes sure the characters directory exists
pub fn ensure_characters_directory() {
    let dir = paths::characters_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!("Failed to create characters directory {:?}: {}", dir, e);
    }
}

/// Reduce a character name to something safe to use as a file name
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_filename("Marlowe Fairwind"), "Marlowe Fairwind");
        assert_eq!(sanitize_filename("nim-of_the-vale"), "nim-of_the-vale");
    }

    #[test]
    fn test_sanitize_replaces_separators() {
        assert_eq!(sanitize_filename("a/b\\c:d"), "a_b_c_d");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_filename("  Rook  "), "Rook");
    }
}
