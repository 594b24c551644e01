//! Result types for async character file operations.

use std::path::PathBuf;

use crate::character::CharacterData;

/// Result of an async save operation
pub struct SaveResult {
    pub path: PathBuf,
    pub success: bool,
    pub error: Option<String>,
}

/// Result of an async load operation
pub struct LoadResult {
    pub path: PathBuf,
    pub character: Option<CharacterData>,
    pub error: Option<String>,
}
