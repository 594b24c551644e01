//! Message types for character persistence operations.

use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Message)]
pub struct SaveCharacterRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct LoadCharacterRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct NewCharacterRequest;
