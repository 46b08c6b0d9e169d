// ABOUTME: Error types for the fallible outer surface of docktree.
// ABOUTME: Tree building itself never fails; only file and input handling does.

use crate::resource::ParseResourceKindError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("settings file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error(transparent)]
    UnknownResourceKind(#[from] ParseResourceKindError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid descriptor list: {0}")]
    Descriptors(serde_json::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
