//! Error types for the filesystem store.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// Store not found at the specified path.
    #[error("store not found at '{0}'")]
    StoreNotFound(PathBuf),

    /// Store already exists.
    #[error("store already exists at '{0}'")]
    StoreExists(PathBuf),

    /// Item not found.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// Item already exists.
    #[error("item already exists: {0}")]
    ItemExists(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] gilded_core::CoreError),
}
