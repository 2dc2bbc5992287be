//! Persistence-specific error types.

use std::path::PathBuf;

/// Errors that can occur during checklist persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to find home directory
    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    /// Failed to create data directory
    #[error("Failed to create data directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a stored key
    #[error("Failed to load {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a stored key
    #[error("Failed to save {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a value for storage
    #[error("Failed to serialize '{key}': {message}")]
    SerializationFailed { key: String, message: String },

    /// Failed to deserialize a stored value
    #[error("Failed to deserialize '{key}': {message}")]
    DeserializationFailed { key: String, message: String },
}
