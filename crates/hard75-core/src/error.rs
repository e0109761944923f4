//! Core error types for hard75-core.
//!
//! This module defines the error hierarchy using thiserror. Note that a
//! corrupt persisted record is not an error: the storage layer degrades it
//! to default data at the boundary. Errors here are reserved for I/O
//! failures, rejected imports and policy violations.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hard75-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to write the data file
    #[error("Failed to write data to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to resolve the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),

    /// An imported backup was rejected before any state changed
    #[error("Invalid backup file: {reason}")]
    InvalidBackup { reason: String },
}

/// Validation errors.
///
/// These are the engine-side rejections for inputs the caller should have
/// prevented via disabled controls; the engine is the final authority.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Empty or whitespace-only goal label
    #[error("Goal label must not be empty")]
    EmptyLabel,

    /// Empty or whitespace-only challenge name
    #[error("Challenge name must not be empty")]
    EmptyName,

    /// Mutation attempted on a locked date
    #[error("Date {date} is locked")]
    DateLocked { date: NaiveDate },

    /// Reminder time not in HH:MM form
    #[error("Invalid reminder time '{value}': expected HH:MM")]
    InvalidTime { value: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
