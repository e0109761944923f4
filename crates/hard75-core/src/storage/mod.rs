pub mod config;
pub mod migrations;
pub mod store;

pub use config::Config;
pub use store::DataStore;

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns `~/.config/hard75[-dev]/` based on HARD75_ENV.
///
/// Set HARD75_ENV=dev to use the development data directory, or
/// HARD75_DATA_DIR to force an explicit directory (test suites do this so
/// they never touch the real home directory).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var("HARD75_DATA_DIR") {
        Ok(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HARD75_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("hard75-dev")
            } else {
                base_dir.join("hard75")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
