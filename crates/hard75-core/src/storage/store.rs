//! Single-JSON-document persistence for the challenge record.
//!
//! The record lives in one file named after the storage key it has always
//! used (`pwa75_data_v2.json`); the legacy three-key layout maps to three
//! sibling files consumed only by migration. Every mutation in the engine
//! is followed by a full save of the whole record; there is no incremental
//! persistence.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::migrations::{self, LegacyRecords};
use crate::challenge::AppData;
use crate::error::{Result, StorageError};

/// File name of the current-schema record.
pub const DATA_FILE: &str = "pwa75_data_v2.json";

/// Legacy layout file names, consumed only by migration.
pub const LEGACY_GOALS_FILE: &str = "pwa75_goals.json";
pub const LEGACY_CHECKINS_FILE: &str = "pwa75_checkins.json";
pub const LEGACY_COUNTDOWN_FILE: &str = "pwa75_countdown.json";

/// Handle on the directory holding the persisted record.
#[derive(Debug, Clone)]
pub struct DataStore {
    dir: PathBuf,
}

impl DataStore {
    /// Open the store in the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::at(super::data_dir()?))
    }

    /// Open the store in an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_FILE)
    }

    /// Load, migrate and normalize the record.
    ///
    /// Never fails on content: a missing record falls through to legacy
    /// migration, and a corrupt one degrades to a fresh default record. The
    /// result always satisfies the data-model invariants.
    pub fn load(&self, today: NaiveDate) -> AppData {
        match std::fs::read_to_string(self.data_path()) {
            Ok(raw) => match serde_json::from_str::<AppData>(&raw) {
                Ok(data) => migrations::normalize(data),
                Err(e) => {
                    tracing::warn!(error = %e, "corrupt data file, starting fresh");
                    migrations::normalize(migrations::fresh())
                }
            },
            Err(_) => {
                let legacy = self.read_legacy();
                match migrations::migrate_legacy(&legacy, today) {
                    Some(migrated) => migrations::normalize(migrated),
                    None => migrations::normalize(migrations::fresh()),
                }
            }
        }
    }

    fn read_legacy(&self) -> LegacyRecords {
        let read = |name: &str| std::fs::read_to_string(self.dir.join(name)).ok();
        LegacyRecords {
            goals: read(LEGACY_GOALS_FILE),
            checkins: read(LEGACY_CHECKINS_FILE),
            countdown: read(LEGACY_COUNTDOWN_FILE),
        }
    }

    /// Persist the full record.
    pub fn save(&self, data: &AppData) -> Result<()> {
        let path = self.data_path();
        let content = serde_json::to_string(data)?;
        std::fs::write(&path, content).map_err(|source| StorageError::WriteFailed {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved record");
        Ok(())
    }

    /// Serialize the record as the pretty-printed backup format.
    pub fn export_string(data: &AppData) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Default backup file name for `today`.
    pub fn export_file_name(today: NaiveDate) -> String {
        format!("75hard-backup-{today}.json")
    }
}
