//! Record normalization and legacy-layout migration.
//!
//! Migration runs when no current-schema record exists and upgrades the old
//! three-key layout (separate goal list, checkin map and countdown) into one
//! consolidated record. Normalization runs on every load and import and
//! repairs structurally incomplete records; after it, the rest of the crate
//! assumes the full invariant set holds: `active_id` resolves, the
//! challenge map is non-empty, every challenge has a non-empty goal list and
//! a countdown of at least one day.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::challenge::{
    default_goal_set, new_id, AppData, Challenge, CheckinMap, Countdown, Goal,
};
use crate::date;
use crate::error::{Result, StorageError};

/// Current schema version of the persisted record.
pub const SCHEMA_VERSION: u32 = 1;

/// Raw contents of the legacy three-key layout, each key optional.
#[derive(Debug, Default)]
pub struct LegacyRecords {
    pub goals: Option<String>,
    pub checkins: Option<String>,
    pub countdown: Option<String>,
}

/// Parse leniently, treating malformed JSON as absent.
fn safe_parse<T: serde::de::DeserializeOwned>(raw: Option<&String>) -> Option<T> {
    raw.and_then(|s| serde_json::from_str(s).ok())
}

/// Upgrade the legacy layout into a consolidated record.
///
/// Returns `None` when none of the three legacy pieces parse, meaning there
/// is no legacy data to migrate. Every date present in the legacy checkin
/// map gets a goal snapshot seeded from the migrated goal list, and dates
/// strictly before `today` are locked.
pub fn migrate_legacy(legacy: &LegacyRecords, today: NaiveDate) -> Option<AppData> {
    let legacy_goals: Option<Vec<Goal>> = safe_parse(legacy.goals.as_ref());
    let legacy_checkins: Option<BTreeMap<NaiveDate, CheckinMap>> =
        safe_parse(legacy.checkins.as_ref());
    let legacy_countdown: Option<Countdown> = safe_parse(legacy.countdown.as_ref());

    if legacy_goals.is_none() && legacy_checkins.is_none() && legacy_countdown.is_none() {
        return None;
    }

    let goals = match legacy_goals {
        Some(goals) if !goals.is_empty() => goals,
        _ => default_goal_set(),
    };

    let mut challenge = Challenge::new(
        "My 75 Hard",
        Some(goals.clone()),
        Some(legacy_countdown.unwrap_or_default()),
    );
    challenge.checkins = legacy_checkins.unwrap_or_default();

    let days: Vec<NaiveDate> = challenge.checkins.keys().copied().collect();
    for day in days {
        challenge.goal_snapshots.insert(day, goals.clone());
        if date::is_past(day, today) {
            challenge.locks.insert(day, true);
        }
    }

    tracing::info!(
        challenge = %challenge.name,
        days = challenge.checkins.len(),
        "migrated legacy record"
    );
    Some(AppData::with_challenge(SCHEMA_VERSION, challenge))
}

/// Repair a record into one satisfying the data-model invariants.
///
/// This is the single normalization pass run at the load and import
/// boundaries; no defensive re-checking happens downstream.
pub fn normalize(mut data: AppData) -> AppData {
    if data.schema_version == 0 {
        data.schema_version = SCHEMA_VERSION;
    }

    for challenge in data.challenges.values_mut() {
        normalize_challenge(challenge);
    }

    if data.challenges.is_empty() || !data.challenges.contains_key(&data.active_id) {
        match data.challenges.keys().next().cloned() {
            Some(first) => data.active_id = first,
            None => {
                data.insert_active(Challenge::new("75 Hard", None, None));
            }
        }
    }

    data
}

/// Fill in any missing required fields of one challenge.
fn normalize_challenge(challenge: &mut Challenge) {
    if challenge.id.is_empty() {
        challenge.id = new_id();
    }
    if challenge.name.trim().is_empty() {
        challenge.name = "75 Hard".to_string();
    }
    if challenge.goals.is_empty() {
        challenge.goals = default_goal_set();
    }
    challenge.countdown.total_days = challenge.countdown.total_days.max(1);
    if challenge.reminders.time.is_empty() {
        challenge.reminders.time = "20:00".to_string();
    }
}

/// A record synthesized from nothing: one fresh default challenge.
pub fn fresh() -> AppData {
    AppData::with_challenge(SCHEMA_VERSION, Challenge::new("75 Hard", None, None))
}

/// Validate and normalize an imported backup.
///
/// The file is valid iff it parses as JSON and the top level carries a
/// `challenges` field; that is the sole structural check before
/// normalization. Rejection leaves the caller's state untouched.
pub fn import(raw: &str) -> Result<AppData> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        StorageError::InvalidBackup {
            reason: format!("not valid JSON: {e}"),
        }
    })?;

    let has_challenges = value
        .get("challenges")
        .map(|v| !v.is_null())
        .unwrap_or(false);
    if !has_challenges {
        return Err(StorageError::InvalidBackup {
            reason: "missing 'challenges' field".to_string(),
        }
        .into());
    }

    let data: AppData = serde_json::from_value(value).unwrap_or_else(|_| fresh());
    Ok(normalize(data))
}
