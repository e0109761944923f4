//! Persisted challenge data model.
//!
//! `AppData` is the root record, stored as one JSON document. Field names
//! serialize in the camelCase form the on-disk record has always used, and
//! every field carries a default so that a structurally incomplete record
//! deserializes into something the normalization pass can repair instead of
//! failing wholesale.
//!
//! Goal snapshots are value copies of the live goal list. Cloning a
//! `Vec<Goal>` is the only way a list enters history, so later edits to the
//! live list can never rewrite what a past day displayed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::date;

/// Goal labels seeded into every freshly created challenge.
pub const DEFAULT_GOALS: [&str; 6] = [
    "45 min workout",
    "Second workout or active recovery",
    "1 gallon of water",
    "Stick to nutrition plan",
    "Read 10 pages",
    "Progress photo",
];

/// A single daily task item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Opaque unique identifier, stable across snapshots.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl Goal {
    /// Create a goal with a freshly generated id.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            label: label.into(),
        }
    }
}

/// The window of days a challenge projects over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    #[serde(default = "default_total_days")]
    pub total_days: u32,
    #[serde(default = "date::today")]
    pub start_date: NaiveDate,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            total_days: default_total_days(),
            start_date: date::today(),
        }
    }
}

/// Daily reminder settings.
///
/// `last_notified` keeps the reminder idempotent per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_reminder_time")]
    pub time: String,
    #[serde(default)]
    pub last_notified: Option<NaiveDate>,
}

impl Default for Reminders {
    fn default() -> Self {
        Self {
            enabled: false,
            time: default_reminder_time(),
            last_notified: None,
        }
    }
}

/// Per-date map of goal id to completion.
pub type CheckinMap = BTreeMap<String, bool>;

/// One complete run of the tracked program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "Utc::now", deserialize_with = "datetime_or_now")]
    pub created_at: DateTime<Utc>,
    /// The live goal list. Snapshots, not this list, decide what a
    /// historical date displays.
    #[serde(default, deserialize_with = "ok_or_default")]
    pub goals: Vec<Goal>,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub countdown: Countdown,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub checkins: BTreeMap<NaiveDate, CheckinMap>,
    /// Explicit lock flags. An absent entry resolves through the
    /// implicit-past-lock rule in [`crate::lock`].
    #[serde(default, deserialize_with = "ok_or_default")]
    pub locks: BTreeMap<NaiveDate, bool>,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub goal_snapshots: BTreeMap<NaiveDate, Vec<Goal>>,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub reminders: Reminders,
}

impl Challenge {
    /// Create a challenge with empty history.
    ///
    /// `goals` and `countdown` fall back to the default goal set and a
    /// 75-day window starting today.
    pub fn new(
        name: impl Into<String>,
        goals: Option<Vec<Goal>>,
        countdown: Option<Countdown>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            created_at: Utc::now(),
            goals: goals.unwrap_or_else(default_goal_set),
            countdown: countdown.unwrap_or_default(),
            checkins: BTreeMap::new(),
            locks: BTreeMap::new(),
            goal_snapshots: BTreeMap::new(),
            reminders: Reminders::default(),
        }
    }

    /// New challenge copying this one's current goals (by value) and
    /// total-day count, with the countdown reset to start on `today` and a
    /// fresh empty history.
    pub fn restarted(&self, today: NaiveDate) -> Self {
        Self::new(
            format!("{} Restart", self.name),
            Some(self.goals.clone()),
            Some(Countdown {
                total_days: self.countdown.total_days,
                start_date: today,
            }),
        )
    }
}

/// The persisted root record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub active_id: String,
    #[serde(default, deserialize_with = "ok_or_default")]
    pub challenges: BTreeMap<String, Challenge>,
}

impl AppData {
    /// Fresh record holding exactly `challenge`, active.
    pub fn with_challenge(schema_version: u32, challenge: Challenge) -> Self {
        let active_id = challenge.id.clone();
        let mut challenges = BTreeMap::new();
        challenges.insert(active_id.clone(), challenge);
        Self {
            schema_version,
            active_id,
            challenges,
        }
    }

    pub fn active(&self) -> Option<&Challenge> {
        self.challenges.get(&self.active_id)
    }

    pub fn active_mut(&mut self) -> Option<&mut Challenge> {
        self.challenges.get_mut(&self.active_id)
    }

    /// Insert a challenge and make it active.
    pub fn insert_active(&mut self, challenge: Challenge) -> String {
        let id = challenge.id.clone();
        self.challenges.insert(id.clone(), challenge);
        self.active_id = id.clone();
        id
    }

    /// Make `id` active. Unknown ids are a silent no-op.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.challenges.contains_key(id) {
            return false;
        }
        self.active_id = id.to_string();
        true
    }
}

/// The fixed six-item default goal set, with fresh ids.
pub fn default_goal_set() -> Vec<Goal> {
    DEFAULT_GOALS.iter().map(|label| Goal::new(*label)).collect()
}

/// Generate a new opaque id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub(crate) fn default_total_days() -> u32 {
    75
}

pub(crate) fn default_reminder_time() -> String {
    "20:00".to_string()
}

/// Deserialize a field tolerantly: a structurally wrong value degrades to
/// the field's default instead of failing the whole record.
fn ok_or_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: serde::de::DeserializeOwned + Default,
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn datetime_or_now<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|_| Utc::now()))
}
