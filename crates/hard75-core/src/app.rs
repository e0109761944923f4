//! Application facade over the challenge record.
//!
//! `App` owns the loaded `AppData` and its `DataStore`, and is the one
//! place that touches the real clock. Every mutation here either fully
//! succeeds and persists the whole record, or is rejected before any field
//! changes; collaborators (rendering, notification timers, file pickers)
//! call these methods and re-render from the returned state. The engine
//! never calls back into them.

use chrono::{DateTime, Local, NaiveDate};

use crate::calendar::{self, CalendarView, CountdownPosition};
use crate::challenge::{AppData, Challenge, Countdown, Goal};
use crate::checkin::{self, DayCompletion};
use crate::date;
use crate::error::{Result, ValidationError};
use crate::goals;
use crate::lock;
use crate::reminder;
use crate::stats::{self, StatsSummary};
use crate::storage::DataStore;

pub struct App {
    data: AppData,
    store: DataStore,
}

impl App {
    /// Load from the default data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::with_store(DataStore::open()?))
    }

    /// Load from an explicit store.
    pub fn with_store(store: DataStore) -> Self {
        let data = store.load(date::today());
        Self { data, store }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn active(&self) -> &Challenge {
        self.data
            .active()
            .expect("normalized record keeps active_id resolvable")
    }

    pub fn challenges(&self) -> impl Iterator<Item = &Challenge> {
        self.data.challenges.values()
    }

    pub fn effective_goals(&self, day: NaiveDate) -> &[Goal] {
        goals::effective_goals(self.active(), day)
    }

    pub fn is_locked(&self, day: NaiveDate) -> bool {
        lock::is_locked(self.active(), day, date::today())
    }

    pub fn day_completion(&self, day: NaiveDate) -> DayCompletion {
        checkin::day_completion(self.active(), day)
    }

    pub fn stats(&self) -> StatsSummary {
        stats::summary(self.active(), date::today())
    }

    pub fn calendar(&self) -> CalendarView {
        calendar::project(self.active())
    }

    pub fn countdown_position(&self) -> CountdownPosition {
        calendar::position(&self.active().countdown, date::today())
    }

    // ── Challenge repository ─────────────────────────────────────────

    /// Create, activate and persist a new challenge. Returns its id.
    pub fn create_challenge(
        &mut self,
        name: &str,
        goals: Option<Vec<Goal>>,
        countdown: Option<Countdown>,
    ) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let id = self
            .data
            .insert_active(Challenge::new(name, goals, countdown));
        self.persist()?;
        Ok(id)
    }

    /// Make `id` active. Unknown ids are a silent no-op (returns false).
    pub fn select_challenge(&mut self, id: &str) -> Result<bool> {
        if !self.data.select(id) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Restart the active challenge: same goals and window length, fresh
    /// history, countdown starting today. Returns the new challenge's id.
    pub fn restart_active(&mut self) -> Result<String> {
        let restarted = self.active().restarted(date::today());
        let id = self.data.insert_active(restarted);
        self.persist()?;
        Ok(id)
    }

    /// Rename the active challenge. Trimmed-empty names are rejected.
    pub fn rename_active(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.active_mut().name = name.to_string();
        self.persist()
    }

    // ── Goals ────────────────────────────────────────────────────────

    pub fn add_goal(&mut self, label: &str) -> Result<String> {
        let today = date::today();
        let id = goals::add_goal(self.active_mut(), label, today)?;
        self.persist()?;
        Ok(id)
    }

    pub fn remove_goal(&mut self, goal_id: &str) -> Result<bool> {
        let today = date::today();
        if !goals::remove_goal(self.active_mut(), goal_id, today) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn reset_goals(&mut self) -> Result<()> {
        let today = date::today();
        goals::reset_goals(self.active_mut(), today);
        self.persist()
    }

    // ── Checkins & locks ─────────────────────────────────────────────

    pub fn set_checkin(&mut self, day: NaiveDate, goal_id: &str, value: bool) -> Result<()> {
        let today = date::today();
        checkin::set_checkin(self.active_mut(), day, goal_id, value, today)?;
        self.persist()
    }

    pub fn set_lock(&mut self, day: NaiveDate, locked: bool) -> Result<()> {
        lock::set_lock(self.active_mut(), day, locked);
        self.persist()
    }

    // ── Countdown ────────────────────────────────────────────────────

    /// Reconfigure the countdown window. `total_days` floors at one day.
    pub fn set_countdown(&mut self, total_days: u32, start_date: NaiveDate) -> Result<()> {
        self.active_mut().countdown = Countdown {
            total_days: total_days.max(1),
            start_date,
        };
        self.persist()
    }

    pub fn reset_countdown(&mut self) -> Result<()> {
        self.active_mut().countdown = Countdown {
            total_days: 75,
            start_date: date::today(),
        };
        self.persist()
    }

    // ── Reminders ────────────────────────────────────────────────────

    pub fn set_reminder_enabled(&mut self, enabled: bool) -> Result<()> {
        reminder::set_enabled(self.active_mut(), enabled);
        self.persist()
    }

    pub fn set_reminder_time(&mut self, time: &str) -> Result<()> {
        reminder::set_time(self.active_mut(), time)?;
        self.persist()
    }

    /// Run the periodic reminder check. Returns whether it fired.
    ///
    /// Idempotent per calendar day: firing records `last_notified` so the
    /// next trigger on the same day is a no-op.
    pub fn check_reminder(&mut self, now: DateTime<Local>) -> Result<bool> {
        if !reminder::due(self.active(), &now) {
            return Ok(false);
        }
        reminder::mark_notified(self.active_mut(), &now);
        self.persist()?;
        Ok(true)
    }

    // ── Import / export ──────────────────────────────────────────────

    /// The full record as the pretty-printed backup format.
    pub fn export_json(&self) -> Result<String> {
        DataStore::export_string(&self.data)
    }

    /// Replace the record with a normalized backup. Invalid backups are
    /// rejected without mutating existing state.
    pub fn import(&mut self, raw: &str) -> Result<()> {
        let imported = crate::storage::migrations::import(raw)?;
        self.data = imported;
        self.persist()
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn active_mut(&mut self) -> &mut Challenge {
        self.data
            .active_mut()
            .expect("normalized record keeps active_id resolvable")
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.data)
    }
}
