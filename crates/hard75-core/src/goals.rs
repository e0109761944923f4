//! Goal list and per-date goal snapshots.
//!
//! The live goal list can change over time without rewriting history: the
//! goals that applied on a given date are frozen into
//! `challenge.goal_snapshots` the first time that date is touched. A date
//! without a snapshot tracks the live list until then.
//!
//! Every edit of the live list shares one side effect: while today is
//! unlocked, today's snapshot is rewritten from the live list and today's
//! checkins are pruned to it. A locked today is left untouched.

use chrono::NaiveDate;

use crate::challenge::{default_goal_set, Challenge, Goal};
use crate::checkin::clean_checkins;
use crate::error::{Result, ValidationError};
use crate::lock;

/// The goal list that applies on `date`: its snapshot if one exists, else
/// the live list.
pub fn effective_goals(challenge: &Challenge, date: NaiveDate) -> &[Goal] {
    challenge
        .goal_snapshots
        .get(&date)
        .map(Vec::as_slice)
        .unwrap_or(&challenge.goals)
}

/// Idempotently freeze the live goal list into `date`'s snapshot.
///
/// Called before any checkin mutation so later goal-list edits cannot
/// retroactively alter a day once it has been touched.
pub fn ensure_snapshot(challenge: &mut Challenge, date: NaiveDate) {
    if !challenge.goal_snapshots.contains_key(&date) {
        challenge
            .goal_snapshots
            .insert(date, challenge.goals.clone());
    }
}

/// Rewrite today's snapshot from the live list and prune today's checkins,
/// unless today is locked.
pub fn sync_today_snapshot(challenge: &mut Challenge, today: NaiveDate) {
    if lock::is_locked(challenge, today, today) {
        return;
    }
    let snapshot = challenge.goals.clone();
    let pruned = clean_checkins(
        challenge.checkins.get(&today).cloned().unwrap_or_default(),
        &snapshot,
    );
    challenge.goal_snapshots.insert(today, snapshot);
    challenge.checkins.insert(today, pruned);
}

/// Append a new goal to the live list.
///
/// Rejects empty or whitespace-only labels. Returns the new goal's id.
pub fn add_goal(challenge: &mut Challenge, label: &str, today: NaiveDate) -> Result<String> {
    let label = label.trim();
    if label.is_empty() {
        return Err(ValidationError::EmptyLabel.into());
    }
    let goal = Goal::new(label);
    let id = goal.id.clone();
    challenge.goals.push(goal);
    sync_today_snapshot(challenge, today);
    Ok(id)
}

/// Remove a goal from the live list. Unknown ids are a silent no-op.
///
/// Returns whether a goal was removed.
pub fn remove_goal(challenge: &mut Challenge, goal_id: &str, today: NaiveDate) -> bool {
    let before = challenge.goals.len();
    challenge.goals.retain(|goal| goal.id != goal_id);
    if challenge.goals.len() == before {
        return false;
    }
    sync_today_snapshot(challenge, today);
    true
}

/// Replace the live list with the default goal set.
pub fn reset_goals(challenge: &mut Challenge, today: NaiveDate) {
    challenge.goals = default_goal_set();
    sync_today_snapshot(challenge, today);
}
