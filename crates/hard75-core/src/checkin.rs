//! Per-date, per-goal completion records.
//!
//! A date's checkin map only ever contains goal ids present in that date's
//! effective goal snapshot; stale ids from removed goals are pruned on every
//! write. Writes to locked dates are rejected here even though the caller's
//! UI is expected to have disabled the control, so the invariant holds
//! independent of the caller.

use chrono::NaiveDate;
use serde::Serialize;

use crate::challenge::{Challenge, CheckinMap, Goal};
use crate::date;
use crate::error::{Result, ValidationError};
use crate::goals::{effective_goals, ensure_snapshot};
use crate::lock;

/// Completion tally for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCompletion {
    pub completed_count: usize,
    pub total_count: usize,
}

/// Drop entries whose goal id is not in `goals`.
pub fn clean_checkins(checkins: CheckinMap, goals: &[Goal]) -> CheckinMap {
    checkins
        .into_iter()
        .filter(|(goal_id, _)| goals.iter().any(|goal| &goal.id == goal_id))
        .collect()
}

/// Record completion of one goal on one date.
///
/// Rejects writes to locked dates. Otherwise freezes the date's snapshot,
/// prunes the date's checkin map to it and stores the value. A goal id
/// outside the snapshot is silently ignored (the map is still pruned). A
/// successful edit on a past date records an explicit unlock for that date:
/// the act of editing is itself the authorized unlock.
pub fn set_checkin(
    challenge: &mut Challenge,
    day: NaiveDate,
    goal_id: &str,
    value: bool,
    today: NaiveDate,
) -> Result<()> {
    if lock::is_locked(challenge, day, today) {
        return Err(ValidationError::DateLocked { date: day }.into());
    }

    ensure_snapshot(challenge, day);
    let snapshot = challenge.goal_snapshots.get(&day).cloned().unwrap_or_default();
    let mut updated = clean_checkins(
        challenge.checkins.get(&day).cloned().unwrap_or_default(),
        &snapshot,
    );

    let known = snapshot.iter().any(|goal| goal.id == goal_id);
    if known {
        updated.insert(goal_id.to_string(), value);
    }
    challenge.checkins.insert(day, updated);

    if known && date::is_past(day, today) {
        challenge.locks.insert(day, false);
    }
    Ok(())
}

/// Completed-vs-total tally against the date's effective goal list.
///
/// A day with zero effective goals is never complete; its tally is 0/0.
pub fn day_completion(challenge: &Challenge, day: NaiveDate) -> DayCompletion {
    let goals = effective_goals(challenge, day);
    let empty = CheckinMap::new();
    let checkins = challenge.checkins.get(&day).unwrap_or(&empty);
    let completed_count = goals
        .iter()
        .filter(|goal| checkins.get(&goal.id).copied().unwrap_or(false))
        .count();
    DayCompletion {
        completed_count,
        total_count: goals.len(),
    }
}
