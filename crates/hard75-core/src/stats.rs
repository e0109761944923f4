//! Derived statistics: day completion, streaks, completion rate.
//!
//! All functions are pure over the challenge record. Temporal ones take
//! `today` explicitly; only the [`crate::app::App`] facade reaches for the
//! real clock.

use chrono::NaiveDate;
use serde::Serialize;

use crate::challenge::Challenge;
use crate::date::add_days;
use crate::goals::effective_goals;

/// Aggregate statistics for render-side consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub days_tracked: usize,
    pub current_streak: u32,
    pub best_streak: u32,
    /// Whole percent, 0..=100.
    pub completion_rate: u32,
}

/// True iff the date has a non-empty effective goal list and every goal in
/// it carries a true checkin.
pub fn is_day_complete(challenge: &Challenge, day: NaiveDate) -> bool {
    let goals = effective_goals(challenge, day);
    if goals.is_empty() {
        return false;
    }
    let Some(checkins) = challenge.checkins.get(&day) else {
        return false;
    };
    goals
        .iter()
        .all(|goal| checkins.get(&goal.id).copied().unwrap_or(false))
}

/// Consecutive complete days ending today.
///
/// Walks backward one day at a time while days stay complete. An incomplete
/// today yields 0 regardless of prior history.
pub fn current_streak(challenge: &Challenge, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;
    while is_day_complete(challenge, cursor) {
        streak += 1;
        cursor = add_days(cursor, -1);
    }
    streak
}

/// Longest run of consecutive complete days anywhere in history.
///
/// Scans recorded checkin dates in ascending order. Recorded dates are
/// sparse, so a complete date that does not follow the previously scanned
/// date by exactly one calendar day restarts the run at 1; an incomplete
/// date resets it to 0.
pub fn best_streak(challenge: &Challenge) -> u32 {
    let mut best = 0;
    let mut running = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in challenge.checkins.keys() {
        if !is_day_complete(challenge, day) {
            running = 0;
            previous = Some(day);
            continue;
        }
        running = match previous {
            Some(prev) if day == add_days(prev, 1) => running + 1,
            _ => 1,
        };
        best = best.max(running);
        previous = Some(day);
    }
    best
}

/// Completed checkins over possible checkins across every recorded date,
/// rounded to a whole percent.
///
/// 0 when nothing is recorded or the live goal list is empty. Dates whose
/// effective goal list is empty contribute nothing.
pub fn completion_rate(challenge: &Challenge) -> u32 {
    if challenge.checkins.is_empty() || challenge.goals.is_empty() {
        return 0;
    }

    let mut completed = 0u64;
    let mut possible = 0u64;
    for (&day, checkins) in &challenge.checkins {
        let goals = effective_goals(challenge, day);
        if goals.is_empty() {
            continue;
        }
        possible += goals.len() as u64;
        completed += goals
            .iter()
            .filter(|goal| checkins.get(&goal.id).copied().unwrap_or(false))
            .count() as u64;
    }

    if possible == 0 {
        return 0;
    }
    ((completed as f64 / possible as f64) * 100.0).round() as u32
}

/// Count of dates with any checkin record.
pub fn days_tracked(challenge: &Challenge) -> usize {
    challenge.checkins.len()
}

/// Bundle every statistic for one challenge.
pub fn summary(challenge: &Challenge, today: NaiveDate) -> StatsSummary {
    StatsSummary {
        days_tracked: days_tracked(challenge),
        current_streak: current_streak(challenge, today),
        best_streak: best_streak(challenge),
        completion_rate: completion_rate(challenge),
    }
}
