//! Per-date lock state machine.
//!
//! Each (challenge, date) pair is either `locked` or `unlocked`. The stored
//! flag is three-valued: explicitly true, explicitly false, or unset. An
//! unset flag resolves to locked exactly when the date is in the past, so
//! history closes itself without ever writing a flag, while an explicit
//! `false` on a past date (or `true` on a future one) persists and wins.

use chrono::NaiveDate;

use crate::challenge::Challenge;
use crate::date;

/// Resolve a stored flag against the implicit-past-lock rule.
///
/// Pure function of `(flag, is_past)`: an explicit flag always wins, an
/// absent flag means locked iff the date is past.
pub fn resolve(flag: Option<bool>, is_past: bool) -> bool {
    flag.unwrap_or(is_past)
}

/// Whether `date`'s checkins are currently closed to edits.
pub fn is_locked(challenge: &Challenge, day: NaiveDate, today: NaiveDate) -> bool {
    resolve(
        challenge.locks.get(&day).copied(),
        date::is_past(day, today),
    )
}

/// Record an explicit lock flag for `date`.
///
/// Both values are stored literally: `false` on a past date overrides the
/// implicit lock and must survive a reload.
pub fn set_lock(challenge: &mut Challenge, day: NaiveDate, locked: bool) {
    challenge.locks.insert(day, locked);
}
