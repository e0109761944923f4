//! Daily reminder check.
//!
//! The reminder is driven by an external periodic trigger that the engine
//! treats as one more mutation call: `due` reads state, `mark_notified`
//! writes the single `last_notified` field that keeps the trigger
//! idempotent per calendar day. Whether a platform notification may
//! actually be shown (permissions, notification support) is the caller's
//! concern.

use chrono::{DateTime, Local, NaiveTime};

use crate::challenge::Challenge;
use crate::date;
use crate::error::{Result, ValidationError};

/// Whether the reminder should fire at `now`.
///
/// True iff reminders are enabled, the wall-clock `HH:MM` has reached the
/// configured time, and nothing has fired yet today. Both sides of the time
/// comparison are fixed-width zero-padded strings.
pub fn due(challenge: &Challenge, now: &DateTime<Local>) -> bool {
    if !challenge.reminders.enabled {
        return false;
    }
    let today = now.date_naive();
    if challenge.reminders.last_notified == Some(today) {
        return false;
    }
    date::clock_hhmm(now).as_str() >= challenge.reminders.time.as_str()
}

/// Record that today's reminder fired.
pub fn mark_notified(challenge: &mut Challenge, now: &DateTime<Local>) {
    challenge.reminders.last_notified = Some(now.date_naive());
}

/// Set the reminder time. The value must parse as `HH:MM`.
pub fn set_time(challenge: &mut Challenge, value: &str) -> Result<()> {
    if NaiveTime::parse_from_str(value, "%H:%M").is_err() {
        return Err(ValidationError::InvalidTime {
            value: value.to_string(),
        }
        .into());
    }
    challenge.reminders.time = value.to_string();
    Ok(())
}

pub fn set_enabled(challenge: &mut Challenge, enabled: bool) {
    challenge.reminders.enabled = enabled;
}
