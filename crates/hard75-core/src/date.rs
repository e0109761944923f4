//! Calendar-day helpers.
//!
//! Every engine date is a plain `chrono::NaiveDate`. The serialized form is
//! `YYYY-MM-DD`, fixed-width and zero-padded, so the string order of
//! persisted map keys matches chronological order and `BTreeMap` iteration
//! walks days in calendar order.

use chrono::{DateTime, Duration, Local, NaiveDate};

/// Today in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Shift a date by a signed number of whole days.
pub fn add_days(date: NaiveDate, delta: i64) -> NaiveDate {
    date + Duration::days(delta)
}

/// Whether `date` is strictly before `today`.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Wall-clock time as a zero-padded `HH:MM` string.
///
/// Reminder times are compared lexicographically, which is valid exactly
/// because both sides are fixed-width zero-padded strings.
pub fn clock_hhmm(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}
