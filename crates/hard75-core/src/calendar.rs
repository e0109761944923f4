//! Calendar projection over a challenge's countdown window.
//!
//! Maps `[0, total_days)` onto concrete dates from the countdown start and
//! derives a display status per date. Statuses depend only on recorded
//! state, not on today; the countdown position is the one temporal piece.

use chrono::NaiveDate;
use serde::Serialize;

use crate::challenge::{Challenge, Countdown};
use crate::checkin::day_completion;
use crate::date::add_days;

/// Display status of one projected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Non-empty effective goal list, all checked.
    Complete,
    /// Some but not all checked.
    Partial,
    /// Nothing checked, including zero-goal days.
    Empty,
}

/// One cell of the projected grid.
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    /// 0-based offset from the countdown start.
    pub index: usize,
    pub date: NaiveDate,
    pub status: DayStatus,
    pub completed_count: usize,
    pub total_count: usize,
}

/// The projected grid plus its completed-day tally.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarView {
    pub cells: Vec<DayCell>,
    pub completed_days: u32,
    pub total_days: u32,
}

/// Where today falls inside the countdown window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownPosition {
    /// Elapsed days + 1, capped at the window length.
    pub current_day: u32,
    pub days_remaining: u32,
}

/// Project the challenge's countdown window to day statuses.
pub fn project(challenge: &Challenge) -> CalendarView {
    let total_days = challenge.countdown.total_days;
    let start = challenge.countdown.start_date;
    let mut completed_days = 0;

    let cells = (0..total_days as usize)
        .map(|index| {
            let date = add_days(start, index as i64);
            let completion = day_completion(challenge, date);
            let status = if completion.total_count > 0
                && completion.completed_count == completion.total_count
            {
                completed_days += 1;
                DayStatus::Complete
            } else if completion.completed_count > 0 {
                DayStatus::Partial
            } else {
                DayStatus::Empty
            };
            DayCell {
                index,
                date,
                status,
                completed_count: completion.completed_count,
                total_count: completion.total_count,
            }
        })
        .collect();

    CalendarView {
        cells,
        completed_days,
        total_days,
    }
}

/// Current day number and days remaining for `today`.
///
/// Days before the start clamp elapsed time to zero, so day 1 is shown
/// until the window actually begins.
pub fn position(countdown: &Countdown, today: NaiveDate) -> CountdownPosition {
    let elapsed = (today - countdown.start_date).num_days().max(0) as u32;
    CountdownPosition {
        current_day: (elapsed + 1).min(countdown.total_days),
        days_remaining: countdown.total_days.saturating_sub(elapsed),
    }
}
