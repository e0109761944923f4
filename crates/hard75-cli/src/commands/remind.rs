//! Daily reminder commands for CLI.
//!
//! The `check` subcommand is the periodic trigger: schedule it (cron, a
//! timer, whatever the platform offers) and it fires at most once per day.

use chrono::Local;
use clap::Subcommand;
use hard75_core::App;

const REMINDER_BODY: &str = "Time to check off your daily goals.";

#[derive(Subcommand)]
pub enum RemindAction {
    /// Show reminder settings
    Status,
    /// Enable the daily reminder
    Enable,
    /// Disable the daily reminder
    Disable,
    /// Set the reminder time (HH:MM)
    SetTime {
        /// Time of day, e.g. 20:00
        time: String,
    },
    /// Run the periodic reminder check
    Check,
    /// Print the reminder without recording a notification
    Test,
}

pub fn run(action: RemindAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        RemindAction::Status => {
            let reminders = &app.active().reminders;
            let state = if reminders.enabled { "enabled" } else { "disabled" };
            println!("Reminder: {state} at {}", reminders.time);
            match reminders.last_notified {
                Some(day) => println!("Last notified: {day}"),
                None => println!("Last notified: never"),
            }
        }
        RemindAction::Enable => {
            app.set_reminder_enabled(true)?;
            println!("Reminder enabled at {}", app.active().reminders.time);
        }
        RemindAction::Disable => {
            app.set_reminder_enabled(false)?;
            println!("Reminder disabled");
        }
        RemindAction::SetTime { time } => {
            app.set_reminder_time(&time)?;
            println!("Reminder time set to {}", app.active().reminders.time);
        }
        RemindAction::Check => {
            if app.check_reminder(Local::now())? {
                println!("{}: {REMINDER_BODY}", app.active().name);
            }
        }
        RemindAction::Test => {
            println!("{}: {REMINDER_BODY}", app.active().name);
        }
    }
    Ok(())
}
