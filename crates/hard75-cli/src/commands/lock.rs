//! Per-date lock commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use hard75_core::App;

#[derive(Subcommand)]
pub enum LockAction {
    /// Show whether a date is locked
    Status {
        /// Date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Lock a date against edits
    On {
        /// Date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Unlock a date for edits
    Off {
        /// Date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: LockAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        LockAction::Status { date } => {
            let day = date.unwrap_or_else(hard75_core::date::today);
            let state = if app.is_locked(day) { "locked" } else { "unlocked" };
            println!("{day}: {state}");
        }
        LockAction::On { date } => {
            let day = date.unwrap_or_else(hard75_core::date::today);
            app.set_lock(day, true)?;
            println!("{day}: locked");
        }
        LockAction::Off { date } => {
            let day = date.unwrap_or_else(hard75_core::date::today);
            app.set_lock(day, false)?;
            println!("{day}: unlocked");
        }
    }
    Ok(())
}
