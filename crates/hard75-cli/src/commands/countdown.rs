//! Countdown window commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use hard75_core::App;

#[derive(Subcommand)]
pub enum CountdownAction {
    /// Show where today falls in the window
    Status,
    /// Reconfigure the window
    Set {
        /// Window length in days
        total_days: u32,
        /// Start date (default: today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
    /// Reset to 75 days starting today
    Reset,
}

pub fn run(action: CountdownAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        CountdownAction::Status => {
            let countdown = app.active().countdown.clone();
            let position = app.countdown_position();
            println!(
                "Day {} of {} (started {}), {} days remaining",
                position.current_day,
                countdown.total_days,
                countdown.start_date,
                position.days_remaining
            );
        }
        CountdownAction::Set {
            total_days,
            start_date,
        } => {
            let start = start_date.unwrap_or_else(hard75_core::date::today);
            app.set_countdown(total_days, start)?;
            println!("Countdown: {} days from {start}", total_days.max(1));
        }
        CountdownAction::Reset => {
            app.reset_countdown()?;
            let countdown = &app.active().countdown;
            println!(
                "Countdown reset: {} days from {}",
                countdown.total_days, countdown.start_date
            );
        }
    }
    Ok(())
}
