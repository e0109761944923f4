//! Daily checkin commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use hard75_core::App;

#[derive(Subcommand)]
pub enum CheckinAction {
    /// Mark a goal done
    Check {
        /// Goal ID
        goal: String,
        /// Date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Mark a goal not done
    Clear {
        /// Goal ID
        goal: String,
        /// Date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show one day's checklist
    Day {
        /// Date (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: CheckinAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        CheckinAction::Check { goal, date } => {
            let day = date.unwrap_or_else(hard75_core::date::today);
            app.set_checkin(day, &goal, true)?;
            report_day(&app, day);
        }
        CheckinAction::Clear { goal, date } => {
            let day = date.unwrap_or_else(hard75_core::date::today);
            app.set_checkin(day, &goal, false)?;
            report_day(&app, day);
        }
        CheckinAction::Day { date } => {
            let day = date.unwrap_or_else(hard75_core::date::today);
            let challenge = app.active();
            let empty = Default::default();
            let checkins = challenge.checkins.get(&day).unwrap_or(&empty);
            for goal in app.effective_goals(day) {
                let mark = if checkins.get(&goal.id).copied().unwrap_or(false) {
                    "x"
                } else {
                    " "
                };
                println!("[{mark}] {}  {}", goal.id, goal.label);
            }
            report_day(&app, day);
        }
    }
    Ok(())
}

fn report_day(app: &App, day: NaiveDate) {
    let completion = app.day_completion(day);
    let locked = if app.is_locked(day) { " (locked)" } else { "" };
    println!(
        "{day}: {}/{} complete{locked}",
        completion.completed_count, completion.total_count
    );
}
