//! Challenge management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use hard75_core::{App, Config, Countdown};
use serde::Serialize;

#[derive(Subcommand)]
pub enum ChallengeAction {
    /// List challenges
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new challenge and make it active
    New {
        /// Challenge name (default from config)
        name: Option<String>,
        /// Countdown length in days
        #[arg(long)]
        total_days: Option<u32>,
        /// Countdown start date (default: today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },
    /// Switch the active challenge
    Select {
        /// Challenge ID
        id: String,
    },
    /// Restart the active challenge with the same goals
    Restart,
    /// Rename the active challenge
    Rename {
        /// New name
        name: String,
    },
}

#[derive(Serialize)]
struct ChallengeRow {
    id: String,
    name: String,
    total_days: u32,
    start_date: NaiveDate,
    active: bool,
}

pub fn run(action: ChallengeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        ChallengeAction::List { json } => {
            let active_id = app.data().active_id.clone();
            let rows: Vec<ChallengeRow> = app
                .challenges()
                .map(|c| ChallengeRow {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    total_days: c.countdown.total_days,
                    start_date: c.countdown.start_date,
                    active: c.id == active_id,
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    let marker = if row.active { "*" } else { " " };
                    println!(
                        "{marker} {}  {} ({} days from {})",
                        row.id, row.name, row.total_days, row.start_date
                    );
                }
            }
        }
        ChallengeAction::New {
            name,
            total_days,
            start_date,
        } => {
            let config = Config::load()?;
            let name = name.unwrap_or(config.defaults.challenge_name);
            let countdown = Countdown {
                total_days: total_days.unwrap_or(config.defaults.total_days).max(1),
                start_date: start_date.unwrap_or_else(hard75_core::date::today),
            };
            let id = app.create_challenge(&name, None, Some(countdown))?;
            println!("Created challenge: {id}");
        }
        ChallengeAction::Select { id } => {
            if app.select_challenge(&id)? {
                println!("Active challenge: {}", app.active().name);
            } else {
                println!("No challenge with id {id}");
            }
        }
        ChallengeAction::Restart => {
            let id = app.restart_active()?;
            println!("Restarted as: {} ({id})", app.active().name);
        }
        ChallengeAction::Rename { name } => {
            app.rename_active(&name)?;
            println!("Renamed to: {}", app.active().name);
        }
    }
    Ok(())
}
