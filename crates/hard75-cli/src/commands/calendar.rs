//! Calendar projection commands for CLI.

use clap::Subcommand;
use hard75_core::{App, DayStatus};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Project the countdown window to day statuses
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

const ROW_WIDTH: usize = 15;

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::open()?;

    match action {
        CalendarAction::Show { json } => {
            let view = app.calendar();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
                return Ok(());
            }

            for row in view.cells.chunks(ROW_WIDTH) {
                let line: String = row
                    .iter()
                    .map(|cell| match cell.status {
                        DayStatus::Complete => '#',
                        DayStatus::Partial => '+',
                        DayStatus::Empty => '.',
                    })
                    .collect();
                println!("{line}");
            }
            println!("{}/{} complete", view.completed_days, view.total_days);
        }
    }
    Ok(())
}
