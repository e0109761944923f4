//! Challenge statistics commands for CLI.

use clap::Subcommand;
use hard75_core::App;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Active challenge statistics
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::open()?;

    match action {
        StatsAction::Show { json } => {
            let stats = app.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Challenge:       {}", app.active().name);
                println!("Days tracked:    {}", stats.days_tracked);
                println!("Current streak:  {}", stats.current_streak);
                println!("Best streak:     {}", stats.best_streak);
                println!("Completion rate: {}%", stats.completion_rate);
            }
        }
    }
    Ok(())
}
