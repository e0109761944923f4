//! Goal management commands for CLI.

use clap::Subcommand;
use hard75_core::App;

#[derive(Subcommand)]
pub enum GoalAction {
    /// List the live goal list
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a goal
    Add {
        /// Goal label
        label: String,
    },
    /// Remove a goal by id
    Remove {
        /// Goal ID
        id: String,
    },
    /// Replace the goal list with the default set
    Reset,
}

pub fn run(action: GoalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        GoalAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(app.active().goals.as_slice())?);
            } else {
                for goal in &app.active().goals {
                    println!("{}  {}", goal.id, goal.label);
                }
            }
        }
        GoalAction::Add { label } => {
            let id = app.add_goal(&label)?;
            println!("Added goal: {id}");
        }
        GoalAction::Remove { id } => {
            if app.remove_goal(&id)? {
                println!("Removed goal: {id}");
            } else {
                println!("No goal with id {id}");
            }
        }
        GoalAction::Reset => {
            app.reset_goals()?;
            println!("Goals reset to the default set");
        }
    }
    Ok(())
}
