//! Backup and restore commands for CLI.

use clap::Subcommand;
use hard75_core::{App, DataStore};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum DataAction {
    /// Write a backup file
    Export {
        /// Output path (default: 75hard-backup-<today>.json in the
        /// current directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace all data with a backup file
    Import {
        /// Backup file path
        path: PathBuf,
    },
    /// Print the data directory
    Path,
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DataAction::Export { output } => {
            let app = App::open()?;
            let path = output.unwrap_or_else(|| {
                PathBuf::from(DataStore::export_file_name(hard75_core::date::today()))
            });
            std::fs::write(&path, app.export_json()?)?;
            println!("Exported to {}", path.display());
        }
        DataAction::Import { path } => {
            let mut app = App::open()?;
            let raw = std::fs::read_to_string(&path)?;
            app.import(&raw)?;
            println!(
                "Imported {} challenge(s); active: {}",
                app.data().challenges.len(),
                app.active().name
            );
        }
        DataAction::Path => {
            println!("{}", hard75_core::storage::data_dir()?.display());
        }
    }
    Ok(())
}
