//! Configuration management commands for CLI.

use clap::Subcommand;
use hard75_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the configuration
    Show,
    /// Set a config value by key (e.g. defaults.total_days)
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
