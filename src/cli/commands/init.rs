use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default due-day table
///  - the data directory for local section CSVs
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing labhub…");

    let cfg = Config::init_all(cli.data_dir.clone())?;

    success(format!("Config file : {}", Config::config_file().display()));
    success(format!("Data dir    : {}", cfg.data_path().display()));
    println!("🎉 labhub initialization completed! Drop `<section>.csv` files into the data dir.");
    Ok(())
}
