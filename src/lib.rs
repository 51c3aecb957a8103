//! labhub library root.
//! Exposes the CLI parser, the high-level run() function, and the schedule
//! reasoning modules used by the commands.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::ViewContext;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &ViewContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Sections => cli::commands::sections::handle(ctx),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, ctx),
        Commands::Announce { .. } => cli::commands::announce::handle(&cli.command, ctx),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, ctx),
        Commands::Reminders { .. } => cli::commands::reminders::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once; `config` and `init` must survive a broken file
    let cfg = match cli.command {
        Commands::Config { .. } | Commands::Init => Config::load_or_default(),
        _ => Config::load()?,
    };

    // 3️⃣ apply command-line overrides for this view
    let ctx = ViewContext::new(&cli, cfg);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &ctx)
}
