//! jobdesk library root.
//! Exposes the CLI parser, the high-level run() function and the
//! data access, logic and presentation modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::resolve_db_path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let default = Commands::Ui;
    let command = cli.command.as_ref().unwrap_or(&default);

    match command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Ui => cli::commands::ui::handle(cfg),
        Commands::Add { .. } | Commands::Edit { .. } => cli::commands::add::handle(command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(command, cfg),
        Commands::List { .. } => cli::commands::list::handle(command, cfg),
        Commands::Tasks { .. } => cli::commands::tasks::handle(command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line DB override wins over file and environment
    if let Some(custom_db) = &cli.db {
        cfg.database = resolve_db_path(custom_db, &Config::config_dir())
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
