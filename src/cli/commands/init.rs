use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::JobStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with the jobs, tasks and log tables
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = Config::init_all(&cfg.database, cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing jobdesk…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_str);

    let store = JobStore::open(&db_str)?;

    // internal log, non blocking
    if let Err(e) = store.audit("init", "", &format!("Database initialized at {}", db_str)) {
        warning(format!("Failed to write internal log: {}", e));
    }

    store.close()?;

    success(format!("Database initialized at {}", db_str));
    Ok(())
}
