use crate::cli::commands::print_rows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::JobStore;
use crate::errors::AppResult;
use crate::ui::grid::ResultGrid;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tasks { name, json } = cmd {
        let store = JobStore::open(&cfg.database)?;
        let tasks = store.search_task_by_name(name.as_deref().unwrap_or(""))?;

        print_rows(&tasks, ResultGrid::tasks(&tasks), *json, &cfg.separator_char)?;
        store.close()?;
    }
    Ok(())
}
