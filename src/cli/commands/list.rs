use crate::cli::commands::print_rows;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::JobStore;
use crate::errors::{AppResult, ValidationError};
use crate::ui::grid::ResultGrid;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { worker, json } = cmd {
        let worker_id = match worker {
            Some(w) => Some(
                w.trim()
                    .parse::<i64>()
                    .map_err(|_| ValidationError::InvalidInput("worker id"))?,
            ),
            None => None,
        };

        let store = JobStore::open(&cfg.database)?;

        let jobs = match worker_id {
            Some(w) => store.search_jobs_by_worker_id(w)?,
            None => store.list_all_jobs()?,
        };

        print_rows(&jobs, ResultGrid::jobs(&jobs), *json, &cfg.separator_char)?;
        store.close()?;
    }
    Ok(())
}
