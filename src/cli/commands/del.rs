use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::JobStore;
use crate::errors::AppResult;
use crate::ui::console::{TerminalConsole, confirm};
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        //
        // Confirmation prompt
        //
        if !*yes {
            let prompt = format!("Delete job #{}? This action is irreversible.", id);
            let mut console = TerminalConsole::stdin();
            if !confirm(&mut console, &prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let store = JobStore::open(&cfg.database)?;

        let removed = DeleteLogic::apply(&store, *id)?;
        if let Some(e) = removed.audit_error {
            warning(format!("Failed to write internal log: {}", e));
        }

        if removed.value {
            success(format!("Job #{} has been deleted.", id));
        } else {
            info(format!("Job #{} does not exist.", id));
        }

        store.close()?;
    }

    Ok(())
}
