use crate::config::Config;
use crate::db::JobStore;
use crate::errors::AppResult;
use crate::ui::{MainWindow, TerminalConsole};

/// Open the interactive window on stdin/stdout. A database that cannot be
/// opened stops here, before the window appears.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = JobStore::open(&cfg.database)?;

    let mut window = MainWindow::new(store, TerminalConsole::stdin(), &cfg.separator_char);
    window.run();
    window.close()
}
