pub mod add;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod tasks;
pub mod ui;

use crate::errors::{AppError, AppResult};
use crate::ui::grid::ResultGrid;
use serde::Serialize;

/// Print rows either as pretty JSON or as the same grid the window shows.
fn print_rows<T: Serialize>(rows: &[T], grid: ResultGrid, json: bool, sep: &str) -> AppResult<()> {
    if json {
        let out = serde_json::to_string_pretty(rows).map_err(|e| AppError::Other(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", grid.render(sep, None));
    }
    Ok(())
}
