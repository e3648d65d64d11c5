use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the tables the application works with, if missing.
/// Existing tables are left untouched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id   INTEGER NOT NULL,
            job_name    TEXT NOT NULL,
            payment     REAL NOT NULL,
            start_date  TEXT NOT NULL,
            end_date    TEXT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_jobs_worker ON jobs(worker_id);

        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            task_name   TEXT NOT NULL,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
