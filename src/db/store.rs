//! The single SQLite connection every screen and command works through.

use crate::db::initialize::init_db;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::{Job, NewJob, Task};
use rusqlite::Connection;
use std::path::Path;

/// Owns the database connection. Every call auto-commits on its own.
pub struct JobStore {
    conn: Connection,
}

impl JobStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Insert a job and return its generated id.
    pub fn add_job(&self, job: &NewJob) -> AppResult<i64> {
        queries::insert_job(&self.conn, job)
    }

    /// Overwrite the job `job_id`. A missing id is not an error: 0 is returned.
    pub fn edit_job(&self, job_id: i64, job: &NewJob) -> AppResult<usize> {
        queries::update_job(&self.conn, job_id, job)
    }

    /// Delete the job `job_id`, returning rows removed (0 when absent).
    pub fn delete_job(&self, job_id: i64) -> AppResult<usize> {
        queries::delete_job(&self.conn, job_id)
    }

    pub fn get_job(&self, job_id: i64) -> AppResult<Option<Job>> {
        queries::load_job(&self.conn, job_id)
    }

    pub fn search_jobs_by_worker_id(&self, worker_id: i64) -> AppResult<Vec<Job>> {
        queries::load_jobs_by_worker(&self.conn, worker_id)
    }

    pub fn search_task_by_name(&self, task_name: &str) -> AppResult<Vec<Task>> {
        queries::search_tasks(&self.conn, task_name)
    }

    pub fn list_all_jobs(&self) -> AppResult<Vec<Job>> {
        queries::load_all_jobs(&self.conn)
    }

    /// Append an entry to the internal `log` table.
    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::ttlog(&self.conn, operation, target, message)
    }

    /// Release the connection. Consuming `self` rules out a second close.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))
    }
}
