use crate::errors::AppResult;
use crate::models::{Job, NewJob, Task};
use crate::utils::date;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const JOB_COLUMNS: &str = "id, worker_id, job_name, payment, start_date, end_date";

pub fn insert_job(conn: &Connection, job: &NewJob) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO jobs (worker_id, job_name, payment, start_date, end_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            job.worker_id,
            job.job_name,
            job.payment,
            date::to_storage(job.start_date),
            job.end_date.map(date::to_storage),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite every mutable column of `id`. Returns rows affected (0 when absent).
pub fn update_job(conn: &Connection, id: i64, job: &NewJob) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE jobs
         SET worker_id = ?1, job_name = ?2, payment = ?3, start_date = ?4, end_date = ?5
         WHERE id = ?6",
        params![
            job.worker_id,
            job.job_name,
            job.payment,
            date::to_storage(job.start_date),
            job.end_date.map(date::to_storage),
            id,
        ],
    )?;
    Ok(n)
}

pub fn delete_job(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM jobs WHERE id = ?1", params![id])?;
    Ok(n)
}

pub fn load_job(conn: &Connection, id: i64) -> AppResult<Option<Job>> {
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?1");
    let job = conn.query_row(&sql, params![id], map_job_row).optional()?;
    Ok(job)
}

pub fn load_jobs_by_worker(conn: &Connection, worker_id: i64) -> AppResult<Vec<Job>> {
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE worker_id = ?1 ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![worker_id], map_job_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_jobs(conn: &Connection) -> AppResult<Vec<Job>> {
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_job_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Tasks whose name contains `name`; an empty `name` matches every task.
pub fn search_tasks(conn: &Connection, name: &str) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, task_name, description FROM tasks
         WHERE task_name LIKE ?1
         ORDER BY id ASC",
    )?;
    let pattern = format!("%{}%", name);
    let rows = stmt.query_map(params![pattern], |row| {
        Ok(Task {
            id: row.get("id")?,
            task_name: row.get("task_name")?,
            description: row.get("description")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_job_row(row: &Row) -> Result<Job> {
    let start_str: String = row.get("start_date")?;
    let end_str: Option<String> = row.get("end_date")?;

    let start_date = stored_date(4, &start_str)?;
    let end_date = match end_str.as_deref() {
        None | Some("") => None,
        Some(s) => Some(stored_date(5, s)?),
    };

    Ok(Job {
        id: row.get("id")?,
        worker_id: row.get("worker_id")?,
        job_name: row.get("job_name")?,
        payment: row.get("payment")?,
        start_date,
        end_date,
    })
}

fn stored_date(idx: usize, s: &str) -> Result<chrono::NaiveDate> {
    date::parse_storage_date(s).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("invalid stored date '{}'", s).into(),
        )
    })
}
