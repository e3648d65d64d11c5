#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jd() -> Command {
    cargo_bin_cmd!("jobdesk")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobdesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema without touching the user's config file
pub fn init_db(db_path: &str) {
    jd().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a job through the CLI
pub fn add_job(db_path: &str, worker: &str, name: &str, start: &str, end: Option<&str>) {
    let mut cmd = jd();
    cmd.args([
        "--db", db_path, "add", "--worker", worker, "--name", name, "--payment", "150.00",
        "--start", start,
    ]);
    if let Some(e) = end {
        cmd.args(["--end", e]);
    }
    cmd.assert().success();
}

/// Tasks are read-only for the application, so tests insert them directly
pub fn seed_tasks(db_path: &str, names: &[&str]) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    for n in names {
        conn.execute("INSERT INTO tasks (task_name) VALUES (?1)", [n])
            .expect("insert task");
    }
}
