use crate::errors::{AppError, AppResult};
use crate::utils::path::{app_dir, resolve_db_path};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Environment variable overriding the configured database path.
pub const DB_ENV_VAR: &str = "JOBDESK_DB";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.jobdesk`)
    pub fn config_dir() -> PathBuf {
        app_dir()
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jobdesk.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("jobdesk.sqlite")
    }

    /// Load configuration from file, or defaults if not found.
    /// `JOBDESK_DB` takes precedence over the file's `database` entry.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            Config::default()
        };

        if let Ok(db) = env::var(DB_ENV_VAR)
            && !db.trim().is_empty()
        {
            cfg.database = db;
        }

        Ok(cfg)
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was set up.
    pub fn init_all(db_name: &str, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        let db_path = resolve_db_path(db_name, &dir);

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                separator_char: default_separator_char(),
            };
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
