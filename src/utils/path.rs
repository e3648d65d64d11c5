//! Path utilities: locate the app directory, expand ~, resolve DB paths.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Directory holding the config file and the default database.
/// Falls back to the current directory when no home is known.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jobdesk")
}

/// Resolve a user-supplied DB name: `~/` is expanded, absolute paths
/// are kept, bare names land inside `base`.
pub fn resolve_db_path(name: &str, base: &Path) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { base.join(p) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_names_land_in_base() {
        let base = Path::new("/srv/jobdesk");
        assert_eq!(
            resolve_db_path("jobs.sqlite", base),
            PathBuf::from("/srv/jobdesk/jobs.sqlite")
        );
    }

    #[test]
    fn absolute_paths_are_kept() {
        let base = Path::new("/srv/jobdesk");
        assert_eq!(
            resolve_db_path("/tmp/x.sqlite", base),
            PathBuf::from("/tmp/x.sqlite")
        );
    }
}
