pub mod add;
pub mod config;
pub mod del;
pub mod log;

use crate::db::JobStore;
use crate::errors::AppError;

/// Outcome of a write plus the failure of its audit line, if any.
/// The write stands either way; the caller decides how to report it.
#[derive(Debug)]
pub struct Audited<T> {
    pub value: T,
    pub audit_error: Option<AppError>,
}

impl<T> Audited<T> {
    fn unlogged(value: T) -> Self {
        Self {
            value,
            audit_error: None,
        }
    }
}

fn audit<T>(
    store: &JobStore,
    value: T,
    operation: &str,
    target: &str,
    message: &str,
) -> Audited<T> {
    Audited {
        value,
        audit_error: store.audit(operation, target, message).err(),
    }
}
