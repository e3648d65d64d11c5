use crate::core::{Audited, audit};
use crate::db::JobStore;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete `job_id`. The value is false when there was nothing to delete.
    pub fn apply(store: &JobStore, job_id: i64) -> AppResult<Audited<bool>> {
        if store.delete_job(job_id)? == 0 {
            return Ok(Audited::unlogged(false));
        }

        Ok(audit(
            store,
            true,
            "del",
            &format!("job #{}", job_id),
            &format!("Deleted job #{}", job_id),
        ))
    }
}
