use crate::core::{Audited, audit};
use crate::db::JobStore;
use crate::errors::AppResult;
use crate::models::NewJob;
use crate::utils::date;

/// What a save actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Created(i64),
    Updated(i64),
    /// Edit of an id that no longer exists: nothing was written.
    NoSuchJob(i64),
}

/// High-level business logic for creating or overwriting a job.
pub struct AddLogic;

impl AddLogic {
    /// Insert `job` when `target` is `None`, otherwise overwrite `target`.
    pub fn apply(
        store: &JobStore,
        target: Option<i64>,
        job: &NewJob,
    ) -> AppResult<Audited<Saved>> {
        match target {
            None => {
                let id = store.add_job(job)?;
                let target = format!("job #{}", id);
                Ok(audit(store, Saved::Created(id), "add", &target, &describe(job)))
            }
            Some(id) => {
                if store.edit_job(id, job)? == 0 {
                    return Ok(Audited::unlogged(Saved::NoSuchJob(id)));
                }
                let target = format!("job #{}", id);
                Ok(audit(store, Saved::Updated(id), "edit", &target, &describe(job)))
            }
        }
    }
}

fn describe(job: &NewJob) -> String {
    let end = job
        .end_date
        .map(date::to_storage)
        .unwrap_or_else(|| "open".to_string());
    format!(
        "worker={} name='{}' payment={} period={}..{}",
        job.worker_id,
        job.job_name,
        job.payment,
        date::to_storage(job.start_date),
        end
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::log::load_log;
    use chrono::NaiveDate;

    fn new_job(worker_id: i64) -> NewJob {
        NewJob {
            worker_id,
            job_name: "Paint fence".into(),
            payment: 150.0,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: None,
        }
    }

    #[test]
    fn create_then_overwrite_is_audited() {
        let store = JobStore::in_memory().unwrap();

        let Saved::Created(id) = AddLogic::apply(&store, None, &new_job(7)).unwrap().value else {
            panic!("expected a new job");
        };
        assert_eq!(
            AddLogic::apply(&store, Some(id), &new_job(8)).unwrap().value,
            Saved::Updated(id)
        );

        let ops: Vec<String> = load_log(store.conn())
            .unwrap()
            .into_iter()
            .map(|r| r.operation)
            .collect();
        assert_eq!(ops, vec!["add", "edit"]);
        assert_eq!(store.get_job(id).unwrap().unwrap().worker_id, 8);
    }

    #[test]
    fn editing_a_missing_job_writes_nothing() {
        let store = JobStore::in_memory().unwrap();
        assert_eq!(
            AddLogic::apply(&store, Some(99), &new_job(1)).unwrap().value,
            Saved::NoSuchJob(99)
        );
        assert!(load_log(store.conn()).unwrap().is_empty());
        assert!(store.list_all_jobs().unwrap().is_empty());
    }

    #[test]
    fn audit_failure_is_returned_and_the_job_is_kept() {
        let store = JobStore::in_memory().unwrap();
        store.conn().execute_batch("DROP TABLE log;").unwrap();

        let saved = AddLogic::apply(&store, None, &new_job(7)).unwrap();

        assert_eq!(saved.value, Saved::Created(1));
        assert!(matches!(saved.audit_error, Some(crate::errors::AppError::Db(_))));
        assert_eq!(store.list_all_jobs().unwrap().len(), 1);
    }
}
