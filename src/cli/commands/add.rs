use crate::cli::parser::{Commands, JobArgs};
use crate::config::Config;
use crate::core::add::Saved;
use crate::db::JobStore;
use crate::errors::AppResult;
use crate::ui::dialog::{DialogMode, JobDialog, JobForm};
use crate::ui::messages::{success, warning};

fn form_from_args(args: &JobArgs) -> JobForm {
    JobForm {
        worker_id: args.worker.clone(),
        job_name: args.name.clone(),
        payment: args.payment.clone(),
        start_date: args.start.clone(),
        end_date: args.end.clone().unwrap_or_default(),
    }
}

/// Add a job, or overwrite one (`edit`). Goes through the same
/// validation as the interactive dialog.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (mode, fields) = match cmd {
        Commands::Add { fields } => (DialogMode::Create, fields),
        Commands::Edit { id, fields } => (DialogMode::Edit(*id), fields),
        _ => return Ok(()),
    };

    let dialog = JobDialog::prefilled(mode, form_from_args(fields));

    let store = JobStore::open(&cfg.database)?;

    let saved = dialog.commit(&store)?;
    if let Some(e) = saved.audit_error {
        warning(format!("Failed to write internal log: {}", e));
    }

    match saved.value {
        Saved::Created(id) => success(format!("Job #{} added.", id)),
        Saved::Updated(id) => success(format!("Job #{} updated.", id)),
        Saved::NoSuchJob(id) => warning(format!("Job #{} not found; nothing was updated.", id)),
    }

    store.close()
}
