//! The add/edit job dialog: five text fields, validated on save.

use crate::core::Audited;
use crate::core::add::{AddLogic, Saved};
use crate::db::JobStore;
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::{Job, NewJob};
use crate::ui::console::Console;
use crate::ui::messages::Level;
use crate::utils::date;
use crate::utils::formatting::payment_field;

/// Field value that empties a field when typed at its prompt. The job
/// name is free text and never treats it specially.
const CLEAR_MARK: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(i64),
}

impl DialogMode {
    pub fn target(&self) -> Option<i64> {
        match self {
            DialogMode::Create => None,
            DialogMode::Edit(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Committed(Saved),
    Cancelled,
}

/// Raw text of the five fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub worker_id: String,
    pub job_name: String,
    pub payment: String,
    pub start_date: String,
    pub end_date: String,
}

impl JobForm {
    pub fn from_job(job: &Job) -> Self {
        Self {
            worker_id: job.worker_id.to_string(),
            job_name: job.job_name.clone(),
            payment: payment_field(job.payment),
            start_date: date::to_display(job.start_date),
            end_date: job.end_date.map(date::to_display).unwrap_or_default(),
        }
    }

    /// Turn the fields into a storable job. Checks run in field order and
    /// stop at the first failure.
    pub fn validate(&self) -> Result<NewJob, ValidationError> {
        let worker_id = self
            .worker_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidInput("worker id"))?;

        let job_name = self.job_name.clone();

        let payment = self
            .payment
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or(ValidationError::InvalidInput("payment"))?;

        let start_date =
            date::parse_display_date(&self.start_date).ok_or(ValidationError::InvalidStartDate)?;

        let end_date = if self.end_date.trim().is_empty() {
            None
        } else {
            Some(date::parse_display_date(&self.end_date).ok_or(ValidationError::InvalidEndDate)?)
        };

        Ok(NewJob {
            worker_id,
            job_name,
            payment,
            start_date,
            end_date,
        })
    }
}

pub struct JobDialog {
    mode: DialogMode,
    form: JobForm,
}

impl JobDialog {
    pub fn create() -> Self {
        Self {
            mode: DialogMode::Create,
            form: JobForm::default(),
        }
    }

    /// A dialog whose fields were filled elsewhere (command-line flags).
    pub fn prefilled(mode: DialogMode, form: JobForm) -> Self {
        Self { mode, form }
    }

    /// Open in edit mode, pre-filled from the stored row. An id that no
    /// longer exists leaves the fields blank.
    pub fn edit(store: &JobStore, job_id: i64) -> AppResult<Self> {
        let form = store
            .get_job(job_id)?
            .map(|job| JobForm::from_job(&job))
            .unwrap_or_default();

        Ok(Self {
            mode: DialogMode::Edit(job_id),
            form,
        })
    }

    pub fn mode(&self) -> DialogMode {
        self.mode
    }

    pub fn form(&self) -> &JobForm {
        &self.form
    }

    pub fn title(&self) -> String {
        match self.mode {
            DialogMode::Create => "Add job".to_string(),
            DialogMode::Edit(id) => format!("Edit job #{}", id),
        }
    }

    /// Validate and write. Nothing reaches the store unless every field
    /// passes.
    pub fn commit(&self, store: &JobStore) -> AppResult<Audited<Saved>> {
        let job = self.form.validate()?;
        AddLogic::apply(store, self.mode.target(), &job)
    }

    /// Drive the dialog until the job is saved or the user backs out.
    /// A failed save keeps the dialog open with the typed values.
    pub fn run<C: Console + ?Sized>(&mut self, store: &JobStore, console: &mut C) -> DialogOutcome {
        loop {
            console.heading(&self.title());

            if !self.fill(console) {
                return DialogOutcome::Cancelled;
            }

            let answer = console.prompt("Save this job? [Y/n]: ");
            match answer.map(|s| s.trim().to_lowercase()).as_deref() {
                None | Some("n" | "no") => return DialogOutcome::Cancelled,
                _ => {}
            }

            match self.commit(store) {
                Ok(Audited { value: saved, audit_error }) => {
                    if let Some(e) = audit_error {
                        console.notify(
                            Level::Warning,
                            &format!("Failed to write internal log: {}", e),
                        );
                    }
                    if self.ends_before_start() {
                        console.notify(Level::Warning, "End date is before the start date.");
                    }
                    let (level, msg) = match saved {
                        Saved::Created(id) => (Level::Success, format!("Job #{} added.", id)),
                        Saved::Updated(id) => (Level::Success, format!("Job #{} updated.", id)),
                        Saved::NoSuchJob(id) => (
                            Level::Warning,
                            format!("Job #{} no longer exists; nothing was updated.", id),
                        ),
                    };
                    console.notify(level, &msg);
                    return DialogOutcome::Committed(saved);
                }
                Err(AppError::Validation(e)) => {
                    console.notify(Level::Warning, &e.to_string());
                }
                Err(e) => {
                    console.notify(Level::Error, &format!("Failed to save job: {}", e));
                }
            }
        }
    }

    fn ends_before_start(&self) -> bool {
        self.form
            .validate()
            .map(|job| job.ends_before_start())
            .unwrap_or(false)
    }

    /// Prompt every field once. Enter keeps the current value, `-`
    /// clears it. The job name is taken exactly as typed. Returns false
    /// when input runs out.
    fn fill<C: Console + ?Sized>(&mut self, console: &mut C) -> bool {
        let fields: [(&str, bool, &mut String); 5] = [
            ("Worker ID", false, &mut self.form.worker_id),
            ("Job name", true, &mut self.form.job_name),
            ("Payment", false, &mut self.form.payment),
            ("Start date (dd-mm-yyyy)", false, &mut self.form.start_date),
            ("End date (dd-mm-yyyy, optional)", false, &mut self.form.end_date),
        ];

        for (label, free_text, value) in fields {
            let prompt = if value.is_empty() {
                format!("{}: ", label)
            } else {
                format!("{} [{}]: ", label, value)
            };

            let Some(input) = console.prompt(&prompt) else {
                return false;
            };

            if free_text {
                if !input.is_empty() {
                    *value = input;
                }
                continue;
            }

            let input = input.trim();
            if input == CLEAR_MARK {
                value.clear();
            } else if !input.is_empty() {
                *value = input.to_string();
            }
        }

        true
    }
}
