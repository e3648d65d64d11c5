use crate::utils::date;
use crate::utils::formatting::format_payment;
use chrono::NaiveDate;
use serde::Serialize;

/// Column headers of the job grid, in cell order.
pub const JOB_HEADERS: [&str; 6] = [
    "ID",
    "Worker ID",
    "Job name",
    "Payment",
    "Start date",
    "End date",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: i64,                       // ⇔ jobs.id (INTEGER PK AUTOINCREMENT)
    pub worker_id: i64,                // ⇔ jobs.worker_id
    pub job_name: String,              // ⇔ jobs.job_name
    pub payment: f64,                  // ⇔ jobs.payment (REAL)
    pub start_date: NaiveDate,         // ⇔ jobs.start_date (TEXT "YYYY-MM-DD")
    pub end_date: Option<NaiveDate>,   // ⇔ jobs.end_date (TEXT or NULL)
}

/// Validated field values for an insert or a full overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub worker_id: i64,
    pub job_name: String,
    pub payment: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl Job {
    /// Display strings for the grid, positionally matching `JOB_HEADERS`.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.worker_id.to_string(),
            self.job_name.clone(),
            format_payment(self.payment),
            date::to_display(self.start_date),
            self.end_date
                .map(date::to_display)
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl NewJob {
    /// True when both dates are present and the range runs backwards.
    /// Not rejected anywhere, only reported.
    pub fn ends_before_start(&self) -> bool {
        matches!(self.end_date, Some(end) if end < self.start_date)
    }
}
