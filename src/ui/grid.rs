//! The results grid: headers plus positional display strings.

use crate::models::{JOB_HEADERS, Job, TASK_HEADERS, Task};
use crate::utils::table::Table;

pub const EMPTY_TEXT: &str = "No records found.";

/// What the window's table currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultGrid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ResultGrid {
    /// Column count comes from the first row; headers are applied
    /// positionally. With no rows the grid stays empty, so nothing is
    /// inferred from a row that does not exist: zero rows, zero columns.
    pub fn from_rows(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        let Some(first) = rows.first() else {
            return Self::default();
        };

        let headers = (0..first.len())
            .map(|i| headers.get(i).copied().unwrap_or("").to_string())
            .collect();

        Self { headers, rows }
    }

    pub fn jobs(jobs: &[Job]) -> Self {
        Self::from_rows(&JOB_HEADERS, jobs.iter().map(Job::cells).collect())
    }

    pub fn tasks(tasks: &[Task]) -> Self {
        Self::from_rows(&TASK_HEADERS, tasks.iter().map(Task::cells).collect())
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Render with a leading 1-based row number column; the selected
    /// row is marked with `*`.
    pub fn render(&self, separator: &str, selected: Option<usize>) -> String {
        if self.rows.is_empty() {
            return format!("{}\n", EMPTY_TEXT);
        }

        let mut headers: Vec<&str> = vec!["#"];
        headers.extend(self.headers.iter().map(String::as_str));

        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let marker = if selected == Some(i) { "*" } else { "" };
                let mut out = vec![format!("{}{}", marker, i + 1)];
                out.extend(row.iter().cloned());
                out
            })
            .collect();

        Table::fitted(&headers, &rows).render(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn job(id: i64, end: Option<NaiveDate>) -> Job {
        Job {
            id,
            worker_id: 7,
            job_name: "Paint fence".into(),
            payment: 150.0,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: end,
        }
    }

    #[test]
    fn empty_result_renders_without_columns() {
        let grid = ResultGrid::jobs(&[]);
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 0);
        assert_eq!(grid.render("-", None), "No records found.\n");
    }

    #[test]
    fn job_grid_uses_the_six_job_headers() {
        let grid = ResultGrid::jobs(&[job(1, None), job(2, NaiveDate::from_ymd_opt(2024, 6, 30))]);
        assert_eq!(grid.column_count(), 6);
        assert_eq!(grid.headers()[2], "Job name");
        assert_eq!(grid.cell(0, 5), Some("-"));
        assert_eq!(grid.cell(1, 5), Some("30-06-2024"));
        assert_eq!(grid.cell(2, 0), None);
    }

    #[test]
    fn task_grid_has_its_own_headers() {
        let grid = ResultGrid::tasks(&[Task {
            id: 4,
            task_name: "Weld gate".into(),
            description: None,
        }]);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.headers()[1], "Task name");
        assert_eq!(grid.cell(0, 2), Some(""));
    }

    #[test]
    fn selected_row_is_marked() {
        let out = ResultGrid::jobs(&[job(1, None), job(2, None)]).render("-", Some(1));
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[2].starts_with("1 "));
        assert!(lines[3].starts_with("*2 "));
    }
}
