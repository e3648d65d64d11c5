//! The main window: a results grid, a row selection and the job actions.

use crate::core::del::DeleteLogic;
use crate::db::JobStore;
use crate::errors::{AppResult, ValidationError};
use crate::models::{Job, Task};
use crate::ui::console::{Console, confirm};
use crate::ui::dialog::{DialogOutcome, JobDialog};
use crate::ui::grid::ResultGrid;
use crate::ui::messages::Level;

const TITLE: &str = "jobdesk: job management";
const MENU: &str = "[a]dd  [e]dit  [d]elete  [w] search by worker  [t] search task  \
                    [l]ist all  [s N] select row  [q]uit";

/// Rows currently on screen. Job and task rows never mix.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
    Jobs(Vec<Job>),
    Tasks(Vec<Task>),
}

impl ResultSet {
    pub fn grid(&self) -> ResultGrid {
        match self {
            ResultSet::Jobs(jobs) => ResultGrid::jobs(jobs),
            ResultSet::Tasks(tasks) => ResultGrid::tasks(tasks),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResultSet::Jobs(jobs) => jobs.len(),
            ResultSet::Tasks(tasks) => tasks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn job_id_at(&self, row: usize) -> Option<i64> {
        match self {
            ResultSet::Jobs(jobs) => jobs.get(row).map(|j| j.id),
            ResultSet::Tasks(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Edit,
    Delete,
    SearchWorker,
    SearchTask,
    ListAll,
    /// 1-based row number as typed
    Select(usize),
    Quit,
}

impl Action {
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next();

        let action = match (cmd.as_str(), arg) {
            ("a" | "add", None) => Action::Add,
            ("e" | "edit", None) => Action::Edit,
            ("d" | "del" | "delete", None) => Action::Delete,
            ("w" | "worker", None) => Action::SearchWorker,
            ("t" | "task", None) => Action::SearchTask,
            ("l" | "list", None) => Action::ListAll,
            ("s" | "select", Some(n)) => Action::Select(n.parse().ok()?),
            ("q" | "quit", None) => Action::Quit,
            _ => return None,
        };

        if parts.next().is_some() {
            return None;
        }
        Some(action)
    }
}

pub struct MainWindow<C: Console> {
    store: JobStore,
    console: C,
    separator: String,
    results: ResultSet,
    selected: Option<usize>,
}

impl<C: Console> MainWindow<C> {
    pub fn new(store: JobStore, console: C, separator: &str) -> Self {
        Self {
            store,
            console,
            separator: separator.to_string(),
            results: ResultSet::Jobs(Vec::new()),
            selected: None,
        }
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Event loop: show the full job list, then process actions until
    /// quit or end of input.
    pub fn run(&mut self) {
        self.dispatch(Action::ListAll);

        loop {
            self.console.heading(TITLE);
            let grid = self.results.grid().render(&self.separator, self.selected);
            self.console.show(&grid);
            self.console.show(MENU);

            let Some(line) = self.console.prompt("> ") else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match Action::parse(&line) {
                Some(Action::Quit) => break,
                Some(action) => self.dispatch(action),
                None => self
                    .console
                    .notify(Level::Warning, &format!("Unknown command '{}'", line.trim())),
            }
        }
    }

    /// Run one action. Errors abort the action, never the window.
    pub fn dispatch(&mut self, action: Action) {
        if let Err(e) = self.handle(action) {
            self.console.notify(Level::Error, &e.to_string());
        }
    }

    /// Teardown: release the database connection.
    pub fn close(self) -> AppResult<()> {
        self.store.close()
    }

    fn handle(&mut self, action: Action) -> AppResult<()> {
        match action {
            Action::Add => self.add_job(),
            Action::Edit => self.edit_job(),
            Action::Delete => self.delete_job(),
            Action::SearchWorker => self.search_jobs_by_worker_id(),
            Action::SearchTask => self.search_task_by_name(),
            Action::ListAll => self.show_jobs(),
            Action::Select(n) => {
                self.select(n);
                Ok(())
            }
            Action::Quit => Ok(()),
        }
    }

    fn display(&mut self, results: ResultSet) {
        self.results = results;
        self.selected = None;
    }

    fn show_jobs(&mut self) -> AppResult<()> {
        let jobs = self.store.list_all_jobs()?;
        self.display(ResultSet::Jobs(jobs));
        Ok(())
    }

    fn select(&mut self, row: usize) {
        if row == 0 || row > self.results.len() {
            self.console
                .notify(Level::Warning, &format!("No row {} in the current list.", row));
            return;
        }
        self.selected = Some(row - 1);
    }

    /// Id of the selected job row, warning when there is none.
    fn selected_job_id(&mut self) -> Option<i64> {
        let id = self.selected.and_then(|row| self.results.job_id_at(row));
        if id.is_none() {
            self.console
                .notify(Level::Warning, "Select a job row first (s N).");
        }
        id
    }

    fn add_job(&mut self) -> AppResult<()> {
        let outcome = JobDialog::create().run(&self.store, &mut self.console);
        if let DialogOutcome::Committed(_) = outcome {
            self.show_jobs()?;
        }
        Ok(())
    }

    fn edit_job(&mut self) -> AppResult<()> {
        let Some(job_id) = self.selected_job_id() else {
            return Ok(());
        };

        let mut dialog = JobDialog::edit(&self.store, job_id)?;
        if let DialogOutcome::Committed(_) = dialog.run(&self.store, &mut self.console) {
            self.show_jobs()?;
        }
        Ok(())
    }

    fn delete_job(&mut self) -> AppResult<()> {
        let Some(job_id) = self.selected_job_id() else {
            return Ok(());
        };

        let question = format!("Delete job #{}? This action is irreversible.", job_id);
        if !confirm(&mut self.console, &question) {
            self.console.notify(Level::Info, "Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&self.store, job_id)?;
        if let Some(e) = removed.audit_error {
            self.console
                .notify(Level::Warning, &format!("Failed to write internal log: {}", e));
        }
        if removed.value {
            self.console
                .notify(Level::Success, &format!("Job #{} deleted.", job_id));
        } else {
            self.console
                .notify(Level::Info, &format!("Job #{} no longer exists.", job_id));
        }
        self.show_jobs()
    }

    fn search_jobs_by_worker_id(&mut self) -> AppResult<()> {
        let Some(input) = self.console.prompt("Worker ID: ") else {
            return Ok(());
        };
        let input = input.trim();
        if input.is_empty() {
            return Ok(());
        }

        let Ok(worker_id) = input.parse::<i64>() else {
            let err = ValidationError::InvalidInput("worker id");
            self.console.notify(Level::Warning, &err.to_string());
            return Ok(());
        };

        let jobs = self.store.search_jobs_by_worker_id(worker_id)?;
        self.display(ResultSet::Jobs(jobs));
        Ok(())
    }

    fn search_task_by_name(&mut self) -> AppResult<()> {
        let Some(name) = self.console.prompt("Task name: ") else {
            return Ok(());
        };

        let tasks = self.store.search_task_by_name(&name)?;
        self.display(ResultSet::Tasks(tasks));
        Ok(())
    }
}
