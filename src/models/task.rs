use serde::Serialize;

pub const TASK_HEADERS: [&str; 3] = ["ID", "Task name", "Description"];

/// Read-only row of the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: i64,
    pub task_name: String,
    pub description: Option<String>,
}

impl Task {
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.task_name.clone(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}
