pub mod job;
pub mod task;

pub use job::{JOB_HEADERS, Job, NewJob};
pub use task::{TASK_HEADERS, Task};
