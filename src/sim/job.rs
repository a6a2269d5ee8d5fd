use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PRIORITY;
use crate::core::{Priority, ProcId, Process, Ticks};

pub type JobId = ProcId;

/// Static description of one process, as read from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub arrival: Ticks,
    pub burst: Ticks,
    #[serde(default = "default_priority")]
    pub priority: Priority,
}

fn default_priority() -> Priority {
    DEFAULT_PRIORITY
}

impl Job {
    pub fn new(id: JobId, arrival: Ticks, burst: Ticks, priority: Priority) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority,
        }
    }
}

impl From<&Job> for Process {
    fn from(job: &Job) -> Self {
        Process::new(job.id, job.arrival, job.burst, job.priority)
    }
}
