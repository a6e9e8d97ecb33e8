//! Execution records: one entry per task run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

use super::task::TaskName;

/// Identifier of a single task execution, used for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExecutionId(Ulid);

impl ExecutionId {
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exec-{}", self.0)
    }
}

/// Terminal status of one execution.
///
/// There is no partial success: a task either completed or failed with the
/// rendered cause chain of its error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionStatus {
    Succeeded,
    Failed { error: String },
}

/// Record of one task execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub id: ExecutionId,
    pub task: TaskName,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    #[serde(flatten)]
    pub status: ExecutionStatus,
}

impl ExecutionRecord {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, ExecutionStatus::Succeeded)
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_ids_have_prefix_and_sort_by_creation() {
        let a = ExecutionId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = ExecutionId::generate();

        assert!(a.to_string().starts_with("exec-"));
        assert!(a < b);
    }

    #[test]
    fn failed_record_carries_the_error() {
        let now = Utc::now();
        let record = ExecutionRecord {
            id: ExecutionId::generate(),
            task: TaskName::new("omlValidate"),
            started_at: now,
            finished_at: now,
            status: ExecutionStatus::Failed {
                error: "boom".to_string(),
            },
        };
        assert!(!record.succeeded());
        assert_eq!(record.duration_ms(), 0);
    }
}
