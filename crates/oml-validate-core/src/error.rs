use thiserror::Error;

use crate::domain::TaskName;

/// Failure raised by an external collaborator, kept as an opaque cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum OmlValidateError {
    /// The validator entry point raised an error. The original error is
    /// carried unchanged as the cause; the message identifies the task.
    #[error("task '{task}' failed")]
    TaskExecutionFailed {
        task: TaskName,
        #[source]
        source: BoxError,
    },

    #[error("handler not found for task={0}")]
    HandlerNotFound(TaskName),

    #[error("duplicate handler for task={0}")]
    DuplicateHandler(TaskName),
}

/// Render an error and its cause chain as a single line.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
