//! Domain model (task identity, validation settings, execution records).

pub mod execution;
pub mod task;
pub mod validate;

pub use execution::{ExecutionId, ExecutionRecord, ExecutionStatus};
pub use task::TaskName;
pub use validate::ValidateSpec;
