//! The catalog-validation task.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{TaskName, ValidateSpec};
use crate::error::OmlValidateError;
use crate::ports::ValidatorEntryPoint;
use crate::runtime::TaskHandler;

/// Build-facing adapter around the validator entry point.
///
/// Configuration gives it two optional paths; running it turns them into
/// the validator's argument vector and delegates. Any error the entry point
/// raises is reported as a failure of this task with the original error as
/// the cause. No retries, no recovery.
pub struct OmlValidateTask {
    name: TaskName,
    spec: ValidateSpec,
    entry_point: Arc<dyn ValidatorEntryPoint>,
}

impl OmlValidateTask {
    pub fn new(
        name: TaskName,
        spec: ValidateSpec,
        entry_point: Arc<dyn ValidatorEntryPoint>,
    ) -> Self {
        Self {
            name,
            spec,
            entry_point,
        }
    }

    pub fn name(&self) -> &TaskName {
        &self.name
    }

    pub fn spec(&self) -> &ValidateSpec {
        &self.spec
    }

    /// Run the validation action once.
    ///
    /// Synchronous end to end: build the argument vector, invoke the entry
    /// point, wrap any failure.
    pub fn run(&self) -> Result<(), OmlValidateError> {
        let args = self.spec.to_args();
        debug!(task = %self.name, ?args, "invoking validator entry point");
        self.entry_point
            .run(&args)
            .map_err(|source| OmlValidateError::TaskExecutionFailed {
                task: self.name.clone(),
                source,
            })
    }
}

#[async_trait]
impl TaskHandler for OmlValidateTask {
    async fn handle(&self) -> Result<(), OmlValidateError> {
        self.run()
    }
}
