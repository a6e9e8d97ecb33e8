use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::{ExecutionId, ExecutionRecord, ExecutionStatus, TaskName};
use crate::error::{OmlValidateError, error_chain};
use crate::ports::{Clock, SystemClock};

/// A runnable task.
///
/// Handlers are configured instances: whatever settings they need were
/// captured during the configuration phase, so execution takes no input.
#[async_trait]
pub trait TaskHandler: Send + Sync {
    async fn handle(&self) -> Result<(), OmlValidateError>;
}

/// Registry of handlers (task name -> handler).
///
/// Design:
/// - Built during initialization (mutable).
/// - Used during execution (immutable).
/// This avoids locks and keeps it simple.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<TaskName, Arc<dyn TaskHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under a task name. Names are unique.
    pub fn register(
        &mut self,
        name: TaskName,
        handler: Arc<dyn TaskHandler>,
    ) -> Result<(), OmlValidateError> {
        if self.handlers.contains_key(&name) {
            return Err(OmlValidateError::DuplicateHandler(name));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    pub fn get(&self, name: &TaskName) -> Option<&Arc<dyn TaskHandler>> {
        self.handlers.get(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Runtime executes registered tasks by name, one at a time.
///
/// Every execution gets an [`ExecutionRecord`]; a task failure ends up in
/// the record's status rather than in the returned error, so a run over
/// several tasks can keep going and report at the end. Only a name with no
/// registered handler is an error of the runtime itself.
pub struct Runtime {
    registry: Arc<HandlerRegistry>,
    clock: Arc<dyn Clock>,
}

impl Runtime {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self::with_clock(registry, Arc::new(SystemClock))
    }

    pub fn with_clock(registry: Arc<HandlerRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Execute one task.
    pub async fn execute(&self, name: &TaskName) -> Result<ExecutionRecord, OmlValidateError> {
        let handler = self
            .registry
            .get(name)
            .ok_or_else(|| OmlValidateError::HandlerNotFound(name.clone()))?;

        let id = ExecutionId::generate();
        let started_at = self.clock.now();
        info!(execution = %id, task = %name, "task started");

        let result = handler.handle().await;
        let finished_at = self.clock.now();

        let status = match result {
            Ok(()) => {
                info!(execution = %id, task = %name, "task succeeded");
                ExecutionStatus::Succeeded
            }
            Err(e) => {
                let rendered = error_chain(&e);
                error!(execution = %id, task = %name, error = %rendered, "task failed");
                ExecutionStatus::Failed { error: rendered }
            }
        };

        Ok(ExecutionRecord {
            id,
            task: name.clone(),
            started_at,
            finished_at,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use chrono::{TimeZone, Utc};

    struct OkHandler;

    #[async_trait]
    impl TaskHandler for OkHandler {
        async fn handle(&self) -> Result<(), OmlValidateError> {
            Ok(())
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl TaskHandler for FailingHandler {
        async fn handle(&self) -> Result<(), OmlValidateError> {
            Err(OmlValidateError::TaskExecutionFailed {
                task: TaskName::new("broken"),
                source: "catalog has unresolved references".into(),
            })
        }
    }

    #[tokio::test]
    async fn runtime_executes_registered_handler() {
        let mut reg = HandlerRegistry::new();
        reg.register(TaskName::new("ok"), Arc::new(OkHandler))
            .unwrap();

        let rt = Runtime::new(Arc::new(reg));
        let record = rt.execute(&TaskName::new("ok")).await.unwrap();
        assert!(record.succeeded());
    }

    #[tokio::test]
    async fn runtime_errors_when_handler_missing() {
        let rt = Runtime::new(Arc::new(HandlerRegistry::new()));

        let err = rt.execute(&TaskName::new("missing")).await.unwrap_err();
        assert!(err.to_string().contains("handler"));
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let mut reg = HandlerRegistry::new();
        reg.register(TaskName::new("ok"), Arc::new(OkHandler))
            .unwrap();
        let err = reg
            .register(TaskName::new("ok"), Arc::new(OkHandler))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[tokio::test]
    async fn failure_lands_in_the_record_with_the_cause_chain() {
        let mut reg = HandlerRegistry::new();
        reg.register(TaskName::new("broken"), Arc::new(FailingHandler))
            .unwrap();

        let rt = Runtime::new(Arc::new(reg));
        let record = rt.execute(&TaskName::new("broken")).await.unwrap();

        match &record.status {
            ExecutionStatus::Failed { error } => {
                assert!(error.contains("task 'broken' failed"));
                assert!(error.contains("unresolved references"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn record_timestamps_come_from_the_clock() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let mut reg = HandlerRegistry::new();
        reg.register(TaskName::new("ok"), Arc::new(OkHandler))
            .unwrap();

        let rt = Runtime::with_clock(Arc::new(reg), Arc::new(FixedClock(instant)));
        let record = rt.execute(&TaskName::new("ok")).await.unwrap();

        assert_eq!(record.started_at, instant);
        assert_eq!(record.finished_at, instant);
        assert_eq!(record.duration_ms(), 0);
    }
}
