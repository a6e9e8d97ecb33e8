//! omlv entry point.
//!
//! Initializes logging, loads the build configuration, and drives the
//! task runtime.

mod args;
mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use oml_validate_core::domain::{ExecutionRecord, ExecutionStatus, TaskName, ValidateSpec};
use oml_validate_core::impls::ProcessEntryPoint;
use oml_validate_core::runtime::{HandlerRegistry, Runtime};
use oml_validate_core::tasks::OmlValidateTask;

use crate::args::{Cli, Command};
use crate::config::BuildConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level.
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| cli.log_level.clone());
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter)))
        .init();

    match cli.command {
        Command::Run {
            config,
            tasks,
            summary_json,
        } => run_tasks(&config, &tasks, summary_json).await,
        Command::Validate {
            input_catalog_path,
            output_report_path,
            validator,
        } => validate_once(input_catalog_path, output_report_path, &validator),
    }
}

/// Execute configured tasks sequentially and report at the end.
async fn run_tasks(
    config_path: &Path,
    selected: &[String],
    summary_json: bool,
) -> anyhow::Result<()> {
    let config = BuildConfig::load(config_path)?;
    info!(
        config = %config_path.display(),
        tasks = config.tasks.len(),
        "loaded build configuration"
    );

    for name in selected {
        if !config.tasks.contains_key(name) {
            bail!("no task named '{name}' in {}", config_path.display());
        }
    }

    let entry_point = Arc::new(ProcessEntryPoint::new(&config.validator.program));

    let mut registry = HandlerRegistry::new();
    for (name, spec) in &config.tasks {
        let task = OmlValidateTask::new(
            TaskName::new(name.clone()),
            spec.clone(),
            entry_point.clone(),
        );
        let name = task.name().clone();
        registry.register(name, Arc::new(task))?;
    }
    let runtime = Runtime::new(Arc::new(registry));

    let names: Vec<String> = if selected.is_empty() {
        config.tasks.keys().cloned().collect()
    } else {
        selected.to_vec()
    };

    let mut records: Vec<ExecutionRecord> = Vec::new();
    for name in &names {
        let record = runtime.execute(&TaskName::new(name.clone())).await?;
        records.push(record);
    }

    if summary_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            match &record.status {
                ExecutionStatus::Succeeded => {
                    println!("{}  ok  ({} ms)", record.task, record.duration_ms());
                }
                ExecutionStatus::Failed { error } => {
                    println!("{}  FAILED  {error}", record.task);
                }
            }
        }
    }

    let failed = records.iter().filter(|r| !r.succeeded()).count();
    if failed > 0 {
        bail!("{failed} of {} task(s) failed", records.len());
    }
    Ok(())
}

/// One-off validation, no configuration file involved.
fn validate_once(
    input_catalog_path: Option<String>,
    output_report_path: Option<String>,
    validator: &Path,
) -> anyhow::Result<()> {
    let spec = ValidateSpec {
        input_catalog_path,
        output_report_path,
    };
    let task = OmlValidateTask::new(
        TaskName::new("validate"),
        spec,
        Arc::new(ProcessEntryPoint::new(validator)),
    );
    task.run()?;
    Ok(())
}
