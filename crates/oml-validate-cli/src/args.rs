//! Command-line surface of `omlv`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "omlv", version, about = "Run OML catalog-validation tasks")]
pub struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute tasks declared in the build configuration.
    Run {
        /// Build configuration file.
        #[arg(long, default_value = "oml-tasks.toml")]
        config: PathBuf,

        /// Names of tasks to run; all configured tasks when empty.
        tasks: Vec<String>,

        /// Print the run summary as JSON.
        #[arg(long)]
        summary_json: bool,
    },

    /// Run a single validation without a configuration file.
    Validate {
        /// Path to the catalog descriptor to validate.
        #[arg(short = 'i', long)]
        input_catalog_path: Option<String>,

        /// Path the validation report is written to.
        #[arg(short = 'o', long)]
        output_report_path: Option<String>,

        /// Validator executable to invoke.
        #[arg(long, default_value = "oml-validate")]
        validator: PathBuf,
    },
}
