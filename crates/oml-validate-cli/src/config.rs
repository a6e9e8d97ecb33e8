//! Build configuration (TOML).
//!
//! ```toml
//! [validator]
//! program = "oml-validate"
//!
//! [tasks.omlValidate]
//! input_catalog_path = "catalog.xml"
//! output_report_path = "build/report.txt"
//! ```
//!
//! Every key is optional except the task table entries themselves; an unset
//! path is simply omitted from the validator invocation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use oml_validate_core::domain::ValidateSpec;

/// Validator executable settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub program: PathBuf,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("oml-validate"),
        }
    }
}

/// Root of the build configuration file.
///
/// Tasks are keyed by name; a `BTreeMap` keeps runs deterministic (name
/// order) no matter how the file is laid out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default)]
    pub validator: ValidatorConfig,

    #[serde(default)]
    pub tasks: BTreeMap<String, ValidateSpec>,
}

impl BuildConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read configuration file {}", path.display()))?;
        let config: BuildConfig = toml::from_str(&text)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }
}
