//! Validation task settings and their command-line form.

use serde::{Deserialize, Serialize};

/// Settings of one catalog-validation task.
///
/// Both fields are optional. They are populated during the configuration
/// phase, read once when the task action runs, and never mutated by the
/// adapter. An unset field contributes nothing to the argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateSpec {
    /// Path to the catalog descriptor to validate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_catalog_path: Option<String>,

    /// Path the validation report is written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_report_path: Option<String>,
}

impl ValidateSpec {
    /// Render the settings as the validator's argument vector.
    ///
    /// Ordering is stable: input options precede output options. No other
    /// flags are emitted, and paths are passed through untouched (no
    /// canonicalization, no existence checks).
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(input) = &self.input_catalog_path {
            args.push("-i".to_string());
            args.push(input.clone());
        }
        if let Some(output) = &self.output_report_path {
            args.push("-o".to_string());
            args.push(output.clone());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        Some("/tmp/cat.xml"),
        Some("/tmp/r.txt"),
        &["-i", "/tmp/cat.xml", "-o", "/tmp/r.txt"]
    )]
    #[case(Some("catalog.xml"), None, &["-i", "catalog.xml"])]
    #[case(None, Some("report.txt"), &["-o", "report.txt"])]
    #[case(None, None, &[])]
    fn args_follow_configured_fields(
        #[case] input: Option<&str>,
        #[case] output: Option<&str>,
        #[case] expected: &[&str],
    ) {
        let spec = ValidateSpec {
            input_catalog_path: input.map(str::to_string),
            output_report_path: output.map(str::to_string),
        };
        assert_eq!(spec.to_args(), expected);
    }

    #[test]
    fn unset_fields_stay_unset_through_serde() {
        let spec: ValidateSpec =
            serde_json::from_str(r#"{ "input_catalog_path": "catalog.xml" }"#).unwrap();
        assert_eq!(spec.input_catalog_path.as_deref(), Some("catalog.xml"));
        assert_eq!(spec.output_report_path, None);

        let s = serde_json::to_string(&spec).unwrap();
        let back: ValidateSpec = serde_json::from_str(&s).unwrap();
        assert_eq!(back, spec);
    }
}
