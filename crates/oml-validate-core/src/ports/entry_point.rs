//! Validator entry point port.

use crate::error::BoxError;

/// Entry point of the external catalog validator.
///
/// The contract mirrors a command-line `main`: `-i <path>` selects the
/// catalog input, `-o <path>` selects the report output, and a validation
/// failure is signalled by returning an error. The vector is opaque on this
/// side of the seam; any grammar beyond `-i`/`-o` is the implementation's
/// business.
///
/// Invocation is synchronous: the task action that drives it has no
/// suspension points.
pub trait ValidatorEntryPoint: Send + Sync {
    fn run(&self, args: &[String]) -> Result<(), BoxError>;
}
