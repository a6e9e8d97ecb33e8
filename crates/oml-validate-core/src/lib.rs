//! oml-validate-core
//!
//! Building blocks for running OML catalog-validation tasks:
//! - **domain**: task identity, validation settings, execution records
//! - **ports**: seams to external collaborators (validator entry point, clock)
//! - **impls**: production implementations (process-spawning entry point)
//! - **runtime**: handler registry and task execution
//! - **tasks**: the catalog-validation task adapter

pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod runtime;
pub mod tasks;

pub use error::{BoxError, OmlValidateError};
