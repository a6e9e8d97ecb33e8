//! Concrete tasks.

pub mod validate;

pub use self::validate::OmlValidateTask;
