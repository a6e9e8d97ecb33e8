//! Ports: trait seams to external collaborators.
//!
//! The validator itself lives outside this workspace; everything we know
//! about it is the [`ValidatorEntryPoint`] contract.

pub mod clock;
pub mod entry_point;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::entry_point::ValidatorEntryPoint;
