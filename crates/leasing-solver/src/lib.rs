//! Rent-gap solving and stale-availability reconciliation for the leasing pipeline.

pub mod config;
pub mod error;
pub mod money;
pub mod telemetry;
pub mod workflows;

pub use money::Money;
