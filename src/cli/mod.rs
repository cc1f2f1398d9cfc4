//! CLI commands
//!
//! Command implementations for the `tx-puller` binary.

mod progress;
mod run;
mod style;

pub use run::{report_failure, run_inputs, run_issue};
