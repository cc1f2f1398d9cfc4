//! Shared test helpers

pub mod fixtures;
pub mod mock_platform;
pub mod mock_runner;
