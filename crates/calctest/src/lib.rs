//! calctest library: application logic for the calculator test harness.

pub mod app;
pub mod config;
pub mod errors;
