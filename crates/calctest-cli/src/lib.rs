//! # calctest-cli
//!
//! Console and JSON presentation of calculator test reports.

pub mod output;
pub mod presenter;

pub use presenter::{CLIResultPresenter, JsonResultPresenter};
