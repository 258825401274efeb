//! # calctest-orchestration
//!
//! Concurrent worker execution, completion waiting, and result aggregation.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{ResultPresenter, ResultTable, TestReport};
pub use orchestrator::{select_best, TestOrchestrator, TestOrchestratorBuilder, WaitStrategy};
