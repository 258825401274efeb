//! Orchestration interfaces.

use std::time::Duration;

use serde::Serialize;

use calctest_core::latch::WaitOutcome;
use calctest_core::worker::WorkerResult;

/// Trait for presenting a finished run to the user.
pub trait ResultPresenter {
    /// Present the whole report.
    fn present_report(&self, report: &TestReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Calculator name to success rate, in insertion order.
///
/// Inserting a name that is already present replaces its rate and keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    entries: Vec<(String, f64)>,
}

impl ResultTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, rate: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = rate,
            None => self.entries.push((name, rate)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rate)| *rate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, rate)| (name.as_str(), *rate))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize)]
pub struct TestReport {
    /// Per-worker results in registration order.
    pub results: Vec<WorkerResult>,
    /// Success rates in registration order.
    pub table: ResultTable,
    /// Most accurate calculator (last one wins on ties).
    pub best: Option<String>,
    /// How the completion wait ended.
    pub wait: WaitOutcome,
    /// Wall time of the whole run.
    pub elapsed: Duration,
}

impl TestReport {
    /// Number of workers that did not publish in time.
    #[must_use]
    pub fn incomplete_count(&self) -> usize {
        self.results.iter().filter(|r| !r.completed).count()
    }
}
