//! Per-calculator worker task.
//!
//! A worker scores one calculator against the shared equation batch. All
//! of its mutable state (success counter, log buffer) is local to `run`;
//! only the finished [`WorkerResult`] leaves the worker.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::calculator::Calculator;
use crate::constants::STATUS_COLUMN_WIDTH;
use crate::equation::Equation;

/// Outcome of one worker.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerResult {
    /// Calculator display name.
    pub calculator: String,
    /// Equations answered bit-exactly.
    pub success_count: usize,
    /// Configured test count (shared denominator).
    pub total_tests: usize,
    /// `success_count / total_tests`.
    pub success_rate: f64,
    /// One header line plus one line per equation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub log: String,
    /// Wall time spent in the worker loop.
    pub duration: Duration,
    /// `false` when the worker had not published before the wait ended.
    pub completed: bool,
}

impl WorkerResult {
    /// Placeholder for a worker that never published.
    #[must_use]
    pub fn incomplete(calculator: &str, total_tests: usize) -> Self {
        Self {
            calculator: calculator.to_string(),
            success_count: 0,
            total_tests,
            success_rate: 0.0,
            log: String::new(),
            duration: Duration::ZERO,
            completed: false,
        }
    }
}

/// Format one log line: `a op b = expected` followed by the status,
/// right-aligned.
#[must_use]
pub fn format_log_line(equation: &Equation, expected: f64, correct: bool) -> String {
    let status = if correct { "(correct)" } else { "(error)" };
    let width = STATUS_COLUMN_WIDTH;
    format!("{equation} = {expected:?}{status:>width$}")
}

/// Scores one calculator against the shared batch.
pub struct WorkerTask {
    calculator: Arc<dyn Calculator>,
    equations: Arc<[Equation]>,
    total_tests: usize,
}

impl WorkerTask {
    #[must_use]
    pub fn new(
        calculator: Arc<dyn Calculator>,
        equations: Arc<[Equation]>,
        total_tests: usize,
    ) -> Self {
        Self {
            calculator,
            equations,
            total_tests,
        }
    }

    /// Name of the calculator under test.
    #[must_use]
    pub fn name(&self) -> &str {
        self.calculator.name()
    }

    /// Evaluate every equation through the calculator, sequentially.
    pub fn run(&self) -> WorkerResult {
        let start = Instant::now();
        let calculator = self.calculator.as_ref();

        let mut log = format!("Calculator {}\n", calculator.name());
        let mut success_count = 0usize;

        for equation in self.equations.iter() {
            let expected = equation.expected();
            let actual = equation
                .operator
                .apply(calculator, equation.first, equation.second);
            let correct = actual == expected;
            if correct {
                success_count += 1;
            }
            log.push_str(&format_log_line(equation, expected, correct));
            log.push('\n');
        }

        let success_rate = if self.total_tests == 0 {
            0.0
        } else {
            success_count as f64 / self.total_tests as f64
        };
        let duration = start.elapsed();

        tracing::debug!(
            calculator = calculator.name(),
            success_count,
            total = self.total_tests,
            ?duration,
            "worker finished"
        );

        WorkerResult {
            calculator: calculator.name().to_string(),
            success_count,
            total_tests: self.total_tests,
            success_rate,
            log,
            duration,
            completed: true,
        }
    }
}
