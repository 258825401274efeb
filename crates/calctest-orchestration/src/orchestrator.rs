//! Core orchestration: concurrent worker execution and result aggregation.

use std::any::Any;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;

use calctest_core::calculator::Calculator;
use calctest_core::constants::{DEFAULT_OPERAND_MAX, DEFAULT_OPERAND_MIN, DEFAULT_TEST_COUNT};
use calctest_core::equation::{generate_equations, Equation, OperandSampler};
use calctest_core::error::CalcTestError;
use calctest_core::interrupt::InterruptSignal;
use calctest_core::latch::{CountdownLatch, WaitOutcome};
use calctest_core::worker::{WorkerResult, WorkerTask};

use crate::interfaces::{ResultTable, TestReport};

/// How the orchestrator waits for its workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitStrategy {
    /// Wait until every worker has counted the latch down.
    #[default]
    Barrier,
    /// Wait at most this long; late workers are reported incomplete.
    Timeout(Duration),
}

/// Builder for [`TestOrchestrator`].
pub struct TestOrchestratorBuilder {
    test_count: usize,
    min: f64,
    max: f64,
    sampler: OperandSampler,
    strategy: WaitStrategy,
    threads: usize,
    calculators: Vec<Arc<dyn Calculator>>,
}

impl TestOrchestratorBuilder {
    #[must_use]
    pub fn test_count(mut self, test_count: usize) -> Self {
        self.test_count = test_count;
        self
    }

    #[must_use]
    pub fn operand_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    #[must_use]
    pub fn sampler(mut self, sampler: OperandSampler) -> Self {
        self.sampler = sampler;
        self
    }

    #[must_use]
    pub fn strategy(mut self, strategy: WaitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Worker pool size. `0` means one thread per calculator.
    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub fn calculator(mut self, calculator: Arc<dyn Calculator>) -> Self {
        self.calculators.push(calculator);
        self
    }

    #[must_use]
    pub fn calculators(mut self, calculators: impl IntoIterator<Item = Arc<dyn Calculator>>) -> Self {
        self.calculators.extend(calculators);
        self
    }

    /// Validate the configuration and start the worker pool.
    pub fn build(self) -> Result<TestOrchestrator, CalcTestError> {
        if self.test_count == 0 {
            return Err(CalcTestError::Config("test count must be at least 1".into()));
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(CalcTestError::Config(format!(
                "operand bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min > self.max {
            return Err(CalcTestError::Config(format!(
                "operand minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        // the sampler scales the span up slightly, so keep headroom below f64::MAX
        if !((self.max - self.min) * 2.0).is_finite() {
            return Err(CalcTestError::Config(format!(
                "operand range [{}, {}] is too wide to sample",
                self.min, self.max
            )));
        }
        if self.calculators.is_empty() {
            return Err(CalcTestError::Config("no calculators to test".into()));
        }

        let threads = if self.threads == 0 {
            self.calculators.len()
        } else {
            self.threads
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("calctest-worker-{i}"))
            .panic_handler(log_worker_panic)
            .build()
            .map_err(|e| CalcTestError::Pool(e.to_string()))?;

        Ok(TestOrchestrator {
            test_count: self.test_count,
            min: self.min,
            max: self.max,
            sampler: self.sampler,
            strategy: self.strategy,
            calculators: self.calculators,
            pool,
        })
    }
}

#[allow(clippy::needless_pass_by_value)]
fn log_worker_panic(payload: Box<dyn Any + Send>) {
    let message = payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(%message, "worker panicked, its result will be reported incomplete");
}

/// Runs every calculator against one shared equation batch.
pub struct TestOrchestrator {
    test_count: usize,
    min: f64,
    max: f64,
    sampler: OperandSampler,
    strategy: WaitStrategy,
    calculators: Vec<Arc<dyn Calculator>>,
    pool: rayon::ThreadPool,
}

impl TestOrchestrator {
    #[must_use]
    pub fn builder() -> TestOrchestratorBuilder {
        TestOrchestratorBuilder {
            test_count: DEFAULT_TEST_COUNT,
            min: DEFAULT_OPERAND_MIN,
            max: DEFAULT_OPERAND_MAX,
            sampler: OperandSampler::default(),
            strategy: WaitStrategy::default(),
            threads: 0,
            calculators: Vec::new(),
        }
    }

    #[must_use]
    pub fn test_count(&self) -> usize {
        self.test_count
    }

    #[must_use]
    pub fn strategy(&self) -> WaitStrategy {
        self.strategy
    }

    /// Generate a fresh batch from `rng` and run every calculator on it.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R, interrupt: &InterruptSignal) -> TestReport {
        let equations: Arc<[Equation]> =
            generate_equations(self.test_count, self.min, self.max, self.sampler, rng).into();
        self.run_batch(equations, interrupt)
    }

    /// Run every calculator on `equations`.
    pub fn run_batch(&self, equations: Arc<[Equation]>, interrupt: &InterruptSignal) -> TestReport {
        let start = Instant::now();
        let worker_count = self.calculators.len();
        tracing::info!(
            workers = worker_count,
            equations = equations.len(),
            strategy = ?self.strategy,
            "starting calculator tests"
        );

        let latch = Arc::new(CountdownLatch::new(worker_count));
        let (tx, rx) = crossbeam_channel::unbounded::<(usize, WorkerResult)>();

        for (index, calculator) in self.calculators.iter().enumerate() {
            let task = WorkerTask::new(
                Arc::clone(calculator),
                Arc::clone(&equations),
                self.test_count,
            );
            let tx = tx.clone();
            let guard = latch.guard();
            self.pool.spawn(move || {
                let _guard = guard;
                let result = task.run();
                // the receiver is gone once a bounded wait has given up
                let _ = tx.send((index, result));
            });
        }
        drop(tx);

        let wait = match self.strategy {
            WaitStrategy::Barrier => latch.wait(interrupt),
            WaitStrategy::Timeout(timeout) => latch.wait_timeout(timeout, interrupt),
        };
        match wait {
            WaitOutcome::Completed => {}
            WaitOutcome::TimedOut => tracing::warn!(
                pending = latch.count(),
                "timed out waiting for workers, reporting partial results"
            ),
            WaitOutcome::Interrupted => tracing::warn!(
                pending = latch.count(),
                "interrupted while waiting for workers, reporting partial results"
            ),
        }

        let mut slots: Vec<Option<WorkerResult>> = (0..worker_count).map(|_| None).collect();
        for (index, result) in rx.try_iter() {
            slots[index] = Some(result);
        }

        let results: Vec<WorkerResult> = slots
            .into_iter()
            .zip(&self.calculators)
            .map(|(slot, calculator)| {
                slot.unwrap_or_else(|| WorkerResult::incomplete(calculator.name(), self.test_count))
            })
            .collect();

        let mut table = ResultTable::new();
        for result in &results {
            table.insert(&result.calculator, result.success_rate);
        }
        let best = select_best(&results).map(ToString::to_string);
        let elapsed = start.elapsed();

        tracing::info!(best = best.as_deref().unwrap_or(""), ?elapsed, %wait, "calculator tests finished");

        TestReport {
            results,
            table,
            best,
            wait,
            elapsed,
        }
    }
}

/// Pick the most accurate calculator.
///
/// Scans in order from a running maximum of `0.0`; a rate greater than
/// or equal to the maximum takes the lead, so the last of several equal
/// rates wins.
#[must_use]
pub fn select_best(results: &[WorkerResult]) -> Option<&str> {
    let mut best = None;
    let mut max_rate = 0.0;
    for result in results {
        if result.success_rate >= max_rate {
            max_rate = result.success_rate;
            best = Some(result.calculator.as_str());
        }
    }
    best
}
