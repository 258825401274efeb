//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use calctest_core::constants::{DEFAULT_OPERAND_MAX, DEFAULT_OPERAND_MIN, DEFAULT_TEST_COUNT};
use calctest_core::equation::OperandSampler;
use calctest_core::error::CalcTestError;
use calctest_orchestration::orchestrator::WaitStrategy;

/// calctest: scores calculator implementations on random floating-point
/// addition and subtraction.
///
/// With no flags, five calculators ("Crystal 1" to "Crystal 5") are tested
/// on 20 equations with operands in [0, 10].
#[derive(Parser, Debug)]
#[command(name = "calctest", version, about)]
pub struct AppConfig {
    /// Number of equations every calculator is tested on.
    #[arg(short = 'n', long = "tests", default_value_t = DEFAULT_TEST_COUNT, env = "CALCTEST_TESTS")]
    pub tests: usize,

    /// Smallest operand value.
    #[arg(long, default_value_t = DEFAULT_OPERAND_MIN, env = "CALCTEST_MIN", allow_negative_numbers = true)]
    pub min: f64,

    /// Largest operand value.
    #[arg(long, default_value_t = DEFAULT_OPERAND_MAX, env = "CALCTEST_MAX", allow_negative_numbers = true)]
    pub max: f64,

    /// Seed for equations and noisy calculators (random if omitted).
    #[arg(long, env = "CALCTEST_SEED")]
    pub seed: Option<u64>,

    /// Calculator to test as NAME=KIND (repeatable, in registration order).
    #[arg(short = 'c', long = "calculator", value_name = "NAME=KIND")]
    pub calculators: Vec<String>,

    /// Stop waiting for workers after this long (e.g. "800ms", "5s").
    /// Without it every worker is awaited.
    #[arg(long, env = "CALCTEST_TIMEOUT")]
    pub timeout: Option<String>,

    /// Worker pool size (0 = one thread per calculator).
    #[arg(long, default_value_t = 0, env = "CALCTEST_THREADS")]
    pub threads: usize,

    /// Draw operands with the historical `u * ((max - min + 1) + min)` formula.
    #[arg(long)]
    pub legacy_operands: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// List available calculator kinds and exit.
    #[arg(long)]
    pub list: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (omit per-calculator logs).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Seed to use for this run.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    #[must_use]
    pub fn sampler(&self) -> OperandSampler {
        if self.legacy_operands {
            OperandSampler::Legacy
        } else {
            OperandSampler::Uniform
        }
    }

    /// Barrier unless a timeout was given.
    pub fn wait_strategy(&self) -> Result<WaitStrategy, CalcTestError> {
        match &self.timeout {
            None => Ok(WaitStrategy::Barrier),
            Some(s) => parse_duration(s)
                .map(WaitStrategy::Timeout)
                .ok_or_else(|| CalcTestError::Config(format!("invalid timeout {s:?}"))),
        }
    }
}

/// Parse a duration string like "800ms", "30s", "5m", "1h".
/// A bare number is taken as milliseconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_millis(n))
    }
}
