//! Default harness configuration and exit codes.

use std::time::Duration;

/// Number of equations generated per run.
pub const DEFAULT_TEST_COUNT: usize = 20;

/// Smallest operand value.
pub const DEFAULT_OPERAND_MIN: f64 = 0.0;

/// Largest operand value.
pub const DEFAULT_OPERAND_MAX: f64 = 10.0;

/// Probability that the `noisy` calculator perturbs a result.
pub const NOISY_FAULT_RATE: f64 = 0.25;

/// Interval at which latch waiters re-check the interrupt signal.
pub const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Width of the right-aligned `(correct)` / `(error)` column in worker logs.
pub const STATUS_COLUMN_WIDTH: usize = 25;

/// Default calculator line-up: display name and calculator kind.
pub const DEFAULT_LINEUP: [(&str, &str); 5] = [
    ("Crystal 1", "native"),
    ("Crystal 2", "f32"),
    ("Crystal 3", "noisy"),
    ("Crystal 4", "zero"),
    ("Crystal 5", "native"),
];

/// Process exit codes.
pub mod exit_codes {
    /// Run completed and the report was printed.
    pub const SUCCESS: i32 = 0;
    /// Unexpected failure.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (bounds, counts, calculator specs).
    pub const ERROR_CONFIG: i32 = 4;
}
