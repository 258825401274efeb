//! # calctest-core
//!
//! Core library for the calctest floating-point calculator harness.
//! Provides the equation model and generator, the reference evaluator,
//! the `Calculator` trait with a few sample implementations, and the
//! worker task that scores one calculator against a shared batch.

pub mod calculator;
pub mod calculators;
pub mod constants;
pub mod equation;
pub mod error;
pub mod interrupt;
pub mod latch;
pub mod registry;
pub mod worker;

// Re-exports
pub use calculator::Calculator;
pub use constants::{
    exit_codes, DEFAULT_OPERAND_MAX, DEFAULT_OPERAND_MIN, DEFAULT_TEST_COUNT, NOISY_FAULT_RATE,
};
pub use equation::{generate_equations, Equation, OperandSampler, Operator};
pub use error::CalcTestError;
pub use interrupt::InterruptSignal;
pub use latch::{CountdownLatch, WaitOutcome};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use worker::{WorkerResult, WorkerTask};
