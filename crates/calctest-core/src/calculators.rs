//! Sample calculator implementations.
//!
//! These stand in for the real devices under test so the harness can be
//! exercised end to end: one exact, one lossy, one broken, one flaky.

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::calculator::Calculator;

/// Bit-exact double-precision arithmetic.
pub struct NativeCalculator {
    name: String,
}

impl NativeCalculator {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Calculator for NativeCalculator {
    fn name(&self) -> &str {
        &self.name
    }

    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }
}

/// Narrows operands to `f32`, computes, and widens the result back.
pub struct SinglePrecisionCalculator {
    name: String,
}

impl SinglePrecisionCalculator {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[allow(clippy::cast_possible_truncation)]
impl Calculator for SinglePrecisionCalculator {
    fn name(&self) -> &str {
        &self.name
    }

    fn add(&self, a: f64, b: f64) -> f64 {
        f64::from(a as f32 + b as f32)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        f64::from(a as f32 - b as f32)
    }
}

/// Always answers `0.0`.
pub struct ZeroCalculator {
    name: String,
}

impl ZeroCalculator {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Calculator for ZeroCalculator {
    fn name(&self) -> &str {
        &self.name
    }

    fn add(&self, _a: f64, _b: f64) -> f64 {
        0.0
    }

    fn subtract(&self, _a: f64, _b: f64) -> f64 {
        0.0
    }
}

/// Native arithmetic that flips the lowest mantissa bit of the result
/// with probability `fault_rate`.
pub struct NoisyCalculator {
    name: String,
    fault_rate: f64,
    rng: Mutex<ChaCha8Rng>,
}

impl NoisyCalculator {
    /// `fault_rate` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(name: impl Into<String>, fault_rate: f64, seed: u64) -> Self {
        Self {
            name: name.into(),
            fault_rate: fault_rate.clamp(0.0, 1.0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn perturb(&self, value: f64) -> f64 {
        if self.rng.lock().gen_bool(self.fault_rate) {
            f64::from_bits(value.to_bits() ^ 1)
        } else {
            value
        }
    }
}

impl Calculator for NoisyCalculator {
    fn name(&self) -> &str {
        &self.name
    }

    fn add(&self, a: f64, b: f64) -> f64 {
        self.perturb(a + b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        self.perturb(a - b)
    }
}
