//! Calculator factory.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::calculator::Calculator;
use crate::calculators::{
    NativeCalculator, NoisyCalculator, SinglePrecisionCalculator, ZeroCalculator,
};
use crate::constants::NOISY_FAULT_RATE;
use crate::error::CalcTestError;

/// Factory trait for creating named calculator instances by kind.
pub trait CalculatorFactory: Send + Sync {
    /// Create a calculator of `kind` displayed as `name`.
    fn create(&self, name: &str, kind: &str) -> Result<Arc<dyn Calculator>, CalcTestError>;

    /// List all available calculator kinds.
    fn available(&self) -> Vec<&str>;
}

/// Factory for the built-in sample calculators.
///
/// Every `noisy` instance gets its own seed derived from the factory seed
/// and the creation order, so a line-up built in the same order is
/// reproducible.
pub struct DefaultFactory {
    seed: u64,
    created: AtomicU64,
}

impl DefaultFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            created: AtomicU64::new(0),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn create(&self, name: &str, kind: &str) -> Result<Arc<dyn Calculator>, CalcTestError> {
        let ordinal = self.created.fetch_add(1, Ordering::Relaxed);
        match kind.to_ascii_lowercase().as_str() {
            "native" | "exact" => Ok(Arc::new(NativeCalculator::new(name))),
            "f32" | "single" => Ok(Arc::new(SinglePrecisionCalculator::new(name))),
            "zero" => Ok(Arc::new(ZeroCalculator::new(name))),
            "noisy" => Ok(Arc::new(NoisyCalculator::new(
                name,
                NOISY_FAULT_RATE,
                self.seed.wrapping_add(ordinal),
            ))),
            _ => Err(CalcTestError::UnknownCalculator(kind.to_string())),
        }
    }

    fn available(&self) -> Vec<&str> {
        vec!["native", "f32", "zero", "noisy"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_each_kind() {
        let factory = DefaultFactory::new();
        for kind in factory.available() {
            let calc = factory.create("X", kind).unwrap();
            assert_eq!(calc.name(), "X");
        }
    }

    #[test]
    fn factory_accepts_aliases_and_case() {
        let factory = DefaultFactory::new();
        assert!(factory.create("a", "NATIVE").is_ok());
        assert!(factory.create("b", "exact").is_ok());
        assert!(factory.create("c", "single").is_ok());
    }

    #[test]
    fn factory_native_is_exact() {
        let factory = DefaultFactory::new();
        let calc = factory.create("Crystal 1", "native").unwrap();
        assert_eq!(calc.add(0.1, 0.2), 0.1 + 0.2);
    }

    #[test]
    fn factory_unknown_kind() {
        let factory = DefaultFactory::new();
        assert!(matches!(
            factory.create("X", "abacus"),
            Err(CalcTestError::UnknownCalculator(kind)) if kind == "abacus"
        ));
    }

    #[test]
    fn noisy_instances_reproducible_per_factory_seed() {
        let a = DefaultFactory::with_seed(5).create("n", "noisy").unwrap();
        let b = DefaultFactory::with_seed(5).create("n", "noisy").unwrap();
        for i in 0..64 {
            let x = f64::from(i) / 3.0;
            assert_eq!(a.add(x, x).to_bits(), b.add(x, x).to_bits());
        }
    }
}
