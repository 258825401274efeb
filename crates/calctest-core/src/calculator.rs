//! The calculator interface under test.

/// A calculator implementation whose arithmetic is being measured.
///
/// Implementations are shared across the worker pool as
/// `Arc<dyn Calculator>`, and each worker calls one instance from a single
/// thread. Implementations are expected to return a value for every call.
pub trait Calculator: Send + Sync {
    /// Display name of this calculator instance.
    fn name(&self) -> &str;

    /// Compute `a + b`.
    fn add(&self, a: f64, b: f64) -> f64;

    /// Compute `a - b`.
    fn subtract(&self, a: f64, b: f64) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Doubling;

    impl Calculator for Doubling {
        fn name(&self) -> &str {
            "Doubling"
        }
        fn add(&self, a: f64, b: f64) -> f64 {
            2.0 * (a + b)
        }
        fn subtract(&self, a: f64, b: f64) -> f64 {
            2.0 * (a - b)
        }
    }

    #[test]
    fn trait_object_dispatch() {
        let calc: Arc<dyn Calculator> = Arc::new(Doubling);
        assert_eq!(calc.name(), "Doubling");
        assert_eq!(calc.add(1.0, 2.0), 6.0);
        assert_eq!(calc.subtract(1.0, 2.0), -2.0);
    }
}
