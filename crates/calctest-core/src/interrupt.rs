//! Interrupt signal for blocking waits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag raised from outside (e.g. a Ctrl+C handler) to abandon a
/// blocking wait.
///
/// Raising the signal never stops a running worker; it only releases the
/// thread waiting for workers.
///
/// # Example
/// ```
/// use calctest_core::interrupt::InterruptSignal;
///
/// let signal = InterruptSignal::new();
/// assert!(!signal.is_raised());
///
/// signal.clone().raise();
/// assert!(signal.is_raised());
/// ```
#[derive(Clone, Debug, Default)]
pub struct InterruptSignal {
    raised: Arc<AtomicBool>,
}

impl InterruptSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Idempotent.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Whether the signal has been raised.
    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}
