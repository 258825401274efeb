//! Countdown latch used to wait for worker completion.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use serde::Serialize;

use crate::constants::WAIT_POLL_INTERVAL;
use crate::interrupt::InterruptSignal;

/// How a wait on a [`CountdownLatch`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitOutcome {
    /// The count reached zero.
    Completed,
    /// The deadline passed first.
    TimedOut,
    /// The interrupt signal was raised first.
    Interrupted,
}

impl fmt::Display for WaitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Completed => "completed",
            Self::TimedOut => "timed out",
            Self::Interrupted => "interrupted",
        };
        f.write_str(s)
    }
}

/// Releases waiters once `count_down` has been called `count` times.
pub struct CountdownLatch {
    remaining: Mutex<usize>,
    released: Condvar,
}

impl CountdownLatch {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            remaining: Mutex::new(count),
            released: Condvar::new(),
        }
    }

    /// Record one completion. Extra calls after zero are ignored.
    pub fn count_down(&self) {
        let mut remaining = self.remaining.lock();
        if *remaining > 0 {
            *remaining -= 1;
            if *remaining == 0 {
                self.released.notify_all();
            }
        }
    }

    /// Completions still outstanding.
    #[must_use]
    pub fn count(&self) -> usize {
        *self.remaining.lock()
    }

    /// Guard that counts the latch down when dropped, including on unwind.
    #[must_use]
    pub fn guard(self: &Arc<Self>) -> CountdownGuard {
        CountdownGuard {
            latch: Arc::clone(self),
        }
    }

    /// Block until the count reaches zero or `interrupt` is raised.
    pub fn wait(&self, interrupt: &InterruptSignal) -> WaitOutcome {
        self.wait_until(None, interrupt)
    }

    /// Block for at most `timeout`. A timeout too large to represent as
    /// an instant waits without a deadline.
    pub fn wait_timeout(&self, timeout: Duration, interrupt: &InterruptSignal) -> WaitOutcome {
        self.wait_until(Instant::now().checked_add(timeout), interrupt)
    }

    fn wait_until(&self, deadline: Option<Instant>, interrupt: &InterruptSignal) -> WaitOutcome {
        let mut remaining = self.remaining.lock();
        loop {
            if *remaining == 0 {
                return WaitOutcome::Completed;
            }
            if interrupt.is_raised() {
                return WaitOutcome::Interrupted;
            }
            let slice = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return WaitOutcome::TimedOut;
                    }
                    (deadline - now).min(WAIT_POLL_INTERVAL)
                }
                None => WAIT_POLL_INTERVAL,
            };
            self.released.wait_for(&mut remaining, slice);
        }
    }
}

/// See [`CountdownLatch::guard`].
pub struct CountdownGuard {
    latch: Arc<CountdownLatch>,
}

impl Drop for CountdownGuard {
    fn drop(&mut self) {
        self.latch.count_down();
    }
}
