//! Clock - the time source for autoplay.
//!
//! Engines never sleep or spawn timers. They read `now()` from a clock and
//! the host polls them. `SystemClock` is monotonic wall time;
//! `ManualClock` only moves when told to, which keeps tests deterministic.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::state::clock::{Clock, ManualClock};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! clock.advance(Duration::from_secs(15));
//! assert_eq!(clock.now(), Duration::from_secs(15));
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time since the clock's origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

// =============================================================================
// SYSTEM CLOCK
// =============================================================================

/// Real monotonic time, measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

// =============================================================================
// MANUAL CLOCK
// =============================================================================

/// Simulated time. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
