//! Autoplay Timer - a polled interval timer.
//!
//! One timer per carousel. The timer never fires on its own: the host calls
//! `poll(now)` and gets back how many intervals have elapsed since the last
//! poll. Each elapsed interval is one `next()` for the carousel.
//!
//! # Pattern
//!
//! - `start` replaces any running timer, so there is never more than one
//! - `cancel` is safe to call when nothing is running
//! - A late poll reports every missed interval at once, without looping

use std::time::Duration;

/// Handle to a running interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayHandle {
    delay: Duration,
    next_due: Duration,
}

impl AutoplayHandle {
    pub fn next_due(&self) -> Duration {
        self.next_due
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoplayTimer {
    handle: Option<AutoplayHandle>,
}

impl AutoplayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an interval of `delay` beginning at `now`.
    ///
    /// Any running interval is cancelled first. A zero delay, or one whose
    /// first deadline is past the end of time, leaves the timer stopped and
    /// returns false.
    pub fn start(&mut self, delay: Duration, now: Duration) -> bool {
        self.cancel();
        if delay.is_zero() {
            return false;
        }
        let Some(next_due) = now.checked_add(delay) else {
            return false;
        };
        self.handle = Some(AutoplayHandle { delay, next_due });
        true
    }

    pub fn cancel(&mut self) {
        self.handle = None;
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<AutoplayHandle> {
        self.handle
    }

    /// Number of intervals that elapsed up to `now`, saturating at
    /// `u32::MAX`. The next deadline stays on the original phase.
    pub fn poll(&mut self, now: Duration) -> u32 {
        let Some(handle) = self.handle.as_mut() else {
            return 0;
        };
        if handle.next_due > now {
            return 0;
        }

        let delay = handle.delay.as_nanos();
        let late = (now - handle.next_due).as_nanos();
        let fired = late / delay + 1;

        let into_interval = duration_from_nanos(late % delay);
        handle.next_due = now
            .checked_add(handle.delay - into_interval)
            .unwrap_or(Duration::MAX);

        u32::try_from(fired).unwrap_or(u32::MAX)
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
