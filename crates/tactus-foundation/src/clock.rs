//! Time sources for stamping pointer samples.
//!
//! The engine works in whole milliseconds on a monotonic timeline. Only
//! differences between timestamps are meaningful; the origin is whatever the
//! clock was created with.

use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

pub trait Clock {
    /// Milliseconds elapsed on this clock's monotonic timeline.
    fn now_ms(&self) -> u64;
}

/// Monotonic wall clock measured from its creation.
///
/// Uses `web_time::Instant`, which is `std::time::Instant` on native targets and
/// `performance.now()` in the browser.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually driven clock.
///
/// Clones share the same underlying time, so a test can hand one copy to a
/// [`Region`](crate::Region) and keep another to advance.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
