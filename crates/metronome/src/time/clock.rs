use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock source used to anchor a ticking run.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch.
    fn now_ms(&self) -> f64;
}

/// Wall clock backed by [`SystemTime`], in ms since the Unix epoch.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        // A clock set before 1970 reads as the epoch.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(super::duration_ms)
            .unwrap_or(0.0)
    }
}

/// Settable clock for tests and deterministic replays.
///
/// Clones share the same underlying value, so a test can keep one handle and
/// move another into the ticker.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_ms)),
        }
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_state() {
        let a = ManualClock::new(10.0);
        let b = a.clone();
        a.advance(5.0);
        assert_eq!(b.now_ms(), 15.0);
        b.set(1.0);
        assert_eq!(a.now_ms(), 1.0);
    }

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.now_ms() > 1_577_836_800_000.0);
    }
}
