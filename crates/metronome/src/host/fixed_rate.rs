use std::thread;
use std::time::{Duration, Instant};

use crate::ticker::Ticker;
use crate::time::{duration_ms, refresh_interval, Clock};

use super::frame_queue::FrameQueue;

const FALLBACK_REFRESH_HZ: f64 = 60.0;

/// Headless host delivering frames at a fixed refresh rate.
///
/// Timestamps are milliseconds since the loop was created, taken from a
/// monotonic clock. When delivery falls behind, missed refreshes are skipped
/// rather than replayed.
#[derive(Debug, Clone)]
pub struct FixedRateLoop {
    interval: Duration,
    origin: Instant,
}

impl FixedRateLoop {
    /// A loop refreshing at `hz`.
    ///
    /// Rates without a usable interval (non-positive, non-finite, or so slow the
    /// interval overflows) fall back to 60 Hz.
    pub fn new(hz: f64) -> Self {
        let interval = refresh_interval(hz).unwrap_or_else(|| {
            log::warn!("unusable refresh rate {hz} Hz; using {FALLBACK_REFRESH_HZ} Hz");
            Duration::from_secs_f64(1.0 / FALLBACK_REFRESH_HZ)
        });
        Self::with_interval(interval)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            origin: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Milliseconds since this loop's origin.
    pub fn timestamp_ms(&self) -> f64 {
        duration_ms(self.origin.elapsed())
    }

    /// Drives `ticker` for up to `duration`.
    ///
    /// Returns the number of frames the ticker accepted. Returns early once
    /// the ticker has no outstanding frame (it was stopped or never started).
    /// A `duration` past the end of `Instant`'s range runs until the ticker stops.
    pub fn run_for<C: Clock>(&self, ticker: &mut Ticker<FrameQueue, C>, duration: Duration) -> u64 {
        let end = Instant::now().checked_add(duration);
        let Some(mut next) = Instant::now().checked_add(self.interval) else {
            log::warn!("refresh interval {:?} is out of range; no frames delivered", self.interval);
            return 0;
        };
        let mut delivered = 0;

        while !ticker.scheduler().is_empty() && end.is_none_or(|end| next <= end) {
            let now = Instant::now();
            if next > now {
                thread::sleep(next - now);
            }

            let ts = self.timestamp_ms();
            for handle in ticker.scheduler_mut().drain_due() {
                if ticker.on_frame(handle, ts) {
                    delivered += 1;
                }
            }

            let now = Instant::now();
            next = match next.checked_add(self.interval) {
                Some(n) if n >= now => n,
                Some(_) => {
                    log::trace!("fixed-rate host fell behind; resyncing");
                    match now.checked_add(self.interval) {
                        Some(n) => n,
                        None => break,
                    }
                }
                None => break,
            };
        }

        delivered
    }
}

impl Default for FixedRateLoop {
    fn default() -> Self {
        Self::new(60.0)
    }
}
