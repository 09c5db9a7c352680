use std::time::{Duration, Instant};

use metronome::time::refresh_interval;

/// Refresh rate assumed when the monitor does not report one.
pub(crate) const FALLBACK_REFRESH_HZ: f64 = 60.0;

/// Tracks the next frame deadline for a fixed refresh interval.
#[derive(Debug, Clone)]
pub(crate) struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    pub(crate) fn new(refresh_hz: f64, now: Instant) -> Self {
        let interval = refresh_interval(refresh_hz)
            .unwrap_or_else(|| Duration::from_secs_f64(1.0 / FALLBACK_REFRESH_HZ));

        Self { interval, next: now }
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn deadline(&self) -> Instant {
        self.next
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Advances past a delivered frame. Falling behind resyncs to `now`
    /// instead of bursting through the missed deadlines.
    pub(crate) fn advance(&mut self, now: Instant) {
        self.next = match self.next.checked_add(self.interval) {
            Some(next) if next >= now => next,
            _ => now,
        };
    }
}

/// Monitor refresh in Hz from winit's millihertz value.
pub(crate) fn refresh_hz_from_millihertz(mhz: Option<u32>) -> f64 {
    match mhz {
        Some(mhz) if mhz > 0 => f64::from(mhz) / 1000.0,
        _ => FALLBACK_REFRESH_HZ,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_due_immediately() {
        let t0 = Instant::now();
        let p = FramePacer::new(60.0, t0);
        assert!(p.is_due(t0));
    }

    #[test]
    fn advance_steps_by_interval() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(100.0, t0);
        p.advance(t0);
        assert_eq!(p.deadline(), t0 + Duration::from_millis(10));
        assert!(!p.is_due(t0 + Duration::from_millis(5)));
    }

    #[test]
    fn advance_resyncs_when_behind() {
        let t0 = Instant::now();
        let mut p = FramePacer::new(100.0, t0);
        let late = t0 + Duration::from_millis(55);
        p.advance(late);
        assert_eq!(p.deadline(), late);
    }

    #[test]
    fn bad_rates_fall_back() {
        let fallback = Duration::from_secs_f64(1.0 / FALLBACK_REFRESH_HZ);
        for hz in [f64::NAN, 0.0, 1e-20] {
            assert_eq!(FramePacer::new(hz, Instant::now()).interval(), fallback, "{hz}");
        }
        assert_eq!(refresh_hz_from_millihertz(Some(0)), FALLBACK_REFRESH_HZ);
        assert_eq!(refresh_hz_from_millihertz(Some(144_000)), 144.0);
        assert_eq!(refresh_hz_from_millihertz(None), FALLBACK_REFRESH_HZ);
    }
}
