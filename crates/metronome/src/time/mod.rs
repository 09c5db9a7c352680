//! Time sources and the per-cycle timing snapshot.
//!
//! All values are `f64` milliseconds, matching the resolution hosts report
//! for frame timestamps.

mod clock;
mod tick_data;

pub use clock::{Clock, ManualClock, SystemClock};
pub use tick_data::TickData;

/// Converts a duration to fractional milliseconds.
#[inline]
pub fn duration_ms(d: std::time::Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Frame interval for a refresh rate of `hz`.
///
/// `None` when `hz` is not a positive finite rate, or when the interval is
/// too long to be added to an `Instant`.
pub fn refresh_interval(hz: f64) -> Option<std::time::Duration> {
    if !(hz.is_finite() && hz > 0.0) {
        return None;
    }

    let interval = std::time::Duration::try_from_secs_f64(1.0 / hz).ok()?;
    std::time::Instant::now().checked_add(interval)?;
    Some(interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn refresh_interval_of_common_rates() {
        assert_eq!(refresh_interval(100.0), Some(Duration::from_millis(10)));
        assert_eq!(refresh_interval(0.5), Some(Duration::from_secs(2)));
    }

    #[test]
    fn refresh_interval_rejects_unusable_rates() {
        for hz in [0.0, -60.0, f64::NAN, f64::INFINITY, 1e-20, f64::MIN_POSITIVE] {
            assert_eq!(refresh_interval(hz), None, "{hz}");
        }
    }
}
