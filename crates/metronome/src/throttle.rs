/// Frame-granular render throttle.
///
/// The accumulator is compared against the period once per cycle. Crossing
/// the period arms a deferred render and resets the accumulator at once; the
/// render itself goes out on the following cycle with that cycle's payload.
/// Effective intervals are therefore whole multiples of the host frame
/// interval, not exact multiples of the period.
#[derive(Debug, Clone, Default)]
pub(crate) struct RenderThrottle {
    frequency: Option<f64>,
    period_ms: Option<f64>,
    accumulated_ms: f64,
    deferred: bool,
}

impl RenderThrottle {
    pub(crate) fn new(frequency: Option<f64>) -> Self {
        let mut throttle = Self::default();
        throttle.set_frequency(frequency);
        throttle
    }

    /// `frequency` must already be validated.
    pub(crate) fn set_frequency(&mut self, frequency: Option<f64>) {
        self.frequency = frequency;
        self.period_ms = frequency.map(|hz| 1000.0 / hz);
        if frequency.is_none() {
            self.deferred = false;
        }
    }

    pub(crate) fn frequency(&self) -> Option<f64> {
        self.frequency
    }

    pub(crate) fn period_ms(&self) -> Option<f64> {
        self.period_ms
    }

    pub(crate) fn accumulate(&mut self, delta_ms: f64) {
        self.accumulated_ms += delta_ms;
    }

    /// Whether this cycle emits `render`. Call at most once per cycle.
    pub(crate) fn should_render(&mut self) -> bool {
        let Some(period) = self.period_ms else {
            return true;
        };

        let release = std::mem::take(&mut self.deferred);

        if self.accumulated_ms > period {
            self.deferred = true;
            self.accumulated_ms = 0.0;
        }

        release
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycles(t: &mut RenderThrottle, n: usize, delta: f64) -> Vec<usize> {
        (0..n)
            .filter(|_| {
                t.accumulate(delta);
                t.should_render()
            })
            .collect()
    }

    #[test]
    fn unthrottled_renders_every_cycle() {
        let mut t = RenderThrottle::new(None);
        assert_eq!(cycles(&mut t, 5, 16.0).len(), 5);
        assert_eq!(t.period_ms(), None);
    }

    #[test]
    fn period_tracks_frequency() {
        let mut t = RenderThrottle::new(Some(0.5));
        assert_eq!(t.period_ms(), Some(2000.0));
        t.set_frequency(Some(50.0));
        assert_eq!(t.period_ms(), Some(20.0));
        t.set_frequency(None);
        assert_eq!(t.period_ms(), None);
        assert_eq!(t.frequency(), None);
    }

    #[test]
    fn render_lands_one_cycle_after_crossing() {
        // 100 ms period, 30 ms frames: crossed on the 4th cycle (120 ms).
        let mut t = RenderThrottle::new(Some(10.0));
        assert_eq!(cycles(&mut t, 10, 30.0), vec![4, 8]);
    }

    #[test]
    fn saturated_throttle_renders_every_cycle() {
        // Period shorter than the frame interval.
        let mut t = RenderThrottle::new(Some(120.0));
        assert_eq!(cycles(&mut t, 5, 16.0), vec![1, 2, 3, 4]);
    }

    #[test]
    fn unsetting_frequency_disarms_deferred_render() {
        let mut t = RenderThrottle::new(Some(10.0));
        t.accumulate(150.0);
        assert!(!t.should_render());
        t.set_frequency(None);
        t.set_frequency(Some(10.0));
        assert!(!t.should_render());
    }
}
