/// Control directive returned by listeners.
///
/// Listeners that only observe can return `()`, which maps to `Continue`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum TickControl {
    #[default]
    Continue,
    /// Stop ticking once the current cycle has finished emitting.
    Stop,
}

impl TickControl {
    #[inline]
    pub fn is_stop(self) -> bool {
        self == TickControl::Stop
    }

    /// `Stop` wins over `Continue`.
    #[inline]
    pub fn merge(self, other: TickControl) -> TickControl {
        if self.is_stop() || other.is_stop() {
            TickControl::Stop
        } else {
            TickControl::Continue
        }
    }
}

impl From<()> for TickControl {
    fn from(_: ()) -> Self {
        TickControl::Continue
    }
}
