/// Timing snapshot attached to every `update` and `render` notification.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickData {
    /// Configured frequency, or the measured one when unthrottled.
    ///
    /// `None` on unthrottled cycles with `delta == 0`: the first cycle of a
    /// run, or a frame delivered with the same timestamp as the previous one.
    pub frequency: Option<f64>,

    /// Measured cycles per second, `1000 / delta`. `None` when `delta == 0`.
    pub true_frequency: Option<f64>,

    /// Total ticking time of this ticker, in ms.
    pub runtime: f64,

    /// Time since the previous cycle of this run, in ms. Zero on the first.
    pub delta: f64,

    /// Raw host frame timestamp, in ms since the host's own origin.
    pub time: f64,

    /// Absolute time of the cycle: run start wall time plus `time`, in ms.
    pub now: f64,
}
