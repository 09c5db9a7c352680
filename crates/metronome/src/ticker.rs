use std::fmt;
use std::str::FromStr;

use crate::config::TickerConfig;
use crate::error::{validate_frequency, TickerError};
use crate::events::{Emitter, ListenerId, TickControl};
use crate::host::{FrameHandle, FrameQueue, FrameScheduler};
use crate::throttle::RenderThrottle;
use crate::time::{Clock, SystemClock, TickData};

/// Notification kinds emitted by a [`Ticker`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TickEvent {
    /// Every cycle. Intended for measurement and simulation work.
    Update,
    /// Paint work. Throttled when a target frequency is set.
    Render,
}

impl TickEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            TickEvent::Update => "update",
            TickEvent::Render => "render",
        }
    }
}

impl fmt::Display for TickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TickEvent {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "update" => Ok(TickEvent::Update),
            "render" => Ok(TickEvent::Render),
            other => Err(TickerError::UnknownEvent(other.to_string())),
        }
    }
}

/// Frame clock driven by a host frame callback.
///
/// Each delivered frame produces one [`TickData`] and emits `update`, then
/// `render` (subject to throttling). The ticker keeps at most one frame
/// request outstanding: `start` issues it, every delivered frame re-issues it,
/// `stop` cancels it.
///
/// Runtime is cumulative for the life of the instance; stopping freezes it and
/// a later `start` keeps adding to it.
///
/// ```rust
/// use metronome::{FrameQueue, ManualClock, TickEvent, Ticker, TickerConfig};
///
/// let clock = ManualClock::new(0.0);
/// let mut ticker = Ticker::with_config(TickerConfig::new(), FrameQueue::new(), clock).unwrap();
/// ticker.on(TickEvent::Update, |t| assert!(t.delta >= 0.0));
/// ticker.start();
///
/// for ts in [0.0, 16.0, 32.0] {
///     for handle in ticker.scheduler_mut().drain_due() {
///         ticker.on_frame(handle, ts);
///     }
/// }
/// assert_eq!(ticker.runtime_ms(), 32.0);
/// ```
pub struct Ticker<S = FrameQueue, C = SystemClock>
where
    S: FrameScheduler,
    C: Clock,
{
    scheduler: S,
    clock: C,
    listeners: Emitter<TickEvent, TickData>,
    throttle: RenderThrottle,

    pending: Option<FrameHandle>,
    start_wall_time: Option<f64>,
    last_frame_time: Option<f64>,
    ticking: bool,

    runtime_ms: f64,
    cycles: u64,
}

impl<S: FrameScheduler> Ticker<S, SystemClock> {
    /// Unthrottled ticker on the system wall clock.
    pub fn new(scheduler: S) -> Self {
        Self::with_clock(scheduler, SystemClock)
    }
}

impl<S, C> Ticker<S, C>
where
    S: FrameScheduler,
    C: Clock,
{
    /// Unthrottled ticker on a caller-supplied clock.
    pub fn with_clock(scheduler: S, clock: C) -> Self {
        Self {
            scheduler,
            clock,
            listeners: Emitter::new(),
            throttle: RenderThrottle::new(None),
            pending: None,
            start_wall_time: None,
            last_frame_time: None,
            ticking: false,
            runtime_ms: 0.0,
            cycles: 0,
        }
    }

    pub fn with_config(config: TickerConfig, scheduler: S, clock: C) -> Result<Self, TickerError> {
        config.validate()?;

        let mut ticker = Self::with_clock(scheduler, clock);
        ticker.throttle.set_frequency(config.frequency);
        Ok(ticker)
    }

    // ── Run control ───────────────────────────────────────────────────────

    /// Starts a stopped ticker. No-op while ticking.
    pub fn start(&mut self) {
        if self.ticking {
            return;
        }

        self.start_wall_time = Some(self.clock.now_ms());
        self.ticking = true;
        self.pending = Some(self.scheduler.request_frame());

        log::debug!("ticker started (frequency: {:?})", self.throttle.frequency());
    }

    /// Stops a ticking ticker and cancels its pending frame. No-op while stopped.
    ///
    /// A frame that is already being delivered finishes its emissions.
    pub fn stop(&mut self) {
        if !self.ticking {
            return;
        }

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }

        self.start_wall_time = None;
        self.last_frame_time = None;
        self.ticking = false;

        log::debug!("ticker stopped after {:.1} ms of runtime", self.runtime_ms);
    }

    /// Sets or clears the target render frequency.
    ///
    /// A ticking ticker restarts, so the next frame begins a fresh run
    /// (`delta == 0`). An invalid frequency leaves everything unchanged.
    pub fn set_frequency(&mut self, frequency: Option<f64>) -> Result<(), TickerError> {
        let frequency = frequency.map(validate_frequency).transpose()?;

        let was_ticking = self.ticking;
        if was_ticking {
            self.stop();
        }

        self.throttle.set_frequency(frequency);
        log::debug!("ticker frequency set to {frequency:?}");

        if was_ticking {
            self.start();
        }
        Ok(())
    }

    pub fn frequency(&self) -> Option<f64> {
        self.throttle.frequency()
    }

    /// Target period in ms, `1000 / frequency`.
    pub fn frequency_period_ms(&self) -> Option<f64> {
        self.throttle.period_ms()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Total ticking time in ms.
    pub fn runtime_ms(&self) -> f64 {
        self.runtime_ms
    }

    /// Frames delivered over the instance's lifetime.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The outstanding frame request, if any.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable scheduler access for hosts that drain it.
    ///
    /// Cancelling the ticker's frame directly stalls the ticker without
    /// stopping it; use [`stop`](Self::stop) instead.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Removes all listeners and stops. The instance is consumed.
    pub fn destroy(mut self) {
        self.listeners.clear_all();
        self.stop();
        log::debug!("ticker destroyed");
    }

    // ── Listeners ─────────────────────────────────────────────────────────

    /// Registers a listener. Returning [`TickControl::Stop`] stops the ticker
    /// after the current cycle's emissions.
    pub fn on<F, R>(&mut self, event: TickEvent, f: F) -> ListenerId
    where
        F: FnMut(&TickData) -> R + 'static,
        R: Into<TickControl> + 'static,
    {
        self.listeners.on(event, f)
    }

    /// Registers a listener for the next emission of `event` only.
    pub fn once<F, R>(&mut self, event: TickEvent, f: F) -> ListenerId
    where
        F: FnMut(&TickData) -> R + 'static,
        R: Into<TickControl> + 'static,
    {
        self.listeners.once(event, f)
    }

    pub fn off(&mut self, event: TickEvent, id: ListenerId) -> bool {
        self.listeners.off(event, id)
    }

    pub fn remove_listeners(&mut self, event: TickEvent) -> usize {
        self.listeners.clear(event)
    }

    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear_all();
    }

    pub fn listener_count(&self, event: TickEvent) -> usize {
        self.listeners.count(event)
    }

    // ── Frame callback ────────────────────────────────────────────────────

    /// Delivers the host frame `handle` with the host's timestamp in ms.
    ///
    /// Returns `false` and does nothing if `handle` is not the outstanding
    /// request (already delivered, cancelled, or from an earlier run).
    ///
    /// All timing state and the next frame request are committed before any
    /// listener runs, so a panicking listener leaves the ticker consistent
    /// and still scheduled.
    pub fn on_frame(&mut self, handle: FrameHandle, timestamp_ms: f64) -> bool {
        if self.pending != Some(handle) {
            log::trace!("ignoring stale frame #{}", handle.raw());
            return false;
        }
        self.pending = None;

        let Some(start_wall_time) = self.start_wall_time else {
            return false;
        };

        let now = start_wall_time + timestamp_ms;
        let delta = match self.last_frame_time {
            Some(last) => now - last,
            None => 0.0,
        };
        self.last_frame_time = Some(now);

        let true_frequency = (delta != 0.0).then(|| 1000.0 / delta);

        self.throttle.accumulate(delta);
        self.runtime_ms += delta;
        self.cycles += 1;

        let frequency = self.throttle.frequency();
        let data = TickData {
            frequency: frequency.or(true_frequency),
            true_frequency,
            runtime: self.runtime_ms,
            delta,
            time: timestamp_ms,
            now,
        };

        let throttled = frequency.is_some();
        let emit_update = throttled || self.listeners.count(TickEvent::Update) > 0;
        let emit_render = (throttled || self.listeners.count(TickEvent::Render) > 0)
            && self.throttle.should_render();

        self.pending = Some(self.scheduler.request_frame());

        log::trace!(
            "frame {}: delta {delta:.3} ms, update {emit_update}, render {emit_render}",
            self.cycles
        );

        let mut control = TickControl::Continue;
        if emit_update {
            control = control.merge(self.listeners.emit(TickEvent::Update, &data));
        }
        if emit_render {
            control = control.merge(self.listeners.emit(TickEvent::Render, &data));
        }

        if control.is_stop() {
            self.stop();
        }

        true
    }
}

impl<S, C> Drop for Ticker<S, C>
where
    S: FrameScheduler,
    C: Clock,
{
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S, C> fmt::Debug for Ticker<S, C>
where
    S: FrameScheduler,
    C: Clock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticker")
            .field("ticking", &self.ticking)
            .field("frequency", &self.throttle.frequency())
            .field("pending", &self.pending)
            .field("runtime_ms", &self.runtime_ms)
            .field("cycles", &self.cycles)
            .field("listeners", &self.listeners)
            .finish()
    }
}
