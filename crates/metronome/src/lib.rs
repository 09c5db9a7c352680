//! Frame clock for update/render loops.
//!
//! A [`Ticker`] sits on top of a host per-frame callback (display refresh,
//! event loop redraw, fixed-rate timer) and turns each delivered frame into
//! an `update` notification and a `render` notification. Rendering can be
//! throttled to a target frequency; every notification carries a
//! [`TickData`] timing snapshot.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ticker`] | `Ticker`, `TickEvent` |
//! | [`events`] | `Emitter`, `ListenerId`, `TickControl` |
//! | [`host`] | `FrameScheduler`, `FrameHandle`, `FrameQueue`, `FixedRateLoop` |
//! | [`time`] | `Clock`, `SystemClock`, `ManualClock`, `TickData` |
//! | [`config`] | `TickerConfig` |
//! | [`error`] | `TickerError` |
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use metronome::{FixedRateLoop, FrameQueue, TickEvent, Ticker};
//!
//! let mut ticker = Ticker::new(FrameQueue::new());
//! ticker.on(TickEvent::Render, |t| println!("{:.0} ms", t.runtime));
//! ticker.set_frequency(Some(2.0)).unwrap();
//! ticker.start();
//!
//! FixedRateLoop::new(60.0).run_for(&mut ticker, Duration::from_secs(3));
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod ticker;
pub mod time;

mod throttle;

pub use config::TickerConfig;
pub use error::TickerError;
pub use events::{ListenerId, TickControl};
pub use host::{FixedRateLoop, FrameHandle, FrameQueue, FrameScheduler};
pub use ticker::{TickEvent, Ticker};
pub use time::{Clock, ManualClock, SystemClock, TickData};
