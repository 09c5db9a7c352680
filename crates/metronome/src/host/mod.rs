//! Host frame scheduling.
//!
//! The ticker never calls a display loop directly. It asks a
//! [`FrameScheduler`] for a frame and the host later hands the returned
//! [`FrameHandle`] back through `Ticker::on_frame` together with its own
//! high-resolution timestamp.
//!
//! [`FrameQueue`] is the stock scheduler: a queue of requested handles that a
//! host drains once per refresh. [`FixedRateLoop`] is a headless host built on
//! it; `metronome-winit` is the windowed one.

mod fixed_rate;
mod frame_queue;
mod scheduler;

pub use fixed_rate::FixedRateLoop;
pub use frame_queue::FrameQueue;
pub use scheduler::{FrameHandle, FrameScheduler};
