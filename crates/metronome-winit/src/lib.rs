//! winit host for `metronome`.
//!
//! Owns the event loop and a window, and delivers the ticker's frame requests
//! on `RedrawRequested`, paced to the monitor refresh rate.

pub mod app;
pub mod logging;
pub mod window;

pub use app::{App, AppControl, HostCtx};
pub use window::{Runtime, RuntimeConfig};
