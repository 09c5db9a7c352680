//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window and turns `RedrawRequested` into
//! ticker frame deliveries.

mod pacing;
mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
