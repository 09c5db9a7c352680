//! Listener registry.
//!
//! A small publish/subscribe table keyed by event kind. The ticker owns one
//! and exposes it through its own `on` / `once` / `off` methods; nothing here
//! knows about frames or timing.

mod control;
mod emitter;

pub use control::TickControl;
pub use emitter::{Emitter, ListenerId};
