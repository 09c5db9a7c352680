//! Logging utilities.
//!
//! The frame clock reports run control (start, stop, frequency changes) at
//! `debug` and every delivered frame at `trace`; the host reports window
//! creation and frame pacing at `info`. Binaries call [`init_logging`] once
//! early in `main`. Library code only uses the `log` facade.
//!
//! Unless a filter is given, `winit` is held at `warn` so per-frame tracing of
//! the ticker is readable.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
