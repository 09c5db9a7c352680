use winit::event::WindowEvent;
use winit::window::Window;

use metronome::Ticker;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Handles passed to app callbacks.
pub struct HostCtx<'a> {
    pub ticker: &'a mut Ticker,
    pub window: &'a Window,
}

/// Application contract for the winit host.
///
/// Ticker notifications go to listeners registered on the ticker; this trait
/// only sees window events.
pub trait App {
    /// Called once after the window exists.
    fn on_resumed(&mut self, ctx: &mut HostCtx<'_>) {
        let _ = ctx;
    }

    /// Called for every window event, before the host handles it.
    fn on_window_event(&mut self, ctx: &mut HostCtx<'_>, event: &WindowEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }
}
