use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use metronome_winit::{App, AppControl, HostCtx};

use crate::report;

/// Keyboard-driven controls over the host's ticker.
pub struct DemoApp {
    throttle_hz: f64,
}

impl DemoApp {
    pub fn new(throttle_hz: f64) -> Self {
        Self { throttle_hz }
    }

    fn toggle_ticking(&self, ctx: &mut HostCtx<'_>) {
        if ctx.ticker.is_ticking() {
            ctx.ticker.stop();
        } else {
            ctx.ticker.start();
        }
    }

    fn toggle_throttle(&self, ctx: &mut HostCtx<'_>) {
        // Throttling only toggles while running.
        if !ctx.ticker.is_ticking() {
            return;
        }

        let next = match ctx.ticker.frequency() {
            Some(_) => None,
            None => Some(self.throttle_hz),
        };

        if let Err(e) = ctx.ticker.set_frequency(next) {
            log::warn!("{e}");
        }
    }

    fn refresh_title(&self, ctx: &HostCtx<'_>) {
        ctx.window
            .set_title(&report::title(ctx.ticker.is_ticking(), ctx.ticker.frequency()));
    }
}

impl App for DemoApp {
    fn on_resumed(&mut self, ctx: &mut HostCtx<'_>) {
        self.refresh_title(ctx);
        log::info!("Space: start/stop  T: throttle  Esc: quit");
    }

    fn on_window_event(&mut self, ctx: &mut HostCtx<'_>, event: &WindowEvent) -> AppControl {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return AppControl::Continue;
        };

        if event.state != ElementState::Pressed || event.repeat {
            return AppControl::Continue;
        }

        match event.physical_key {
            PhysicalKey::Code(KeyCode::Escape) => return AppControl::Exit,
            PhysicalKey::Code(KeyCode::Space) => self.toggle_ticking(ctx),
            PhysicalKey::Code(KeyCode::KeyT) => self.toggle_throttle(ctx),
            _ => return AppControl::Continue,
        }

        self.refresh_title(ctx);
        AppControl::Continue
    }
}
