use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use metronome::time::duration_ms;
use metronome::Ticker;

use crate::app::{App, AppControl, HostCtx};

use super::pacing::{refresh_hz_from_millihertz, FramePacer};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Frame delivery rate. `None` follows the monitor refresh rate.
    pub refresh_hz: Option<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "metronome".to_string(),
            initial_size: LogicalSize::new(640.0, 360.0),
            refresh_hz: None,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the window closes or the app exits.
    ///
    /// The ticker is handed back when the loop ends.
    pub fn run<A>(config: RuntimeConfig, ticker: Ticker, app: A) -> Result<Ticker>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = HostState::new(config, ticker, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(state.ticker)
    }
}

struct HostState<A: App> {
    config: RuntimeConfig,
    ticker: Ticker,
    app: A,

    window: Option<Window>,
    /// Origin of the frame timestamps handed to the ticker.
    origin: Instant,
    pacer: FramePacer,
    exit_requested: bool,
}

impl<A: App> HostState<A> {
    fn new(config: RuntimeConfig, ticker: Ticker, app: A) -> Self {
        let now = Instant::now();
        let pacer = FramePacer::new(config.refresh_hz.unwrap_or(f64::NAN), now);
        Self {
            config,
            ticker,
            app,
            window: None,
            origin: now,
            pacer,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let refresh_hz = match self.config.refresh_hz {
            Some(hz) => hz,
            None => refresh_hz_from_millihertz(
                window
                    .current_monitor()
                    .and_then(|m| m.refresh_rate_millihertz()),
            ),
        };
        self.pacer = FramePacer::new(refresh_hz, Instant::now());
        log::info!(
            "window created; delivering frames every {:.2} ms",
            duration_ms(self.pacer.interval())
        );

        self.window = Some(window);
        Ok(())
    }

    /// Hands every due frame request to the ticker.
    fn deliver_frame(&mut self) {
        let now = Instant::now();
        if !self.pacer.is_due(now) {
            return;
        }

        let ts = duration_ms(now.duration_since(self.origin));
        for handle in self.ticker.scheduler_mut().drain_due() {
            self.ticker.on_frame(handle, ts);
        }

        self.pacer.advance(now);
    }
}

impl<A: App> ApplicationHandler for HostState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.request_exit();
            event_loop.exit();
            return;
        }

        let (app, ticker) = (&mut self.app, &mut self.ticker);
        if let Some(window) = self.window.as_ref() {
            app.on_resumed(&mut HostCtx { ticker, window });
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(window) = self.window.as_ref() else {
            return;
        };

        // Idle until input arrives while nothing is scheduled.
        if self.ticker.scheduler().is_empty() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        if self.pacer.is_due(Instant::now()) {
            window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows so the app can drive the ticker while seeing the window.
        let (app, ticker) = (&mut self.app, &mut self.ticker);
        let Some(window) = self.window.as_ref() else {
            return;
        };

        if app.on_window_event(&mut HostCtx { ticker, window }, &event) == AppControl::Exit {
            self.request_exit();
        }

        match event {
            WindowEvent::CloseRequested => self.request_exit(),
            WindowEvent::RedrawRequested => self.deliver_frame(),
            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.ticker.stop();
        log::info!(
            "host exiting after {} frames ({:.1} ms of runtime)",
            self.ticker.cycles(),
            self.ticker.runtime_ms()
        );
    }
}
