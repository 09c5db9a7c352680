use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use metronome::{FixedRateLoop, FrameQueue, SystemClock, TickData, TickEvent, Ticker, TickerConfig};
use metronome_winit::logging::{init_logging, LoggingConfig};
use metronome_winit::{Runtime, RuntimeConfig};

mod app;
mod cli;
mod report;

use app::DemoApp;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &cli.log {
        logging = logging.filter(filter.clone());
    }
    init_logging(logging);

    let config = TickerConfig { frequency: cli.frequency };
    let mut ticker = Ticker::with_config(config, FrameQueue::new(), SystemClock)
        .context("invalid --frequency")?;

    // Update measures, render reports: the latest update snapshot is
    // printed when a render goes out.
    let latest: Rc<RefCell<Option<TickData>>> = Rc::new(RefCell::new(None));
    let store = latest.clone();
    ticker.on(TickEvent::Update, move |d: &TickData| {
        *store.borrow_mut() = Some(*d);
    });
    ticker.on(TickEvent::Render, move |_: &TickData| {
        if let Some(d) = latest.borrow().as_ref() {
            log::info!("{}", report::describe(d));
        }
    });

    match cli.headless {
        Some(seconds) => run_headless(ticker, seconds, cli.refresh),
        None => {
            let config = RuntimeConfig {
                refresh_hz: cli.refresh,
                ..RuntimeConfig::default()
            };
            let ticker = Runtime::run(config, ticker, DemoApp::new(cli.throttle))?;
            ticker.destroy();
            Ok(())
        }
    }
}

fn run_headless(mut ticker: Ticker, seconds: f64, refresh: Option<f64>) -> Result<()> {
    let duration = Duration::try_from_secs_f64(seconds).context("invalid --headless duration")?;
    let host = FixedRateLoop::new(refresh.unwrap_or(60.0));

    ticker.start();
    let frames = host.run_for(&mut ticker, duration);
    ticker.stop();

    log::info!(
        "headless run: {frames} frames, {:.1} ms runtime",
        ticker.runtime_ms()
    );
    ticker.destroy();
    Ok(())
}
