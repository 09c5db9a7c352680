use clap::Parser;

/// metronome demo: update/render notifications from a frame clock.
///
/// Window mode keys: Space starts/stops, T toggles throttling, Esc quits.
#[derive(Debug, Parser)]
#[command(name = "metronome-demo", version)]
pub struct Cli {
    /// Initial render frequency in Hz (unthrottled when omitted).
    #[arg(long, value_name = "HZ")]
    pub frequency: Option<f64>,

    /// Frequency applied by the T key.
    #[arg(long, value_name = "HZ", default_value_t = 0.5)]
    pub throttle: f64,

    /// Run without a window for the given number of seconds.
    #[arg(long, value_name = "SECONDS")]
    pub headless: Option<f64>,

    /// Host refresh rate in Hz (defaults to the monitor, or 60 headless).
    #[arg(long, value_name = "HZ")]
    pub refresh: Option<f64>,

    /// Log filter, `env_logger` syntax. Overrides RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["metronome-demo"]).unwrap();
        assert_eq!(cli.frequency, None);
        assert_eq!(cli.throttle, 0.5);
        assert_eq!(cli.headless, None);
    }

    #[test]
    fn headless_with_frequency() {
        let cli = Cli::try_parse_from([
            "metronome-demo",
            "--headless",
            "2.5",
            "--frequency",
            "30",
            "--log",
            "metronome=trace",
        ])
        .unwrap();
        assert_eq!(cli.headless, Some(2.5));
        assert_eq!(cli.frequency, Some(30.0));
        assert_eq!(cli.log.as_deref(), Some("metronome=trace"));
    }

    #[test]
    fn rejects_non_numeric_frequency() {
        assert!(Cli::try_parse_from(["metronome-demo", "--frequency", "fast"]).is_err());
    }
}
