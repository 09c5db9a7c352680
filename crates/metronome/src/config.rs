use crate::error::{validate_frequency, TickerError};

/// Ticker construction options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickerConfig {
    /// Target render frequency in cycles per second. `None` renders every frame.
    pub frequency: Option<f64>,
}

impl TickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frequency(mut self, hz: f64) -> Self {
        self.frequency = Some(hz);
        self
    }

    pub fn validate(&self) -> Result<(), TickerError> {
        match self.frequency {
            Some(hz) => validate_frequency(hz).map(|_| ()),
            None => Ok(()),
        }
    }
}
