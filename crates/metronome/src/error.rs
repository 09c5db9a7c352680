use std::fmt;

/// Errors reported by [`Ticker`](crate::Ticker) configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum TickerError {
    /// Frequency was zero, negative, NaN or infinite.
    InvalidFrequency(f64),
    /// Event name is neither `update` nor `render`.
    UnknownEvent(String),
}

impl fmt::Display for TickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickerError::InvalidFrequency(hz) => {
                write!(f, "invalid ticker frequency {hz}: expected a finite value > 0")
            }
            TickerError::UnknownEvent(name) => {
                write!(f, "unknown ticker event `{name}`: expected `update` or `render`")
            }
        }
    }
}

impl std::error::Error for TickerError {}

/// Returns `Ok(hz)` for a usable target frequency.
pub(crate) fn validate_frequency(hz: f64) -> Result<f64, TickerError> {
    if hz.is_finite() && hz > 0.0 {
        Ok(hz)
    } else {
        Err(TickerError::InvalidFrequency(hz))
    }
}
