use metronome::TickData;

/// One-line rendering of a tick snapshot.
pub fn describe(d: &TickData) -> String {
    format!(
        "frequency {}  true {}  runtime {:.1} ms  delta {:.2} ms  time {:.1}  now {:.1}",
        hz(d.frequency),
        hz(d.true_frequency),
        d.runtime,
        d.delta,
        d.time,
        d.now,
    )
}

/// Window title reflecting run and throttle state.
pub fn title(ticking: bool, frequency: Option<f64>) -> String {
    let run = if ticking { "ticking" } else { "stopped" };
    match frequency {
        Some(f) => format!("metronome: {run}, throttled to {f}fps"),
        None => format!("metronome: {run}, full-speed"),
    }
}

fn hz(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.2} Hz"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_first_frame() {
        let d = TickData {
            frequency: None,
            true_frequency: None,
            runtime: 0.0,
            delta: 0.0,
            time: 12.0,
            now: 1012.0,
        };
        let s = describe(&d);
        assert!(s.starts_with("frequency -  true -"), "{s}");
        assert!(s.ends_with("time 12.0  now 1012.0"), "{s}");
    }

    #[test]
    fn title_states() {
        assert_eq!(title(false, None), "metronome: stopped, full-speed");
        assert_eq!(title(true, Some(0.5)), "metronome: ticking, throttled to 0.5fps");
    }
}
