use std::io::{self, Write};
use std::time::Duration;

/// Emits one measurement line per frame: the elapsed time in milliseconds as
/// a bare floating-point number, newline-terminated. No header, no units.
///
/// Purely observational; the simulation never depends on it. The sink is
/// generic so tests can capture the output.
pub struct FrameReporter<W: Write> {
    out: W,
}

impl<W: Write> FrameReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one frame's elapsed time.
    pub fn record(&mut self, elapsed: Duration) -> io::Result<()> {
        writeln!(self.out, "{}", elapsed.as_secs_f64() * 1000.0)
    }

    /// Consume the reporter and return its sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_record() {
        let mut reporter = FrameReporter::new(Vec::new());
        reporter.record(Duration::from_millis(2)).unwrap();
        reporter.record(Duration::from_micros(1500)).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].parse::<f64>().unwrap(), 2.0);
        assert_eq!(lines[1].parse::<f64>().unwrap(), 1.5);
    }

    #[test]
    fn lines_are_bare_floats() {
        let mut reporter = FrameReporter::new(Vec::new());
        reporter.record(Duration::from_nanos(16_666_667)).unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();
        let value: f64 = out.trim().parse().unwrap();
        assert!(value.is_finite() && value >= 0.0);
        assert!(!out.contains("ms"));
    }
}
