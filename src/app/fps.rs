//! Frames-per-second sampling for the performance readout.

/// Averages frame times over a fixed window and reports once per window.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    window: u32,
    frames: u32,
    elapsed_ms: f64,
}

impl FpsMeter {
    /// `window` is clamped to at least one frame.
    pub fn new(window: u32) -> Self {
        Self { window: window.max(1), frames: 0, elapsed_ms: 0.0 }
    }

    /// Record one rendered frame that took `elapsed_ms`. Returns the rounded
    /// rate when the window completes.
    pub fn record(&mut self, elapsed_ms: f64) -> Option<u32> {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.elapsed_ms += elapsed_ms;
        }
        self.frames += 1;
        if self.frames < self.window {
            return None;
        }
        let fps = if self.elapsed_ms > 0.0 {
            Some((f64::from(self.frames) * 1000.0 / self.elapsed_ms).round() as u32)
        } else {
            None
        };
        self.frames = 0;
        self.elapsed_ms = 0.0;
        fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_window() {
        let mut meter = FpsMeter::new(60);
        for _ in 0..59 {
            assert_eq!(meter.record(1000.0 / 60.0), None);
        }
        assert_eq!(meter.record(1000.0 / 60.0), Some(60));
        assert_eq!(meter.record(1000.0 / 60.0), None);
    }

    #[test]
    fn averages_uneven_frames() {
        let mut meter = FpsMeter::new(4);
        meter.record(10.0);
        meter.record(30.0);
        meter.record(20.0);
        assert_eq!(meter.record(20.0), Some(50));
    }

    #[test]
    fn ignores_bogus_durations() {
        let mut meter = FpsMeter::new(2);
        meter.record(f64::NAN);
        assert_eq!(meter.record(0.0), None);
        meter.record(-5.0);
        assert_eq!(meter.record(25.0), Some(80));
    }

    #[test]
    fn zero_window_means_every_frame() {
        let mut meter = FpsMeter::new(0);
        assert_eq!(meter.record(20.0), Some(50));
    }
}
