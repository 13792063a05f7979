//! Frame-rate accounting
//!
//! Counts frames against a millisecond clock and reports roughly once a
//! second. Rates are in tenths of a frame per second so that no float
//! math is needed on the target.

/// Windowed frame counter
///
/// Feed it a monotonic millisecond timestamp per frame; it answers with
/// a rate once at least a second of wall time has passed.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FpsCounter {
    window_start_ms: u64,
    frames: u32,
}

impl FpsCounter {
    /// Start a measurement window at `now_ms`
    pub const fn new(now_ms: u64) -> Self {
        Self {
            window_start_ms: now_ms,
            frames: 0,
        }
    }

    /// Count one frame; returns the rate when the window closes
    ///
    /// The rate is in tenths of a frame per second (423 means 42.3 fps),
    /// computed over the actual elapsed window rather than an assumed
    /// second. Closing the window restarts it at `now_ms`.
    pub fn record_frame(&mut self, now_ms: u64) -> Option<u32> {
        self.frames += 1;
        let elapsed = now_ms.saturating_sub(self.window_start_ms);
        if elapsed < 1000 {
            return None;
        }
        let rate = (self.frames as u64 * 10_000 / elapsed) as u32;
        self.frames = 0;
        self.window_start_ms = now_ms;
        Some(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_inside_window() {
        let mut fps = FpsCounter::new(0);
        for t in (10..1000).step_by(10) {
            assert_eq!(fps.record_frame(t), None);
        }
    }

    #[test]
    fn test_reports_at_window_close() {
        let mut fps = FpsCounter::new(0);
        // 99 frames strictly inside the window, the 100th closes it
        for t in (10..1000).step_by(10) {
            assert_eq!(fps.record_frame(t), None);
        }
        assert_eq!(fps.record_frame(1000), Some(1000));
    }

    #[test]
    fn test_rate_uses_actual_elapsed_time() {
        let mut fps = FpsCounter::new(0);
        // One slow frame: 1 frame over 2000 ms is 0.5 fps
        assert_eq!(fps.record_frame(2000), Some(5));
    }

    #[test]
    fn test_window_restarts_after_report() {
        let mut fps = FpsCounter::new(0);
        assert_eq!(fps.record_frame(1250), Some(8));

        // Next window measures from 1250, not from zero
        assert_eq!(fps.record_frame(2000), None);
        assert_eq!(fps.record_frame(2250), Some(20));
    }

    #[test]
    fn test_tenths_resolution() {
        let mut fps = FpsCounter::new(0);
        for t in (16..1008).step_by(16) {
            assert_eq!(fps.record_frame(t), None);
        }
        // 63 frames over 1008 ms: 62.5 fps
        assert_eq!(fps.record_frame(1008), Some(625));
    }
}
