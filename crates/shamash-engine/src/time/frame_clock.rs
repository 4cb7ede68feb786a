use std::time::{Duration, Instant};

/// Floor for reported delta time. Back-to-back ticks otherwise read as zero
/// on coarse platform clocks.
const DT_MIN: Duration = Duration::from_micros(100);

/// Ceiling for reported delta time. In a render-on-demand loop the window can
/// sit idle for minutes between frames; the gap reports as this instead.
const DT_MAX: Duration = Duration::from_millis(250);

/// Timing snapshot for one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped to `[DT_MIN, DT_MAX]`.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Zero-based frame counter.
    pub frame_index: u64,
}

/// Produces one [`FrameTime`] per rendered frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
        }
    }

    /// Moves the baseline to now, so the next tick's dt excludes time spent
    /// suspended or reconfiguring.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).clamp(DT_MIN, DT_MAX);
        self.last = now;

        let snapshot = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        snapshot
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_up_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_stays_inside_the_clamps() {
        let mut clock = FrameClock::new();
        clock.tick();
        let snapshot = clock.tick();
        assert!(snapshot.dt >= DT_MIN.as_secs_f32());
        assert!(snapshot.dt <= DT_MAX.as_secs_f32());
    }

    #[test]
    fn reset_moves_the_baseline_forward() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(50));
        clock.reset();
        // Without the reset this would be >= 50ms.
        assert!(clock.tick().dt < 0.05);
    }
}
