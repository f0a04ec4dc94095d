//! Wall-clock frame timing.
//!
//! Animation is driven by accumulated real time, so each frame measures the
//! true elapsed interval since the previous one and passes it through whole.
//! A stall (debugger break, window drag) makes the scene catch up to
//! wall-clock rather than fall behind it.

use std::time::Instant;

use tracing::warn;

/// Frame times above this are logged as stalls. The full delta is still
/// reported so accumulated simulation time stays aligned with wall-clock
/// regardless of frame rate.
pub const STALL_WARN_SECONDS: f64 = 0.25;

/// Measures real elapsed time between frames.
pub struct FrameTimer {
    previous: Instant,
}

impl FrameTimer {
    /// Start timing from the current instant.
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
        }
    }

    /// Seconds since the previous tick.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.previous).as_secs_f64();
        self.previous = now;

        if dt > STALL_WARN_SECONDS {
            warn!("Frame stalled for {:.1}ms", dt * 1000.0);
        }
        dt
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_timer_produces_non_negative_deltas() {
        let mut timer = FrameTimer::new();
        assert!(timer.tick() >= 0.0);
        assert!(timer.tick() >= 0.0);
    }

    #[test]
    fn test_stalled_frame_reports_its_full_delta() {
        let mut timer = FrameTimer {
            previous: Instant::now() - Duration::from_millis(600),
        };
        let dt = timer.tick();
        assert!(dt >= 0.6, "stall delta was shortened: {dt}");
        assert!(dt < 1.0);
    }

    #[test]
    fn test_consecutive_ticks_cover_wall_clock() {
        let start = Instant::now();
        let mut timer = FrameTimer { previous: start };
        let total: f64 = (0..5).map(|_| timer.tick()).sum();
        let wall = start.elapsed().as_secs_f64();
        assert!(total <= wall + 1e-9);
        assert!(wall - total < 0.05, "accumulated time fell behind wall-clock");
    }
}
