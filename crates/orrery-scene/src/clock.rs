//! Simulation clock: monotonic elapsed time accumulated from real frame deltas.

/// Elapsed simulation time in seconds.
///
/// Advanced once per frame by the measured wall-clock delta — never a fixed
/// step — so angular positions depend only on real elapsed time, independent
/// of frame rate. Never resets.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimClock {
    elapsed: f64,
}

impl SimClock {
    /// A clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one frame's real delta. Negative deltas are ignored so the
    /// clock stays monotonic even under a misbehaving time source.
    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Total elapsed simulation time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
