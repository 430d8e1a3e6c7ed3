//! Frame timing helpers for callers that drive collision queries from a game loop.

/// Counts elapsed time up towards a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timer {
    pub elapsed: f64,
    pub duration: f64,
}

impl Timer {
    pub fn new(duration: f64) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// Fraction of the duration that has elapsed. A zero-length timer reports 1.
    pub fn percent(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    pub fn expired(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f64) {
        self.elapsed += dt;
    }
}

/// Accumulates variable frame times and releases them as whole fixed steps.
///
/// The accumulator lives in the value, so each frame loop owns its own clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    step: f64,
    accumulator: f64,
    max_steps: usize,
}

impl FixedTimestep {
    /// Default cap on steps released by a single frame.
    pub const DEFAULT_MAX_STEPS: usize = 8;

    pub fn new(step: f64) -> Self {
        assert!(step > 0.0, "Fixed timestep must be positive");
        Self {
            step,
            accumulator: 0.0,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    /// Builds a timestep from an update rate in Hz.
    pub fn from_rate(hz: f64) -> Self {
        Self::new(1.0 / hz)
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Adds `frame_dt` seconds and returns how many fixed steps are due.
    ///
    /// Time beyond `max_steps` steps is dropped rather than carried, so a long
    /// stall does not trigger a burst of catch-up updates.
    pub fn advance(&mut self, frame_dt: f64) -> usize {
        self.accumulator += frame_dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_steps && self.accumulator >= self.step {
            log::debug!(
                "dropping {:.4}s of accumulated frame time",
                self.accumulator - self.accumulator % self.step
            );
            self.accumulator %= self.step;
        }
        steps
    }

    /// Interpolation factor in `[0, 1)` between the last two fixed steps.
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
