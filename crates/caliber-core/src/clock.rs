//! The movement's simulation clock.
//!
//! [`MovementClock`] owns the single scalar the whole kinematic model is a
//! function of: elapsed simulated seconds. It advances once per rendered
//! frame by `frame_delta * speed` while running, and is monotonic
//! non-decreasing for the life of the instance. There is no reset; a fresh
//! clock is created only on full reinitialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Speed multiplier bounds exposed to the UI slider.
pub const MIN_SPEED: f32 = 0.1;
pub const MAX_SPEED: f32 = 5.0;

// ---------------------------------------------------------------------------
// MovementClock
// ---------------------------------------------------------------------------

/// Frame-driven simulation clock.
///
/// # Example
///
/// ```
/// use caliber_core::clock::MovementClock;
///
/// let mut clock = MovementClock::default();
/// clock.tick(0.5);
/// assert!((clock.elapsed() - 0.5).abs() < 1e-12);
///
/// clock.set_running(false);
/// clock.tick(10.0);
/// assert!((clock.elapsed() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct MovementClock {
    elapsed: f64,
    running: bool,
    speed: f32,
}

impl Default for MovementClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            running: true,
            speed: 1.0,
        }
    }
}

impl MovementClock {
    /// Create a clock at `t = 0` with the given run state and speed.
    ///
    /// `speed` is clamped to `[MIN_SPEED, MAX_SPEED]`.
    #[must_use]
    pub fn new(running: bool, speed: f32) -> Self {
        Self {
            elapsed: 0.0,
            running,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    /// Elapsed simulated seconds.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether the clock is advancing.
    #[must_use]
    pub const fn running(&self) -> bool {
        self.running
    }

    /// Current speed multiplier.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Start or stop the clock. Stopping freezes `elapsed`; restarting
    /// resumes from the frozen value.
    pub const fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Set the speed multiplier, clamped to `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Advance by one frame of `frame_delta` wall-clock seconds.
    ///
    /// No-op while stopped. Negative deltas are ignored so the clock stays
    /// monotonic.
    pub fn tick(&mut self, frame_delta: f64) {
        if self.running && frame_delta > 0.0 {
            self.elapsed += frame_delta * f64::from(self.speed);
        }
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// System advancing the clock by the frame delta. Runs in
/// [`CaliberSet::Tick`](crate::CaliberSet::Tick).
#[allow(clippy::needless_pass_by_value)]
pub fn tick_clock(time: Res<Time>, mut clock: ResMut<MovementClock>) {
    clock.tick(f64::from(time.delta_secs()));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
