//! Tweened values for scroll motion.
//!
//! Time is in milliseconds of virtual clock, advanced by the caller.

use serde::{Deserialize, Serialize};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-in-out, the curve browsers use for `behavior: 'smooth'`.
    #[default]
    EaseInOutCubic,
    /// Exponential ease-out (sharp snap to target).
    ExponentialOut,
    /// Instant (no animation), for reduced-motion setups.
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    current: f64,
    target: f64,
    start: f64,
    /// Progress (0-1), derived from elapsed time so frames sum exactly.
    progress: f64,
    elapsed_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Animation {
    /// Creates an animation resting at `value`.
    #[must_use]
    pub fn new(value: f64, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            progress: 1.0,
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            easing,
        }
    }

    /// Sets the duration of subsequent transitions.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.current
    }

    /// Returns the value being animated towards.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Starts a transition from the current value to `target`.
    pub fn set_target(&mut self, target: f64) {
        self.start = self.current;
        self.target = target;
        self.elapsed_ms = 0.0;
        self.progress = if (target - self.current).abs() > f64::EPSILON {
            0.0
        } else {
            1.0
        };
    }

    /// Advances by `dt_ms`. The final step lands exactly on the target.
    pub fn update(&mut self, dt_ms: f64) {
        if self.progress >= 1.0 {
            return;
        }

        self.elapsed_ms += dt_ms;
        if self.duration_ms > 0.0 {
            self.progress = (self.elapsed_ms / self.duration_ms).min(1.0);
        } else {
            self.progress = 1.0;
        }

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::default())
    }
}
