// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-duration animations.

use core::time::Duration;

use crate::types::{Animatable, Step};

/// Progress curve applied to normalized time in `[0, 1]`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    EaseOut,
    /// Cubic acceleration then deceleration.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map normalized time `t` to normalized progress.
    ///
    /// `t` is clamped to `[0, 1]`; every curve maps `0 → 0` and `1 → 1`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Interpolates from `from` to `to` over a fixed duration.
///
/// Advance with [`Timing::step`] once per frame. The final step reports
/// `finished` and yields exactly `to`.
#[derive(Clone, Debug)]
pub struct Timing<T> {
    from: T,
    to: T,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl<T: Animatable> Timing<T> {
    /// Create a timing animation with the default [`Easing`].
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    /// Replace the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Target value.
    pub fn target(&self) -> T {
        self.to
    }

    /// Normalized time in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Advance by `dt` and return the value for this frame.
    pub fn step(&mut self, dt: Duration) -> Step<T> {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        let t = self.progress();
        if t >= 1.0 {
            return Step {
                value: self.to,
                finished: true,
            };
        }
        Step {
            value: self.from.lerp(self.to, self.easing.apply(t)),
            finished: false,
        }
    }
}
