// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damped spring animation.
//!
//! ## Model
//!
//! A mass on a spring with viscous damping, pulled toward `target`:
//! `a = (-stiffness · (x − target) − damping · v) / mass`.
//!
//! There is no fixed duration. The spring integrates in sub-steps of at most one millisecond
//! (semi-implicit Euler) and settles once both its displacement from the target and its speed
//! fall under the configured rest thresholds; the settling frame snaps exactly to the target.
//!
//! ```
//! use core::time::Duration;
//! use swipedeck_motion::spring::{Spring, SpringConfig};
//!
//! let mut s = Spring::new(80.0_f64, 0.0, SpringConfig::default());
//! let mut frames = 0;
//! while !s.step(Duration::from_millis(16)).finished {
//!     frames += 1;
//!     assert!(frames < 1_000);
//! }
//! assert_eq!(s.value(), 0.0);
//! ```

use core::time::Duration;

use crate::types::{Animatable, Step};

/// Upper bound on a single integration step, in seconds.
const MAX_SUBSTEP: f64 = 0.001;

/// Physical parameters of a [`Spring`].
///
/// The defaults correspond to a tension of 40 and friction of 7 in the origami
/// parameterization: a quick, slightly bouncy return.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpringConfig {
    /// Spring constant. Higher is snappier.
    pub stiffness: f64,
    /// Viscous damping coefficient. Higher oscillates less.
    pub damping: f64,
    /// Mass attached to the spring.
    pub mass: f64,
    /// Distance from the target under which the spring may settle.
    pub rest_displacement: f64,
    /// Speed under which the spring may settle.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }
}

impl SpringConfig {
    /// True when every parameter is finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_displacement,
            self.rest_speed,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0)
    }

    /// True when the fixed integration sub-step converges for these parameters.
    ///
    /// Semi-implicit Euler with step `h` is stable while
    /// `(h²·stiffness + 2h·damping) / mass < 4`. Outside that region the value grows without
    /// bound and never settles.
    pub fn is_stable(&self) -> bool {
        let h = MAX_SUBSTEP;
        (h * h * self.stiffness + 2.0 * h * self.damping) / self.mass < 4.0
    }
}

/// A spring pulling a value toward a target.
#[derive(Clone, Debug)]
pub struct Spring<T> {
    value: T,
    velocity: T,
    target: T,
    config: SpringConfig,
    settled: bool,
}

impl<T: Animatable> Spring<T> {
    /// Create a spring at rest at `from`, pulled toward `target`.
    pub fn new(from: T, target: T, config: SpringConfig) -> Self {
        Self {
            value: from,
            velocity: T::ZERO,
            target,
            config,
            settled: false,
        }
    }

    /// Start with an initial velocity (units per second).
    #[must_use]
    pub fn with_velocity(mut self, velocity: T) -> Self {
        self.velocity = velocity;
        self
    }

    /// Current value.
    pub fn value(&self) -> T {
        self.value
    }

    /// Current velocity (units per second).
    pub fn velocity(&self) -> T {
        self.velocity
    }

    /// Target value.
    pub fn target(&self) -> T {
        self.target
    }

    /// True once the spring has come to rest on its target.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance by `dt` and return the value for this frame.
    pub fn step(&mut self, dt: Duration) -> Step<T> {
        if !self.settled {
            let mut remaining = dt.as_secs_f64();
            while remaining > 0.0 {
                let h = remaining.min(MAX_SUBSTEP);
                self.integrate(h);
                remaining -= h;
                if self.at_rest() {
                    self.settle();
                    break;
                }
            }
            // A zero-length frame can still observe a spring that started at rest.
            if !self.settled && self.at_rest() {
                self.settle();
            }
        }
        Step {
            value: self.value,
            finished: self.settled,
        }
    }

    fn integrate(&mut self, h: f64) {
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        let displacement = self.value - self.target;
        let accel = (displacement * -stiffness - self.velocity * damping) * (1.0 / mass);
        self.velocity = self.velocity + accel * h;
        self.value = self.value + self.velocity * h;
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).magnitude() < self.config.rest_displacement
            && self.velocity.magnitude() < self.config.rest_speed
    }

    fn settle(&mut self) {
        self.value = self.target;
        self.velocity = T::ZERO;
        self.settled = true;
    }
}
