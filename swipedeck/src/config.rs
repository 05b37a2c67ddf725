// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck configuration and validation.

use core::time::Duration;

use swipedeck_motion::{Easing, Interpolation, SpringConfig};
use thiserror::Error;

use crate::types::Direction;

/// Reasons a [`DeckConfig`] is rejected by [`DeckConfig::validate`].
#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Screen width is not finite or not positive.
    #[error("screen width must be finite and positive, got {0}")]
    ScreenWidth(f64),
    /// Threshold fraction is outside `(0, 1]`.
    #[error("swipe threshold fraction must be in (0, 1], got {0}")]
    ThresholdFraction(f64),
    /// Off-screen margin is not finite or negative.
    #[error("off-screen margin must be finite and non-negative, got {0}")]
    OffScreenMargin(f64),
    /// Stack step is not finite or negative.
    #[error("stack step must be finite and non-negative, got {0}")]
    StackStep(f64),
    /// Maximum rotation is not finite or negative.
    #[error("maximum rotation must be finite and non-negative, got {0}")]
    MaxRotation(f64),
    /// Rotation input range factor is not finite or not positive.
    #[error("rotation range factor must be finite and positive, got {0}")]
    RotationRange(f64),
    /// A spring has a non-finite or non-positive parameter.
    #[error("{0} spring parameters must be finite and positive")]
    Spring(&'static str),
    /// A spring is too stiff or too strongly damped for its mass to integrate stably.
    #[error("{0} spring is too stiff for its mass and would never settle")]
    UnstableSpring(&'static str),
}

/// Geometry and timing of a deck.
///
/// All distances are in the rendering surface's logical units (points, dips, pixels).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeckConfig {
    /// Width of the screen the deck is shown on.
    pub screen_width: f64,
    /// Fraction of [`screen_width`](Self::screen_width) a release must exceed to commit.
    pub swipe_threshold_fraction: f64,
    /// Extra travel beyond the screen edge for the off-screen animation.
    pub off_screen_margin: f64,
    /// Duration of the off-screen animation.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub swipe_duration: Duration,
    /// Easing of the off-screen animation.
    pub swipe_easing: Easing,
    /// Vertical offset between consecutive stacked cards.
    pub stack_step: f64,
    /// Rotation in degrees reached at the ends of the rotation input range.
    pub max_rotation_degrees: f64,
    /// The rotation input range is `±rotation_range_factor × screen_width`.
    pub rotation_range_factor: f64,
    /// Spring returning a card to rest after an inconclusive release.
    pub reset_spring: SpringConfig,
    /// Spring moving the stack up after a dismissal.
    pub settle_spring: SpringConfig,
}

impl Default for DeckConfig {
    /// A 375-wide phone screen; override [`screen_width`](Self::screen_width) from the platform.
    fn default() -> Self {
        Self {
            screen_width: 375.0,
            swipe_threshold_fraction: 0.25,
            off_screen_margin: 100.0,
            swipe_duration: Duration::from_millis(250),
            swipe_easing: Easing::EaseInOut,
            stack_step: 5.0,
            max_rotation_degrees: 120.0,
            rotation_range_factor: 2.0,
            reset_spring: SpringConfig::default(),
            settle_spring: SpringConfig::default(),
        }
    }
}

impl DeckConfig {
    /// Default configuration for a screen of the given width.
    pub fn for_screen_width(screen_width: f64) -> Self {
        Self {
            screen_width,
            ..Self::default()
        }
    }

    /// Replace the off-screen animation duration.
    #[must_use]
    pub fn with_swipe_duration(mut self, duration: Duration) -> Self {
        self.swipe_duration = duration;
        self
    }

    /// Replace the vertical step between stacked cards.
    #[must_use]
    pub fn with_stack_step(mut self, step: f64) -> Self {
        self.stack_step = step;
        self
    }

    /// Replace the commit threshold as a fraction of screen width.
    #[must_use]
    pub fn with_threshold_fraction(mut self, fraction: f64) -> Self {
        self.swipe_threshold_fraction = fraction;
        self
    }

    /// Check every parameter, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if !(self.screen_width.is_finite() && self.screen_width > 0.0) {
            return Err(ConfigError::ScreenWidth(self.screen_width));
        }
        if !(self.swipe_threshold_fraction > 0.0 && self.swipe_threshold_fraction <= 1.0) {
            return Err(ConfigError::ThresholdFraction(self.swipe_threshold_fraction));
        }
        if !finite_non_negative(self.off_screen_margin) {
            return Err(ConfigError::OffScreenMargin(self.off_screen_margin));
        }
        if !finite_non_negative(self.stack_step) {
            return Err(ConfigError::StackStep(self.stack_step));
        }
        if !finite_non_negative(self.max_rotation_degrees) {
            return Err(ConfigError::MaxRotation(self.max_rotation_degrees));
        }
        if !(self.rotation_range_factor.is_finite() && self.rotation_range_factor > 0.0) {
            return Err(ConfigError::RotationRange(self.rotation_range_factor));
        }
        for (name, spring) in [("reset", self.reset_spring), ("settle", self.settle_spring)] {
            if !spring.is_valid() {
                return Err(ConfigError::Spring(name));
            }
            if !spring.is_stable() {
                return Err(ConfigError::UnstableSpring(name));
            }
        }
        Ok(())
    }

    /// Horizontal release distance a swipe must exceed to commit.
    #[inline]
    pub fn swipe_threshold(&self) -> f64 {
        self.screen_width * self.swipe_threshold_fraction
    }

    /// Resting x of a card that has left the screen in `direction`.
    #[inline]
    pub fn off_screen_x(&self, direction: Direction) -> f64 {
        direction.sign() * (self.screen_width + self.off_screen_margin)
    }

    /// Drag offset x → rotation in degrees, clamped outside the input range.
    pub fn rotation(&self) -> Result<Interpolation<3>, ConfigError> {
        let reach = self.rotation_range_factor * self.screen_width;
        let max = self.max_rotation_degrees;
        Interpolation::new([-reach, 0.0, reach], [-max, 0.0, max])
            .ok_or(ConfigError::RotationRange(self.rotation_range_factor))
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(DeckConfig::default().validate(), Ok(()));
    }

    #[test]
    fn threshold_is_a_quarter_of_the_width() {
        let c = DeckConfig::for_screen_width(400.0);
        assert_eq!(c.swipe_threshold(), 100.0);
        assert_eq!(c.off_screen_x(Direction::Right), 500.0);
        assert_eq!(c.off_screen_x(Direction::Left), -500.0);
    }

    #[test]
    fn rotation_reaches_max_at_twice_the_width() {
        let r = DeckConfig::for_screen_width(400.0).rotation().unwrap();
        assert_eq!(r.map(-800.0), -120.0);
        assert_eq!(r.map(800.0), 120.0);
        assert_eq!(r.map(0.0), 0.0);
    }

    #[test]
    fn rejects_bad_parameters() {
        let base = DeckConfig::default();
        assert_eq!(
            DeckConfig::for_screen_width(0.0).validate(),
            Err(ConfigError::ScreenWidth(0.0))
        );
        assert!(matches!(
            DeckConfig::for_screen_width(f64::NAN).validate(),
            Err(ConfigError::ScreenWidth(_))
        ));
        assert_eq!(
            base.with_threshold_fraction(1.5).validate(),
            Err(ConfigError::ThresholdFraction(1.5))
        );
        assert_eq!(
            base.with_stack_step(-1.0).validate(),
            Err(ConfigError::StackStep(-1.0))
        );
        let bad_spring = DeckConfig {
            settle_spring: SpringConfig {
                stiffness: 0.0,
                ..SpringConfig::default()
            },
            ..base
        };
        assert_eq!(bad_spring.validate(), Err(ConfigError::Spring("settle")));
    }

    #[test]
    fn rejects_springs_that_cannot_settle() {
        let stiff = DeckConfig {
            reset_spring: SpringConfig {
                stiffness: 1.0e8,
                ..SpringConfig::default()
            },
            ..DeckConfig::default()
        };
        assert_eq!(stiff.validate(), Err(ConfigError::UnstableSpring("reset")));
    }

    #[test]
    fn error_messages_name_the_value() {
        let msg = ConfigError::ScreenWidth(-3.0).to_string();
        assert!(msg.contains("-3"), "{msg}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_milliseconds_and_defaults() {
        let c: DeckConfig =
            serde_json::from_str(r#"{ "screen_width": 400.0, "swipe_duration": 300 }"#).unwrap();
        assert_eq!(c.screen_width, 400.0);
        assert_eq!(c.swipe_duration, Duration::from_millis(300));
        assert_eq!(c.stack_step, 5.0);
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["swipe_duration"], 300);
    }
}
