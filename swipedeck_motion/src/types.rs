// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by the animations: the animatable value contract and per-frame steps.

use core::ops::{Add, Mul, Sub};

use kurbo::Vec2;

/// A value that can be driven by an animation.
///
/// Animations only need vector-space arithmetic and a magnitude to decide when
/// a spring has come to rest.
pub trait Animatable:
    Copy + core::fmt::Debug + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// The additive identity (rest position).
    const ZERO: Self;

    /// Euclidean magnitude of the value.
    fn magnitude(self) -> f64;

    /// Linear blend from `self` to `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Animatable for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl Animatable for Vec2 {
    const ZERO: Self = Self::new(0.0, 0.0);

    #[inline]
    fn magnitude(self) -> f64 {
        self.length()
    }
}

/// Result of advancing an animation by one frame.
///
/// Returned by [`Timing::step`](crate::timing::Timing::step) and
/// [`Spring::step`](crate::spring::Spring::step).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step<T> {
    /// Value to present for this frame.
    pub value: T,
    /// True once the animation has reached its target; `value` is then exactly the target.
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(100.0, -10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(50.0, 0.0));
        assert_eq!(2.0_f64.lerp(4.0, 0.25), 2.5);
    }

    #[test]
    fn magnitude_is_non_negative() {
        assert_eq!((-3.0_f64).magnitude(), 3.0);
        assert_eq!(Vec2::new(3.0, -4.0).magnitude(), 5.0);
        assert_eq!(<Vec2 as Animatable>::ZERO.magnitude(), 0.0);
    }
}
