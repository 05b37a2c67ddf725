// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise-linear range mapping.
//!
//! ```
//! use swipedeck_motion::interpolate::{Extrapolate, Interpolation};
//!
//! // Drag offset → card rotation in degrees for a 400-wide screen.
//! let rotate = Interpolation::new([-800.0, 0.0, 800.0], [-120.0, 0.0, 120.0]).unwrap();
//! assert_eq!(rotate.map(400.0), 60.0);
//! assert_eq!(rotate.map(5_000.0), 120.0);
//!
//! let extended = rotate.with_extrapolate(Extrapolate::Extend);
//! assert_eq!(extended.map(1_600.0), 240.0);
//! ```

/// Behavior for inputs outside the first and last breakpoints.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Extrapolate {
    /// Hold the first/last output value.
    #[default]
    Clamp,
    /// Continue the first/last segment's slope.
    Extend,
}

/// Maps an input range onto an output range through `N` breakpoints.
///
/// Input breakpoints must be finite and strictly increasing; outputs are arbitrary finite values.
/// Mapping is allocation-free and suitable for per-event use.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interpolation<const N: usize> {
    input: [f64; N],
    output: [f64; N],
    extrapolate: Extrapolate,
}

impl<const N: usize> Interpolation<N> {
    /// Build a clamped interpolation.
    ///
    /// Returns `None` if fewer than two breakpoints are given, if any value is not finite, or if
    /// the input breakpoints are not strictly increasing.
    pub fn new(input: [f64; N], output: [f64; N]) -> Option<Self> {
        if N < 2 {
            return None;
        }
        if !input.iter().chain(output.iter()).all(|v| v.is_finite()) {
            return None;
        }
        if !input.windows(2).all(|w| w[0] < w[1]) {
            return None;
        }
        Some(Self {
            input,
            output,
            extrapolate: Extrapolate::Clamp,
        })
    }

    /// Replace the extrapolation mode.
    #[must_use]
    pub fn with_extrapolate(mut self, extrapolate: Extrapolate) -> Self {
        self.extrapolate = extrapolate;
        self
    }

    /// Lowest and highest output values reachable under [`Extrapolate::Clamp`].
    pub fn output_bounds(&self) -> (f64, f64) {
        self.output
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Map `x` through the breakpoints. `NaN` maps to `NaN`.
    pub fn map(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let last = N - 1;
        if x <= self.input[0] {
            return match self.extrapolate {
                Extrapolate::Clamp => self.output[0],
                Extrapolate::Extend => self.segment(0, x),
            };
        }
        if x >= self.input[last] {
            return match self.extrapolate {
                Extrapolate::Clamp => self.output[last],
                Extrapolate::Extend => self.segment(last - 1, x),
            };
        }
        // First segment whose upper breakpoint reaches x.
        let i = self.input[1..].iter().position(|&hi| x <= hi).unwrap_or(last - 1);
        self.segment(i, x)
    }

    fn segment(&self, i: usize, x: f64) -> f64 {
        let (x0, x1) = (self.input[i], self.input[i + 1]);
        let (y0, y1) = (self.output[i], self.output[i + 1]);
        y0 + (x - x0) * (y1 - y0) / (x1 - x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(width: f64) -> Interpolation<3> {
        Interpolation::new([-2.0 * width, 0.0, 2.0 * width], [-120.0, 0.0, 120.0]).unwrap()
    }

    #[test]
    fn rejects_degenerate_ranges() {
        assert!(Interpolation::new([0.0], [1.0]).is_none());
        assert!(Interpolation::new([0.0, 0.0], [0.0, 1.0]).is_none());
        assert!(Interpolation::new([1.0, 0.0], [0.0, 1.0]).is_none());
        assert!(Interpolation::new([0.0, f64::INFINITY], [0.0, 1.0]).is_none());
        assert!(Interpolation::new([0.0, 1.0], [f64::NAN, 1.0]).is_none());
    }

    #[test]
    fn maps_breakpoints_and_midpoints() {
        let r = rotation(400.0);
        assert_eq!(r.map(-800.0), -120.0);
        assert_eq!(r.map(0.0), 0.0);
        assert_eq!(r.map(800.0), 120.0);
        assert_eq!(r.map(-400.0), -60.0);
        assert_eq!(r.map(200.0), 30.0);
    }

    #[test]
    fn clamps_outside_range() {
        let r = rotation(400.0);
        assert_eq!(r.map(-1e9), -120.0);
        assert_eq!(r.map(1e9), 120.0);
        assert_eq!(r.output_bounds(), (-120.0, 120.0));
    }

    #[test]
    fn extends_outside_range() {
        let r = rotation(400.0).with_extrapolate(Extrapolate::Extend);
        assert_eq!(r.map(-1600.0), -240.0);
        assert_eq!(r.map(1600.0), 240.0);
    }

    // Monotonic outputs stay monotonic under the mapping.
    #[test]
    fn monotonic_and_bounded() {
        let r = rotation(375.0);
        let mut prev = f64::NEG_INFINITY;
        let mut x = -2_000.0;
        while x <= 2_000.0 {
            let v = r.map(x);
            assert!(v >= prev, "not monotonic at {x}");
            assert!((-120.0..=120.0).contains(&v), "out of bounds at {x}");
            prev = v;
            x += 7.5;
        }
    }

    #[test]
    fn uneven_segments() {
        let r = Interpolation::new([0.0, 10.0, 110.0], [0.0, 100.0, 200.0]).unwrap();
        assert_eq!(r.map(5.0), 50.0);
        assert_eq!(r.map(60.0), 150.0);
        assert!(r.map(f64::NAN).is_nan());
    }
}
