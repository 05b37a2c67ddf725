// Copyright 2025 the Swipedeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipedeck Motion: frame-driven animation primitives for gesture UIs.
//!
//! ## Overview
//!
//! This crate provides the small set of building blocks a gesture-driven widget needs to move
//! something on screen and keep its observers in sync.
//!
//! - [`AnimatedValue`](crate::value::AnimatedValue): a value cell with a subscribe-on-change contract.
//! - [`Timing`](crate::timing::Timing): fixed-duration interpolation with an [`Easing`](crate::timing::Easing) curve.
//! - [`Spring`](crate::spring::Spring): a damped spring with no fixed duration that settles on its own.
//! - [`Interpolation`](crate::interpolate::Interpolation): piecewise-linear mapping between ranges,
//!   clamped or extended past the outer breakpoints.
//!
//! Nothing here owns a clock. Hosts call `step(dt)` once per animation frame with the elapsed
//! time and apply the returned [`Step`](crate::types::Step) to whatever value they animate.
//!
//! Values are anything implementing [`Animatable`](crate::types::Animatable); `f64` and
//! [`kurbo::Vec2`] are provided.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Vec2;
//! use swipedeck_motion::timing::{Easing, Timing};
//! use swipedeck_motion::value::AnimatedValue;
//!
//! let mut position = AnimatedValue::new(Vec2::ZERO);
//! let mut anim = Timing::new(Vec2::ZERO, Vec2::new(500.0, 0.0), Duration::from_millis(250))
//!     .with_easing(Easing::Linear);
//!
//! let step = anim.step(Duration::from_millis(125));
//! position.set(step.value);
//! assert_eq!(position.get(), Vec2::new(250.0, 0.0));
//! assert!(!step.finished);
//!
//! let step = anim.step(Duration::from_millis(125));
//! position.set(step.value);
//! assert!(step.finished);
//! ```

pub mod interpolate;
pub mod spring;
pub mod timing;
pub mod types;
pub mod value;

pub use interpolate::{Extrapolate, Interpolation};
pub use spring::{Spring, SpringConfig};
pub use timing::{Easing, Timing};
pub use types::{Animatable, Step};
pub use value::{AnimatedValue, SubscriptionId};
