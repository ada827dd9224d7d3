// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for feedback animations.
//!
//! Each curve maps animation progress `t` in `[0, 1]` to an eased progress
//! value. Curves are plain data so they can live inside a
//! [`TouchConfig`](crate::TouchConfig) and be resolved per state; evaluation
//! happens wherever the host drives its animation frames.
//!
//! The curve set mirrors the easings commonly offered by mobile UI toolkits:
//! sine and cubic families, bounce, and an overshooting "spring" pair.

use core::f64::consts::{FRAC_PI_2, PI};

#[cfg(feature = "std")]
#[inline]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn sin(x: f64) -> f64 {
    libm::sin(x)
}

#[cfg(feature = "std")]
#[inline]
fn cos(x: f64) -> f64 {
    x.cos()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn cos(x: f64) -> f64 {
    libm::cos(x)
}

/// Overshoot factor for the spring curves.
const SPRING_TENSION: f64 = 1.70158;

/// An easing curve for feedback animations.
///
/// `ease(0.0) == 0.0` and `ease(1.0) == 1.0` for every curve; spring curves
/// may leave `[0, 1]` in between (that overshoot is the point).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,
    /// Sinusoidal start.
    SinIn,
    /// Sinusoidal finish.
    SinOut,
    /// Sinusoidal start and finish.
    SinInOut,
    /// Cubic acceleration from rest.
    CubicIn,
    /// Cubic deceleration to rest.
    CubicOut,
    /// Smoothstep: cubic acceleration and deceleration.
    CubicInOut,
    /// Bounces away from the start.
    BounceIn,
    /// Bounces into the finish.
    BounceOut,
    /// Pulls back past the start before accelerating.
    SpringIn,
    /// Overshoots the finish before settling.
    SpringOut,
}

impl Easing {
    /// Evaluates the curve at progress `t`.
    ///
    /// `t` is expected in `[0, 1]`; values outside are evaluated as-is
    /// (hosts clamping is cheaper than clamping here twice).
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SinIn => 1.0 - cos(t * FRAC_PI_2),
            Self::SinOut => sin(t * FRAC_PI_2),
            Self::SinInOut => -(cos(PI * t) - 1.0) / 2.0,
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::CubicInOut => t * t * (3.0 - 2.0 * t),
            Self::BounceIn => 1.0 - bounce_out(1.0 - t),
            Self::BounceOut => bounce_out(t),
            Self::SpringIn => t * t * ((SPRING_TENSION + 1.0) * t - SPRING_TENSION),
            Self::SpringOut => {
                let u = t - 1.0;
                u * u * ((SPRING_TENSION + 1.0) * u + SPRING_TENSION) + 1.0
            }
        }
    }
}

/// Piecewise bounce curve (Penner `bounceOut`).
fn bounce_out(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let u = t - 1.5 / D;
        N * u * u + 0.75
    } else if t < 2.5 / D {
        let u = t - 2.25 / D;
        N * u * u + 0.9375
    } else {
        let u = t - 2.625 / D;
        N * u * u + 0.984375
    }
}
