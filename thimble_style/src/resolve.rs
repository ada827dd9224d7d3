// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation target resolution.
//!
//! Pure functions from `(TouchState, toggle, &TouchConfig)` to the visual
//! target and animation parameters a host should apply. Nothing here caches:
//! resolution is cheap and re-run per event, so replacing the configuration
//! snapshot between events takes effect immediately.

use crate::config::TouchConfig;
use crate::easing::Easing;
use crate::target::{TouchState, VisualTarget};

/// How many times a pulse animation repeats.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RepeatCount {
    /// A fixed number of passes.
    Times(u32),
    /// Repeat until interrupted.
    Forever,
}

/// Repeat behavior of a resolved animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Repeat {
    /// Apply the animation once, forward only.
    Once,
    /// Run forward then backward, the given number of passes.
    AutoReverse(RepeatCount),
}

/// A fully resolved animation: what to animate toward and how.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedAnimation<'a> {
    /// The visual parameters to animate toward.
    pub target: &'a VisualTarget,
    /// Animation duration in milliseconds; 0 means apply instantaneously.
    pub duration_ms: u64,
    /// Easing curve for the animation.
    pub easing: Easing,
    /// Repeat behavior derived from the configured pulse count.
    pub repeat: Repeat,
}

/// Returns the state whose target set applies, folding the toggle in.
///
/// A toggled-on element renders its pressed appearance at rest, so
/// `Some(true)` promotes Normal and Hovered to Pressed.
#[must_use]
pub fn effective_state(state: TouchState, toggle: Option<bool>) -> TouchState {
    if toggle == Some(true) {
        TouchState::Pressed
    } else {
        state
    }
}

/// Resolves the visual target for `state` with precedence
/// Pressed > Hovered > Normal, honoring the toggle.
#[must_use]
pub fn resolve_target<'a>(
    state: TouchState,
    toggle: Option<bool>,
    config: &'a TouchConfig,
) -> &'a VisualTarget {
    config.target(effective_state(state, toggle))
}

/// Resolves the animation duration for `state`.
///
/// A per-state duration wins when greater than zero; otherwise the global
/// duration applies, and zero means instantaneous.
#[must_use]
pub fn resolve_duration(state: TouchState, config: &TouchConfig) -> u64 {
    let per_state = config.state_duration(state);
    if per_state > 0 {
        per_state
    } else {
        config.animation_duration
    }
}

/// Resolves the easing curve for `state`.
///
/// A per-state easing wins when set; otherwise the global easing applies,
/// and linear is the final fallback.
#[must_use]
pub fn resolve_easing(state: TouchState, config: &TouchConfig) -> Easing {
    config
        .state_easing(state)
        .or(config.easing)
        .unwrap_or(Easing::Linear)
}

/// Maps the configured pulse count to repeat behavior.
///
/// Zero means a single forward application. One means one auto-reverse pass.
/// Greater counts mean that many auto-reverse passes, and negative counts
/// repeat forever.
#[must_use]
pub fn pulse_repeat(pulse_count: i32) -> Repeat {
    match pulse_count {
        0 => Repeat::Once,
        n if n < 0 => Repeat::AutoReverse(RepeatCount::Forever),
        n => Repeat::AutoReverse(RepeatCount::Times(n.unsigned_abs())),
    }
}

/// Resolves the complete animation for `state` in one call.
#[must_use]
pub fn resolve_animation<'a>(
    state: TouchState,
    toggle: Option<bool>,
    config: &'a TouchConfig,
) -> ResolvedAnimation<'a> {
    let effective = effective_state(state, toggle);
    ResolvedAnimation {
        target: config.target(effective),
        duration_ms: resolve_duration(effective, config),
        easing: resolve_easing(effective, config),
        repeat: pulse_repeat(config.pulse_count),
    }
}
