// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thimble Style: per-state visual targets and animation target resolution.
//!
//! This crate holds the visual half of touch interaction feedback: the
//! configuration snapshot describing how an element should look in each
//! interaction state, and the pure resolver that turns a state into the
//! visual parameters and animation timing a host should apply.
//!
//! ## Core Concepts
//!
//! ### Configuration Snapshot
//!
//! [`TouchConfig`] is a per-element record of visual targets for the
//! Normal, Hovered, and Pressed states plus timing, easing, long-press,
//! movement-threshold, pulse, and native-ripple settings. It is immutable
//! at read time: replace the snapshot to reconfigure, and the next event
//! resolves against the new values.
//!
//! ```rust
//! use thimble_style::{durations, Easing, TouchConfig, TouchState};
//!
//! let config = TouchConfig::builder()
//!     .opacity(TouchState::Pressed, 0.7)
//!     .scale(TouchState::Pressed, 0.95)
//!     .animation_duration(durations::FAST)
//!     .easing(Easing::CubicOut)
//!     .build();
//! assert_eq!(config.pressed.scale, 0.95);
//! ```
//!
//! ### Resolution
//!
//! [`resolve_animation`] maps `(TouchState, toggle, &TouchConfig)` to a
//! [`ResolvedAnimation`]: the target to animate toward, the duration and
//! easing to use, and the pulse repeat behavior. Precedence is
//! Pressed > Hovered > Normal, and a toggled-on element renders its
//! pressed appearance at rest.
//!
//! ```rust
//! use thimble_style::{resolve_animation, TouchConfig, TouchState};
//!
//! let config = TouchConfig::builder()
//!     .opacity(TouchState::Pressed, 0.7)
//!     .build();
//!
//! let resting = resolve_animation(TouchState::Normal, Some(true), &config);
//! assert_eq!(resting.target.opacity, 0.7); // toggled on: pressed at rest
//! ```
//!
//! ### Presets
//!
//! The [`presets`] module carries ready-made configurations for buttons,
//! cards, list items, icon buttons, toggles, images, native ripple, and a
//! few special effects.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std`. Easing evaluation needs float math; enable
//! either the `std` feature (default) or the `libm` feature.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("thimble_style requires either the `std` or `libm` feature");

mod config;
mod easing;
pub mod presets;
mod resolve;
mod target;

pub use config::{TouchConfig, TouchConfigBuilder, defaults, durations};
pub use easing::Easing;
pub use resolve::{
    Repeat, RepeatCount, ResolvedAnimation, effective_state, pulse_repeat, resolve_animation,
    resolve_duration, resolve_easing, resolve_target,
};
pub use target::{BackgroundImage, HoverState, ImageAspect, ImageSwap, TouchState, VisualTarget};
