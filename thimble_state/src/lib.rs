// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thimble State: the touch interaction state machine.
//!
//! This crate normalizes heterogeneous pointer/touch/hover input into one
//! deterministic interaction state model: touch status, whole-gesture
//! interaction status, hover status, and toggle state, with movement
//! cancellation and long-press timing policy applied along the way.
//!
//! ## Design Philosophy
//!
//! - **Host-driven time**: every operation takes a `now` timestamp in
//!   milliseconds. The machine never reads a clock, so any event sequence
//!   is reproducible in a test without a scheduler.
//! - **Events out, commands elsewhere**: operations return an ordered
//!   buffer of [`StateEvent`]s. The hosting layer runs user-registered
//!   commands when it sees [`StateEvent::TapCompleted`] or
//!   [`StateEvent::LongPressCompleted`]; the machine never holds callables.
//! - **Fresh configuration per event**: operations take
//!   `&thimble_style::TouchConfig` by reference and nothing is cached, so
//!   replacing the snapshot takes effect on the very next event.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use thimble_state::{StateEvent, TouchStatus, TouchTracker};
//! use thimble_style::TouchConfig;
//!
//! let config = TouchConfig::default();
//! let mut tracker = TouchTracker::new();
//!
//! tracker.on_touch_down(&config, Point::new(10.0, 10.0), 1_000);
//! let events = tracker.on_touch_up(&config, 1_080);
//!
//! assert!(events.contains(&StateEvent::TapCompleted));
//! assert_eq!(tracker.touch_status(), TouchStatus::Completed);
//! ```
//!
//! Long-press detection is driven the same way: the host polls with the
//! current time (typically from its frame or timer callback) and the
//! machine fires at most once per touch session:
//!
//! ```rust
//! use kurbo::Point;
//! use thimble_state::{StateEvent, TouchTracker};
//! use thimble_style::TouchConfig;
//!
//! let config = TouchConfig::default(); // long press after 500 ms
//! let mut tracker = TouchTracker::new();
//!
//! tracker.on_touch_down(&config, Point::new(10.0, 10.0), 0);
//! assert!(tracker.poll(&config, 499).is_empty());
//! assert!(tracker.poll(&config, 500).contains(&StateEvent::LongPressCompleted));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std`
//! feature (default) or `libm` for float math in the style crate.

#![no_std]

extern crate alloc;

mod events;
pub mod machine;
pub mod movement;
mod session;
mod status;
pub mod trace;

pub use events::{StateEvent, StateEvents};
pub use machine::TouchTracker;
pub use movement::{max_axis_distance, should_cancel};
pub use session::TouchSession;
pub use status::{
    HoverStatus, TouchInteractionStatus, TouchStatus, derive_hover_state, derive_touch_state,
};
