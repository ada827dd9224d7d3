// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transient record of one touch-down-to-touch-end lifetime.

use kurbo::Point;
use thimble_timing::OneShot;

/// One live touch interaction, created at touch-down and closed at the final
/// release or cancellation.
///
/// Exactly one session is live per element at a time; a second down while
/// one is live is ignored. The `ended` guard makes the terminal handlers
/// idempotent: whichever of release, cancellation, or a racing timer fire
/// closes the session first wins, and the rest are no-ops.
#[derive(Debug)]
pub struct TouchSession {
    pub(crate) start: Point,
    pub(crate) inside_bounds: bool,
    pub(crate) long_press: OneShot,
    pub(crate) ended: bool,
}

impl TouchSession {
    /// Opens a session at the initial contact point.
    #[must_use]
    pub(crate) fn begin(start: Point) -> Self {
        Self {
            start,
            inside_bounds: true,
            long_press: OneShot::new(),
            ended: false,
        }
    }

    /// The initial contact point.
    #[must_use]
    pub fn start_point(&self) -> Point {
        self.start
    }

    /// Whether the contact was inside the element's bounds at the last move.
    #[must_use]
    pub fn is_inside_bounds(&self) -> bool {
        self.inside_bounds
    }

    /// Whether a long-press timer is pending for this session.
    #[must_use]
    pub fn long_press_armed(&self) -> bool {
        self.long_press.is_armed()
    }
}
