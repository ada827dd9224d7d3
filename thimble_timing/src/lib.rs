// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thimble Timing: host-agnostic cancelable timer primitives.
//!
//! This crate provides [`OneShot`], a single-shot delayed action used for
//! long-press detection. It holds no threads, no clocks, and no callbacks:
//! the host owns time and drives the timer by passing millisecond timestamps,
//! which keeps behavior identical across platforms and makes every sequence
//! testable without a scheduler.
//!
//! ## Semantics
//!
//! - [`OneShot::arm`] schedules a deadline `duration_ms` after `now`.
//!   Re-arming before the deadline cancels the pending cycle first; there is
//!   never more than one pending deadline.
//! - [`OneShot::cancel`] disarms the timer. A canceled cycle can never fire.
//! - [`OneShot::poll`] fires at most once per arm cycle. Whether a cycle
//!   fires or is canceled is decided at a single point, so a cancel racing a
//!   near-simultaneous elapse resolves deterministically: whichever call
//!   runs first wins and the other is a no-op.
//! - Hosts that hand the elapse to an external scheduler can capture the
//!   [`ArmToken`] returned by `arm` and later call [`OneShot::try_fire`];
//!   a stale token (from a canceled or re-armed cycle) never fires.
//!
//! ## Minimal example
//!
//! ```
//! use thimble_timing::OneShot;
//!
//! let mut timer = OneShot::new();
//! timer.arm(1_000, 500);
//!
//! assert!(!timer.poll(1_400)); // not yet elapsed
//! assert!(timer.poll(1_500));  // fires exactly once
//! assert!(!timer.poll(1_500)); // single-shot: already fired
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// Identifies one arm cycle of a [`OneShot`] timer.
///
/// Tokens from canceled or superseded cycles are stale and will never fire
/// via [`OneShot::try_fire`]. This follows the generation-counter pattern:
/// the counter only moves forward, so a stale token can never alias a newer
/// cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArmToken(u32);

/// A single-shot, cancelable delayed action driven by host timestamps.
///
/// All timestamps and durations are in milliseconds on a host-chosen
/// monotonic scale. The timer never reads a clock itself.
#[derive(Debug, Clone, Default)]
pub struct OneShot {
    /// Pending deadline, if armed.
    deadline: Option<u64>,
    /// Arm-cycle generation; bumped on every arm, cancel, and fire.
    generation: u32,
}

impl OneShot {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deadline: None,
            generation: 0,
        }
    }

    /// Arms the timer to elapse `duration_ms` after `now`.
    ///
    /// Any pending cycle is canceled first; the returned token identifies
    /// the new cycle only.
    pub fn arm(&mut self, now: u64, duration_ms: u64) -> ArmToken {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now.saturating_add(duration_ms));
        ArmToken(self.generation)
    }

    /// Cancels the pending cycle, if any.
    ///
    /// Canceling a disarmed timer is a no-op. After cancellation the cycle
    /// can never fire, even if its deadline has already passed.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }

    /// Fires the timer if armed and `now` has reached the deadline.
    ///
    /// Returns `true` at most once per arm cycle; firing disarms the timer.
    pub fn poll(&mut self, now: u64) -> bool {
        // Single decision point: armed-ness is checked and consumed together.
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            self.deadline = None;
            self.generation = self.generation.wrapping_add(1);
            return true;
        }
        false
    }

    /// Fires the timer if `token` still identifies the pending cycle and
    /// `now` has reached the deadline.
    ///
    /// Intended for hosts that schedule the elapse externally and marshal it
    /// back to the owning thread: the scheduled callback captures the token,
    /// and a cancel or re-arm that happened in between makes it stale.
    pub fn try_fire(&mut self, now: u64, token: ArmToken) -> bool {
        if token.0 == self.generation {
            self.poll(now)
        } else {
            false
        }
    }

    /// Returns `true` while a cycle is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the pending deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns the time remaining until the deadline, if armed.
    ///
    /// Returns `Some(0)` when the deadline has passed but [`OneShot::poll`]
    /// has not yet been called.
    #[must_use]
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.deadline.map(|d| d.saturating_sub(now))
    }
}
