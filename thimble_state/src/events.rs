// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition events emitted by the state machine.

use smallvec::SmallVec;
use thimble_style::{HoverState, TouchState};

use crate::status::{HoverStatus, TouchInteractionStatus, TouchStatus};

/// A single state transition, in the order it occurred.
///
/// The hosting layer consumes these to run user-registered commands, update
/// two-way bindings, and re-resolve visuals. Command-bearing events
/// ([`TapCompleted`](Self::TapCompleted),
/// [`LongPressCompleted`](Self::LongPressCompleted)) are emitted exactly
/// once per qualifying gesture; the host invokes the matching callable with
/// its parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateEvent {
    /// The touch status changed.
    TouchStatusChanged(TouchStatus),
    /// The whole-gesture interaction status changed.
    InteractionStatusChanged(TouchInteractionStatus),
    /// The hover status changed.
    HoverStatusChanged(HoverStatus),
    /// The derived coarse visual state changed.
    TouchStateChanged(TouchState),
    /// The derived hover visual state changed.
    HoverStateChanged(HoverState),
    /// The toggle flipped to the carried value.
    ToggleChanged(bool),
    /// A tap completed in bounds; invoke the tap command once.
    TapCompleted,
    /// The long-press duration elapsed with the touch still live; invoke the
    /// long-press command once.
    LongPressCompleted,
}

/// Ordered buffer of transitions produced by one machine operation.
///
/// Most operations emit at most a handful of events, so the buffer is
/// inline-allocated.
pub type StateEvents = SmallVec<[StateEvent; 6]>;
