// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interaction state machine.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect};
use thimble_style::{HoverState, TouchConfig, TouchState};

use crate::events::{StateEvent, StateEvents};
use crate::movement::should_cancel;
use crate::session::TouchSession;
use crate::status::{
    HoverStatus, TouchInteractionStatus, TouchStatus, derive_hover_state, derive_touch_state,
};
use crate::trace::TransitionTrace;

/// Tracks touch, interaction, hover, and toggle state for one element.
///
/// All operations take the current [`TouchConfig`] by reference and a `now`
/// timestamp in milliseconds on a host-chosen monotonic scale, and return
/// the ordered transitions they caused. The machine is single-threaded per
/// element: the host delivers events and timer polls on one logical thread.
///
/// Invalid-state events (a move with no prior down, a second release) are
/// no-ops that return an empty buffer.
#[derive(Default)]
pub struct TouchTracker {
    touch_status: TouchStatus,
    interaction_status: TouchInteractionStatus,
    hover_status: HoverStatus,
    toggle: Option<bool>,
    session: Option<TouchSession>,
    /// Set once the input stream proves hover-capable; gates hover syncing
    /// on bounds crossings during a touch.
    hover_seen: bool,
    trace: Option<Box<dyn TransitionTrace>>,
}

impl fmt::Debug for TouchTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchTracker")
            .field("touch_status", &self.touch_status)
            .field("interaction_status", &self.interaction_status)
            .field("hover_status", &self.hover_status)
            .field("toggle", &self.toggle)
            .field("session", &self.session)
            .field("hover_seen", &self.hover_seen)
            .finish_non_exhaustive()
    }
}

impl TouchTracker {
    /// Creates an idle machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a touch session at `point`.
    ///
    /// No-op while the element is unavailable or a session is already live.
    /// Arms the long-press timer when the configured duration is nonzero.
    pub fn on_touch_down(&mut self, config: &TouchConfig, point: Point, now: u64) -> StateEvents {
        let mut events = StateEvents::new();
        if !config.is_available || self.session.is_some() {
            return events;
        }

        let mut session = TouchSession::begin(point);
        if config.long_press_duration > 0 {
            session.long_press.arm(now, config.long_press_duration);
        }
        self.session = Some(session);

        self.set_interaction_status(config, TouchInteractionStatus::Started, now, &mut events);
        self.set_touch_status(config, TouchStatus::Started, now, &mut events);
        events
    }

    /// Tracks contact movement against `bounds`.
    ///
    /// Cancels the whole interaction when the movement policy fires.
    /// Otherwise a bounds crossing toggles the touch status between Started
    /// and Canceled without closing the session or touching the long-press
    /// timer, so visuals reset while the finger is outside and restore if it
    /// returns before release. On hover-capable streams the hover status is
    /// kept in sync with the crossing.
    pub fn on_touch_move(
        &mut self,
        config: &TouchConfig,
        point: Point,
        bounds: Rect,
        now: u64,
    ) -> StateEvents {
        let (start, was_inside) = match &self.session {
            Some(session) if !session.ended => (session.start, session.inside_bounds),
            _ => return StateEvents::new(),
        };

        if should_cancel(start, point, config.disallow_touch_threshold) {
            return self.on_touch_cancel(config, now);
        }

        let mut events = StateEvents::new();
        let inside = bounds.contains(point);
        if inside != was_inside {
            if let Some(session) = self.session.as_mut() {
                session.inside_bounds = inside;
            }
            if self.hover_seen {
                let hover = if inside {
                    HoverStatus::Entered
                } else {
                    HoverStatus::Exited
                };
                self.set_hover_status(config, hover, now, &mut events);
            }
            let status = if inside {
                TouchStatus::Started
            } else {
                TouchStatus::Canceled
            };
            self.set_touch_status(config, status, now, &mut events);
        }
        events
    }

    /// Releases the contact.
    ///
    /// Resolves to Completed when the touch was still valid, Canceled
    /// otherwise. On completion the toggle flips (when set) and
    /// [`StateEvent::TapCompleted`] is emitted exactly once. Idempotent:
    /// a release with no live session is a no-op.
    pub fn on_touch_up(&mut self, config: &TouchConfig, now: u64) -> StateEvents {
        let resolved = if self.touch_status == TouchStatus::Started {
            TouchStatus::Completed
        } else {
            TouchStatus::Canceled
        };
        self.end_session(config, resolved, now)
    }

    /// Aborts the interaction. Never emits a tap. Idempotent.
    pub fn on_touch_cancel(&mut self, config: &TouchConfig, now: u64) -> StateEvents {
        self.end_session(config, TouchStatus::Canceled, now)
    }

    /// Records the pointer entering the element without contact.
    ///
    /// Ignored while the element is unavailable. Hover is independent of
    /// the touch session.
    pub fn on_hover_enter(&mut self, config: &TouchConfig, now: u64) -> StateEvents {
        self.hover_seen = true;
        let mut events = StateEvents::new();
        if config.is_available {
            self.set_hover_status(config, HoverStatus::Entered, now, &mut events);
        }
        events
    }

    /// Records the pointer leaving the element.
    pub fn on_hover_exit(&mut self, config: &TouchConfig, now: u64) -> StateEvents {
        self.hover_seen = true;
        let mut events = StateEvents::new();
        if config.is_available {
            self.set_hover_status(config, HoverStatus::Exited, now, &mut events);
        }
        events
    }

    /// Drives the long-press timer.
    ///
    /// Emits [`StateEvent::LongPressCompleted`] at most once per session,
    /// when the timer elapses with the touch still valid. The session
    /// continues; a normal release may still complete a tap afterwards.
    pub fn poll(&mut self, _config: &TouchConfig, now: u64) -> StateEvents {
        let mut events = StateEvents::new();
        let fired = match self.session.as_mut() {
            Some(session) if !session.ended => session.long_press.poll(now),
            _ => return events,
        };
        // A timer that elapses while the finger is dragged off the element
        // is consumed without firing.
        if fired && self.touch_status == TouchStatus::Started {
            self.emit(&mut events, now, StateEvent::LongPressCompleted);
        }
        events
    }

    /// Current touch status.
    #[must_use]
    pub fn touch_status(&self) -> TouchStatus {
        self.touch_status
    }

    /// Current whole-gesture interaction status.
    #[must_use]
    pub fn interaction_status(&self) -> TouchInteractionStatus {
        self.interaction_status
    }

    /// Current hover status.
    #[must_use]
    pub fn hover_status(&self) -> HoverStatus {
        self.hover_status
    }

    /// Derived coarse visual state under `config`.
    #[must_use]
    pub fn touch_state(&self, config: &TouchConfig) -> TouchState {
        derive_touch_state(self.touch_status, config.is_available, self.hover_status)
    }

    /// Derived hover visual state under `config`.
    #[must_use]
    pub fn hover_state(&self, config: &TouchConfig) -> HoverState {
        derive_hover_state(self.hover_status, config.is_available)
    }

    /// Current toggle value; `None` means the element is not toggleable.
    #[must_use]
    pub fn toggle(&self) -> Option<bool> {
        self.toggle
    }

    /// Sets the toggle directly, for two-way bindings.
    ///
    /// Does not emit events; the host already knows about a value it wrote
    /// itself.
    pub fn set_toggle(&mut self, toggle: Option<bool>) {
        self.toggle = toggle;
    }

    /// The live session, if a touch is in progress.
    #[must_use]
    pub fn session(&self) -> Option<&TouchSession> {
        self.session.as_ref()
    }

    /// Installs a transition observer invoked for every emitted event.
    pub fn set_trace(&mut self, trace: Box<dyn TransitionTrace>) {
        self.trace = Some(trace);
    }

    /// Removes and returns the installed transition observer, if any.
    pub fn take_trace(&mut self) -> Option<Box<dyn TransitionTrace>> {
        self.trace.take()
    }

    fn end_session(
        &mut self,
        config: &TouchConfig,
        resolved: TouchStatus,
        now: u64,
    ) -> StateEvents {
        let mut events = StateEvents::new();
        match self.session.as_mut() {
            Some(session) if !session.ended => {
                session.ended = true;
                session.long_press.cancel();
            }
            _ => return events,
        }
        self.session = None;

        self.set_touch_status(config, resolved, now, &mut events);
        if resolved == TouchStatus::Completed {
            if let Some(value) = self.toggle {
                self.toggle = Some(!value);
                self.emit(&mut events, now, StateEvent::ToggleChanged(!value));
            }
            self.emit(&mut events, now, StateEvent::TapCompleted);
        }
        self.set_interaction_status(config, TouchInteractionStatus::Completed, now, &mut events);
        events
    }

    fn set_touch_status(
        &mut self,
        config: &TouchConfig,
        status: TouchStatus,
        now: u64,
        events: &mut StateEvents,
    ) {
        if self.touch_status == status {
            return;
        }
        let prior_state = self.touch_state(config);
        self.touch_status = status;
        self.emit(events, now, StateEvent::TouchStatusChanged(status));
        let state = self.touch_state(config);
        if state != prior_state {
            self.emit(events, now, StateEvent::TouchStateChanged(state));
        }
    }

    fn set_interaction_status(
        &mut self,
        _config: &TouchConfig,
        status: TouchInteractionStatus,
        now: u64,
        events: &mut StateEvents,
    ) {
        if self.interaction_status == status {
            return;
        }
        self.interaction_status = status;
        self.emit(events, now, StateEvent::InteractionStatusChanged(status));
    }

    fn set_hover_status(
        &mut self,
        config: &TouchConfig,
        status: HoverStatus,
        now: u64,
        events: &mut StateEvents,
    ) {
        if self.hover_status == status {
            return;
        }
        let prior_touch = self.touch_state(config);
        let prior_hover = self.hover_state(config);
        self.hover_status = status;
        self.emit(events, now, StateEvent::HoverStatusChanged(status));
        let hover = self.hover_state(config);
        if hover != prior_hover {
            self.emit(events, now, StateEvent::HoverStateChanged(hover));
        }
        let touch = self.touch_state(config);
        if touch != prior_touch {
            self.emit(events, now, StateEvent::TouchStateChanged(touch));
        }
    }

    fn emit(&mut self, events: &mut StateEvents, now: u64, event: StateEvent) {
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.transition(now, event);
        }
        events.push(event);
    }
}
