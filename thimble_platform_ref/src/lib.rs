// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thimble Platform Reference Adapter.
//!
//! This crate provides a small, stateful implementation of the platform
//! adapter contract against an in-memory surface, for **tests and as a
//! template** for real platform adapters.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** draw pixels or run animations over time.
//! - It records the visual applications and ripple commands a real adapter
//!   would forward to its native view, so tests can assert on them.
//!
//! A real adapter does what [`RefAdapter`] does, against platform types:
//! normalize native pointer/hover/keyboard events into [`PointerEvent`]s,
//! drive the [`TouchTracker`], resolve visuals through `thimble_style`, and
//! keep native ripple effects in lockstep with the touch status.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use thimble_platform_ref::{PointerEvent, RecordingSurface, RefAdapter};
//! use thimble_style::presets;
//!
//! let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
//! let mut adapter = RefAdapter::new(RecordingSurface::new(), presets::button::standard(), bounds);
//!
//! let mut taps = 0_u32;
//! adapter.set_tap_command(move || taps += 1);
//!
//! adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
//! adapter.handle(PointerEvent::Up, 80);
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use thimble_state::{StateEvent, StateEvents, TouchStatus, TouchTracker};
use thimble_style::{
    Easing, Repeat, ResolvedAnimation, TouchConfig, VisualTarget, defaults, resolve_animation,
};

/// A normalized input event, the shape every platform reduces to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Contact down at a point in element-local coordinates.
    Down(Point),
    /// Contact moved.
    Move(Point),
    /// Contact released.
    Up,
    /// Contact aborted by the platform.
    Cancel,
    /// Pointer entered without contact.
    HoverEnter,
    /// Pointer left.
    HoverExit,
    /// Keyboard activation pressed (space/enter held).
    ActivatePressed,
    /// Keyboard activation released.
    ActivateReleased,
}

/// The narrow surface a platform adapter drives.
///
/// Implementations apply resolved visuals to the native view and start or
/// stop the native ripple effect. Every method must tolerate being called
/// after the native resources are gone; adapters treat that as successful
/// cleanup.
pub trait FeedbackSurface {
    /// Applies a resolved animation to the view.
    fn apply(&mut self, animation: &ResolvedAnimation<'_>);

    /// Starts the native ripple at a point, with color and radius.
    fn start_ripple(&mut self, color: Color, radius: i32, at: Point);

    /// Ends any running native ripple.
    fn end_ripple(&mut self);

    /// Makes child views input-transparent (or restores them).
    fn set_children_input_transparent(&mut self, transparent: bool);
}

/// A visual application captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedAnimation {
    /// The target that was applied.
    pub target: VisualTarget,
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Easing curve.
    pub easing: Easing,
    /// Repeat behavior.
    pub repeat: Repeat,
}

/// One command forwarded to a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// A resolved animation was applied.
    Apply(AppliedAnimation),
    /// A ripple started.
    RippleStarted {
        /// Ripple color.
        color: Color,
        /// Ripple radius (-1 means platform default).
        radius: i32,
        /// Contact point.
        at: Point,
    },
    /// The ripple ended.
    RippleEnded,
    /// Children input transparency changed.
    ChildrenInputTransparent(bool),
}

/// In-memory surface that records every command in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Clears the recording.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// The targets applied so far, in order.
    pub fn applied_targets(&self) -> impl Iterator<Item = &VisualTarget> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Apply(applied) => Some(&applied.target),
            _ => None,
        })
    }

    /// Counts running ripples: starts minus ends.
    #[must_use]
    pub fn ripple_balance(&self) -> i32 {
        self.ops.iter().fold(0, |acc, op| match op {
            SurfaceOp::RippleStarted { .. } => acc + 1,
            SurfaceOp::RippleEnded => acc - 1,
            _ => acc,
        })
    }
}

impl FeedbackSurface for RecordingSurface {
    fn apply(&mut self, animation: &ResolvedAnimation<'_>) {
        self.ops.push(SurfaceOp::Apply(AppliedAnimation {
            target: animation.target.clone(),
            duration_ms: animation.duration_ms,
            easing: animation.easing,
            repeat: animation.repeat,
        }));
    }

    fn start_ripple(&mut self, color: Color, radius: i32, at: Point) {
        self.ops.push(SurfaceOp::RippleStarted { color, radius, at });
    }

    fn end_ripple(&mut self) {
        self.ops.push(SurfaceOp::RippleEnded);
    }

    fn set_children_input_transparent(&mut self, transparent: bool) {
        self.ops.push(SurfaceOp::ChildrenInputTransparent(transparent));
    }
}

/// Reference implementation of the platform adapter contract.
///
/// Owns one [`TouchTracker`] and one surface, normalizes [`PointerEvent`]s
/// into machine operations, applies resolved visuals, keeps the native
/// ripple in lockstep with the touch status, and invokes the registered tap
/// and long-press commands exactly once per qualifying event.
///
/// In assistive-technology mode raw touch tracking is bypassed: only
/// [`RefAdapter::activate`] (or the keyboard activate events) drives the
/// machine, as a plain press-and-release at the element's center.
pub struct RefAdapter<S: FeedbackSurface> {
    tracker: TouchTracker,
    config: TouchConfig,
    surface: S,
    bounds: Rect,
    assistive: bool,
    ripple_running: bool,
    last_point: Point,
    torn_down: bool,
    tap_command: Option<Box<dyn FnMut()>>,
    long_press_command: Option<Box<dyn FnMut()>>,
}

impl<S: FeedbackSurface + core::fmt::Debug> core::fmt::Debug for RefAdapter<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RefAdapter")
            .field("tracker", &self.tracker)
            .field("config", &self.config)
            .field("surface", &self.surface)
            .field("bounds", &self.bounds)
            .field("assistive", &self.assistive)
            .field("ripple_running", &self.ripple_running)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

impl<S: FeedbackSurface> RefAdapter<S> {
    /// Attaches the adapter: applies the resting visuals and the configured
    /// children input transparency.
    pub fn new(surface: S, config: TouchConfig, bounds: Rect) -> Self {
        let mut adapter = Self {
            tracker: TouchTracker::new(),
            config,
            surface,
            bounds,
            assistive: false,
            ripple_running: false,
            last_point: Point::ZERO,
            torn_down: false,
            tap_command: None,
            long_press_command: None,
        };
        adapter
            .surface
            .set_children_input_transparent(adapter.config.should_make_children_input_transparent);
        adapter.apply_current();
        adapter
    }

    /// Registers the callable run once per completed tap.
    ///
    /// Commands are opaque: close over any parameter the host wants passed.
    pub fn set_tap_command(&mut self, command: impl FnMut() + 'static) {
        self.tap_command = Some(Box::new(command));
    }

    /// Registers the callable run once per long-press elapse.
    pub fn set_long_press_command(&mut self, command: impl FnMut() + 'static) {
        self.long_press_command = Some(Box::new(command));
    }

    /// Replaces the configuration snapshot.
    ///
    /// Takes effect on the next event; visuals for the current state are
    /// re-resolved and re-applied immediately.
    pub fn set_config(&mut self, config: TouchConfig) {
        let transparent = config.should_make_children_input_transparent;
        if transparent != self.config.should_make_children_input_transparent && !self.torn_down {
            self.surface.set_children_input_transparent(transparent);
        }
        self.config = config;
        if !self.torn_down {
            self.apply_current();
        }
    }

    /// Switches assistive-technology mode.
    ///
    /// While on, raw pointer events are ignored and any in-flight touch is
    /// canceled; activation happens through the activate signal instead.
    pub fn set_assistive(&mut self, assistive: bool, now: u64) {
        if assistive && !self.assistive {
            let events = self.tracker.on_touch_cancel(&self.config, now);
            self.process(events);
        }
        self.assistive = assistive;
    }

    /// Whether assistive mode is on.
    #[must_use]
    pub fn is_assistive(&self) -> bool {
        self.assistive
    }

    /// Sets or clears the toggle (two-way binding support).
    pub fn set_toggle(&mut self, toggle: Option<bool>) {
        self.tracker.set_toggle(toggle);
        if !self.torn_down {
            self.apply_current();
        }
    }

    /// Current toggle value.
    #[must_use]
    pub fn toggle(&self) -> Option<bool> {
        self.tracker.toggle()
    }

    /// Feeds one normalized event through the machine.
    pub fn handle(&mut self, event: PointerEvent, now: u64) {
        if self.torn_down {
            return;
        }
        if self.assistive {
            // Raw touch tracking is bypassed; only activation counts.
            match event {
                PointerEvent::ActivatePressed | PointerEvent::ActivateReleased => {}
                _ => return,
            }
        }
        let events = match event {
            PointerEvent::Down(point) => {
                self.last_point = point;
                self.tracker.on_touch_down(&self.config, point, now)
            }
            PointerEvent::Move(point) => {
                self.last_point = point;
                self.tracker
                    .on_touch_move(&self.config, point, self.bounds, now)
            }
            PointerEvent::Up => self.tracker.on_touch_up(&self.config, now),
            PointerEvent::Cancel => self.tracker.on_touch_cancel(&self.config, now),
            PointerEvent::HoverEnter => self.tracker.on_hover_enter(&self.config, now),
            PointerEvent::HoverExit => self.tracker.on_hover_exit(&self.config, now),
            PointerEvent::ActivatePressed => {
                self.last_point = self.bounds.center();
                self.tracker
                    .on_touch_down(&self.config, self.bounds.center(), now)
            }
            PointerEvent::ActivateReleased => self.tracker.on_touch_up(&self.config, now),
        };
        self.process(events);
    }

    /// A plain activation signal: one full press-and-release at the
    /// element's center. This is how assistive technologies tap.
    pub fn activate(&mut self, now: u64) {
        if self.torn_down {
            return;
        }
        let center = self.bounds.center();
        self.last_point = center;
        let down = self.tracker.on_touch_down(&self.config, center, now);
        self.process(down);
        let up = self.tracker.on_touch_up(&self.config, now);
        self.process(up);
    }

    /// Drives time-based behavior; call from a frame or timer callback.
    pub fn tick(&mut self, now: u64) {
        if self.torn_down {
            return;
        }
        let events = self.tracker.poll(&self.config, now);
        self.process(events);
    }

    /// Detaches from the surface: ends any ripple, aborts any in-flight
    /// touch, and restores children input transparency. Idempotent; a
    /// second call is a no-op.
    pub fn teardown(&mut self, now: u64) {
        if self.torn_down {
            return;
        }
        let events = self.tracker.on_touch_cancel(&self.config, now);
        self.process(events);
        if self.ripple_running {
            self.surface.end_ripple();
            self.ripple_running = false;
        }
        if self.config.should_make_children_input_transparent {
            self.surface.set_children_input_transparent(false);
        }
        self.torn_down = true;
    }

    /// The wrapped surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The wrapped surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The owned state machine, for inspection.
    #[must_use]
    pub fn tracker(&self) -> &TouchTracker {
        &self.tracker
    }

    fn process(&mut self, events: StateEvents) {
        let mut reapply = false;
        for event in &events {
            match event {
                StateEvent::TouchStatusChanged(status) => self.sync_ripple(*status),
                StateEvent::TouchStateChanged(_)
                | StateEvent::HoverStateChanged(_)
                | StateEvent::ToggleChanged(_) => reapply = true,
                StateEvent::TapCompleted => {
                    if let Some(command) = self.tap_command.as_mut() {
                        command();
                    }
                }
                StateEvent::LongPressCompleted => {
                    if let Some(command) = self.long_press_command.as_mut() {
                        command();
                    }
                }
                StateEvent::InteractionStatusChanged(_) | StateEvent::HoverStatusChanged(_) => {}
            }
        }
        if reapply {
            self.apply_current();
        }
    }

    /// Starts and stops the native ripple in lockstep with the touch
    /// status, instead of duplicating the transform-based feedback.
    fn sync_ripple(&mut self, status: TouchStatus) {
        if !self.config.native_animation {
            return;
        }
        match status {
            TouchStatus::Started => {
                let color = self
                    .config
                    .native_animation_color
                    .unwrap_or(defaults::NATIVE_ANIMATION_COLOR);
                self.surface
                    .start_ripple(color, self.config.native_animation_radius, self.last_point);
                self.ripple_running = true;
            }
            TouchStatus::Canceled | TouchStatus::Completed => {
                if self.ripple_running {
                    self.surface.end_ripple();
                    self.ripple_running = false;
                }
            }
        }
    }

    fn apply_current(&mut self) {
        let state = self.tracker.touch_state(&self.config);
        let animation = resolve_animation(state, self.tracker.toggle(), &self.config);
        self.surface.apply(&animation);
    }
}
