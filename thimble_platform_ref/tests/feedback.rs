// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end feedback scenarios through the reference adapter.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use peniko::Color;
use thimble_platform_ref::{PointerEvent, RecordingSurface, RefAdapter, SurfaceOp};
use thimble_state::{TouchInteractionStatus, TouchStatus};
use thimble_style::{TouchConfig, TouchState, defaults, presets};

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 40.0)
}

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let count = Rc::new(Cell::new(0));
    let inner = count.clone();
    (count, move || inner.set(inner.get() + 1))
}

fn adapter(config: TouchConfig) -> RefAdapter<RecordingSurface> {
    RefAdapter::new(RecordingSurface::new(), config, bounds())
}

#[test]
fn tap_applies_pressed_then_normal_and_fires_once() {
    let mut adapter = adapter(presets::button::standard());
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);
    adapter.surface_mut().clear();

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
    adapter.handle(PointerEvent::Up, 80);

    let applied: Vec<f64> = adapter
        .surface()
        .applied_targets()
        .map(|t| t.opacity)
        .collect();
    assert_eq!(applied, vec![0.7, 1.0]);
    assert_eq!(taps.get(), 1);
    assert_eq!(adapter.tracker().touch_status(), TouchStatus::Completed);
    assert_eq!(
        adapter.tracker().interaction_status(),
        TouchInteractionStatus::Completed
    );
}

#[test]
fn movement_beyond_threshold_cancels_without_tap() {
    let config = TouchConfig::builder().disallow_touch_threshold(20.0).build();
    let mut adapter = adapter(config);
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
    adapter.handle(PointerEvent::Move(Point::new(10.0, 35.0)), 10);
    adapter.handle(PointerEvent::Up, 20);

    assert_eq!(taps.get(), 0);
    assert_eq!(adapter.tracker().touch_status(), TouchStatus::Canceled);
}

#[test]
fn exit_and_reenter_bounds_still_taps() {
    let mut adapter = adapter(TouchConfig::default());
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);

    adapter.handle(PointerEvent::Down(Point::new(50.0, 20.0)), 0);
    adapter.handle(PointerEvent::Move(Point::new(150.0, 20.0)), 10);
    assert_eq!(adapter.tracker().touch_status(), TouchStatus::Canceled);
    adapter.handle(PointerEvent::Move(Point::new(50.0, 20.0)), 20);
    adapter.handle(PointerEvent::Up, 30);

    assert_eq!(taps.get(), 1);
}

#[test]
fn long_press_command_fires_once_and_tap_still_follows() {
    let mut adapter = adapter(TouchConfig::default()); // 500 ms long press
    let (taps, on_tap) = counter();
    let (presses, on_press) = counter();
    adapter.set_tap_command(on_tap);
    adapter.set_long_press_command(on_press);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 1_000);
    adapter.tick(1_400);
    assert_eq!(presses.get(), 0);
    adapter.tick(1_500);
    assert_eq!(presses.get(), 1);
    adapter.tick(2_000);
    assert_eq!(presses.get(), 1);

    adapter.handle(PointerEvent::Up, 2_100);
    assert_eq!(taps.get(), 1);
}

#[test]
fn early_release_never_long_presses() {
    let mut adapter = adapter(TouchConfig::default());
    let (presses, on_press) = counter();
    adapter.set_long_press_command(on_press);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
    adapter.handle(PointerEvent::Up, 100);
    adapter.tick(1_000);

    assert_eq!(presses.get(), 0);
}

#[test]
fn ripple_runs_in_lockstep_with_touch_status() {
    let config = TouchConfig::builder()
        .native_animation(true)
        .native_animation_color(Color::from_rgba8(255, 0, 0, 128))
        .build();
    let mut adapter = adapter(config);
    adapter.surface_mut().clear();

    adapter.handle(PointerEvent::Down(Point::new(50.0, 20.0)), 0);
    assert_eq!(adapter.surface().ripple_balance(), 1);

    // Dragging off the element ends the ripple; returning restarts it.
    adapter.handle(PointerEvent::Move(Point::new(150.0, 20.0)), 10);
    assert_eq!(adapter.surface().ripple_balance(), 0);
    adapter.handle(PointerEvent::Move(Point::new(50.0, 20.0)), 20);
    assert_eq!(adapter.surface().ripple_balance(), 1);

    adapter.handle(PointerEvent::Up, 30);
    assert_eq!(adapter.surface().ripple_balance(), 0);

    let started = adapter
        .surface()
        .ops()
        .iter()
        .find_map(|op| match op {
            SurfaceOp::RippleStarted { color, radius, .. } => Some((*color, *radius)),
            _ => None,
        })
        .expect("a ripple started");
    assert_eq!(started, (Color::from_rgba8(255, 0, 0, 128), -1));
}

#[test]
fn ripple_color_falls_back_to_the_default() {
    let config = TouchConfig::builder().native_animation(true).build();
    let mut adapter = adapter(config);

    adapter.handle(PointerEvent::Down(Point::new(50.0, 20.0)), 0);
    let color = adapter
        .surface()
        .ops()
        .iter()
        .find_map(|op| match op {
            SurfaceOp::RippleStarted { color, .. } => Some(*color),
            _ => None,
        })
        .expect("a ripple started");
    assert_eq!(color, defaults::NATIVE_ANIMATION_COLOR);
}

#[test]
fn assistive_mode_bypasses_raw_touch_and_activates() {
    let mut adapter = adapter(presets::button::standard());
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);
    adapter.set_assistive(true, 0);

    // Raw pointer events are ignored entirely.
    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 10);
    adapter.handle(PointerEvent::Up, 20);
    assert_eq!(taps.get(), 0);
    assert_eq!(adapter.tracker().touch_status(), TouchStatus::Completed);

    // The plain activate signal taps.
    adapter.activate(30);
    assert_eq!(taps.get(), 1);
}

#[test]
fn entering_assistive_mode_cancels_an_in_flight_touch() {
    let mut adapter = adapter(TouchConfig::default());
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
    adapter.set_assistive(true, 10);
    assert_eq!(adapter.tracker().touch_status(), TouchStatus::Canceled);

    adapter.handle(PointerEvent::Up, 20);
    assert_eq!(taps.get(), 0);
}

#[test]
fn keyboard_activation_presses_and_releases() {
    let mut adapter = adapter(presets::button::standard());
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);

    adapter.handle(PointerEvent::ActivatePressed, 0);
    assert_eq!(adapter.tracker().touch_status(), TouchStatus::Started);
    adapter.handle(PointerEvent::ActivateReleased, 50);

    assert_eq!(taps.get(), 1);
}

#[test]
fn toggle_renders_pressed_at_rest_after_a_tap() {
    let config = presets::toggle::standard();
    let mut adapter = adapter(config);
    adapter.set_toggle(Some(false));

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
    adapter.handle(PointerEvent::Up, 100);
    assert_eq!(adapter.toggle(), Some(true));

    // The final applied target is the pressed set, at rest.
    let last = adapter
        .surface()
        .applied_targets()
        .last()
        .expect("at least one application");
    assert_eq!(last.scale, 0.95);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 200);
    adapter.handle(PointerEvent::Up, 300);
    assert_eq!(adapter.toggle(), Some(false));
    let last = adapter
        .surface()
        .applied_targets()
        .last()
        .expect("at least one application");
    assert_eq!(last.scale, 1.0);
}

#[test]
fn hover_applies_hovered_visuals() {
    let config = TouchConfig::builder()
        .scale(TouchState::Hovered, 1.05)
        .build();
    let mut adapter = adapter(config);
    adapter.surface_mut().clear();

    adapter.handle(PointerEvent::HoverEnter, 0);
    assert_eq!(
        adapter.surface().applied_targets().last().map(|t| t.scale),
        Some(1.05)
    );

    adapter.handle(PointerEvent::HoverExit, 10);
    assert_eq!(
        adapter.surface().applied_targets().last().map(|t| t.scale),
        Some(1.0)
    );
}

#[test]
fn replacing_the_config_reapplies_and_rethresholds() {
    let relaxed = TouchConfig::default();
    let strict = TouchConfig::builder().disallow_touch_threshold(5.0).build();
    let mut adapter = adapter(relaxed);
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
    adapter.set_config(strict);
    // The same drag now exceeds the stricter threshold.
    adapter.handle(PointerEvent::Move(Point::new(10.0, 20.0)), 10);
    adapter.handle(PointerEvent::Up, 20);

    assert_eq!(taps.get(), 0);
    assert_eq!(adapter.tracker().touch_status(), TouchStatus::Canceled);
}

#[test]
fn teardown_is_idempotent_and_silences_later_events() {
    let config = TouchConfig::builder().native_animation(true).build();
    let mut adapter = adapter(config);
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
    adapter.teardown(10);
    assert_eq!(adapter.surface().ripple_balance(), 0);
    assert!(
        adapter
            .surface()
            .ops()
            .last()
            .is_some_and(|op| *op == SurfaceOp::ChildrenInputTransparent(false))
    );

    let ops_after_first = adapter.surface().ops().len();
    adapter.teardown(20);
    assert_eq!(adapter.surface().ops().len(), ops_after_first);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 30);
    adapter.handle(PointerEvent::Up, 40);
    adapter.tick(1_000);
    assert_eq!(taps.get(), 0);
    assert_eq!(adapter.surface().ops().len(), ops_after_first);
}

#[test]
fn double_release_produces_no_extra_commands() {
    let mut adapter = adapter(TouchConfig::default());
    let (taps, on_tap) = counter();
    adapter.set_tap_command(on_tap);

    adapter.handle(PointerEvent::Down(Point::new(10.0, 10.0)), 0);
    adapter.handle(PointerEvent::Up, 10);
    adapter.handle(PointerEvent::Up, 20);
    adapter.handle(PointerEvent::Cancel, 30);

    assert_eq!(taps.get(), 1);
}
