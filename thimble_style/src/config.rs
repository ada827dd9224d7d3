// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-element configuration snapshot and its fluent builder.

use peniko::Color;

use crate::easing::Easing;
use crate::target::{BackgroundImage, TouchState, VisualTarget};

/// Default values for configuration fields.
pub mod defaults {
    use peniko::Color;

    /// Default long-press duration in milliseconds.
    pub const LONG_PRESS_DURATION_MS: u64 = 500;
    /// Default movement-cancellation threshold (0 disables it).
    pub const DISALLOW_TOUCH_THRESHOLD: f64 = 0.0;
    /// Default pulse count (0 means no pulse).
    pub const PULSE_COUNT: i32 = 0;
    /// Default native ripple radius (-1 means platform default).
    pub const NATIVE_ANIMATION_RADIUS: i32 = -1;
    /// Default native ripple color: mid gray at 25% alpha.
    pub const NATIVE_ANIMATION_COLOR: Color = Color::from_rgba8(128, 128, 128, 64);
}

/// Named animation durations for common scenarios, in milliseconds.
pub mod durations {
    /// Instant feedback with no animation.
    pub const INSTANT: u64 = 0;
    /// Very fast animation for responsive buttons.
    pub const VERY_FAST: u64 = 50;
    /// Fast animation for most interactive elements.
    pub const FAST: u64 = 100;
    /// Normal animation speed for standard interactions.
    pub const NORMAL: u64 = 150;
    /// Slow animation for emphasis or special effects.
    pub const SLOW: u64 = 250;
    /// Very slow animation for dramatic effects.
    pub const VERY_SLOW: u64 = 500;
}

/// The configuration snapshot for one interactive element.
///
/// Immutable at read time: the interaction machinery reads a fresh reference
/// on every event and never caches resolved visuals, so replacing the
/// snapshot takes full effect on the next event. Build one with
/// [`TouchConfig::builder`] or start from [`TouchConfig::default`] and set
/// fields directly.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchConfig {
    /// Visual target while the element is at rest.
    pub normal: VisualTarget,
    /// Visual target while hovered without contact.
    pub hovered: VisualTarget,
    /// Visual target while pressed.
    pub pressed: VisualTarget,

    /// Global animation duration in milliseconds; 0 means instantaneous.
    pub animation_duration: u64,
    /// Per-state duration overrides; 0 means unset (fall back to global).
    pub normal_duration: u64,
    /// See [`Self::normal_duration`].
    pub hovered_duration: u64,
    /// See [`Self::normal_duration`].
    pub pressed_duration: u64,

    /// Global easing; `None` falls back to [`Easing::Linear`].
    pub easing: Option<Easing>,
    /// Per-state easing overrides; `None` falls back to the global easing.
    pub normal_easing: Option<Easing>,
    /// See [`Self::normal_easing`].
    pub hovered_easing: Option<Easing>,
    /// See [`Self::normal_easing`].
    pub pressed_easing: Option<Easing>,

    /// Long-press duration in milliseconds; 0 disables long-press detection.
    pub long_press_duration: u64,
    /// Movement-cancellation threshold in device-independent units;
    /// 0 disables distance-based cancellation.
    pub disallow_touch_threshold: f64,
    /// Pulse repeat count: 0 none, positive finite, negative infinite.
    pub pulse_count: i32,

    /// Whether the platform's native ripple effect is requested.
    pub native_animation: bool,
    /// Ripple color; `None` falls back to
    /// [`defaults::NATIVE_ANIMATION_COLOR`].
    pub native_animation_color: Option<Color>,
    /// Ripple radius; -1 means platform default.
    pub native_animation_radius: i32,

    /// Whether the element responds to interaction at all.
    pub is_available: bool,
    /// Whether child views should be made input-transparent so the element
    /// receives their pointer events.
    pub should_make_children_input_transparent: bool,
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self {
            normal: VisualTarget::default(),
            hovered: VisualTarget::default(),
            pressed: VisualTarget::default(),
            animation_duration: 0,
            normal_duration: 0,
            hovered_duration: 0,
            pressed_duration: 0,
            easing: None,
            normal_easing: None,
            hovered_easing: None,
            pressed_easing: None,
            long_press_duration: defaults::LONG_PRESS_DURATION_MS,
            disallow_touch_threshold: defaults::DISALLOW_TOUCH_THRESHOLD,
            pulse_count: defaults::PULSE_COUNT,
            native_animation: false,
            native_animation_color: None,
            native_animation_radius: defaults::NATIVE_ANIMATION_RADIUS,
            is_available: true,
            should_make_children_input_transparent: true,
        }
    }
}

impl TouchConfig {
    /// Starts building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> TouchConfigBuilder {
        TouchConfigBuilder::default()
    }

    /// Returns the visual target for `state`.
    #[must_use]
    pub fn target(&self, state: TouchState) -> &VisualTarget {
        match state {
            TouchState::Normal => &self.normal,
            TouchState::Hovered => &self.hovered,
            TouchState::Pressed => &self.pressed,
        }
    }

    /// Returns the per-state duration override for `state` (0 = unset).
    #[must_use]
    pub fn state_duration(&self, state: TouchState) -> u64 {
        match state {
            TouchState::Normal => self.normal_duration,
            TouchState::Hovered => self.hovered_duration,
            TouchState::Pressed => self.pressed_duration,
        }
    }

    /// Returns the per-state easing override for `state`.
    #[must_use]
    pub fn state_easing(&self, state: TouchState) -> Option<Easing> {
        match state {
            TouchState::Normal => self.normal_easing,
            TouchState::Hovered => self.hovered_easing,
            TouchState::Pressed => self.pressed_easing,
        }
    }
}

/// Fluent builder for [`TouchConfig`].
///
/// ```
/// use thimble_style::{durations, Easing, TouchConfig, TouchState};
///
/// let config = TouchConfig::builder()
///     .opacity(TouchState::Pressed, 0.7)
///     .animation_duration(durations::FAST)
///     .easing(Easing::CubicOut)
///     .build();
/// assert_eq!(config.pressed.opacity, 0.7);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TouchConfigBuilder {
    config: TouchConfig,
}

impl TouchConfigBuilder {
    fn target_mut(&mut self, state: TouchState) -> &mut VisualTarget {
        match state {
            TouchState::Normal => &mut self.config.normal,
            TouchState::Hovered => &mut self.config.hovered,
            TouchState::Pressed => &mut self.config.pressed,
        }
    }

    /// Replaces the whole visual target for `state`.
    #[must_use]
    pub fn target(mut self, state: TouchState, target: VisualTarget) -> Self {
        *self.target_mut(state) = target;
        self
    }

    /// Sets the target opacity for `state`.
    #[must_use]
    pub fn opacity(mut self, state: TouchState, opacity: f64) -> Self {
        self.target_mut(state).opacity = opacity;
        self
    }

    /// Sets the target scale for `state`.
    #[must_use]
    pub fn scale(mut self, state: TouchState, scale: f64) -> Self {
        self.target_mut(state).scale = scale;
        self
    }

    /// Sets the target translation for `state`.
    #[must_use]
    pub fn translation(mut self, state: TouchState, x: f64, y: f64) -> Self {
        self.target_mut(state).translation = kurbo::Vec2::new(x, y);
        self
    }

    /// Sets the target z rotation for `state`, in degrees.
    #[must_use]
    pub fn rotation(mut self, state: TouchState, degrees: f64) -> Self {
        self.target_mut(state).rotation = degrees;
        self
    }

    /// Sets the target x rotation for `state`, in degrees.
    #[must_use]
    pub fn rotation_x(mut self, state: TouchState, degrees: f64) -> Self {
        self.target_mut(state).rotation_x = degrees;
        self
    }

    /// Sets the target y rotation for `state`, in degrees.
    #[must_use]
    pub fn rotation_y(mut self, state: TouchState, degrees: f64) -> Self {
        self.target_mut(state).rotation_y = degrees;
        self
    }

    /// Sets the background color override for `state`.
    #[must_use]
    pub fn background(mut self, state: TouchState, color: Color) -> Self {
        self.target_mut(state).background = Some(color);
        self
    }

    /// Sets the background image override for `state`.
    #[must_use]
    pub fn background_image(mut self, state: TouchState, image: BackgroundImage) -> Self {
        self.target_mut(state).background_image = Some(image);
        self
    }

    /// Sets the global animation duration in milliseconds.
    #[must_use]
    pub fn animation_duration(mut self, ms: u64) -> Self {
        self.config.animation_duration = ms;
        self
    }

    /// Sets the duration override for `state`, in milliseconds.
    #[must_use]
    pub fn state_duration(mut self, state: TouchState, ms: u64) -> Self {
        match state {
            TouchState::Normal => self.config.normal_duration = ms,
            TouchState::Hovered => self.config.hovered_duration = ms,
            TouchState::Pressed => self.config.pressed_duration = ms,
        }
        self
    }

    /// Sets the global easing.
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.config.easing = Some(easing);
        self
    }

    /// Sets the easing override for `state`.
    #[must_use]
    pub fn state_easing(mut self, state: TouchState, easing: Easing) -> Self {
        match state {
            TouchState::Normal => self.config.normal_easing = Some(easing),
            TouchState::Hovered => self.config.hovered_easing = Some(easing),
            TouchState::Pressed => self.config.pressed_easing = Some(easing),
        }
        self
    }

    /// Sets the long-press duration in milliseconds (0 disables).
    #[must_use]
    pub fn long_press_duration(mut self, ms: u64) -> Self {
        self.config.long_press_duration = ms;
        self
    }

    /// Sets the movement-cancellation threshold (0 disables).
    #[must_use]
    pub fn disallow_touch_threshold(mut self, threshold: f64) -> Self {
        self.config.disallow_touch_threshold = threshold;
        self
    }

    /// Sets the pulse repeat count.
    #[must_use]
    pub fn pulse_count(mut self, count: i32) -> Self {
        self.config.pulse_count = count;
        self
    }

    /// Requests the platform's native ripple effect.
    #[must_use]
    pub fn native_animation(mut self, enabled: bool) -> Self {
        self.config.native_animation = enabled;
        self
    }

    /// Sets the native ripple color.
    #[must_use]
    pub fn native_animation_color(mut self, color: Color) -> Self {
        self.config.native_animation_color = Some(color);
        self
    }

    /// Sets the native ripple radius (-1 means platform default).
    #[must_use]
    pub fn native_animation_radius(mut self, radius: i32) -> Self {
        self.config.native_animation_radius = radius;
        self
    }

    /// Sets whether the element responds to interaction.
    #[must_use]
    pub fn is_available(mut self, available: bool) -> Self {
        self.config.is_available = available;
        self
    }

    /// Sets whether children are made input-transparent.
    #[must_use]
    pub fn make_children_input_transparent(mut self, transparent: bool) -> Self {
        self.config.should_make_children_input_transparent = transparent;
        self
    }

    /// Finishes the build.
    #[must_use]
    pub fn build(self) -> TouchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_named_defaults() {
        let config = TouchConfig::default();
        assert_eq!(config.long_press_duration, 500);
        assert_eq!(config.disallow_touch_threshold, 0.0);
        assert_eq!(config.pulse_count, 0);
        assert_eq!(config.native_animation_radius, -1);
        assert!(config.native_animation_color.is_none());
        assert!(config.is_available);
        assert!(config.should_make_children_input_transparent);
        assert!(config.normal.is_identity());
        assert!(config.hovered.is_identity());
        assert!(config.pressed.is_identity());
    }

    #[test]
    fn builder_writes_the_selected_state_only() {
        let config = TouchConfig::builder()
            .opacity(TouchState::Pressed, 0.7)
            .scale(TouchState::Hovered, 1.05)
            .build();
        assert_eq!(config.pressed.opacity, 0.7);
        assert_eq!(config.hovered.scale, 1.05);
        assert!(config.normal.is_identity());
        assert_eq!(config.hovered.opacity, 1.0);
    }

    #[test]
    fn per_state_accessors_route_correctly() {
        let config = TouchConfig::builder()
            .state_duration(TouchState::Pressed, 120)
            .state_easing(TouchState::Hovered, Easing::SinOut)
            .build();
        assert_eq!(config.state_duration(TouchState::Pressed), 120);
        assert_eq!(config.state_duration(TouchState::Normal), 0);
        assert_eq!(config.state_easing(TouchState::Hovered), Some(Easing::SinOut));
        assert_eq!(config.state_easing(TouchState::Pressed), None);
    }

    #[test]
    fn translation_builder_sets_vector() {
        let config = TouchConfig::builder()
            .translation(TouchState::Pressed, 2.0, -3.0)
            .build();
        assert_eq!(config.pressed.translation, kurbo::Vec2::new(2.0, -3.0));
    }
}
