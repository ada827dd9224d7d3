// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predefined configurations for common UI patterns.
//!
//! Each function returns a ready [`TouchConfig`]; hosts can use the result
//! as-is or keep building on it:
//!
//! ```
//! use thimble_style::{presets, TouchState};
//!
//! let config = presets::button::standard();
//! assert_eq!(config.pressed.opacity, 0.7);
//! ```

use peniko::Color;

use crate::config::{TouchConfig, durations};
use crate::easing::Easing;
use crate::target::TouchState;

const GRAY_FAINT: Color = Color::from_rgba8(128, 128, 128, 26);
const GRAY_SOFT: Color = Color::from_rgba8(128, 128, 128, 51);
const BLUE_SOFT: Color = Color::from_rgba8(0, 0, 255, 77);

/// Button feedback.
pub mod button {
    use super::*;

    /// Standard button with opacity feedback.
    #[must_use]
    pub fn standard() -> TouchConfig {
        TouchConfig::builder()
            .opacity(TouchState::Pressed, 0.7)
            .animation_duration(durations::FAST)
            .easing(Easing::CubicOut)
            .build()
    }

    /// Primary button with scale and opacity feedback.
    #[must_use]
    pub fn primary() -> TouchConfig {
        TouchConfig::builder()
            .opacity(TouchState::Pressed, 0.8)
            .scale(TouchState::Pressed, 0.95)
            .animation_duration(durations::FAST)
            .easing(Easing::CubicOut)
            .build()
    }

    /// Secondary button with subtle feedback.
    #[must_use]
    pub fn secondary() -> TouchConfig {
        TouchConfig::builder()
            .opacity(TouchState::Pressed, 0.6)
            .animation_duration(durations::VERY_FAST)
            .build()
    }

    /// Text button with minimal, near-instant feedback.
    #[must_use]
    pub fn text() -> TouchConfig {
        TouchConfig::builder()
            .opacity(TouchState::Pressed, 0.5)
            .animation_duration(25)
            .build()
    }
}

/// Card feedback.
pub mod card {
    use super::*;

    /// Standard card with a subtle scale effect.
    #[must_use]
    pub fn standard() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.97)
            .animation_duration(durations::NORMAL)
            .easing(Easing::CubicInOut)
            .build()
    }

    /// Elevated card that lifts on hover.
    #[must_use]
    pub fn elevated() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.95)
            .opacity(TouchState::Pressed, 0.9)
            .animation_duration(durations::NORMAL)
            .easing(Easing::CubicInOut)
            .scale(TouchState::Hovered, 1.02)
            .state_duration(TouchState::Hovered, 200)
            .build()
    }

    /// Interactive card with a hover highlight.
    #[must_use]
    pub fn interactive() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.98)
            .scale(TouchState::Hovered, 1.01)
            .background(TouchState::Hovered, GRAY_FAINT)
            .animation_duration(durations::FAST)
            .easing(Easing::CubicOut)
            .build()
    }
}

/// List item feedback.
pub mod list_item {
    use super::*;

    /// Standard list item with a background highlight.
    #[must_use]
    pub fn standard() -> TouchConfig {
        TouchConfig::builder()
            .background(TouchState::Pressed, GRAY_SOFT)
            .animation_duration(durations::VERY_FAST)
            .build()
    }

    /// Selectable list item; pair with a toggle initialized to `false`.
    #[must_use]
    pub fn selectable() -> TouchConfig {
        TouchConfig::builder()
            .background(TouchState::Pressed, BLUE_SOFT)
            .animation_duration(durations::FAST)
            .build()
    }

    /// Swipeable list item with scale feedback.
    #[must_use]
    pub fn swipeable() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.98)
            .background(TouchState::Pressed, GRAY_FAINT)
            .animation_duration(durations::VERY_FAST)
            .build()
    }
}

/// Icon button feedback.
pub mod icon_button {
    use super::*;

    /// Standard icon button with a springy scale effect.
    #[must_use]
    pub fn standard() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.85)
            .opacity(TouchState::Pressed, 0.7)
            .animation_duration(durations::FAST)
            .easing(Easing::SpringOut)
            .build()
    }

    /// Floating action button with native ripple on top.
    #[must_use]
    pub fn floating_action() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.9)
            .opacity(TouchState::Pressed, 0.8)
            .animation_duration(durations::FAST)
            .easing(Easing::SpringOut)
            .native_animation(true)
            .build()
    }

    /// Toolbar icon with a quick opacity dip.
    #[must_use]
    pub fn toolbar() -> TouchConfig {
        TouchConfig::builder()
            .opacity(TouchState::Pressed, 0.5)
            .animation_duration(durations::VERY_FAST)
            .build()
    }
}

/// Switch and checkbox feedback; pair with a toggle initialized to `false`.
pub mod toggle {
    use super::*;

    /// Standard toggle with a scale effect.
    #[must_use]
    pub fn standard() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.95)
            .animation_duration(durations::NORMAL)
            .easing(Easing::CubicInOut)
            .build()
    }

    /// Checkbox-style toggle with a bounce.
    #[must_use]
    pub fn checkbox() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.9)
            .animation_duration(durations::FAST)
            .easing(Easing::BounceOut)
            .build()
    }
}

/// Image feedback.
pub mod image {
    use super::*;

    /// Thumbnail that grows on hover and shrinks on press.
    #[must_use]
    pub fn thumbnail() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.95)
            .scale(TouchState::Hovered, 1.05)
            .animation_duration(durations::NORMAL)
            .easing(Easing::CubicInOut)
            .build()
    }

    /// Gallery image with a pronounced hover zoom.
    #[must_use]
    pub fn gallery() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.98)
            .opacity(TouchState::Pressed, 0.8)
            .scale(TouchState::Hovered, 1.1)
            .animation_duration(200)
            .easing(Easing::CubicInOut)
            .build()
    }

    /// Avatar image with subtle feedback.
    #[must_use]
    pub fn avatar() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.92)
            .opacity(TouchState::Pressed, 0.7)
            .animation_duration(durations::FAST)
            .easing(Easing::CubicOut)
            .build()
    }
}

/// Native ripple feedback.
pub mod native {
    use super::*;

    /// Platform ripple, with an optional color override.
    #[must_use]
    pub fn ripple(color: Option<Color>) -> TouchConfig {
        let builder = TouchConfig::builder().native_animation(true);
        match color {
            Some(color) => builder.native_animation_color(color).build(),
            None => builder.build(),
        }
    }

    /// Ripple paired with a quick opacity dip, for hosts that add haptics.
    #[must_use]
    pub fn haptic() -> TouchConfig {
        TouchConfig::builder()
            .native_animation(true)
            .opacity(TouchState::Pressed, 0.8)
            .animation_duration(durations::VERY_FAST)
            .build()
    }
}

/// Special effects.
pub mod special {
    use super::*;

    /// Pulse effect repeating `count` times.
    #[must_use]
    pub fn pulse(count: i32) -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 1.1)
            .opacity(TouchState::Pressed, 0.7)
            .pulse_count(count)
            .animation_duration(durations::NORMAL)
            .easing(Easing::SinInOut)
            .build()
    }

    /// Bounce effect with a spring settle.
    #[must_use]
    pub fn bounce() -> TouchConfig {
        TouchConfig::builder()
            .scale(TouchState::Pressed, 0.8)
            .animation_duration(200)
            .easing(Easing::SpringOut)
            .build()
    }

    /// Shake effect with a small repeated rotation.
    #[must_use]
    pub fn shake() -> TouchConfig {
        TouchConfig::builder()
            .rotation(TouchState::Pressed, 5.0)
            .pulse_count(2)
            .animation_duration(durations::VERY_FAST)
            .easing(Easing::BounceOut)
            .build()
    }

    /// Disabled element: no interaction, dimmed at rest.
    #[must_use]
    pub fn disabled() -> TouchConfig {
        TouchConfig::builder()
            .is_available(false)
            .opacity(TouchState::Normal, 0.5)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{Repeat, RepeatCount, pulse_repeat, resolve_easing};

    #[test]
    fn standard_button_values() {
        let config = button::standard();
        assert_eq!(config.pressed.opacity, 0.7);
        assert_eq!(config.animation_duration, durations::FAST);
        assert_eq!(config.easing, Some(Easing::CubicOut));
    }

    #[test]
    fn elevated_card_has_hover_override() {
        let config = card::elevated();
        assert_eq!(config.hovered.scale, 1.02);
        assert_eq!(config.hovered_duration, 200);
        // Pressed keeps the global duration.
        assert_eq!(config.state_duration(TouchState::Pressed), 0);
        assert_eq!(resolve_easing(TouchState::Hovered, &config), Easing::CubicInOut);
    }

    #[test]
    fn ripple_presets_request_native_animation() {
        assert!(native::ripple(None).native_animation);
        let tinted = native::ripple(Some(Color::from_rgba8(255, 0, 0, 128)));
        assert_eq!(
            tinted.native_animation_color,
            Some(Color::from_rgba8(255, 0, 0, 128))
        );
    }

    #[test]
    fn pulse_preset_repeats_the_requested_count() {
        let config = special::pulse(3);
        assert_eq!(
            pulse_repeat(config.pulse_count),
            Repeat::AutoReverse(RepeatCount::Times(3))
        );
        assert_eq!(config.pressed.scale, 1.1);
    }

    #[test]
    fn disabled_preset_is_unavailable() {
        let config = special::disabled();
        assert!(!config.is_available);
        assert_eq!(config.normal.opacity, 0.5);
    }

    #[test]
    fn shake_preset_rotates_and_pulses() {
        let config = special::shake();
        assert_eq!(config.pressed.rotation, 5.0);
        assert_eq!(config.pulse_count, 2);
    }
}
