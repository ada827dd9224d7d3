// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual states and per-state visual targets.

use kurbo::Vec2;
use peniko::{Color, ImageData};

/// Coarse visual state of an interactive element.
///
/// Derived from the interaction statuses and availability; selects which
/// [`VisualTarget`](crate::VisualTarget) set applies. Never stored
/// independently of the statuses it derives from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TouchState {
    /// No contact and no hover.
    #[default]
    Normal,
    /// Pointer over the element without contact.
    Hovered,
    /// Contact is down and valid.
    Pressed,
}

/// Hover-only visual state, for hosts that animate hover separately.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    /// Pointer is elsewhere.
    #[default]
    Normal,
    /// Pointer is over the element.
    Hovered,
}

/// How a background image is fitted into the element's bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ImageAspect {
    /// Scale to fit entirely within bounds, preserving aspect ratio.
    #[default]
    AspectFit,
    /// Scale to fill bounds, preserving aspect ratio and cropping overflow.
    AspectFill,
    /// Stretch to bounds exactly.
    Fill,
}

/// When a background image swap becomes visible.
///
/// Swapping at completion lets a scale/opacity animation finish before the
/// bitmap changes, avoiding a visible tear mid-animation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ImageSwap {
    /// Swap the bitmap as soon as the state changes.
    #[default]
    Immediate,
    /// Swap the bitmap when the state's animation completes.
    OnAnimationCompletion,
}

/// A background image with its layout and swap timing.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundImage {
    /// The image to display.
    pub image: ImageData,
    /// How the image fits the element's bounds.
    pub aspect: ImageAspect,
    /// When the swap to this image becomes visible.
    pub swap: ImageSwap,
}

impl BackgroundImage {
    /// Creates a background image with default fitting and immediate swap.
    #[must_use]
    pub fn new(image: ImageData) -> Self {
        Self {
            image,
            aspect: ImageAspect::default(),
            swap: ImageSwap::default(),
        }
    }
}

/// The visual parameters one state animates toward.
///
/// A target describes an end pose, not a delta: the host animates each
/// property from its current value to the target value. The default target
/// is the identity pose (fully opaque, unscaled, untranslated, unrotated,
/// no background override).
#[derive(Clone, Debug, PartialEq)]
pub struct VisualTarget {
    /// Target opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation in device-independent units.
    pub translation: Vec2,
    /// Rotation about the z axis, in degrees.
    pub rotation: f64,
    /// Rotation about the x axis, in degrees.
    pub rotation_x: f64,
    /// Rotation about the y axis, in degrees.
    pub rotation_y: f64,
    /// Background color override, if any.
    pub background: Option<Color>,
    /// Background image override, if any.
    pub background_image: Option<BackgroundImage>,
}

impl Default for VisualTarget {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translation: Vec2::ZERO,
            rotation: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            background: None,
            background_image: None,
        }
    }
}

impl VisualTarget {
    /// Returns `true` if this target is the identity pose with no background
    /// overrides.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.opacity == 1.0
            && self.scale == 1.0
            && self.translation == Vec2::ZERO
            && self.rotation == 0.0
            && self.rotation_x == 0.0
            && self.rotation_y == 0.0
            && self.background.is_none()
            && self.background_image.is_none()
    }
}
