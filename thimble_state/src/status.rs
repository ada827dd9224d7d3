// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction statuses and the visual states derived from them.

use thimble_style::{HoverState, TouchState};

/// Whether a contact point is down-and-valid, aborted, or finished.
///
/// The initial value is [`Completed`](Self::Completed) (idle). A single
/// interaction may pass through Started and Canceled several times as the
/// contact drags off and back onto the element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TouchStatus {
    /// A contact is down and currently valid.
    Started,
    /// The contact was aborted or dragged off the element.
    Canceled,
    /// No interaction, or the last one finished normally.
    #[default]
    Completed,
}

/// Whether a whole interaction sequence is in progress.
///
/// Coarser than [`TouchStatus`]: it stays [`Started`](Self::Started) from
/// first contact to final release even while the touch status flips between
/// Started and Canceled mid-gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TouchInteractionStatus {
    /// An interaction sequence is in progress.
    Started,
    /// No interaction sequence is in progress.
    #[default]
    Completed,
}

/// Pointer-over-without-contact state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HoverStatus {
    /// The pointer is over the element.
    Entered,
    /// The pointer is elsewhere.
    #[default]
    Exited,
}

/// Derives the coarse visual state from the stored statuses.
///
/// This is a pure function: the visual state is never stored, so it can
/// never drift from the statuses it derives from. An unavailable element
/// always reads Normal.
#[must_use]
pub fn derive_touch_state(
    touch: TouchStatus,
    is_available: bool,
    hover: HoverStatus,
) -> TouchState {
    if !is_available {
        TouchState::Normal
    } else if touch == TouchStatus::Started {
        TouchState::Pressed
    } else if hover == HoverStatus::Entered {
        TouchState::Hovered
    } else {
        TouchState::Normal
    }
}

/// Derives the hover-only visual state from the hover status.
#[must_use]
pub fn derive_hover_state(hover: HoverStatus, is_available: bool) -> HoverState {
    if is_available && hover == HoverStatus::Entered {
        HoverState::Hovered
    } else {
        HoverState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_statuses_read_idle() {
        assert_eq!(TouchStatus::default(), TouchStatus::Completed);
        assert_eq!(
            TouchInteractionStatus::default(),
            TouchInteractionStatus::Completed
        );
        assert_eq!(HoverStatus::default(), HoverStatus::Exited);
    }

    #[test]
    fn pressed_wins_over_hover() {
        assert_eq!(
            derive_touch_state(TouchStatus::Started, true, HoverStatus::Entered),
            TouchState::Pressed
        );
    }

    #[test]
    fn canceled_touch_falls_back_to_hover() {
        assert_eq!(
            derive_touch_state(TouchStatus::Canceled, true, HoverStatus::Entered),
            TouchState::Hovered
        );
        assert_eq!(
            derive_touch_state(TouchStatus::Canceled, true, HoverStatus::Exited),
            TouchState::Normal
        );
    }

    #[test]
    fn unavailable_element_is_always_normal() {
        assert_eq!(
            derive_touch_state(TouchStatus::Started, false, HoverStatus::Entered),
            TouchState::Normal
        );
        assert_eq!(
            derive_hover_state(HoverStatus::Entered, false),
            HoverState::Normal
        );
    }

    #[test]
    fn hover_state_follows_hover_status() {
        assert_eq!(
            derive_hover_state(HoverStatus::Entered, true),
            HoverState::Hovered
        );
        assert_eq!(
            derive_hover_state(HoverStatus::Exited, true),
            HoverState::Normal
        );
    }
}
