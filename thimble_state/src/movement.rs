// Copyright 2026 the Thimble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Movement cancellation policy.
//!
//! Pure, side-effect-free distance checks so the policy is independently
//! testable. Distances are in device-independent units; callers convert from
//! raw pixels before asking.

use kurbo::Point;

/// Returns `true` if a touch that started at `start` and is now at `current`
/// has moved far enough to cancel.
///
/// Uses Euclidean distance. A `threshold` of zero (or less) disables
/// distance-based cancellation entirely; leaving the element's bounds is
/// then the only cancellation trigger.
#[must_use]
pub fn should_cancel(start: Point, current: Point, threshold: f64) -> bool {
    threshold > 0.0 && start.distance(current) > threshold
}

/// Returns the larger of the per-axis distances between two points.
///
/// Some platforms measure touch slop per axis rather than radially; adapters
/// that need exact parity with such a platform can feed this through their
/// own threshold check.
#[must_use]
pub fn max_axis_distance(start: Point, current: Point) -> f64 {
    let dx = (current.x - start.x).max(start.x - current.x);
    let dy = (current.y - start.y).max(start.y - current.y);
    dx.max(dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancels_beyond_threshold_only() {
        let start = Point::new(0.0, 0.0);
        assert!(should_cancel(start, Point::new(0.0, 25.0), 20.0));
        assert!(!should_cancel(start, Point::new(0.0, 15.0), 20.0));
    }

    #[test]
    fn exactly_at_threshold_does_not_cancel() {
        let start = Point::new(0.0, 0.0);
        assert!(!should_cancel(start, Point::new(0.0, 20.0), 20.0));
    }

    #[test]
    fn zero_threshold_disables_distance_cancellation() {
        let start = Point::new(0.0, 0.0);
        assert!(!should_cancel(start, Point::new(1000.0, 1000.0), 0.0));
    }

    #[test]
    fn euclidean_distance_counts_both_axes() {
        // 3-4-5 triangle: distance 5 exceeds a threshold of 4.5 even though
        // neither axis alone does.
        let start = Point::new(0.0, 0.0);
        assert!(should_cancel(start, Point::new(3.0, 4.0), 4.5));
        assert_eq!(max_axis_distance(start, Point::new(3.0, 4.0)), 4.0);
    }

    #[test]
    fn max_axis_distance_is_symmetric() {
        let a = Point::new(-2.0, 7.0);
        let b = Point::new(5.0, 3.0);
        assert_eq!(max_axis_distance(a, b), max_axis_distance(b, a));
        assert_eq!(max_axis_distance(a, b), 7.0);
    }
}
