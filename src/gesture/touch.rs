// SPDX-License-Identifier: MPL-2.0
//! Touch point geometry
//!
//! Extracts the one geometric quantity the pinch handler needs from raw
//! multi-touch data: the distance between the first two touch points.

use iced_core::Point;

/// Euclidean distance between the first two points, or `0.0` when fewer
/// than two points are down (sentinel meaning "no pinch in progress").
///
/// Pure and total; additional touch points beyond the first two are
/// ignored.
#[must_use]
pub fn pinch_distance(points: &[Point]) -> f32 {
    match points {
        [first, second, ..] => {
            let dx = second.x - first.x;
            let dy = second.y - first.y;
            dx.hypot(dy)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn distance_of_two_points() {
        let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        assert_abs_diff_eq!(pinch_distance(&points), 5.0);
    }

    #[test]
    fn fewer_than_two_points_yields_sentinel() {
        assert_abs_diff_eq!(pinch_distance(&[]), 0.0);
        assert_abs_diff_eq!(pinch_distance(&[Point::new(10.0, 10.0)]), 0.0);
    }

    #[test]
    fn extra_points_are_ignored() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(99.0, 99.0),
        ];
        assert_abs_diff_eq!(pinch_distance(&points), 2.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let forward = [Point::new(1.0, 2.0), Point::new(4.0, 6.0)];
        let reversed = [Point::new(4.0, 6.0), Point::new(1.0, 2.0)];
        assert_abs_diff_eq!(pinch_distance(&forward), pinch_distance(&reversed));
    }
}
