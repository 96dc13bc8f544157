//! Assertion utilities for gesture tests
//!
//! Positions, speeds and angles come out of floating point averaging, so
//! these helpers compare within a tolerance and print what they were
//! checking when they fail.

use tactus_geometry::{wrap_angle, Point, Rect};

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that two points are approximately equal.
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Assert that two angles are approximately equal, treating them as
/// directions so that `π` and `-π` compare equal.
pub fn assert_angle_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = wrap_angle(actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected angle {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_angles_compare_across_the_boundary() {
        assert_angle_approx_eq(PI - 0.001, -PI + 0.001, 0.01, "wraps");
    }

    #[test]
    #[should_panic(expected = "centroid - y")]
    fn test_point_mismatch_names_the_axis() {
        assert_point_approx_eq(Point::new(1.0, 1.0), Point::new(1.0, 2.0), 0.1, "centroid");
    }
}
