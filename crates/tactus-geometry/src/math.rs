//! Averaging helpers shared by the recognizers: centroid, circular mean,
//! angle wrapping and pairwise spread.

use crate::Point;
use std::f32::consts::{PI, TAU};

/// Arithmetic mean of `points`, or `None` when there are none.
pub fn centroid<I>(points: I) -> Option<Point>
where
    I: IntoIterator<Item = Point>,
{
    let mut sum = Point::ZERO;
    let mut count = 0usize;
    for point in points {
        sum += point;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(sum / count as f32)
}

/// Mean of angular quantities (radians).
///
/// Averages the sine and cosine components and recombines them with `atan2`,
/// so `[-0.1, 0.1]` and `[TAU - 0.1, 0.1]` both average to zero. The result is
/// in `(-π, π]`. Returns `None` for an empty input.
pub fn circular_mean<I>(angles: I) -> Option<f32>
where
    I: IntoIterator<Item = f32>,
{
    let mut sin = 0.0f32;
    let mut cos = 0.0f32;
    let mut count = 0usize;
    for angle in angles {
        sin += angle.sin();
        cos += angle.cos();
        count += 1;
    }
    if count == 0 {
        return None;
    }
    let n = count as f32;
    Some((sin / n).atan2(cos / n))
}

/// Wraps `angle` into `(-π, π]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Signed smallest rotation taking `from` onto `to`.
#[inline]
pub fn angle_delta(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Mean distance over every unordered pair of `points`.
///
/// `None` with fewer than two points.
pub fn average_pairwise_distance(points: &[Point]) -> Option<f32> {
    if points.len() < 2 {
        return None;
    }
    let mut total = 0.0f32;
    let mut pairs = 0usize;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            total += a.distance_to(*b);
            pairs += 1;
        }
    }
    Some(total / pairs as f32)
}
