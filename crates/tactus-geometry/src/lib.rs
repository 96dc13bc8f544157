//! Pure math/data for pointer geometry in Tactus
//!
//! This crate contains the point and rectangle primitives together with the
//! angle, distance and averaging helpers the gesture recognizers are built on.

mod geometry;
mod math;

pub use geometry::*;
pub use math::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect};
    pub use crate::math::{average_pairwise_distance, centroid, circular_mean, wrap_angle};
}
