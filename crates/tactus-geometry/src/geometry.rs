//! Geometric primitives: Point, Rect

use std::ops::{Add, AddAssign, Div, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle, in radians within `[-π, π]`, of the vector from this point to `other`.
    ///
    /// Zero points along the positive x axis; positive angles turn towards
    /// positive y (clockwise on a y-down screen).
    pub fn angle_to(&self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<f32> for Point {
    type Output = Point;

    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Scales the rectangle by `factor` around the anchor point `(mx, my)`.
    pub fn scale_about(&self, factor: f32, mx: f32, my: f32) -> Self {
        Self {
            x: mx + (self.x - mx) * factor,
            y: my + (self.y - my) * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn test_angle_to_cardinal_directions() {
        let origin = Point::ZERO;
        assert_eq!(origin.angle_to(Point::new(10.0, 0.0)), 0.0);
        assert!((origin.angle_to(Point::new(0.0, 10.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((origin.angle_to(Point::new(-10.0, 0.0)) - PI).abs() < 1e-6);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(30.0, 30.0));
        assert!(!rect.contains(30.1, 15.0));
        assert!(!rect.contains(9.9, 15.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f32::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_scale_about_keeps_anchor_fixed() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let scaled = rect.scale_about(2.0, 50.0, 25.0);
        assert_eq!(scaled.center(), rect.center());
        assert_eq!(scaled.width, 200.0);
        assert_eq!(scaled.height, 100.0);
    }
}
