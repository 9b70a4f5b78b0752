//! Collision predicates for circles, points and axis-aligned rectangles.
//!
//! Rectangles may carry a negative width or height; the range checks are
//! order-insensitive so the rectangle simply extends the other way.

use nalgebra::Point2;

use crate::math::{distance, in_range, range_intersect};

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point2<f32>,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point2<f32>, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rectangle anchored at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point2<f32>,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(origin: Point2<f32>, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Smallest x coordinate covered by the rectangle.
    pub fn min_x(&self) -> f32 {
        self.origin.x.min(self.origin.x + self.width)
    }

    /// Largest x coordinate covered by the rectangle.
    pub fn max_x(&self) -> f32 {
        self.origin.x.max(self.origin.x + self.width)
    }

    /// Smallest y coordinate covered by the rectangle.
    pub fn min_y(&self) -> f32 {
        self.origin.y.min(self.origin.y + self.height)
    }

    /// Largest y coordinate covered by the rectangle.
    pub fn max_y(&self) -> f32 {
        self.origin.y.max(self.origin.y + self.height)
    }
}

/// Circles touch or overlap.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    distance(a.center, b.center) <= a.radius + b.radius
}

/// Point lies strictly inside the circle.
pub fn circle_point(c: &Circle, p: Point2<f32>) -> bool {
    distance(c.center, p) < c.radius
}

/// Point lies inside the rectangle, edges included.
pub fn rect_point(r: &Rect, p: Point2<f32>) -> bool {
    in_range(p.x, r.origin.x, r.origin.x + r.width)
        && in_range(p.y, r.origin.y, r.origin.y + r.height)
}

/// Rectangles touch or overlap.
pub fn rect_rect(a: &Rect, b: &Rect) -> bool {
    range_intersect(a.origin.x, a.origin.x + a.width, b.origin.x, b.origin.x + b.width)
        && range_intersect(a.origin.y, a.origin.y + a.height, b.origin.y, b.origin.y + b.height)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circles_touching_collide() {
        let a = Circle::new(Point2::new(0.0, 0.0), 5.0);
        let b = Circle::new(Point2::new(10.0, 0.0), 5.0);
        assert!(circle_circle(&a, &b));

        let c = Circle::new(Point2::new(10.1, 0.0), 5.0);
        assert!(!circle_circle(&a, &c));
    }

    #[test]
    fn circle_point_is_strict() {
        let c = Circle::new(Point2::origin(), 1.0);
        assert!(circle_point(&c, Point2::new(0.5, 0.5)));
        assert!(!circle_point(&c, Point2::new(1.0, 0.0)));
    }

    #[test]
    fn rect_point_with_negative_extent() {
        let r = Rect::new(Point2::new(10.0, 10.0), -10.0, -10.0);
        assert!(rect_point(&r, Point2::new(5.0, 5.0)));
        assert!(!rect_point(&r, Point2::new(11.0, 5.0)));
        assert!((r.min_x() - 0.0).abs() < f32::EPSILON);
        assert!((r.max_y() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rect_rect_overlap() {
        let a = Rect::new(Point2::origin(), 10.0, 10.0);
        let b = Rect::new(Point2::new(5.0, 5.0), 10.0, 10.0);
        let c = Rect::new(Point2::new(20.0, 0.0), 5.0, 5.0);
        assert!(rect_rect(&a, &b));
        assert!(!rect_rect(&a, &c));
    }
}
