//! 2D vector and angle helpers shared by the kinematics and particle crates.
//!
//! The segment variants only need [`polar`], [`end_point`] and
//! [`angle_between`]; the scalar helpers below back the easing, collision
//! and particle demos.

use nalgebra::{Point2, Vector2};
use rand::Rng;

// ---------------------------------------------------------------------------
// Vectors and angles
// ---------------------------------------------------------------------------

/// Vector of the given `length` pointing along `angle`.
#[inline]
pub fn polar(angle: f32, length: f32) -> Vector2<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(cos * length, sin * length)
}

/// Position reached by stepping `length` from `origin` along `angle`.
///
/// A zero `length` returns `origin` itself.
#[inline]
pub fn end_point(origin: Point2<f32>, angle: f32, length: f32) -> Point2<f32> {
    origin + polar(angle, length)
}

/// Angle of the direction from `from` to `to`.
///
/// Coincident points yield `0.0` (`atan2(0, 0)`), i.e. the positive x-axis.
#[inline]
pub fn angle_between(from: Point2<f32>, to: Point2<f32>) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2<f32>, b: Point2<f32>) -> f32 {
    nalgebra::distance(&a, &b)
}

// ---------------------------------------------------------------------------
// Scalar helpers
// ---------------------------------------------------------------------------

/// Restrict `value` to `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics when `min > max`; the result is
/// then `max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Fraction of the way `value` lies between `min` and `max`.
#[inline]
pub fn norm(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// Linear interpolation from `min` to `max` by `t`.
#[inline]
pub fn lerp(t: f32, min: f32, max: f32) -> f32 {
    (max - min).mul_add(t, min)
}

/// Re-express `value` from the source range in the destination range.
#[inline]
pub fn map(value: f32, src_min: f32, src_max: f32, dst_min: f32, dst_max: f32) -> f32 {
    lerp(norm(value, src_min, src_max), dst_min, dst_max)
}

/// Whether `value` lies within the bounds, in either order.
#[inline]
pub fn in_range(value: f32, a: f32, b: f32) -> bool {
    value >= a.min(b) && value <= a.max(b)
}

/// Whether two ranges overlap. Each range's bounds may be given in either order.
#[inline]
pub fn range_intersect(min0: f32, max0: f32, min1: f32, max1: f32) -> bool {
    min0.max(max0) >= min1.min(max1) && min0.min(max0) <= min1.max(max1)
}

/// Round `value` to `places` decimal places (negative places round to tens, hundreds, ...).
pub fn round_to_places(value: f32, places: i32) -> f32 {
    let scale = 10f32.powi(places);
    (value * scale).round() / scale
}

/// Round `value` to the nearest multiple of `nearest`.
pub fn round_nearest(value: f32, nearest: f32) -> f32 {
    (value / nearest).round() * nearest
}

/// Uniform sample between `min` and `max`.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.r#gen::<f32>().mul_add(max - min, min)
}

// ---------------------------------------------------------------------------
// Bezier curves
// ---------------------------------------------------------------------------

/// Point at `t` (0..=1) on the quadratic Bezier curve `p0 → p2` with control `p1`.
pub fn quadratic_bezier(p0: Point2<f32>, p1: Point2<f32>, p2: Point2<f32>, t: f32) -> Point2<f32> {
    let u = 1.0 - t;
    Point2::from(p0.coords * (u * u) + p1.coords * (2.0 * u * t) + p2.coords * (t * t))
}

/// Point at `t` (0..=1) on the cubic Bezier curve `p0 → p3` with controls `p1`, `p2`.
pub fn cubic_bezier(
    p0: Point2<f32>,
    p1: Point2<f32>,
    p2: Point2<f32>,
    p3: Point2<f32>,
    t: f32,
) -> Point2<f32> {
    let u = 1.0 - t;
    Point2::from(
        p0.coords * (u * u * u)
            + p1.coords * (3.0 * u * u * t)
            + p2.coords * (3.0 * u * t * t)
            + p3.coords * (t * t * t),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn end_point_along_axes() {
        let p = end_point(Point2::origin(), 0.0, 10.0);
        assert_relative_eq!(p, Point2::new(10.0, 0.0), epsilon = 1e-6);

        let p = end_point(Point2::new(1.0, 1.0), FRAC_PI_2, 2.0);
        assert_relative_eq!(p, Point2::new(1.0, 3.0), epsilon = 1e-6);
    }

    #[test]
    fn zero_length_end_point_is_origin() {
        let o = Point2::new(3.0, -4.0);
        assert_eq!(end_point(o, 1.234, 0.0), o);
    }

    #[test]
    fn angle_between_coincident_points_is_zero() {
        let p = Point2::new(5.0, 5.0);
        assert!(angle_between(p, p).abs() < f32::EPSILON);
    }

    #[test]
    fn angle_between_quadrants() {
        let o = Point2::origin();
        assert_relative_eq!(angle_between(o, Point2::new(0.0, 1.0)), FRAC_PI_2);
        assert_relative_eq!(angle_between(o, Point2::new(-1.0, 0.0)), PI);
    }

    #[test]
    fn norm_lerp_map() {
        assert_relative_eq!(norm(5.0, 0.0, 10.0), 0.5);
        assert_relative_eq!(lerp(0.25, 0.0, 100.0), 25.0);
        assert_relative_eq!(map(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
    }

    #[test]
    fn clamp_handles_inverted_bounds() {
        assert_relative_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_relative_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_relative_eq!(clamp(0.5, 2.0, 1.0), 1.0);
    }

    #[test]
    fn ranges_are_order_insensitive() {
        assert!(in_range(5.0, 10.0, 0.0));
        assert!(!in_range(11.0, 10.0, 0.0));
        assert!(range_intersect(0.0, 5.0, 10.0, 4.0));
        assert!(!range_intersect(0.0, 3.0, 4.0, 10.0));
    }

    #[test]
    fn rounding() {
        assert_relative_eq!(round_to_places(1.23456, 2), 1.23, epsilon = 1e-5);
        assert_relative_eq!(round_to_places(1234.0, -2), 1200.0);
        assert_relative_eq!(round_nearest(17.0, 5.0), 15.0);
        assert_relative_eq!(round_nearest(18.0, 5.0), 20.0);
    }

    #[test]
    fn random_range_stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let v = random_range(&mut rng, -3.0, 3.0);
            assert!((-3.0..=3.0).contains(&v));
        }
    }

    #[test]
    fn bezier_endpoints_and_midpoint() {
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(50.0, 100.0);
        let p2 = Point2::new(100.0, 0.0);
        assert_relative_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
        assert_relative_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);
        assert_relative_eq!(quadratic_bezier(p0, p1, p2, 0.5), Point2::new(50.0, 50.0));

        let p3 = Point2::new(100.0, 100.0);
        let p2 = Point2::new(100.0, 0.0);
        let p1 = Point2::new(0.0, 100.0);
        assert_relative_eq!(cubic_bezier(p0, p1, p2, p3, 1.0), p3);
        assert_relative_eq!(cubic_bezier(p0, p1, p2, p3, 0.5), Point2::new(50.0, 50.0));
    }
}
