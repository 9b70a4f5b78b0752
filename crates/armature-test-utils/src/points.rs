//! Point assertions and random target generation.

use nalgebra::Point2;
use rand::Rng;

use armature_core::math::random_range;

use crate::rng::seeded_rng;

/// Assert two points are within `epsilon` of each other on both axes.
///
/// # Panics
///
/// Panics with both points in the message when they differ.
#[track_caller]
pub fn assert_point_near(actual: Point2<f32>, expected: Point2<f32>, epsilon: f32) {
    let dx = (actual.x - expected.x).abs();
    let dy = (actual.y - expected.y).abs();
    assert!(
        dx <= epsilon && dy <= epsilon,
        "points differ: actual ({}, {}), expected ({}, {}), epsilon {epsilon}",
        actual.x,
        actual.y,
        expected.x,
        expected.y
    );
}

/// `count` deterministic points inside the disc of `radius` around `center`.
pub fn random_targets(
    seed: u64,
    count: usize,
    center: Point2<f32>,
    radius: f32,
) -> Vec<Point2<f32>> {
    let mut rng = seeded_rng(seed);
    (0..count)
        .map(|_| {
            let angle = random_range(&mut rng, 0.0, std::f32::consts::TAU);
            let r = radius * rng.r#gen::<f32>().sqrt();
            armature_core::math::end_point(center, angle, r)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_points_pass() {
        assert_point_near(Point2::new(1.0, 2.0), Point2::new(1.0005, 1.9995), 1e-3);
    }

    #[test]
    #[should_panic(expected = "points differ")]
    fn far_points_panic() {
        assert_point_near(Point2::new(1.0, 2.0), Point2::new(1.5, 2.0), 1e-3);
    }

    #[test]
    fn targets_inside_disc_and_reproducible() {
        let center = Point2::new(10.0, -5.0);
        let a = random_targets(3, 50, center, 20.0);
        let b = random_targets(3, 50, center, 20.0);
        assert_eq!(a, b);
        for p in a {
            assert!(nalgebra::distance(&p, &center) <= 20.0 + 1e-4);
        }
    }
}
