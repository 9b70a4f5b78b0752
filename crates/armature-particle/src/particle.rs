//! A point mass that accumulates forces straight into its velocity.
//!
//! # Update order
//!
//! ```text
//! springs → gravitation → friction (×) → gravity (+) → position += velocity
//! ```
//!
//! Forces are added to the velocity as-is (no division by mass), one frame
//! at a time; the frame is the time unit.

use nalgebra::{Point2, Vector2};

use armature_core::collision::{Circle, Rect};
use armature_core::math::{angle_between, distance, polar};

// ---------------------------------------------------------------------------
// Spring
// ---------------------------------------------------------------------------

/// Hooke spring toward a fixed anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub anchor: Point2<f32>,
    /// Stiffness.
    pub k: f32,
    /// Rest length.
    pub length: f32,
}

impl Spring {
    pub const fn new(anchor: Point2<f32>, k: f32, length: f32) -> Self {
        Self { anchor, k, length }
    }
}

// ---------------------------------------------------------------------------
// Particle
// ---------------------------------------------------------------------------

/// A moving point with mass, springs and optional friction.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point2<f32>,
    pub velocity: Vector2<f32>,
    /// Constant acceleration added every update.
    pub gravity: Vector2<f32>,
    pub mass: f32,
    pub radius: f32,
    /// Fraction of velocity kept when bouncing off a wall.
    pub bounce: f32,
    /// Velocity multiplier applied every update; `None` or `Some(0.0)`
    /// disables friction.
    pub friction: Option<f32>,
    springs: Vec<Spring>,
}

impl Particle {
    /// Particle at `position` moving at `speed` along `direction`.
    ///
    /// Mass defaults to 1; radius, bounce and gravity to 0; no friction.
    pub fn new(position: Point2<f32>, speed: f32, direction: f32) -> Self {
        Self {
            position,
            velocity: polar(direction, speed),
            gravity: Vector2::zeros(),
            mass: 1.0,
            radius: 0.0,
            bounce: 0.0,
            friction: None,
            springs: Vec::new(),
        }
    }

    /// Set downward gravity (positive y is down on a canvas).
    #[must_use]
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = Vector2::new(0.0, gravity);
        self
    }

    #[must_use]
    pub const fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub const fn with_bounce(mut self, bounce: f32) -> Self {
        self.bounce = bounce;
        self
    }

    /// Multiply the velocity by `friction` every update. A friction of 0 means
    /// no friction, not a full stop.
    #[must_use]
    pub const fn with_friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    /// Add `accel` to the velocity.
    pub fn accelerate(&mut self, accel: Vector2<f32>) {
        self.velocity += accel;
    }

    pub fn angle_to(&self, other: &Self) -> f32 {
        angle_between(self.position, other.position)
    }

    pub fn distance_to(&self, other: &Self) -> f32 {
        distance(self.position, other.position)
    }

    /// Whether the two particles' discs overlap.
    pub fn collides_with(&self, other: &Self) -> bool {
        armature_core::collision::circle_circle(&self.circle(), &other.circle())
    }

    pub const fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    // -- springs --

    /// Attach a spring, replacing any existing spring on the same anchor.
    pub fn add_spring(&mut self, spring: Spring) {
        self.remove_spring(spring.anchor);
        self.springs.push(spring);
    }

    /// Detach the spring on `anchor`, returning it.
    pub fn remove_spring(&mut self, anchor: Point2<f32>) -> Option<Spring> {
        let i = self.springs.iter().position(|s| s.anchor == anchor)?;
        Some(self.springs.remove(i))
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Add a spring force toward `anchor`: `f = k * (d - length)` along the
    /// displacement `d`.
    ///
    /// A particle sitting on the anchor takes direction `atan2(0, 0) = 0` and
    /// is pushed along -x by `k * length`.
    pub fn spring_to(&mut self, anchor: Point2<f32>, k: f32, length: f32) {
        let d = anchor - self.position;
        let stretched = polar(d.y.atan2(d.x), d.norm() - length);
        self.velocity += stretched * k;
    }

    /// Apply every attached spring.
    pub fn apply_springs(&mut self) {
        for i in 0..self.springs.len() {
            let Spring { anchor, k, length } = self.springs[i];
            self.spring_to(anchor, k, length);
        }
    }

    // -- gravitation --

    /// Add a gravitational pull toward a point mass: `f = m1 * m2 / r²`.
    ///
    /// A point mass on top of the particle contributes nothing.
    pub fn gravitate_to(&mut self, position: Point2<f32>, mass: f32) {
        let r = distance(self.position, position);
        if r <= 0.0 {
            return;
        }
        let force = self.mass * mass / (r * r);
        self.velocity += polar(angle_between(self.position, position), force);
    }

    // -- stepping --

    /// Friction, gravity, then move by the velocity.
    pub fn integrate(&mut self) {
        if let Some(friction) = self.friction.filter(|&f| f != 0.0) {
            self.velocity *= friction;
        }
        self.velocity += self.gravity;
        self.position += self.velocity;
    }

    /// Full update for a standalone particle: springs then [`integrate`](Self::integrate).
    pub fn update(&mut self) {
        self.apply_springs();
        self.integrate();
    }

    /// Keep the particle's disc inside `bounds`, reflecting the velocity
    /// component that hit a wall and scaling it by `bounce`.
    pub fn confine(&mut self, bounds: &Rect) {
        let (min_x, max_x) = (bounds.min_x() + self.radius, bounds.max_x() - self.radius);
        let (min_y, max_y) = (bounds.min_y() + self.radius, bounds.max_y() - self.radius);

        if self.position.x > max_x {
            self.position.x = max_x;
            self.velocity.x *= -self.bounce;
        } else if self.position.x < min_x {
            self.position.x = min_x;
            self.velocity.x *= -self.bounce;
        }

        if self.position.y > max_y {
            self.position.y = max_y;
            self.velocity.y *= -self.bounce;
        } else if self.position.y < min_y {
            self.position.y = min_y;
            self.velocity.y *= -self.bounce;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
