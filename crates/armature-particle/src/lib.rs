//! Point-mass particles with springs and pairwise gravitation.
//!
//! ```
//! use armature_particle::{Particle, ParticleSet};
//! use nalgebra::Point2;
//!
//! let mut set = ParticleSet::new();
//! let sun = set.add(Particle::new(Point2::new(400.0, 300.0), 0.0, 0.0).with_mass(10_000.0));
//! let planet = set.add(Particle::new(
//!     Point2::new(600.0, 300.0),
//!     10.0,
//!     -std::f32::consts::FRAC_PI_2,
//! ));
//! set.add_gravitation(planet, sun).unwrap();
//!
//! for _ in 0..10 {
//!     set.update();
//! }
//! ```

pub mod error;
pub mod particle;
pub mod set;

pub use error::ParticleError;
pub use particle::{Particle, Spring};
pub use set::{ParticleId, ParticleSet};
