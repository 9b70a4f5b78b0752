//! An owned collection of particles with gravitation links between them.
//!
//! Links are stored as [`ParticleId`]s rather than references, so the set is
//! the sole owner of every particle.

use std::fmt;

use log::debug;

use armature_core::collision::Rect;

use crate::error::ParticleError;
use crate::particle::Particle;

/// Handle to a particle inside a [`ParticleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(usize);

impl ParticleId {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Particles plus "gravitates toward" links.
#[derive(Debug, Clone, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    /// `gravitations[i]` lists the particles particle `i` is pulled toward.
    gravitations: Vec<Vec<ParticleId>>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `particle` and return its handle.
    pub fn add(&mut self, particle: Particle) -> ParticleId {
        let id = ParticleId(self.particles.len());
        self.particles.push(particle);
        self.gravitations.push(Vec::new());
        id
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0)
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(id.0)
    }

    fn check(&self, id: ParticleId) -> Result<(), ParticleError> {
        if id.0 < self.particles.len() {
            Ok(())
        } else {
            Err(ParticleError::NotFound(id))
        }
    }

    /// Make `id` gravitate toward `toward`. Adding an existing link is a no-op.
    ///
    /// # Errors
    ///
    /// [`ParticleError::NotFound`] for an unknown handle,
    /// [`ParticleError::SelfGravitation`] when `id == toward`.
    pub fn add_gravitation(
        &mut self,
        id: ParticleId,
        toward: ParticleId,
    ) -> Result<(), ParticleError> {
        self.check(id)?;
        self.check(toward)?;
        if id == toward {
            return Err(ParticleError::SelfGravitation(id));
        }
        let links = &mut self.gravitations[id.0];
        if links.contains(&toward) {
            debug!("particle {id} already gravitates toward {toward}");
        } else {
            links.push(toward);
        }
        Ok(())
    }

    /// Remove the link from `id` to `toward`. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// [`ParticleError::NotFound`] for an unknown handle.
    pub fn remove_gravitation(
        &mut self,
        id: ParticleId,
        toward: ParticleId,
    ) -> Result<bool, ParticleError> {
        self.check(id)?;
        self.check(toward)?;
        let links = &mut self.gravitations[id.0];
        let Some(i) = links.iter().position(|&t| t == toward) else {
            return Ok(false);
        };
        links.remove(i);
        Ok(true)
    }

    /// Particles `id` gravitates toward.
    pub fn gravitations(&self, id: ParticleId) -> &[ParticleId] {
        self.gravitations.get(id.0).map_or(&[], Vec::as_slice)
    }

    /// Update every particle in insertion order.
    ///
    /// Each particle sees the already-updated state of the particles before it.
    pub fn update(&mut self) {
        for i in 0..self.particles.len() {
            self.particles[i].apply_springs();
            for &toward in &self.gravitations[i] {
                let other = &self.particles[toward.0];
                let (position, mass) = (other.position, other.mass);
                self.particles[i].gravitate_to(position, mass);
            }
            self.particles[i].integrate();
        }
    }

    /// Keep every particle inside `bounds`.
    pub fn confine(&mut self, bounds: &Rect) {
        for particle in &mut self.particles {
            particle.confine(bounds);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.particles.iter().enumerate().map(|(i, p)| (ParticleId(i), p))
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point2, Vector2};

    use super::*;

    fn at_rest(x: f32, y: f32) -> Particle {
        Particle::new(Point2::new(x, y), 0.0, 0.0)
    }

    #[test]
    fn add_returns_sequential_ids() {
        let mut set = ParticleSet::new();
        let a = set.add(at_rest(0.0, 0.0));
        let b = set.add(at_rest(1.0, 0.0));
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(set.len(), 2);
        assert_eq!(b.to_string(), "#1");
    }

    #[test]
    fn gravitation_links_dedupe_and_remove() {
        let mut set = ParticleSet::new();
        let a = set.add(at_rest(0.0, 0.0));
        let sun = set.add(at_rest(10.0, 0.0).with_mass(100.0));

        set.add_gravitation(a, sun).unwrap();
        set.add_gravitation(a, sun).unwrap();
        assert_eq!(set.gravitations(a), &[sun]);

        assert!(set.remove_gravitation(a, sun).unwrap());
        assert!(!set.remove_gravitation(a, sun).unwrap());
        assert!(set.gravitations(a).is_empty());
    }

    #[test]
    fn unknown_or_self_links_rejected() {
        let mut set = ParticleSet::new();
        let a = set.add(at_rest(0.0, 0.0));
        let ghost = ParticleId(7);
        assert_eq!(set.add_gravitation(a, ghost), Err(ParticleError::NotFound(ghost)));
        assert_eq!(set.remove_gravitation(ghost, a), Err(ParticleError::NotFound(ghost)));
        assert_eq!(set.add_gravitation(a, a), Err(ParticleError::SelfGravitation(a)));
        assert!(set.gravitations(ghost).is_empty());
    }

    #[test]
    fn planet_is_pulled_toward_sun() {
        let mut set = ParticleSet::new();
        let planet = set.add(at_rest(0.0, 0.0));
        let sun = set.add(at_rest(10.0, 0.0).with_mass(100.0));
        set.add_gravitation(planet, sun).unwrap();

        set.update();
        // 1 * 100 / 10² = 1 toward +x.
        let p = set.get(planet).unwrap();
        assert_relative_eq!(p.velocity, Vector2::new(1.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(p.position, Point2::new(1.0, 0.0), epsilon = 1e-6);
        // The sun has no links and stays put.
        assert_eq!(set.get(sun).unwrap().position, Point2::new(10.0, 0.0));
    }

    #[test]
    fn later_particles_see_updated_state() {
        let mut set = ParticleSet::new();
        let mover = set.add(Particle::new(Point2::new(0.0, 0.0), 5.0, 0.0));
        let watcher = set.add(at_rest(10.0, 0.0));
        set.add_gravitation(watcher, mover).unwrap();

        set.update();
        // mover is now at (5, 0): distance 5, pull 1/25 toward -x.
        let w = set.get(watcher).unwrap();
        assert_relative_eq!(w.velocity.x, -0.04, epsilon = 1e-6);
        assert_eq!(set.get(mover).unwrap().position, Point2::new(5.0, 0.0));
    }

    #[test]
    fn iter_pairs_ids_with_particles() {
        let mut set = ParticleSet::new();
        set.add(at_rest(1.0, 0.0));
        set.add(at_rest(2.0, 0.0));
        let xs: Vec<f32> = set.iter().map(|(_, p)| p.position.x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
        assert!(!set.is_empty());
    }
}
