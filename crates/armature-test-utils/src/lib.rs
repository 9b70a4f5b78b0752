//! Shared test fixtures and utilities for armature crates.
//!
//! Provides deterministic RNG setup, canned chain descriptions and point
//! assertions.

pub mod fixtures;
pub mod points;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use fixtures::{fk_chain, ik_chain, uniform_lengths, walker_leg};
pub use points::{assert_point_near, random_targets};
pub use rng::seeded_rng;
