use thiserror::Error;

use crate::set::ParticleId;

/// Particle set errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParticleError {
    #[error("No particle {0} in set")]
    NotFound(ParticleId),

    #[error("Particle {0} cannot gravitate toward itself")]
    SelfGravitation(ParticleId),
}
