//! Canned chain descriptions.
//!
//! Fixtures are configuration values rather than built systems so this
//! crate does not depend on the chain crates it is used to test.

use armature_core::config::{FkChainConfig, FkSegmentConfig, IkChainConfig, IkSegmentConfig};

/// `count` copies of `length`.
pub fn uniform_lengths(count: usize, length: f32) -> Vec<f32> {
    vec![length; count]
}

/// FK chain at `base` with the given segment lengths and default oscillation.
pub fn fk_chain(base: [f32; 2], lengths: &[f32]) -> FkChainConfig {
    FkChainConfig {
        base,
        segments: lengths.iter().copied().map(FkSegmentConfig::new).collect(),
        ..FkChainConfig::default()
    }
}

/// Free IK chain at `base` with the given segment lengths.
pub fn ik_chain(base: [f32; 2], lengths: &[f32]) -> IkChainConfig {
    IkChainConfig {
        base,
        fixed_base: false,
        segments: lengths.iter().copied().map(IkSegmentConfig::new).collect(),
    }
}

/// A two-legged walker scene: one thigh/shin FK pair, phase-shifted.
pub fn walker_leg(base: [f32; 2], phase: f32) -> FkChainConfig {
    FkChainConfig {
        base,
        rotation_speed: 0.05,
        segments: vec![
            FkSegmentConfig::new(100.0)
                .with_center_angle(std::f32::consts::FRAC_PI_2)
                .with_rotation_range(std::f32::consts::FRAC_PI_4)
                .with_angle_offset(phase),
            FkSegmentConfig::new(100.0)
                .with_center_angle(0.87)
                .with_rotation_range(0.87)
                .with_angle_offset(phase - 1.5),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_validate() {
        assert!(fk_chain([0.0, 0.0], &uniform_lengths(4, 10.0)).validate().is_ok());
        assert!(ik_chain([0.0, 0.0], &[1.0, 2.0]).validate().is_ok());
        assert!(walker_leg([0.0, 0.0], 0.0).validate().is_ok());
        assert_eq!(ik_chain([0.0, 0.0], &[1.0, 2.0]).segments.len(), 2);
    }
}
