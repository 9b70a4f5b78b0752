use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for armature.
#[derive(Debug, Error)]
pub enum ArmatureError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Tween error: {0}")]
    Tween(#[from] TweenError),

    #[error("Failed to write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid length {length} for segment {index} (must be finite and >= 0)")]
    InvalidLength { index: usize, length: f32 },

    #[error("Invalid frame count: {0} (must be > 0)")]
    InvalidFrames(u32),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Chain lookup errors.
///
/// Copy + static messages; a missing segment is recoverable and never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("No segment at index {index} (chain has {len})")]
    SegmentNotFound { index: usize, len: usize },
}

/// Tween construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TweenError {
    #[error("Channel count mismatch: {starts} starts, {targets} targets")]
    ChannelMismatch { starts: usize, targets: usize },

    #[error("Invalid duration: {0} (must be > 0)")]
    InvalidDuration(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armature_error_from_config_error() {
        let err = ConfigError::InvalidFrames(0);
        let armature_err: ArmatureError = err.into();
        assert!(matches!(armature_err, ArmatureError::Config(_)));
        assert!(armature_err.to_string().contains("frame count"));
    }

    #[test]
    fn armature_error_from_chain_error() {
        let err = ChainError::SegmentNotFound { index: 4, len: 2 };
        let armature_err: ArmatureError = err.into();
        assert!(matches!(armature_err, ArmatureError::Chain(_)));
        assert_eq!(
            armature_err.to_string(),
            "Chain error: No segment at index 4 (chain has 2)"
        );
    }

    #[test]
    fn armature_error_from_tween_error() {
        let err = TweenError::ChannelMismatch {
            starts: 2,
            targets: 3,
        };
        let armature_err: ArmatureError = err.into();
        assert!(matches!(armature_err, ArmatureError::Tween(_)));
        assert!(armature_err.to_string().contains("2 starts, 3 targets"));
    }

    #[test]
    fn output_error_names_the_path() {
        let err = ArmatureError::Output {
            path: PathBuf::from("/tmp/out/arm.svg"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write /tmp/out/arm.svg: no such directory"
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(!matches!(err, ArmatureError::Config(_)));
    }

    #[test]
    fn config_error_display() {
        let e = ConfigError::InvalidLength {
            index: 1,
            length: -2.0,
        };
        assert_eq!(
            e.to_string(),
            "Invalid length -2 for segment 1 (must be finite and >= 0)"
        );
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn errors_are_send_sync() {
        assert_send_sync::<ArmatureError>();
        assert_send_sync::<ChainError>();
    }
}
