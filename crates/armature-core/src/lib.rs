//! Shared building blocks for armature: 2D vector/angle math, collision
//! predicates, the drawing surface abstraction, easing and tweening,
//! configuration and errors.
//!
//! Positions are [`Point2<f32>`](nalgebra::Point2) and displacements are
//! [`Vector2<f32>`](nalgebra::Vector2). Every angle is in radians.
//!
//! # Quick Start
//!
//! ```
//! use armature_core::prelude::*;
//! use nalgebra::Point2;
//!
//! let end = end_point(Point2::origin(), 0.0, 10.0);
//! assert!((end.x - 10.0).abs() < 1e-6);
//!
//! let mut surface = RecordingSurface::new();
//! surface.begin_path();
//! surface.move_to(Point2::origin());
//! surface.line_to(end);
//! surface.stroke();
//! assert_eq!(surface.lines().len(), 1);
//! ```

pub mod collision;
pub mod config;
pub mod easing;
pub mod error;
pub mod math;
pub mod surface;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::collision::{Circle, Rect};
    pub use crate::config::{
        FkChainConfig, FkSegmentConfig, IkChainConfig, IkSegmentConfig, SceneConfig, SvgConfig,
    };
    pub use crate::easing::{Easing, Tween, TweenStatus};
    pub use crate::error::{ArmatureError, ChainError, ConfigError, TweenError};
    pub use crate::math::{angle_between, distance, end_point, polar};
    pub use crate::surface::{DrawCommand, RecordingSurface, Surface, SvgSurface};
}
