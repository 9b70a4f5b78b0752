//! Forward kinematics arm chains.
//!
//! Every segment's local angle oscillates around a center angle as a
//! function of a driving angle; its base is pinned to the end of the
//! segment before it.
//!
//! ```text
//! driving angle ──► set_angle (per segment) ──► update (root → tip) ──► draw
//! ```
//!
//! # Quick Start
//!
//! ```
//! use armature_core::config::FkSegmentConfig;
//! use armature_fk::FkSystem;
//! use nalgebra::Point2;
//!
//! let mut arm = FkSystem::new(Point2::new(200.0, 200.0)).with_rotation_speed(0.05);
//! arm.add_segment(&FkSegmentConfig::new(100.0).with_rotation_range(0.8));
//! arm.add_segment(&FkSegmentConfig::new(80.0).with_angle_offset(-1.5));
//!
//! for _ in 0..60 {
//!     arm.step();
//! }
//! assert!(arm.tip().is_some());
//! ```

pub mod segment;
pub mod system;

pub use segment::FkSegment;
pub use system::FkSystem;
