//! Inverse kinematics arm chains.
//!
//! Dragging the tip re-aims it at the target and slides it back so its end
//! lands exactly on the target; the new base becomes the drag target of the
//! parent, and so on up to the root. A following [`IkSystem::update`] walks
//! root to tip re-attaching every base to its parent's end, and pins the
//! root to the anchor once the chain has been latched with
//! [`IkSystem::reach`].
//!
//! ```text
//! drag/reach (tip → root) ──► update (root → tip) ──► draw
//! ```
//!
//! # Quick Start
//!
//! ```
//! use armature_core::config::IkSegmentConfig;
//! use armature_ik::IkSystem;
//! use nalgebra::Point2;
//!
//! let mut arm = IkSystem::new(Point2::new(0.0, 0.0));
//! arm.add_segment(&IkSegmentConfig::new(50.0));
//! arm.add_segment(&IkSegmentConfig::new(50.0));
//!
//! arm.reach(Point2::new(60.0, 40.0));
//! arm.update();
//! assert_eq!(arm.segments()[0].origin(), Point2::new(0.0, 0.0));
//! ```

pub mod segment;
pub mod system;

pub use segment::{IkSegment, drag_chain};
pub use system::{ChainState, IkSystem};
