//! A single inverse-kinematics segment and the backward drag sweep.
//!
//! IK angles are absolute: a segment's end position depends only on its own
//! origin, angle and length. Parents are referenced by index into the
//! owning chain, as in the forward-kinematics crate.

use nalgebra::Point2;

use armature_core::config::IkSegmentConfig;
use armature_core::math::{angle_between, end_point, polar};
use armature_core::surface::Surface;

/// One rigid link that re-aims at whatever it is dragged toward.
#[derive(Debug, Clone, PartialEq)]
pub struct IkSegment {
    length: f32,
    /// Absolute angle.
    angle: f32,
    origin: Point2<f32>,
    /// Index of the preceding segment in the owning chain.
    parent: Option<usize>,
}

impl IkSegment {
    /// Create a root segment at `origin`.
    pub const fn new(params: &IkSegmentConfig, origin: Point2<f32>) -> Self {
        Self {
            length: params.length,
            angle: params.angle,
            origin,
            parent: None,
        }
    }

    /// Turn to face `target`. A target on the origin yields angle 0.
    pub fn point_at(&mut self, target: Point2<f32>) {
        self.angle = angle_between(self.origin, target);
    }

    /// Aim at `target`, then slide back along the new angle so the end lands
    /// on `target`.
    ///
    /// Returns the new origin, which is where the parent (if any) has to be
    /// dragged next. See [`drag_chain`] for the full sweep.
    pub fn drag(&mut self, target: Point2<f32>) -> Point2<f32> {
        self.point_at(target);
        self.origin = target - polar(self.angle, self.length);
        self.origin
    }

    /// Attach to the segment at `parent` in `ancestors` and snap the origin
    /// to its end.
    pub fn set_parent(&mut self, parent: usize, ancestors: &[Self]) {
        debug_assert!(parent < ancestors.len(), "parent must precede child");
        self.parent = Some(parent);
        self.update(ancestors);
    }

    /// Re-sync the origin to the parent's end. No-op on a root segment.
    pub fn update(&mut self, ancestors: &[Self]) {
        if let Some(parent) = self.parent.and_then(|i| ancestors.get(i)) {
            self.origin = parent.end_position();
        }
    }

    /// Position of the free end.
    pub fn end_position(&self) -> Point2<f32> {
        end_point(self.origin, self.angle, self.length)
    }

    /// Emit one line from origin to end.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.begin_path();
        surface.move_to(self.origin);
        surface.line_to(self.end_position());
        surface.stroke();
    }

    // -- accessors --

    pub const fn length(&self) -> f32 {
        self.length
    }

    pub const fn angle(&self) -> f32 {
        self.angle
    }

    pub const fn origin(&self) -> Point2<f32> {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Point2<f32>) {
        self.origin = origin;
    }

    pub const fn parent(&self) -> Option<usize> {
        self.parent
    }

    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Drag `chain[index]` to `target` and carry the correction up through
/// every ancestor in one backward pass.
///
/// Each segment is solved exactly once, with no iteration. The root ends
/// wherever the sweep leaves it; pinning it back is the owner's job.
/// Out-of-range `index` does nothing.
pub fn drag_chain(chain: &mut [IkSegment], index: usize, target: Point2<f32>) {
    let mut next = Some(index);
    let mut target = target;
    while let Some(i) = next {
        let Some(segment) = chain.get_mut(i) else {
            break;
        };
        target = segment.drag(target);
        next = segment.parent;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
