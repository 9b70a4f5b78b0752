//! A single forward-kinematics segment.
//!
//! A segment's angle is local: its world orientation is its own angle plus
//! every ancestor's angle. Ancestors are resolved through the chain slice
//! that precedes the segment, so a segment never owns or borrows its parent
//! for longer than one call.

use nalgebra::Point2;

use armature_core::config::FkSegmentConfig;
use armature_core::math::end_point;
use armature_core::surface::Surface;

/// One rigid link whose angle oscillates around a center angle.
#[derive(Debug, Clone, PartialEq)]
pub struct FkSegment {
    length: f32,
    center_angle: f32,
    rotation_range: f32,
    angle_offset: f32,
    /// Local angle, relative to the parent.
    angle: f32,
    origin: Point2<f32>,
    /// Index of the preceding segment in the owning chain.
    parent: Option<usize>,
}

impl FkSegment {
    /// Create a root segment at `origin`, angled at `set_angle(center_angle)`.
    pub fn new(params: &FkSegmentConfig, origin: Point2<f32>) -> Self {
        let mut segment = Self {
            length: params.length,
            center_angle: params.center_angle,
            rotation_range: params.rotation_range,
            angle_offset: params.angle_offset,
            angle: 0.0,
            origin,
            parent: None,
        };
        segment.set_angle(params.center_angle);
        segment
    }

    /// Drive the oscillation: `angle = center + sin(driving + offset) * range`.
    pub fn set_angle(&mut self, driving_angle: f32) {
        self.angle = (driving_angle + self.angle_offset)
            .sin()
            .mul_add(self.rotation_range, self.center_angle);
    }

    /// Overwrite the local angle, bypassing the oscillation.
    pub fn set_raw_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Attach to the segment at `parent` in `ancestors` and snap the origin
    /// to its end.
    ///
    /// `ancestors` is the part of the chain before this segment, so `parent`
    /// must be below `ancestors.len()`.
    pub fn set_parent(&mut self, parent: usize, ancestors: &[Self]) {
        debug_assert!(parent < ancestors.len(), "parent must precede child");
        self.parent = Some(parent);
        self.update(ancestors);
    }

    /// Re-sync the origin to the parent's end. No-op on a root segment.
    pub fn update(&mut self, ancestors: &[Self]) {
        if let Some(end) = self.parent_end(ancestors) {
            self.origin = end;
        }
    }

    /// World angle: own angle plus the angles of every ancestor up to the root.
    pub fn end_angle(&self, ancestors: &[Self]) -> f32 {
        let mut angle = self.angle;
        let mut next = self.parent;
        while let Some(i) = next {
            let Some(parent) = ancestors.get(i) else {
                break;
            };
            angle += parent.angle;
            next = parent.parent;
        }
        angle
    }

    /// Position of the free end. Never cached.
    pub fn end_position(&self, ancestors: &[Self]) -> Point2<f32> {
        end_point(self.origin, self.end_angle(ancestors), self.length)
    }

    /// Emit one line from origin to end.
    pub fn draw<S: Surface + ?Sized>(&self, ancestors: &[Self], surface: &mut S) {
        surface.begin_path();
        surface.move_to(self.origin);
        surface.line_to(self.end_position(ancestors));
        surface.stroke();
    }

    fn parent_end(&self, ancestors: &[Self]) -> Option<Point2<f32>> {
        let i = self.parent?;
        let parent = ancestors.get(i)?;
        Some(parent.end_position(&ancestors[..i]))
    }

    // -- accessors --

    pub const fn length(&self) -> f32 {
        self.length
    }

    pub const fn angle(&self) -> f32 {
        self.angle
    }

    pub const fn center_angle(&self) -> f32 {
        self.center_angle
    }

    pub const fn rotation_range(&self) -> f32 {
        self.rotation_range
    }

    pub const fn angle_offset(&self) -> f32 {
        self.angle_offset
    }

    pub const fn origin(&self) -> Point2<f32> {
        self.origin
    }

    /// Place a root segment. A parented segment is moved back on its next `update`.
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

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;
    use armature_core::surface::RecordingSurface;

    use super::*;

    fn unit_swing(length: f32) -> FkSegmentConfig {
        FkSegmentConfig::new(length).with_rotation_range(1.0)
    }

    #[test]
    fn set_angle_follows_sine() {
        let mut s = FkSegment::new(&unit_swing(10.0), Point2::origin());
        s.set_angle(FRAC_PI_2);
        assert_relative_eq!(s.angle(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn new_segment_starts_at_set_angle_of_center() {
        let params = FkSegmentConfig::new(10.0)
            .with_center_angle(0.5)
            .with_rotation_range(0.25)
            .with_angle_offset(0.1);
        let s = FkSegment::new(&params, Point2::origin());
        assert_relative_eq!(s.angle(), 0.5 + (0.6f32).sin() * 0.25, epsilon = 1e-6);
    }

    #[test]
    fn zero_rotation_range_is_fixed_at_center() {
        let params = FkSegmentConfig::new(10.0)
            .with_center_angle(0.7)
            .with_rotation_range(0.0);
        let mut s = FkSegment::new(&params, Point2::origin());
        for driving in [-100.0, 0.0, 1.3, PI, 1.0e6] {
            s.set_angle(driving);
            assert_relative_eq!(s.angle(), 0.7);
        }
    }

    #[test]
    fn root_end_position() {
        let mut s = FkSegment::new(&unit_swing(10.0), Point2::origin());
        s.set_raw_angle(0.0);
        assert_relative_eq!(s.end_position(&[]), Point2::new(10.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn zero_length_collapses_to_origin() {
        let s = FkSegment::new(&FkSegmentConfig::new(0.0), Point2::new(2.0, 3.0));
        assert_eq!(s.end_position(&[]), Point2::new(2.0, 3.0));
    }

    #[test]
    fn end_angle_accumulates_ancestors() {
        let mut root = FkSegment::new(&unit_swing(10.0), Point2::origin());
        root.set_raw_angle(0.0);
        let chain = [root];

        let mut child = FkSegment::new(&unit_swing(10.0), Point2::origin());
        child.set_raw_angle(FRAC_PI_2);
        child.set_parent(0, &chain);

        assert_relative_eq!(child.end_angle(&chain), FRAC_PI_2);
        assert_relative_eq!(child.origin(), Point2::new(10.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(child.end_position(&chain), Point2::new(10.0, 10.0), epsilon = 1e-5);
    }

    #[test]
    fn update_without_parent_is_noop() {
        let mut s = FkSegment::new(&unit_swing(5.0), Point2::new(1.0, 1.0));
        s.update(&[]);
        assert_eq!(s.origin(), Point2::new(1.0, 1.0));
        assert!(s.is_root());
    }

    #[test]
    fn draw_emits_single_line() {
        let mut s = FkSegment::new(&unit_swing(4.0), Point2::origin());
        s.set_raw_angle(FRAC_PI_2);
        let mut surface = RecordingSurface::new();
        s.draw(&[], &mut surface);

        let lines = surface.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Point2::origin());
        assert_relative_eq!(lines[0].1, Point2::new(0.0, 4.0), epsilon = 1e-6);
    }
}
