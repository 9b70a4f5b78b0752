//! Forward-kinematics chain: owns the segments and fans frame events out
//! to them in root-to-tip order.

use log::{debug, warn};
use nalgebra::Point2;

use armature_core::config::{FkChainConfig, FkSegmentConfig};
use armature_core::error::ChainError;
use armature_core::surface::Surface;

use crate::segment::FkSegment;

/// An append-only chain of [`FkSegment`]s anchored at `base`.
///
/// Segment indices are 0-based: index 0 is the root, attached to the base.
#[derive(Debug, Clone)]
pub struct FkSystem {
    base: Point2<f32>,
    segments: Vec<FkSegment>,
    /// Driving-angle increment applied by [`step`](Self::step).
    angle_speed: f32,
    driving_angle: f32,
}

impl FkSystem {
    /// Empty chain anchored at `base`.
    pub fn new(base: Point2<f32>) -> Self {
        Self {
            base,
            segments: Vec::new(),
            angle_speed: 0.0,
            driving_angle: 0.0,
        }
    }

    /// Build a chain from configuration, segments in config order.
    pub fn from_config(config: &FkChainConfig) -> Self {
        let mut system =
            Self::new(Point2::from(config.base)).with_rotation_speed(config.rotation_speed);
        for params in &config.segments {
            system.add_segment(params);
        }
        debug!(
            "built FK chain: {} segments at ({}, {})",
            system.len(),
            system.base.x,
            system.base.y
        );
        system
    }

    /// Set the driving-angle increment used by [`step`](Self::step).
    #[must_use]
    pub const fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.angle_speed = speed;
        self
    }

    /// Append a segment, parented to the current tip. Returns its index.
    pub fn add_segment(&mut self, params: &FkSegmentConfig) -> usize {
        let index = self.segments.len();
        let mut segment = FkSegment::new(params, self.base);
        if let Some(parent) = index.checked_sub(1) {
            segment.set_parent(parent, &self.segments);
        }
        self.segments.push(segment);
        index
    }

    /// Force the local angle of segment `index`, bypassing the oscillation.
    ///
    /// # Errors
    ///
    /// [`ChainError::SegmentNotFound`] when `index` is out of bounds; the
    /// chain is left untouched.
    pub fn rotate_arm(&mut self, index: usize, angle: f32) -> Result<(), ChainError> {
        let len = self.segments.len();
        let segment = self
            .segments
            .get_mut(index)
            .ok_or(ChainError::SegmentNotFound { index, len })?;
        segment.set_raw_angle(angle);
        Ok(())
    }

    /// Broadcast one driving angle to every segment's oscillation.
    pub fn update_angle(&mut self, driving_angle: f32) {
        for segment in &mut self.segments {
            segment.set_angle(driving_angle);
        }
    }

    /// Re-sync every origin, root to tip, so each child reads an already
    /// updated parent.
    pub fn update(&mut self) {
        for i in 0..self.segments.len() {
            let (ancestors, rest) = self.segments.split_at_mut(i);
            rest[0].update(ancestors);
        }
    }

    /// Advance the driving angle by the rotation speed, broadcast it, update.
    pub fn step(&mut self) {
        self.driving_angle += self.angle_speed;
        self.update_angle(self.driving_angle);
        self.update();
    }

    /// Draw every segment, root to tip.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (i, segment) in self.segments.iter().enumerate() {
            segment.draw(&self.segments[..i], surface);
        }
    }

    // -- lookup --

    /// Segment at `index`, logging a warning when there is none.
    pub fn segment(&self, index: usize) -> Option<&FkSegment> {
        let segment = self.segments.get(index);
        if segment.is_none() {
            warn!(
                "FkSystem: no segment at index {index} (chain has {})",
                self.segments.len()
            );
        }
        segment
    }

    /// Segment at `index`, without logging.
    pub fn get(&self, index: usize) -> Option<&FkSegment> {
        self.segments.get(index)
    }

    /// The tip segment, if any.
    pub fn last(&self) -> Option<&FkSegment> {
        self.segments.last()
    }

    /// World angle of segment `index` (own angle plus all ancestors).
    pub fn end_angle(&self, index: usize) -> Option<f32> {
        let segment = self.segments.get(index)?;
        Some(segment.end_angle(&self.segments[..index]))
    }

    /// End position of segment `index`.
    pub fn end_position(&self, index: usize) -> Option<Point2<f32>> {
        let segment = self.segments.get(index)?;
        Some(segment.end_position(&self.segments[..index]))
    }

    /// End position of the tip segment.
    pub fn tip(&self) -> Option<Point2<f32>> {
        self.end_position(self.segments.len().checked_sub(1)?)
    }

    pub fn segments(&self) -> &[FkSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub const fn base(&self) -> Point2<f32> {
        self.base
    }

    pub fn set_rotation_speed(&mut self, speed: f32) {
        self.angle_speed = speed;
    }

    pub const fn rotation_speed(&self) -> f32 {
        self.angle_speed
    }

    /// Driving angle accumulated by [`step`](Self::step).
    pub const fn driving_angle(&self) -> f32 {
        self.driving_angle
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
