//! Inverse-kinematics chain with an optional pinned root.
//!
//! # State machine
//!
//! ```text
//!            reach()
//!   Free ───────────────► Fixed
//! ```
//!
//! `Fixed` is a one-way latch: once entered, every [`IkSystem::update`]
//! re-pins the root to the base while the tip keeps tracking drag targets.

use log::{debug, warn};
use nalgebra::Point2;

use armature_core::config::{IkChainConfig, IkSegmentConfig};
use armature_core::surface::Surface;

use crate::segment::{IkSegment, drag_chain};

/// Whether the chain's root is pinned to its base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChainState {
    /// Dragging moves the whole chain.
    #[default]
    Free,
    /// The root is reset to the base on every update.
    Fixed,
}

/// An append-only chain of [`IkSegment`]s anchored at `base`.
///
/// Segment indices are 0-based: index 0 is the root.
#[derive(Debug, Clone)]
pub struct IkSystem {
    base: Point2<f32>,
    segments: Vec<IkSegment>,
    state: ChainState,
}

impl IkSystem {
    /// Empty, free chain anchored at `base`.
    pub const fn new(base: Point2<f32>) -> Self {
        Self {
            base,
            segments: Vec::new(),
            state: ChainState::Free,
        }
    }

    /// Build a chain from configuration. `fixed_base = true` starts latched.
    pub fn from_config(config: &IkChainConfig) -> Self {
        let mut system = Self::new(Point2::from(config.base));
        for params in &config.segments {
            system.add_segment(params);
        }
        if config.fixed_base {
            system.state = ChainState::Fixed;
        }
        debug!(
            "built IK chain: {} segments at ({}, {}), {:?}",
            system.len(),
            system.base.x,
            system.base.y,
            system.state
        );
        system
    }

    /// Append a segment, parented to the current tip. Returns its index.
    pub fn add_segment(&mut self, params: &IkSegmentConfig) -> usize {
        let index = self.segments.len();
        let mut segment = IkSegment::new(params, self.base);
        if let Some(parent) = index.checked_sub(1) {
            segment.set_parent(parent, &self.segments);
        }
        self.segments.push(segment);
        index
    }

    /// Drag the tip to `target`, sweeping the correction back to the root.
    ///
    /// Does nothing (beyond a warning) on an empty chain.
    pub fn drag(&mut self, target: Point2<f32>) {
        let Some(tip) = self.segments.len().checked_sub(1) else {
            warn!("IkSystem: drag on an empty chain");
            return;
        };
        drag_chain(&mut self.segments, tip, target);
    }

    /// [`drag`](Self::drag), then latch the root to the base for good.
    pub fn reach(&mut self, target: Point2<f32>) {
        self.drag(target);
        if self.state == ChainState::Free {
            debug!("IkSystem: Free -> Fixed");
            self.state = ChainState::Fixed;
        }
    }

    /// Re-sync every origin, root to tip. While `Fixed`, the root is put back
    /// on the base before its children read it.
    pub fn update(&mut self) {
        let fixed = self.state == ChainState::Fixed;
        for i in 0..self.segments.len() {
            let (ancestors, rest) = self.segments.split_at_mut(i);
            let segment = &mut rest[0];
            segment.update(ancestors);
            if fixed && segment.is_root() {
                segment.set_origin(self.base);
            }
        }
    }

    /// Draw every segment, root to tip.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for segment in &self.segments {
            segment.draw(surface);
        }
    }

    // -- lookup --

    /// Segment at `index`, logging a warning when there is none.
    pub fn segment(&self, index: usize) -> Option<&IkSegment> {
        let segment = self.segments.get(index);
        if segment.is_none() {
            warn!(
                "IkSystem: no segment at index {index} (chain has {})",
                self.segments.len()
            );
        }
        segment
    }

    /// Segment at `index`, without logging.
    pub fn get(&self, index: usize) -> Option<&IkSegment> {
        self.segments.get(index)
    }

    /// The tip segment, if any.
    pub fn last(&self) -> Option<&IkSegment> {
        self.segments.last()
    }

    /// End position of the tip segment.
    pub fn tip(&self) -> Option<Point2<f32>> {
        self.segments.last().map(IkSegment::end_position)
    }

    pub fn segments(&self) -> &[IkSegment] {
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

    pub const fn state(&self) -> ChainState {
        self.state
    }

    pub fn is_fixed(&self) -> bool {
        self.state == ChainState::Fixed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use armature_core::surface::RecordingSurface;

    use super::*;

    fn chain(base: Point2<f32>, lengths: &[f32]) -> IkSystem {
        let mut system = IkSystem::new(base);
        for &length in lengths {
            system.add_segment(&IkSegmentConfig::new(length));
        }
        system
    }

    #[test]
    fn chain_parent_links() {
        let system = chain(Point2::origin(), &[5.0, 5.0, 5.0]);
        assert!(system.segments()[0].is_root());
        assert_eq!(system.segments()[1].parent(), Some(0));
        assert_eq!(system.segments()[2].parent(), Some(1));
        assert_relative_eq!(system.tip().unwrap(), Point2::new(15.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn starts_free() {
        let system = chain(Point2::origin(), &[5.0]);
        assert_eq!(system.state(), ChainState::Free);
        assert!(!system.is_fixed());
    }

    #[test]
    fn drag_free_chain_translates_root() {
        let mut system = chain(Point2::origin(), &[10.0, 10.0]);
        system.drag(Point2::new(100.0, 0.0));
        system.update();
        assert_relative_eq!(system.segments()[0].origin(), Point2::new(80.0, 0.0), epsilon = 1e-4);
        assert_relative_eq!(system.tip().unwrap(), Point2::new(100.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn reach_latches_fixed() {
        let mut system = chain(Point2::origin(), &[10.0, 10.0]);
        system.reach(Point2::new(100.0, 0.0));
        assert!(system.is_fixed());

        // Dragging afterwards never unlatches.
        system.drag(Point2::new(-50.0, 3.0));
        assert_eq!(system.state(), ChainState::Fixed);
    }

    #[test]
    fn fixed_unreachable_target_fully_extends() {
        let mut system = chain(Point2::origin(), &[10.0, 10.0]);
        system.reach(Point2::new(100.0, 0.0));
        system.update();
        assert_eq!(system.segments()[0].origin(), Point2::origin());
        assert_relative_eq!(system.tip().unwrap(), Point2::new(20.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn update_on_empty_chain_and_drag_are_noops() {
        let mut system = IkSystem::new(Point2::origin());
        system.drag(Point2::new(1.0, 1.0));
        system.reach(Point2::new(1.0, 1.0));
        system.update();
        assert!(system.is_empty());
        assert!(system.tip().is_none());
        assert!(system.segment(0).is_none());
    }

    #[test]
    fn draw_one_line_per_segment() {
        let system = chain(Point2::origin(), &[3.0, 4.0]);
        let mut surface = RecordingSurface::new();
        system.draw(&mut surface);
        assert_eq!(surface.lines().len(), 2);
    }

    #[test]
    fn from_config_fixed_base() {
        let config = IkChainConfig {
            base: [10.0, 10.0],
            fixed_base: true,
            segments: vec![IkSegmentConfig::new(5.0), IkSegmentConfig::new(5.0).with_angle(1.0)],
        };
        let mut system = IkSystem::from_config(&config);
        assert!(system.is_fixed());
        assert_relative_eq!(system.segments()[1].angle(), 1.0);

        system.drag(Point2::new(-40.0, -40.0));
        system.update();
        assert_eq!(system.segments()[0].origin(), Point2::new(10.0, 10.0));
    }
}
