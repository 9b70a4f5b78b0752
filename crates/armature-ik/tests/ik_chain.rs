//! Integration test: inverse-kinematics drag and reach.
//!
//! Checks that:
//! 1. A drag always lands the tip exactly on the target
//! 2. Unreachable targets extend the chain without error
//! 3. A reached chain keeps its root on the base across updates
//! 4. `update` is idempotent

use armature_ik::{ChainState, IkSystem};
use armature_test_utils::{assert_point_near, ik_chain, random_targets};
use nalgebra::Point2;

#[test]
fn drag_lands_tip_on_target() {
    let base = Point2::new(0.0, 0.0);
    for target in random_targets(11, 100, base, 20.0) {
        let mut system = IkSystem::from_config(&ik_chain([0.0, 0.0], &[10.0, 10.0]));
        system.drag(target);
        assert_point_near(system.tip().unwrap(), target, 1e-4);
        // Segments stay connected after the sweep.
        assert_point_near(
            system.segments()[0].end_position(),
            system.segments()[1].origin(),
            1e-4,
        );
    }
}

#[test]
fn drag_far_target_extends_toward_it() {
    let mut system = IkSystem::from_config(&ik_chain([0.0, 0.0], &[10.0, 10.0]));
    let target = Point2::new(300.0, 400.0);
    system.drag(target);
    system.update();

    // A free chain follows the target and is left almost straight.
    assert_point_near(system.tip().unwrap(), target, 1e-3);
    let span = nalgebra::distance(&system.segments()[0].origin(), &target);
    assert!(span > 19.99 && span <= 20.0 + 1e-3, "span = {span}");
}

#[test]
fn fixed_chain_extends_fully_toward_unreachable_target() {
    let mut system = IkSystem::from_config(&ik_chain([0.0, 0.0], &[10.0, 10.0]));
    for _ in 0..100 {
        system.reach(Point2::new(300.0, 400.0));
        system.update();
    }
    assert_eq!(system.segments()[0].origin(), Point2::origin());
    assert_point_near(system.tip().unwrap(), Point2::new(12.0, 16.0), 1e-2);
}

#[test]
fn reached_root_stays_on_base() {
    let base = Point2::new(200.0, 150.0);
    let mut system = IkSystem::from_config(&ik_chain([200.0, 150.0], &[40.0, 30.0, 20.0]));
    system.reach(Point2::new(260.0, 120.0));
    assert_eq!(system.state(), ChainState::Fixed);

    for target in random_targets(5, 60, base, 150.0) {
        system.drag(target);
        system.update();
        assert_eq!(system.segments()[0].origin(), base);
        for i in 1..system.len() {
            assert_point_near(
                system.segments()[i].origin(),
                system.segments()[i - 1].end_position(),
                1e-4,
            );
        }
    }
}

#[test]
fn fixed_chain_converges_on_reachable_target() {
    let mut system = IkSystem::from_config(&ik_chain([0.0, 0.0], &[10.0, 10.0]));
    let target = Point2::new(12.0, 5.0);
    for _ in 0..200 {
        system.reach(target);
        system.update();
    }
    assert_point_near(system.tip().unwrap(), target, 1e-2);
}

#[test]
fn update_twice_changes_nothing() {
    let mut system = IkSystem::from_config(&ik_chain([0.0, 0.0], &[10.0, 10.0, 10.0]));
    system.reach(Point2::new(5.0, 25.0));
    system.update();
    let once = system.segments().to_vec();
    system.update();
    assert_eq!(system.segments(), once.as_slice());
}
