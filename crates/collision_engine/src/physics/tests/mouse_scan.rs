//! Pointer checks from screen-space and viewport-space colliders

use super::{move_to_viewport_space, spawn, square};
use crate::config::CollisionConfig;
use crate::ecs::components::{ColliderComponent, CoordinateSpace};
use crate::ecs::{ObjectId, Region, Viewport, World};
use crate::foundation::math::Point2;
use crate::physics::{CollisionScanner, CollisionTarget, ScanMode, Selector, MOUSE_TARGET_ID};

fn viewport(origin_x: f64, origin_y: f64) -> Viewport {
    Viewport::new(Region::new(0.0, 0.0, 159.0, 119.0), Point2::new(origin_x, origin_y))
}

/// Viewport-space collider covering [105, 114] in both axes
fn viewport_collider(world: &mut World) -> ObjectId {
    let id = spawn(world, 1, 105.0, 105.0, &[square(9)]);
    move_to_viewport_space(world, id);
    id
}

#[test]
fn test_screen_collider_hits_pointer_once() {
    let mut world = World::new();
    let collider = spawn(&mut world, 1, 20.0, 20.0, &[square(5)]);
    world.set_pointer(25.0, 25.0);
    let mut scanner = CollisionScanner::new();

    let found = scanner.scan(&world, collider, Selector::Mouse).unwrap();
    assert_eq!(found.target, CollisionTarget::Mouse);
    assert_eq!(found.target_id(), MOUSE_TARGET_ID);
    assert_eq!(found.collider_shape_code, -1);
    assert_eq!(found.target_shape_code, -1);

    assert!(scanner.scan(&world, collider, Selector::Mouse).is_none());
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), MOUSE_TARGET_ID);
}

#[test]
fn test_pointer_outside_collider_misses() {
    let mut world = World::new();
    let collider = spawn(&mut world, 1, 20.0, 20.0, &[square(5)]);
    world.set_pointer(30.0, 25.0);
    let mut scanner = CollisionScanner::new();
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), 0);

    world.set_pointer(29.0, 29.0);
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), MOUSE_TARGET_ID);
}

#[test]
fn test_pointer_off_display_goes_idle() {
    let mut world = World::new();
    let collider = spawn(&mut world, 1, 0.0, 0.0, &[square(5)]);
    world.set_pointer(5.0, 5.0);
    let mut scanner = CollisionScanner::new();
    let mut second = CollisionScanner::new();
    assert_eq!(second.collision(&world, collider, Selector::Mouse), MOUSE_TARGET_ID);

    world.set_pointer(-1.0, 5.0);
    assert!(scanner.scan(&world, collider, Selector::Mouse).is_none());
    assert!(second.scan(&world, collider, Selector::Mouse).is_none());
    assert_eq!(second.cursor().mode(), ScanMode::Idle);

    world.set_pointer(321.0, 5.0);
    assert!(scanner.scan(&world, collider, Selector::Mouse).is_none());
}

#[test]
fn test_viewport_collider_sees_translated_pointer() {
    let mut world = World::new();
    world.add_viewport(viewport(100.0, 100.0));
    let collider = viewport_collider(&mut world);
    world.set_pointer(7.0, 7.0);
    let mut scanner = CollisionScanner::new();

    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), MOUSE_TARGET_ID);

    // Without the viewport offset the pointer is nowhere near
    if let Some(object) = world.get_mut(collider) {
        object.collider = ColliderComponent::default().in_space(CoordinateSpace::Screen);
    }
    scanner.reset();
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), 0);
}

#[test]
fn test_inactive_or_masked_viewports_are_skipped() {
    let mut world = World::new();
    let index = world.add_viewport(viewport(100.0, 100.0));
    let collider = viewport_collider(&mut world);
    world.set_pointer(7.0, 7.0);
    let mut scanner = CollisionScanner::new();

    world.viewport_mut(index).unwrap().active = false;
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), 0);

    world.viewport_mut(index).unwrap().active = true;
    if let Some(object) = world.get_mut(collider) {
        object.collider.viewport_mask = 0b10;
    }
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), 0);

    if let Some(object) = world.get_mut(collider) {
        object.collider.viewport_mask = 0b01;
    }
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), MOUSE_TARGET_ID);
}

#[test]
fn test_pointer_outside_viewport_region_is_skipped() {
    let mut world = World::new();
    world.add_viewport(Viewport::new(
        Region::new(200.0, 0.0, 319.0, 119.0),
        Point2::new(100.0, 100.0),
    ));
    let collider = viewport_collider(&mut world);
    world.set_pointer(7.0, 7.0);
    let mut scanner = CollisionScanner::new();
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), 0);
}

#[test]
fn test_mouse_scan_resumes_in_the_next_viewport() {
    let mut world = World::new();
    world.add_viewport(viewport(100.0, 100.0));
    world.add_viewport(viewport(98.0, 98.0));
    world.add_viewport(viewport(0.0, 0.0));
    let collider = viewport_collider(&mut world);
    world.set_pointer(7.0, 7.0);
    let mut scanner = CollisionScanner::new();

    assert!(scanner.scan(&world, collider, Selector::Mouse).is_some());
    assert_eq!(scanner.cursor().viewport_index(), 0);
    assert!(scanner.scan(&world, collider, Selector::Mouse).is_some());
    assert_eq!(scanner.cursor().viewport_index(), 1);
    assert!(scanner.scan(&world, collider, Selector::Mouse).is_none());
    assert_eq!(scanner.cursor().mode(), ScanMode::Idle);
}

#[test]
fn test_viewport_bound_limits_the_scan() {
    let mut world = World::new();
    world.add_viewport(viewport(0.0, 0.0));
    world.add_viewport(viewport(100.0, 100.0));
    let collider = viewport_collider(&mut world);
    world.set_pointer(7.0, 7.0);

    let config = CollisionConfig {
        max_viewports: 1,
        ..CollisionConfig::default()
    };
    let mut bounded = CollisionScanner::with_config(&config);
    assert_eq!(bounded.collision(&world, collider, Selector::Mouse), 0);

    let mut unbounded = CollisionScanner::new();
    assert_eq!(unbounded.collision(&world, collider, Selector::Mouse), MOUSE_TARGET_ID);
}

#[test]
fn test_mouse_after_object_scan_starts_fresh() {
    let mut world = World::new();
    let collider = spawn(&mut world, 1, 20.0, 20.0, &[square(5)]);
    let target = spawn(&mut world, 1, 22.0, 22.0, &[square(6)]);
    world.set_pointer(25.0, 25.0);
    let mut scanner = CollisionScanner::new();

    assert!(scanner.scan(&world, collider, Selector::Target(target)).is_some());
    assert_eq!(scanner.collision(&world, collider, Selector::Mouse), MOUSE_TARGET_ID);
    assert_eq!(scanner.cursor().mode(), ScanMode::Mouse);
}
