//! Scenario tests for collision scans against an in-memory world

mod mouse_scan;

use crate::ecs::components::{ColliderComponent, CoordinateSpace, Graphic, TransformComponent};
use crate::ecs::{ObjectId, ProcessType, SceneObject, World};
use crate::physics::collision::Shape;

/// Spawn a running object whose rotation center is its top-left corner
fn spawn(world: &mut World, process_type: u64, x: f64, y: f64, shapes: &[Shape]) -> ObjectId {
    spawn_with(world, process_type, TransformComponent::from_position(x, y), shapes)
}

fn spawn_with(
    world: &mut World,
    process_type: u64,
    transform: TransformComponent,
    shapes: &[Shape],
) -> ObjectId {
    let graphic = shapes
        .iter()
        .fold(Graphic::new(10.0, 10.0), |graphic, &shape| graphic.with_shape(shape));
    let handle = world.insert_graphic(graphic);
    let transform = if transform.center.is_some() {
        transform
    } else {
        transform.with_center(0.0, 0.0)
    };
    world.spawn(
        SceneObject::new(ProcessType(process_type))
            .with_graphic(handle)
            .with_transform(transform),
    )
}

fn square(code: i64) -> Shape {
    Shape::rect(0.0, 0.0, 10.0, 10.0, code)
}

fn move_to_viewport_space(world: &mut World, id: ObjectId) {
    if let Some(object) = world.get_mut(id) {
        object.collider = ColliderComponent::default().in_space(CoordinateSpace::Viewport);
    }
}
