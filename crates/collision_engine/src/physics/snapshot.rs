//! Per-call snapshots of object poses and shapes
//!
//! A snapshot copies everything a collision check needs out of the object
//! store: the resolved screen position, rotation center, angle, mirror flags,
//! scale and the shape list with all defaults filled in. Snapshots are built
//! fresh for every check and never shared.

use super::collision::dispatch::ShapeSet;
use super::collision::shape::{LocalShape, NO_SHAPE_CODE};
use super::collision::transform::ObjectFrame;
use super::CollisionError;
use crate::ecs::components::{Graphic, MirrorFlags};
use crate::ecs::{CollisionWorld, ObjectId, SceneObject};
use crate::foundation::math::{Point2, Vec2};

/// Immutable pose and shape list of one object for one check
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSnapshot {
    /// Screen position
    pub position: Point2,
    /// Rotation and scale center in graphic space
    pub center: Point2,
    /// Rotation angle in degrees
    pub angle: f64,
    /// Mirror flags
    pub mirror: MirrorFlags,
    /// Scale factors as fractions
    pub scale: Vec2,
    /// Resolved shapes in list order
    pub shapes: Vec<LocalShape>,
}

impl ObjectSnapshot {
    /// Assemble a snapshot from already resolved parts
    pub fn from_parts(
        position: Point2,
        center: Point2,
        angle: f64,
        mirror: MirrorFlags,
        scale: Vec2,
        shapes: Vec<LocalShape>,
    ) -> Self {
        Self { position, center, angle, mirror, scale, shapes }
    }

    /// Snapshot an object from the store
    ///
    /// Fails with [`CollisionError::NoGraphic`] when the object has nothing drawn.
    pub fn build<W: CollisionWorld + ?Sized>(world: &W, id: ObjectId) -> Result<Self, CollisionError> {
        let object = world.object(id).ok_or(CollisionError::UnknownObject(id))?;
        let graphic = object
            .graphic
            .and_then(|handle| world.graphic(handle))
            .ok_or(CollisionError::NoGraphic(id))?;
        Self::from_object(object, graphic)
    }

    /// Snapshot an object whose graphic has already been looked up
    pub fn from_object(object: &SceneObject, graphic: &Graphic) -> Result<Self, CollisionError> {
        let transform = &object.transform;

        let extent = match transform.clip {
            Some(clip) if clip.x != 0.0 && clip.y != 0.0 => clip,
            _ => graphic.extent(),
        };
        let center = transform
            .center
            .or_else(|| graphic.rotation_center())
            .unwrap_or_else(|| Point2::new(extent.x / 2.0, extent.y / 2.0));

        let mut shapes = Vec::new();
        if graphic.shapes.is_empty() {
            shapes.try_reserve_exact(1)?;
            let fallback = object.collider.fallback.resolve(extent, center);
            shapes.push(with_code(fallback, NO_SHAPE_CODE));
        } else {
            shapes.try_reserve_exact(graphic.shapes.len())?;
            shapes.extend(graphic.shapes.iter().map(|shape| shape.resolve(extent, center)));
        }

        Ok(Self {
            position: transform.screen_position(),
            center,
            angle: transform.angle,
            mirror: transform.mirror,
            scale: transform.scale(),
            shapes,
        })
    }

    /// Snapshot of the pointer as a 1×1 box
    ///
    /// Fails with [`CollisionError::PointerOutOfBounds`] when the pointer is
    /// off the display surface.
    pub fn from_pointer<W: CollisionWorld + ?Sized>(world: &W) -> Result<Self, CollisionError> {
        let pointer = world.pointer();
        if !world.display().contains(pointer) {
            return Err(CollisionError::PointerOutOfBounds { x: pointer.x, y: pointer.y });
        }

        let mut shapes = Vec::new();
        shapes.try_reserve_exact(1)?;
        shapes.push(LocalShape::Box {
            origin: Point2::origin(),
            size: Vec2::new(1.0, 1.0),
            code: NO_SHAPE_CODE,
        });

        Ok(Self {
            position: pointer,
            center: Point2::origin(),
            angle: 0.0,
            mirror: MirrorFlags::empty(),
            scale: Vec2::new(1.0, 1.0),
            shapes,
        })
    }

    /// Number of box shapes
    pub fn box_count(&self) -> usize {
        self.shapes.iter().filter(|shape| shape.is_box()).count()
    }

    /// Number of circle shapes
    pub fn circle_count(&self) -> usize {
        self.shapes.len() - self.box_count()
    }

    /// Which shape kinds the snapshot holds
    pub fn shape_set(&self) -> ShapeSet {
        ShapeSet::from_counts(self.box_count(), self.circle_count())
    }

    /// Rotation frame used to normalize other shapes against this object
    pub fn frame(&self) -> ObjectFrame {
        ObjectFrame::new(self.position, self.angle, self.mirror)
    }

    /// Move the snapshot by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }
}

fn with_code(shape: LocalShape, code: i64) -> LocalShape {
    match shape {
        LocalShape::Box { origin, size, .. } => LocalShape::Box { origin, size, code },
        LocalShape::Circle { center, radius, .. } => LocalShape::Circle { center, radius, code },
    }
}
