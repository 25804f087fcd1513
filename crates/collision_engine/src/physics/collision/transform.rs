//! World-space transform of resolved shapes
//!
//! Box corners are taken relative to the rotation center, scaled, rotated by
//! the object angle and then mirrored by flipping the rotated axes before
//! translation. Circle centers get the same scale and rotation but no mirror
//! flip. Box limits come straight from the unrotated, scaled and mirrored
//! span, so they describe the box in its owner's own frame.
//!
//! Screen space is Y-down, so the rotated Y axis carries an extra sign flip.

use super::primitives::{BoxLimits, Quad};
use super::shape::{LocalShape, WorldBox, WorldCircle, WorldShape};
use crate::ecs::components::MirrorFlags;
use crate::foundation::math::{utils, Point2, Vec2};
use crate::physics::snapshot::ObjectSnapshot;
use crate::physics::CollisionError;

/// Rotation frame of an object, used to bring other shapes into its unrotated space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectFrame {
    origin: Point2,
    cos: f64,
    sin: f64,
}

impl ObjectFrame {
    /// Frame rotating around `origin` by `angle` degrees
    ///
    /// Each mirror flag reverses the rotation direction.
    pub fn new(origin: Point2, angle: f64, mirror: MirrorFlags) -> Self {
        let mut angle = angle;
        if mirror.contains(MirrorFlags::HORIZONTAL) {
            angle = -angle;
        }
        if mirror.contains(MirrorFlags::VERTICAL) {
            angle = -angle;
        }
        let (cos, sin) = utils::cos_sin_deg(angle);
        Self { origin, cos, sin }
    }

    /// Origin of the frame
    pub const fn origin(&self) -> Point2 {
        self.origin
    }

    /// Undo the frame's rotation on a world point
    pub fn normalize_point(&self, point: Point2) -> Point2 {
        let d = point - self.origin;
        Point2::new(
            d.x * self.cos - d.y * self.sin + self.origin.x,
            d.x * self.sin + d.y * self.cos + self.origin.y,
        )
    }

    /// Undo the frame's rotation on four box corners
    pub fn normalize_quad(&self, quad: &Quad) -> Quad {
        quad.map(|p| self.normalize_point(p))
    }
}

/// Rotation and axis signs shared by every shape of one snapshot
struct Pose {
    position: Point2,
    center: Point2,
    scale: Vec2,
    cos: f64,
    sin: f64,
    mirror: MirrorFlags,
}

impl Pose {
    fn new(snapshot: &ObjectSnapshot) -> Self {
        let (cos, sin) = utils::cos_sin_deg(snapshot.angle);
        Self {
            position: snapshot.position,
            center: snapshot.center,
            scale: snapshot.scale,
            cos,
            sin,
            mirror: snapshot.mirror,
        }
    }

    /// Rotate a center-relative offset, flip the rotated axes and translate
    fn place(&self, offset_x: f64, offset_y: f64, sign_x: f64, sign_y: f64) -> Point2 {
        Point2::new(
            (offset_x * self.cos + offset_y * self.sin) * sign_x + self.position.x,
            (offset_x * self.sin - offset_y * self.cos) * sign_y + self.position.y,
        )
    }

    fn world_box(&self, origin: Point2, size: Vec2, code: i64) -> WorldBox {
        let sign_x = if self.mirror.contains(MirrorFlags::HORIZONTAL) { -1.0 } else { 1.0 };
        let sign_y = if self.mirror.contains(MirrorFlags::VERTICAL) { 1.0 } else { -1.0 };

        let span_x = self.scale.x * (size.x - 1.0).max(0.0);
        let span_y = self.scale.y * (size.y - 1.0).max(0.0);
        let left = self.scale.x * (origin.x - self.center.x);
        let right = left + span_x;
        let top = self.scale.y * (origin.y - self.center.y);
        let bottom = top + span_y;

        let vertices = [
            self.place(left, top, sign_x, sign_y),
            self.place(right, top, sign_x, sign_y),
            self.place(right, bottom, sign_x, sign_y),
            self.place(left, bottom, sign_x, sign_y),
        ];

        let (x, x2) = if self.mirror.contains(MirrorFlags::HORIZONTAL) {
            let x2 = self.position.x + self.scale.x * (self.center.x - origin.x);
            (x2 - span_x, x2)
        } else {
            let x = self.position.x + left;
            (x, x + span_x)
        };
        let (y, y2) = if self.mirror.contains(MirrorFlags::VERTICAL) {
            let y2 = self.position.y + self.scale.y * (self.center.y - origin.y);
            (y2 - span_y, y2)
        } else {
            let y = self.position.y + top;
            (y, y + span_y)
        };

        WorldBox { vertices, limits: BoxLimits::new(x, y, x2, y2), code }
    }

    fn world_circle(&self, center: Point2, radius: f64, code: i64) -> WorldCircle {
        let dx = self.scale.x * (center.x - self.center.x);
        let dy = self.scale.y * (center.y - self.center.y);
        WorldCircle {
            center: self.place(dx, dy, 1.0, -1.0),
            radius: radius * self.scale.x,
            code,
        }
    }
}

/// Transform every shape of a snapshot to world space, in list order
pub fn compute_world_shapes(snapshot: &ObjectSnapshot) -> Result<Vec<WorldShape>, CollisionError> {
    let pose = Pose::new(snapshot);
    let mut shapes = Vec::new();
    shapes.try_reserve_exact(snapshot.shapes.len())?;
    shapes.extend(snapshot.shapes.iter().map(|shape| match *shape {
        LocalShape::Box { origin, size, code } => WorldShape::Box(pose.world_box(origin, size, code)),
        LocalShape::Circle { center, radius, code } => {
            WorldShape::Circle(pose.world_circle(center, radius, code))
        }
    }));
    Ok(shapes)
}
