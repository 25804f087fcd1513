//! Shape pair dispatch for one collider/target pair
//!
//! Shape pairs are visited collider-outer, target-inner, starting from a
//! [`ShapeCursor`] so a scan can stop at a match and pick up right after it on
//! the next call. The kernel is picked once per object pair from the box and
//! circle mix on each side. The specialized kernels prepare the
//! collider-side work once per collider shape; the generic kernel redoes it
//! for every pair and is the reference the others must agree with.

use super::overlap;
use super::primitives::BoxLimits;
use super::shape::{WorldBox, WorldCircle, WorldShape};
use super::transform::ObjectFrame;
use crate::config::DispatchStrategy;
use crate::foundation::math::Point2;

/// Kinds of shape an object carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeSet {
    /// No shapes
    Empty,
    /// Only boxes
    Boxes,
    /// Only circles
    Circles,
    /// Boxes and circles
    Mixed,
}

impl ShapeSet {
    /// Classify from shape counts
    pub const fn from_counts(boxes: usize, circles: usize) -> Self {
        match (boxes > 0, circles > 0) {
            (false, false) => Self::Empty,
            (true, false) => Self::Boxes,
            (false, true) => Self::Circles,
            (true, true) => Self::Mixed,
        }
    }
}

/// Resume point inside the shape pair cross product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeCursor {
    /// Index into the collider's shapes
    pub collider: usize,
    /// Index into the target's shapes
    pub target: usize,
}

/// Matching shape pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeHit {
    /// Index of the collider shape
    pub collider_index: usize,
    /// Index of the target shape
    pub target_index: usize,
    /// Tag of the collider shape
    pub collider_code: i64,
    /// Tag of the target shape
    pub target_code: i64,
}

/// World shapes and frames of one collider/target pair
#[derive(Debug, Clone, Copy)]
pub struct PairContext<'a> {
    /// Collider shapes
    pub collider: &'a [WorldShape],
    /// Collider rotation frame
    pub collider_frame: ObjectFrame,
    /// Target shapes
    pub target: &'a [WorldShape],
    /// Target rotation frame
    pub target_frame: ObjectFrame,
}

/// Reference test of one shape pair
pub fn test_pair(ctx: &PairContext<'_>, a: &WorldShape, b: &WorldShape) -> bool {
    match (a, b) {
        (WorldShape::Box(a), WorldShape::Box(b)) => {
            overlap::box_box(a, &ctx.collider_frame, b, &ctx.target_frame)
        }
        (WorldShape::Box(a), WorldShape::Circle(b)) => {
            overlap::box_circle(&a.limits, ctx.collider_frame.normalize_point(b.center), b.radius)
        }
        (WorldShape::Circle(a), WorldShape::Box(b)) => {
            overlap::box_circle(&b.limits, ctx.target_frame.normalize_point(a.center), a.radius)
        }
        (WorldShape::Circle(a), WorldShape::Circle(b)) => overlap::circle_circle(a, b),
    }
}

/// Collider shape with its per-shape work done up front
enum Prepared<'a> {
    Box { shape: &'a WorldBox, projection: BoxLimits },
    Circle { shape: &'a WorldCircle, in_target_frame: Point2 },
}

impl<'a> Prepared<'a> {
    fn new(shape: &'a WorldShape, target_frame: &ObjectFrame) -> Self {
        match shape {
            WorldShape::Box(shape) => Self::Box {
                shape,
                projection: overlap::project_box(shape, target_frame),
            },
            WorldShape::Circle(shape) => Self::Circle {
                shape,
                in_target_frame: target_frame.normalize_point(shape.center),
            },
        }
    }

    fn box_vs_box(&self, ctx: &PairContext<'_>, b: &WorldBox) -> bool {
        match self {
            Self::Box { shape, projection } => {
                overlap::box_box_projected(projection, shape, &ctx.collider_frame, b)
            }
            Self::Circle { .. } => false,
        }
    }

    fn box_vs_circle(&self, ctx: &PairContext<'_>, b: &WorldCircle) -> bool {
        match self {
            Self::Box { shape, .. } => {
                overlap::box_circle(&shape.limits, ctx.collider_frame.normalize_point(b.center), b.radius)
            }
            Self::Circle { .. } => false,
        }
    }

    fn circle_vs_box(&self, b: &WorldBox) -> bool {
        match self {
            Self::Circle { shape, in_target_frame } => {
                overlap::box_circle(&b.limits, *in_target_frame, shape.radius)
            }
            Self::Box { .. } => false,
        }
    }

    fn circle_vs_circle(&self, b: &WorldCircle) -> bool {
        match self {
            Self::Circle { shape, .. } => overlap::circle_circle(shape, b),
            Self::Box { .. } => false,
        }
    }

    fn test(&self, ctx: &PairContext<'_>, b: &WorldShape) -> bool {
        match (self, b) {
            (Self::Box { .. }, WorldShape::Box(b)) => self.box_vs_box(ctx, b),
            (Self::Box { .. }, WorldShape::Circle(b)) => self.box_vs_circle(ctx, b),
            (Self::Circle { .. }, WorldShape::Box(b)) => self.circle_vs_box(b),
            (Self::Circle { .. }, WorldShape::Circle(b)) => self.circle_vs_circle(b),
        }
    }
}

/// Shape pair loop chosen for one object pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKernel {
    /// Per-pair shape match, nothing hoisted
    Generic,
    /// Mixed shapes on either side, collider work hoisted
    Mixed,
    /// Boxes against boxes
    BoxesVsBoxes,
    /// Boxes against circles
    BoxesVsCircles,
    /// Circles against boxes
    CirclesVsBoxes,
    /// Circles against circles
    CirclesVsCircles,
}

impl PairKernel {
    /// Pick the kernel for a collider/target shape mix
    pub const fn select(collider: ShapeSet, target: ShapeSet, strategy: DispatchStrategy) -> Self {
        if matches!(strategy, DispatchStrategy::Generic) {
            return Self::Generic;
        }
        match (collider, target) {
            (ShapeSet::Boxes, ShapeSet::Boxes) => Self::BoxesVsBoxes,
            (ShapeSet::Boxes, ShapeSet::Circles) => Self::BoxesVsCircles,
            (ShapeSet::Circles, ShapeSet::Boxes) => Self::CirclesVsBoxes,
            (ShapeSet::Circles, ShapeSet::Circles) => Self::CirclesVsCircles,
            _ => Self::Mixed,
        }
    }

    /// Find the next overlapping pair at or after `cursor`
    ///
    /// On a match the cursor is left on the matching pair. When the cross
    /// product is exhausted the cursor is rewound to the start.
    pub fn run(self, ctx: &PairContext<'_>, cursor: &mut ShapeCursor) -> Option<ShapeHit> {
        let frame = &ctx.target_frame;
        match self {
            Self::Generic => sweep(ctx, cursor, Some, |a, b| test_pair(ctx, a, b)),
            Self::Mixed => sweep(ctx, cursor, |a| Some(Prepared::new(a, frame)), |a, b| a.test(ctx, b)),
            Self::BoxesVsBoxes => sweep(
                ctx,
                cursor,
                |a| a.as_box().map(|_| Prepared::new(a, frame)),
                |a, b| b.as_box().is_some_and(|b| a.box_vs_box(ctx, b)),
            ),
            Self::BoxesVsCircles => sweep(
                ctx,
                cursor,
                |a| a.as_box().map(|_| Prepared::new(a, frame)),
                |a, b| b.as_circle().is_some_and(|b| a.box_vs_circle(ctx, b)),
            ),
            Self::CirclesVsBoxes => sweep(
                ctx,
                cursor,
                |a| a.as_circle().map(|_| Prepared::new(a, frame)),
                |a, b| b.as_box().is_some_and(|b| a.circle_vs_box(b)),
            ),
            Self::CirclesVsCircles => sweep(
                ctx,
                cursor,
                |a| a.as_circle().map(|_| Prepared::new(a, frame)),
                |a, b| b.as_circle().is_some_and(|b| a.circle_vs_circle(b)),
            ),
        }
    }
}

/// Walk the cross product from `cursor`, preparing each collider shape once
fn sweep<'a, P>(
    ctx: &PairContext<'a>,
    cursor: &mut ShapeCursor,
    prepare: impl Fn(&'a WorldShape) -> Option<P>,
    test: impl Fn(&P, &WorldShape) -> bool,
) -> Option<ShapeHit> {
    while cursor.collider < ctx.collider.len() {
        let a = &ctx.collider[cursor.collider];
        if let Some(prepared) = prepare(a) {
            while cursor.target < ctx.target.len() {
                let b = &ctx.target[cursor.target];
                if test(&prepared, b) {
                    return Some(ShapeHit {
                        collider_index: cursor.collider,
                        target_index: cursor.target,
                        collider_code: a.code(),
                        target_code: b.code(),
                    });
                }
                cursor.target += 1;
            }
        }
        cursor.target = 0;
        cursor.collider += 1;
    }
    cursor.collider = 0;
    None
}
