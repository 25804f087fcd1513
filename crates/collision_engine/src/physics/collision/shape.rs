//! Collision shape descriptors
//!
//! Shapes are stored in graphic space on the graphic (or on the collider as a
//! fallback) and resolved against an object's extent and rotation center when
//! a snapshot is taken. Each check then transforms the resolved shapes to
//! world space.

use super::primitives::{BoxLimits, Quad};
use crate::foundation::math::{utils, Point2, Vec2};
use serde::{Serialize, Deserialize};

/// Shape code reported when a shape carries no tag
pub const NO_SHAPE_CODE: i64 = -1;

/// How a circle derives its radius
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum CircleRadius {
    /// Explicit radius; non-positive values fall back to [`CircleRadius::GraphAverage`]
    Fixed(f64),
    /// Half the average of width and height
    #[default]
    GraphAverage,
    /// Half the width
    GraphWidth,
    /// Half the height
    GraphHeight,
    /// Half the smaller of width and height
    GraphMin,
    /// Half the larger of width and height
    GraphMax,
}

impl CircleRadius {
    /// Resolve the radius for an object of the given extent
    ///
    /// Derived radii are rounded to the nearest whole pixel.
    pub fn resolve(self, extent: Vec2) -> f64 {
        let (width, height) = (extent.x.max(0.0), extent.y.max(0.0));
        match self {
            Self::Fixed(radius) if radius > 0.0 => radius,
            Self::Fixed(_) | Self::GraphAverage => utils::round_half_up((width + height) / 4.0),
            Self::GraphWidth => utils::round_half_up(width / 2.0),
            Self::GraphHeight => utils::round_half_up(height / 2.0),
            Self::GraphMin => utils::round_half_up(width.min(height) / 2.0),
            Self::GraphMax => utils::round_half_up(width.max(height) / 2.0),
        }
    }
}

/// Collision shape in graphic space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box covering `[x, x + width - 1] × [y, y + height - 1]`
    Box {
        /// Left edge; undefined means 0
        x: Option<f64>,
        /// Top edge; undefined means 0
        y: Option<f64>,
        /// Width; below one pixel means the object's extent
        width: f64,
        /// Height; below one pixel means the object's extent
        height: f64,
        /// Tag reported on a match
        code: i64,
    },
    /// Circle around `(x, y)`
    Circle {
        /// Center X; undefined means the rotation center
        x: Option<f64>,
        /// Center Y; undefined means the rotation center
        y: Option<f64>,
        /// Radius
        radius: CircleRadius,
        /// Tag reported on a match
        code: i64,
    },
}

impl Shape {
    /// Box with a defined position
    pub const fn rect(x: f64, y: f64, width: f64, height: f64, code: i64) -> Self {
        Self::Box { x: Some(x), y: Some(y), width, height, code }
    }

    /// Circle with a defined center and radius
    pub const fn circle(x: f64, y: f64, radius: f64, code: i64) -> Self {
        Self::Circle { x: Some(x), y: Some(y), radius: CircleRadius::Fixed(radius), code }
    }

    /// Circle around the rotation center with a derived radius
    pub const fn centered_circle(radius: CircleRadius, code: i64) -> Self {
        Self::Circle { x: None, y: None, radius, code }
    }

    /// Untagged box covering the whole graphic
    pub const fn graphic_box() -> Self {
        Self::Box { x: None, y: None, width: 0.0, height: 0.0, code: NO_SHAPE_CODE }
    }

    /// Tag reported on a match
    pub const fn code(&self) -> i64 {
        match self {
            Self::Box { code, .. } | Self::Circle { code, .. } => *code,
        }
    }

    /// Replace every undefined or derived value using the object's extent and center
    pub fn resolve(&self, extent: Vec2, center: Point2) -> LocalShape {
        match *self {
            Self::Box { x, y, width, height, code } => LocalShape::Box {
                origin: Point2::new(x.unwrap_or(0.0), y.unwrap_or(0.0)),
                size: Vec2::new(
                    if width >= 1.0 { width } else { extent.x },
                    if height >= 1.0 { height } else { extent.y },
                ),
                code,
            },
            Self::Circle { x, y, radius, code } => LocalShape::Circle {
                center: Point2::new(x.unwrap_or(center.x), y.unwrap_or(center.y)),
                radius: radius.resolve(extent),
                code,
            },
        }
    }
}

/// Shape with every default resolved, still in graphic space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocalShape {
    /// Box with its top-left corner and size
    Box {
        /// Top-left corner
        origin: Point2,
        /// Width and height
        size: Vec2,
        /// Tag
        code: i64,
    },
    /// Circle with its center and radius
    Circle {
        /// Center
        center: Point2,
        /// Radius before scaling
        radius: f64,
        /// Tag
        code: i64,
    },
}

impl LocalShape {
    /// Tag reported on a match
    pub const fn code(&self) -> i64 {
        match self {
            Self::Box { code, .. } | Self::Circle { code, .. } => *code,
        }
    }

    /// Whether this is a box
    pub const fn is_box(&self) -> bool {
        matches!(self, Self::Box { .. })
    }
}

/// Box transformed to world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBox {
    /// Corners after scale, rotation, mirroring and translation
    pub vertices: Quad,
    /// Unrotated world bounds, used by the separating-axis test
    pub limits: BoxLimits,
    /// Tag
    pub code: i64,
}

/// Circle transformed to world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldCircle {
    /// Center
    pub center: Point2,
    /// Radius scaled by the owner's horizontal scale
    pub radius: f64,
    /// Tag
    pub code: i64,
}

/// World-space collision shape (temporary, for testing only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldShape {
    /// World-space box
    Box(WorldBox),
    /// World-space circle
    Circle(WorldCircle),
}

impl WorldShape {
    /// Tag reported on a match
    pub const fn code(&self) -> i64 {
        match self {
            Self::Box(b) => b.code,
            Self::Circle(c) => c.code,
        }
    }

    /// The box, if this is one
    pub const fn as_box(&self) -> Option<&WorldBox> {
        match self {
            Self::Box(b) => Some(b),
            Self::Circle(_) => None,
        }
    }

    /// The circle, if this is one
    pub const fn as_circle(&self) -> Option<&WorldCircle> {
        match self {
            Self::Circle(c) => Some(c),
            Self::Box(_) => None,
        }
    }
}
