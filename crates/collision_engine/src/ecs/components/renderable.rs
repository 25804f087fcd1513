//! Graphic data referenced by scene objects

use crate::foundation::math::{Point2, Vec2};
use crate::physics::collision::Shape;
use serde::{Serialize, Deserialize};

/// A drawable graphic with its control points and collision shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
    /// Control points; the first one is the default rotation center
    #[serde(default)]
    pub control_points: Vec<Option<Point2>>,
    /// Collision shapes in graphic space
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Graphic {
    /// Create a graphic with no control points or shapes
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            control_points: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Append a control point
    #[must_use]
    pub fn with_control_point(mut self, x: f64, y: f64) -> Self {
        self.control_points.push(Some(Point2::new(x, y)));
        self
    }

    /// Append a collision shape
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shapes.push(shape);
        self
    }

    /// Full extent of the graphic
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Rotation center defined by the first control point, if any
    pub fn rotation_center(&self) -> Option<Point2> {
        self.control_points.first().copied().flatten()
    }
}
