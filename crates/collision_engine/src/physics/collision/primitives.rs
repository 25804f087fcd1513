//! Primitive geometric types used by the overlap tests

use crate::foundation::math::Point2;

/// Four box corners in drawing order: top-left, top-right, bottom-right, bottom-left
pub type Quad = [Point2; 4];

/// Axis-aligned rectangle with inclusive edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxLimits {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Right edge
    pub x2: f64,
    /// Bottom edge
    pub y2: f64,
}

impl BoxLimits {
    /// Create limits from their edges
    pub const fn new(x: f64, y: f64, x2: f64, y2: f64) -> Self {
        Self { x, y, x2, y2 }
    }

    /// Smallest limits enclosing all four corners
    pub fn from_quad(quad: &Quad) -> Self {
        let first = quad[0];
        quad[1..].iter().fold(Self::new(first.x, first.y, first.x, first.y), |limits, p| Self {
            x: limits.x.min(p.x),
            y: limits.y.min(p.y),
            x2: limits.x2.max(p.x),
            y2: limits.y2.max(p.y),
        })
    }

    /// Whether the two rectangles share at least one point
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.x > other.x2 || self.x2 < other.x || self.y > other.y2 || self.y2 < other.y)
    }

    /// Point of the rectangle closest to `point`
    ///
    /// Edges given in either order are accepted.
    pub fn closest_point(&self, point: Point2) -> Point2 {
        Point2::new(
            point.x.max(self.x.min(self.x2)).min(self.x.max(self.x2)),
            point.y.max(self.y.min(self.y2)).min(self.y.max(self.y2)),
        )
    }
}
