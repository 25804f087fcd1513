//! Display surface and scrolling viewports

use crate::foundation::math::{Point2, Vec2};
use serde::{Serialize, Deserialize};

/// Size of the display the pointer moves on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySurface {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Default for DisplaySurface {
    fn default() -> Self {
        Self { width: 320.0, height: 240.0 }
    }
}

impl DisplaySurface {
    /// Create a display surface
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a point lies on the surface, edges included
    pub fn contains(&self, point: Point2) -> bool {
        !(point.x > self.width || point.y > self.height || point.x < 0.0 || point.y < 0.0)
    }
}

/// Inclusive screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Right edge
    pub x2: f64,
    /// Bottom edge
    pub y2: f64,
}

impl Region {
    /// Create a region from its edges
    pub const fn new(x: f64, y: f64, x2: f64, y2: f64) -> Self {
        Self { x, y, x2, y2 }
    }

    /// Whether a point lies inside the region, edges included
    pub fn contains(&self, point: Point2) -> bool {
        !(point.x > self.x2 || point.y > self.y2 || point.x < self.x || point.y < self.y)
    }
}

/// A scrolling viewport mapping a screen region onto viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Whether the viewport is currently shown
    pub active: bool,
    /// Screen region the viewport is drawn into
    pub region: Region,
    /// Viewport coordinate shown at the region's top-left corner
    pub origin: Point2,
}

impl Viewport {
    /// Create an active viewport
    pub fn new(region: Region, origin: Point2) -> Self {
        Self { active: true, region, origin }
    }

    /// Offset that maps screen coordinates inside the region to viewport coordinates
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.origin.x - self.region.x, self.origin.y - self.region.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_edges_are_inside() {
        let display = DisplaySurface::new(320.0, 240.0);
        assert!(display.contains(Point2::new(320.0, 240.0)));
        assert!(display.contains(Point2::new(0.0, 0.0)));
        assert!(!display.contains(Point2::new(321.0, 10.0)));
        assert!(!display.contains(Point2::new(10.0, -1.0)));
    }

    #[test]
    fn test_viewport_offset_maps_region_corner_to_origin() {
        let viewport = Viewport::new(Region::new(100.0, 50.0, 199.0, 149.0), Point2::new(1000.0, 0.0));
        let screen = Point2::new(100.0, 50.0);
        assert_eq!(screen + viewport.offset(), Point2::new(1000.0, 0.0));
    }
}
