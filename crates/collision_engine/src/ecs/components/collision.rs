//! Collision attributes of a scene object

use crate::physics::collision::Shape;
use serde::{Serialize, Deserialize};

/// Coordinate space an object lives in
///
/// Objects only collide with objects in the same space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordinateSpace {
    /// Plain screen coordinates
    #[default]
    Screen,
    /// Coordinates local to a scrolling viewport
    Viewport,
}

/// Component describing how an object takes part in collision checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderComponent {
    /// Coordinate space, which doubles as the collision type tag
    pub coordinate_space: CoordinateSpace,

    /// Viewports a mouse check visits, one bit per viewport (0 = all)
    pub viewport_mask: u64,

    /// Shape used when the graphic defines none
    pub fallback: Shape,
}

impl Default for ColliderComponent {
    fn default() -> Self {
        Self {
            coordinate_space: CoordinateSpace::Screen,
            viewport_mask: 0,
            fallback: Shape::graphic_box(),
        }
    }
}

impl ColliderComponent {
    /// Create a collider with the given fallback shape
    pub fn new(fallback: Shape) -> Self {
        Self {
            fallback,
            ..Default::default()
        }
    }

    /// Place the collider in a coordinate space
    #[must_use]
    pub fn in_space(mut self, coordinate_space: CoordinateSpace) -> Self {
        self.coordinate_space = coordinate_space;
        self
    }

    /// Restrict mouse checks to the viewports selected by `mask`
    #[must_use]
    pub fn with_viewport_mask(mut self, mask: u64) -> Self {
        self.viewport_mask = mask;
        self
    }

    /// Whether mouse checks may visit viewport `index`
    pub fn sees_viewport(&self, index: usize) -> bool {
        self.viewport_mask == 0 || (index < 64 && self.viewport_mask & (1 << index) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_mask_sees_every_viewport() {
        let collider = ColliderComponent::default();
        assert!(collider.sees_viewport(0));
        assert!(collider.sees_viewport(9));
    }

    #[test]
    fn test_mask_selects_viewports() {
        let collider = ColliderComponent::default().with_viewport_mask(0b101);
        assert!(collider.sees_viewport(0));
        assert!(!collider.sees_viewport(1));
        assert!(collider.sees_viewport(2));
        assert!(!collider.sees_viewport(70));
    }
}
