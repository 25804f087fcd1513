//! Transform component for 2D scene objects
//!
//! Holds the pose attributes a collision check reads: screen position,
//! rotation angle, percentage scale, mirror flags and the rotation center.

use crate::foundation::math::{Point2, Vec2};
use serde::{Serialize, Deserialize};

bitflags::bitflags! {
    /// Mirror flags applied when the object is drawn
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MirrorFlags: u8 {
        /// Flip around the vertical axis
        const HORIZONTAL = 1 << 0;
        /// Flip around the horizontal axis
        const VERTICAL = 1 << 1;
    }
}

/// Pose of an object in screen space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformComponent {
    /// Position in world units, before resolution mapping
    pub position: Point2,

    /// Rotation angle in degrees
    pub angle: f64,

    /// Uniform scale in percent
    pub size: f64,

    /// Horizontal scale in percent
    pub size_x: f64,

    /// Vertical scale in percent
    pub size_y: f64,

    /// Mirror flags
    pub mirror: MirrorFlags,

    /// Explicit rotation and scale center in graphic space
    pub center: Option<Point2>,

    /// Clip extent; a zero component means the whole graphic
    pub clip: Option<Vec2>,

    /// Position divisor when positive, multiplier when negative
    pub resolution: i64,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
            angle: 0.0,
            size: 100.0,
            size_x: 100.0,
            size_y: 100.0,
            mirror: MirrorFlags::empty(),
            center: None,
            clip: None,
            resolution: 0,
        }
    }
}

impl TransformComponent {
    /// Create a transform at the given position
    pub fn from_position(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            ..Default::default()
        }
    }

    /// Set the rotation angle in degrees
    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Set the uniform scale in percent
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set independent horizontal and vertical scale in percent
    #[must_use]
    pub fn with_size_xy(mut self, size_x: f64, size_y: f64) -> Self {
        self.size_x = size_x;
        self.size_y = size_y;
        self
    }

    /// Set the mirror flags
    #[must_use]
    pub fn with_mirror(mut self, mirror: MirrorFlags) -> Self {
        self.mirror = mirror;
        self
    }

    /// Set an explicit rotation center
    #[must_use]
    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center = Some(Point2::new(x, y));
        self
    }

    /// Set the clip extent
    #[must_use]
    pub fn with_clip(mut self, width: f64, height: f64) -> Self {
        self.clip = Some(Vec2::new(width, height));
        self
    }

    /// Scale factors as fractions, never negative
    ///
    /// The per-axis sizes only take effect when at least one differs from
    /// 100%; otherwise the uniform size applies to both axes.
    pub fn scale(&self) -> Vec2 {
        let (x, y) = if self.size_x == 100.0 && self.size_y == 100.0 {
            (self.size, self.size)
        } else {
            (self.size_x, self.size_y)
        };
        Vec2::new(x.max(0.0) / 100.0, y.max(0.0) / 100.0)
    }

    /// Position after applying the resolution mapping
    pub fn screen_position(&self) -> Point2 {
        match self.resolution {
            r if r > 0 => self.position / r as f64,
            r if r < 0 => self.position * (-r) as f64,
            _ => self.position,
        }
    }
}
