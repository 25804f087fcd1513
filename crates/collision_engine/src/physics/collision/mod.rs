//! Shape-level collision geometry
//!
//! # Architecture
//!
//! - **Graphic Space Storage**: Shapes are stored relative to the graphic
//! - **On-Demand Transformation**: Shapes are moved to world space only for a check
//! - **Frame Normalization**: Overlap tests bring one shape into the other
//!   object's unrotated frame instead of intersecting rotated geometry
//!
//! # Module Organization
//!
//! - [`shape`] - Shape descriptors in graphic, local and world space
//! - [`primitives`] - Axis-aligned limits and box corners
//! - [`transform`] - Graphic space to world space, and frame normalization
//! - [`overlap`] - Box-box, box-circle and circle-circle tests
//! - [`dispatch`] - Resumable shape pair loops for one object pair

pub mod shape;
pub mod primitives;
pub mod transform;
pub mod overlap;
pub mod dispatch;

// Re-export commonly used types
pub use shape::{CircleRadius, LocalShape, Shape, WorldBox, WorldCircle, WorldShape, NO_SHAPE_CODE};
pub use primitives::{BoxLimits, Quad};
pub use transform::{compute_world_shapes, ObjectFrame};
pub use dispatch::{PairContext, PairKernel, ShapeCursor, ShapeHit, ShapeSet};
