//! ECS Components module
//!
//! Attribute groups the collision engine reads from scene objects

pub mod transform;
pub mod renderable;
pub mod lifecycle;
pub mod collision;

pub use transform::{TransformComponent, MirrorFlags};
pub use renderable::Graphic;
pub use lifecycle::RunState;
pub use collision::{ColliderComponent, CoordinateSpace};
