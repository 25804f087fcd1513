//! Scene object store
//!
//! The collision engine never owns scene objects. It reads them through the
//! [`CollisionWorld`] trait, which [`World`] implements in memory.

pub mod world;
pub mod entity;
pub mod components;
pub mod viewport;
pub mod scene;

pub use world::{World, CollisionWorld, SceneObject, TypeScanToken};
pub use entity::{ObjectId, ProcessType, FIRST_OBJECT_ID};
pub use viewport::{DisplaySurface, Region, Viewport};
pub use scene::{SceneDescription, SceneError};
