//! Collision checks between scene objects
//!
//! A collider object is checked against a candidate set (the pointer, one
//! object, every object in the same coordinate space, or every object of a
//! process type). Every check snapshots the objects involved, moves their
//! shapes to world space and tests shape pairs until the first overlap.
//! [`CollisionScanner`] remembers where it stopped so repeated checks walk
//! through every overlap instead of reporting the first one again.

pub mod collision;
pub mod snapshot;
pub mod collision_system;

#[cfg(test)]
mod tests;

pub use collision::{Shape, CircleRadius, WorldShape};
pub use snapshot::ObjectSnapshot;
pub use collision_system::{
    CollisionScanner, CollisionTarget, Matches, MatchResult, ScanCursor, ScanMode, Selector,
    MOUSE_TARGET_ID,
};

use crate::ecs::ObjectId;
use std::collections::TryReserveError;

/// Reasons a collision check cannot use an object
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CollisionError {
    /// The object has no graphic to take shapes from
    #[error("object {0} has no graphic")]
    NoGraphic(ObjectId),

    /// The object does not exist
    #[error("object {0} does not exist")]
    UnknownObject(ObjectId),

    /// The pointer is outside the display surface
    #[error("pointer ({x}, {y}) is outside the display")]
    PointerOutOfBounds {
        /// Pointer X
        x: f64,
        /// Pointer Y
        y: f64,
    },

    /// The target no longer exists or may not collide with the collider
    #[error("object {0} is not a valid target")]
    StaleTarget(ObjectId),

    /// A shape buffer could not be allocated
    #[error("shape buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}
