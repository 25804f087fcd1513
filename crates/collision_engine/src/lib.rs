//! # Collision Engine
//!
//! Resumable 2D collision checks between sprite objects.
//!
//! ## Features
//!
//! - **Box and Circle Shapes**: Per-graphic shape lists with defaults taken from the graphic
//! - **Full Sprite Transforms**: Rotation, per-axis scale, mirroring and rotation centers
//! - **Resumable Scans**: Each check stops at the first overlap and continues from there next time
//! - **Pointer Checks**: Screen-space and viewport-space hit tests against the mouse pointer
//! - **Specialized Dispatch**: Shape pair loops chosen per object pair, verified against a generic path
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! let mut world = World::new();
//! let square = world.insert_graphic(
//!     Graphic::new(10.0, 10.0).with_shape(Shape::rect(0.0, 0.0, 10.0, 10.0, 1)),
//! );
//! let ship = world.spawn(
//!     SceneObject::new(ProcessType(1))
//!         .with_graphic(square)
//!         .with_transform(TransformComponent::from_position(0.0, 0.0).with_center(0.0, 0.0)),
//! );
//! let rock = world.spawn(
//!     SceneObject::new(ProcessType(2))
//!         .with_graphic(square)
//!         .with_transform(TransformComponent::from_position(5.0, 5.0).with_center(0.0, 0.0)),
//! );
//!
//! let mut scanner = CollisionScanner::new();
//! let hit = scanner.collision(&world, ship, Selector::AllOfSameType);
//! assert_eq!(hit, rock.id() as i64);
//! assert_eq!(scanner.collision(&world, ship, Selector::AllOfSameType), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CollisionConfig, Config, DispatchStrategy},
        ecs::{
            components::{
                ColliderComponent, CoordinateSpace, Graphic, MirrorFlags, RunState,
                TransformComponent,
            },
            CollisionWorld, DisplaySurface, ObjectId, ProcessType, Region, SceneDescription,
            SceneObject, Viewport, World,
        },
        foundation::math::{Point2, Vec2},
        physics::{
            CircleRadius, CollisionError, CollisionScanner, CollisionTarget, MatchResult,
            Selector, Shape, MOUSE_TARGET_ID,
        },
    };
}
