//! Scene descriptions loadable from RON or TOML
//!
//! A [`SceneDescription`] lists graphics by name and objects that refer to
//! them. [`World::from_scene`] turns it into an object store.

use super::components::{ColliderComponent, Graphic, RunState, TransformComponent};
use super::entity::{ObjectId, ProcessType};
use super::viewport::{DisplaySurface, Viewport};
use super::world::{SceneObject, World};
use crate::config::{Config, ConfigError};
use crate::foundation::math::Point2;
use serde::{Serialize, Deserialize};
use std::collections::HashMap;

/// Errors raised while building a world from a description
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// An object refers to a graphic that is not defined
    #[error("object {index} refers to unknown graphic '{name}'")]
    UnknownGraphic {
        /// Position of the object in the description
        index: usize,
        /// Missing graphic name
        name: String,
    },

    /// Two graphics share a name
    #[error("graphic '{0}' is defined more than once")]
    DuplicateGraphic(String),

    /// The description could not be read
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A named graphic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicDescription {
    /// Name objects use to refer to the graphic
    pub name: String,
    /// Graphic data
    pub graphic: Graphic,
}

/// One object of a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    /// Process type
    #[serde(default)]
    pub process_type: ProcessType,
    /// Run state
    #[serde(default)]
    pub status: RunState,
    /// Name of the graphic to draw
    #[serde(default)]
    pub graphic: Option<String>,
    /// Pose
    #[serde(default)]
    pub transform: TransformComponent,
    /// Collision attributes
    #[serde(default)]
    pub collider: ColliderComponent,
}

/// Serializable description of a whole scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Display surface
    pub display: DisplaySurface,
    /// Pointer position
    pub pointer: Point2,
    /// Viewports in index order
    pub viewports: Vec<Viewport>,
    /// Named graphics
    pub graphics: Vec<GraphicDescription>,
    /// Objects in registry order
    pub objects: Vec<ObjectDescription>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            display: DisplaySurface::default(),
            pointer: Point2::origin(),
            viewports: Vec::new(),
            graphics: Vec::new(),
            objects: Vec::new(),
        }
    }
}

impl Config for SceneDescription {}

impl World {
    /// Build a world from a scene description
    ///
    /// Returns the world and the ids of the spawned objects, in description order.
    pub fn from_scene(scene: &SceneDescription) -> Result<(Self, Vec<ObjectId>), SceneError> {
        let mut world = Self::new();
        world.set_display(scene.display);
        world.set_pointer(scene.pointer.x, scene.pointer.y);
        for viewport in &scene.viewports {
            world.add_viewport(*viewport);
        }

        let mut handles = HashMap::with_capacity(scene.graphics.len());
        for description in &scene.graphics {
            let handle = world.insert_graphic(description.graphic.clone());
            if handles.insert(description.name.as_str(), handle).is_some() {
                return Err(SceneError::DuplicateGraphic(description.name.clone()));
            }
        }

        let mut ids = Vec::with_capacity(scene.objects.len());
        for (index, description) in scene.objects.iter().enumerate() {
            let graphic = match &description.graphic {
                Some(name) => Some(*handles.get(name.as_str()).ok_or_else(|| {
                    SceneError::UnknownGraphic { index, name: name.clone() }
                })?),
                None => None,
            };
            let object = SceneObject {
                process_type: description.process_type,
                status: description.status,
                transform: description.transform.clone(),
                collider: description.collider.clone(),
                graphic,
            };
            ids.push(world.spawn(object));
        }

        log::debug!(
            "Built world with {} graphics and {} objects",
            scene.graphics.len(),
            ids.len()
        );
        Ok((world, ids))
    }

    /// Load a scene description file and build a world from it
    pub fn load_scene(path: &str) -> Result<(Self, Vec<ObjectId>), SceneError> {
        let scene = SceneDescription::load_from_file(path)?;
        Self::from_scene(&scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::CollisionWorld;
    use crate::physics::collision::Shape;

    fn sample_scene() -> SceneDescription {
        SceneDescription {
            pointer: Point2::new(12.0, 8.0),
            graphics: vec![GraphicDescription {
                name: "ship".to_string(),
                graphic: Graphic::new(16.0, 16.0).with_shape(Shape::rect(0.0, 0.0, 16.0, 16.0, 3)),
            }],
            objects: vec![
                ObjectDescription {
                    process_type: ProcessType(7),
                    status: RunState::Running,
                    graphic: Some("ship".to_string()),
                    transform: TransformComponent::from_position(40.0, 30.0).with_angle(45.0),
                    collider: ColliderComponent::default(),
                },
                ObjectDescription {
                    process_type: ProcessType(8),
                    status: RunState::Frozen,
                    graphic: None,
                    transform: TransformComponent::default(),
                    collider: ColliderComponent::default(),
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_from_scene_spawns_objects_in_order() {
        let (world, ids) = World::from_scene(&sample_scene()).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(world.first_object(), Some(ids[0]));
        assert_eq!(world.pointer(), Point2::new(12.0, 8.0));

        let ship = world.object(ids[0]).unwrap();
        assert_eq!(ship.process_type, ProcessType(7));
        let graphic = world.graphic(ship.graphic.unwrap()).unwrap();
        assert_eq!(graphic.shapes.len(), 1);

        assert!(world.object(ids[1]).unwrap().graphic.is_none());
    }

    #[test]
    fn test_unknown_graphic_is_reported() {
        let mut scene = sample_scene();
        scene.objects[1].graphic = Some("missing".to_string());
        let error = World::from_scene(&scene).unwrap_err();
        assert!(matches!(error, SceneError::UnknownGraphic { index: 1, .. }));
    }

    #[test]
    fn test_duplicate_graphic_is_reported() {
        let mut scene = sample_scene();
        let duplicate = scene.graphics[0].clone();
        scene.graphics.push(duplicate);
        assert!(matches!(World::from_scene(&scene), Err(SceneError::DuplicateGraphic(_))));
    }

    #[test]
    fn test_scene_survives_ron_file() {
        let path = std::env::temp_dir().join("collision_engine_scene_test.ron");
        let path = path.to_str().unwrap();
        let scene = sample_scene();
        scene.save_to_file(path).unwrap();

        let (world, ids) = World::load_scene(path).unwrap();
        assert_eq!(world.object(ids[0]).unwrap().transform.angle, 45.0);
        assert_eq!(world.object(ids[1]).unwrap().status, RunState::Frozen);
        let _ = std::fs::remove_file(path);
    }
}
