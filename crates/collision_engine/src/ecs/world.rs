//! Object store read by collision checks
//!
//! [`CollisionWorld`] is the narrow read interface the collision engine uses
//! to reach object attributes, the pointer and the viewports. [`World`] is an
//! in-memory implementation of it.

use super::components::{ColliderComponent, Graphic, RunState, TransformComponent};
use super::entity::{ObjectId, ProcessType, FIRST_OBJECT_ID};
use super::viewport::{DisplaySurface, Viewport};
use crate::foundation::collections::{GraphicHandle, HandleMap};
use crate::foundation::math::Point2;
use std::collections::HashMap;

/// Attributes of one scene object
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Process type the object was spawned from
    pub process_type: ProcessType,
    /// Current run state
    pub status: RunState,
    /// Pose
    pub transform: TransformComponent,
    /// Collision attributes
    pub collider: ColliderComponent,
    /// Graphic drawn for the object
    pub graphic: Option<GraphicHandle>,
}

impl SceneObject {
    /// Create a running object of the given type with default attributes
    pub fn new(process_type: ProcessType) -> Self {
        Self {
            process_type,
            status: RunState::Running,
            transform: TransformComponent::default(),
            collider: ColliderComponent::default(),
            graphic: None,
        }
    }

    /// Set the pose
    #[must_use]
    pub fn with_transform(mut self, transform: TransformComponent) -> Self {
        self.transform = transform;
        self
    }

    /// Set the collision attributes
    #[must_use]
    pub fn with_collider(mut self, collider: ColliderComponent) -> Self {
        self.collider = collider;
        self
    }

    /// Set the graphic
    #[must_use]
    pub fn with_graphic(mut self, graphic: GraphicHandle) -> Self {
        self.graphic = Some(graphic);
        self
    }

    /// Set the run state
    #[must_use]
    pub fn with_status(mut self, status: RunState) -> Self {
        self.status = status;
        self
    }
}

/// Iteration token for walking the objects of one type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeScanToken {
    position: usize,
}

impl TypeScanToken {
    /// Create a token at a store-defined position
    pub const fn new(position: usize) -> Self {
        Self { position }
    }

    /// Store-defined position of the token
    pub const fn position(&self) -> usize {
        self.position
    }
}

/// Read interface over the host's objects, pointer and viewports
pub trait CollisionWorld {
    /// Look up an object
    fn object(&self, id: ObjectId) -> Option<&SceneObject>;

    /// Look up a graphic
    fn graphic(&self, handle: GraphicHandle) -> Option<&Graphic>;

    /// First object in registry order
    fn first_object(&self) -> Option<ObjectId>;

    /// Object following `id` in registry order
    fn next_object(&self, id: ObjectId) -> Option<ObjectId>;

    /// Next object of `process_type`, advancing `token`
    fn next_of_type(&self, process_type: ProcessType, token: &mut TypeScanToken) -> Option<ObjectId>;

    /// Pointer position in screen coordinates
    fn pointer(&self) -> Point2;

    /// Display surface the pointer moves on
    fn display(&self) -> DisplaySurface;

    /// Viewports in index order
    fn viewports(&self) -> &[Viewport];
}

/// In-memory object store
#[derive(Debug)]
pub struct World {
    graphics: HandleMap<GraphicHandle, Graphic>,
    objects: HashMap<ObjectId, SceneObject>,
    order: Vec<ObjectId>,
    next_object_id: u64,
    pointer: Point2,
    display: DisplaySurface,
    viewports: Vec<Viewport>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            graphics: HandleMap::with_key(),
            objects: HashMap::new(),
            order: Vec::new(),
            next_object_id: FIRST_OBJECT_ID,
            pointer: Point2::origin(),
            display: DisplaySurface::default(),
            viewports: Vec::new(),
        }
    }

    /// Store a graphic and return its handle
    pub fn insert_graphic(&mut self, graphic: Graphic) -> GraphicHandle {
        self.graphics.insert(graphic)
    }

    /// Add an object at the end of the registry
    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId::new(self.next_object_id);
        self.next_object_id += 1;
        self.objects.insert(id, object);
        self.order.push(id);
        id
    }

    /// Remove an object
    pub fn despawn(&mut self, id: ObjectId) -> Option<SceneObject> {
        let object = self.objects.remove(&id)?;
        self.order.retain(|&other| other != id);
        Some(object)
    }

    /// Mutable access to an object
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    /// Mutable access to a graphic
    pub fn graphic_mut(&mut self, handle: GraphicHandle) -> Option<&mut Graphic> {
        self.graphics.get_mut(handle)
    }

    /// Move the pointer
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Point2::new(x, y);
    }

    /// Resize the display surface
    pub fn set_display(&mut self, display: DisplaySurface) {
        self.display = display;
    }

    /// Append a viewport and return its index
    pub fn add_viewport(&mut self, viewport: Viewport) -> usize {
        self.viewports.push(viewport);
        self.viewports.len() - 1
    }

    /// Mutable access to a viewport
    pub fn viewport_mut(&mut self, index: usize) -> Option<&mut Viewport> {
        self.viewports.get_mut(index)
    }

    /// Number of objects in the registry
    pub fn object_count(&self) -> usize {
        self.order.len()
    }

    /// Object ids in registry order
    pub fn objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.order.iter().copied()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionWorld for World {
    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    fn graphic(&self, handle: GraphicHandle) -> Option<&Graphic> {
        self.graphics.get(handle)
    }

    fn first_object(&self) -> Option<ObjectId> {
        self.order.first().copied()
    }

    fn next_object(&self, id: ObjectId) -> Option<ObjectId> {
        let index = self.order.iter().position(|&other| other == id)?;
        self.order.get(index + 1).copied()
    }

    fn next_of_type(&self, process_type: ProcessType, token: &mut TypeScanToken) -> Option<ObjectId> {
        let start = token.position.min(self.order.len());
        let found = self.order[start..]
            .iter()
            .position(|id| self.objects[id].process_type == process_type)?;
        token.position = start + found + 1;
        Some(self.order[start + found])
    }

    fn pointer(&self) -> Point2 {
        self.pointer
    }

    fn display(&self) -> DisplaySurface {
        self.display
    }

    fn viewports(&self) -> &[Viewport] {
        &self.viewports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_assigns_increasing_ids_from_first_object_id() {
        let mut world = World::new();
        let a = world.spawn(SceneObject::new(ProcessType(1)));
        let b = world.spawn(SceneObject::new(ProcessType(1)));
        assert_eq!(a.id(), FIRST_OBJECT_ID);
        assert_eq!(b.id(), FIRST_OBJECT_ID + 1);
    }

    #[test]
    fn test_registry_traversal_follows_spawn_order() {
        let mut world = World::new();
        let a = world.spawn(SceneObject::new(ProcessType(1)));
        let b = world.spawn(SceneObject::new(ProcessType(2)));
        let c = world.spawn(SceneObject::new(ProcessType(1)));

        assert_eq!(world.first_object(), Some(a));
        assert_eq!(world.next_object(a), Some(b));
        assert_eq!(world.next_object(b), Some(c));
        assert_eq!(world.next_object(c), None);

        world.despawn(b);
        assert_eq!(world.next_object(a), Some(c));
        assert_eq!(world.next_object(b), None);
    }

    #[test]
    fn test_type_scan_visits_only_matching_objects() {
        let mut world = World::new();
        let a = world.spawn(SceneObject::new(ProcessType(1)));
        let _ = world.spawn(SceneObject::new(ProcessType(2)));
        let c = world.spawn(SceneObject::new(ProcessType(1)));

        let mut token = TypeScanToken::default();
        assert_eq!(world.next_of_type(ProcessType(1), &mut token), Some(a));
        assert_eq!(world.next_of_type(ProcessType(1), &mut token), Some(c));
        assert_eq!(world.next_of_type(ProcessType(1), &mut token), None);
        assert_eq!(world.next_of_type(ProcessType(1), &mut token), None);
    }
}
