//! Resumable collision scanner
//!
//! A [`CollisionScanner`] belongs to one collider object. Each call to
//! [`CollisionScanner::scan`] walks the candidate set for a [`Selector`],
//! stops at the first overlapping shape pair and stores a [`ScanCursor`]
//! just past it. Calling again with the same selector continues from there;
//! calling with a different selector starts over. Once every candidate is
//! exhausted the scanner goes idle and the next call starts a fresh scan.
//!
//! Candidates must share the collider's coordinate space, be running or
//! frozen, and not be the collider itself.

use super::collision::dispatch::{PairContext, PairKernel, ShapeCursor, ShapeHit};
use super::collision::shape::{WorldShape, NO_SHAPE_CODE};
use super::collision::transform::compute_world_shapes;
use super::snapshot::ObjectSnapshot;
use super::CollisionError;
use crate::config::CollisionConfig;
use crate::ecs::components::CoordinateSpace;
use crate::ecs::{CollisionWorld, ObjectId, ProcessType, SceneObject, TypeScanToken, FIRST_OBJECT_ID};
use std::iter::FusedIterator;

/// Target id reported for a match against the pointer
pub const MOUSE_TARGET_ID: i64 = -1;

/// Candidate set of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The pointer
    Mouse,
    /// A single object
    Target(ObjectId),
    /// Every object in registry order
    AllOfSameType,
    /// Every object spawned from a process type
    ByType(ProcessType),
}

impl Selector {
    /// Decode a raw selector: -1 is the pointer, 0 every object, ids from
    /// [`FIRST_OBJECT_ID`] single objects, anything else a process type
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            MOUSE_TARGET_ID => Some(Self::Mouse),
            0 => Some(Self::AllOfSameType),
            _ => u64::try_from(raw).ok().map(|id| {
                if id >= FIRST_OBJECT_ID {
                    Self::Target(ObjectId::new(id))
                } else {
                    Self::ByType(ProcessType(id))
                }
            }),
        }
    }

    /// Scan mode this selector runs in
    pub const fn mode(&self) -> ScanMode {
        match self {
            Self::Mouse => ScanMode::Mouse,
            Self::Target(_) => ScanMode::Single,
            Self::AllOfSameType => ScanMode::All,
            Self::ByType(_) => ScanMode::ByType,
        }
    }
}

/// Mode the cursor's progress belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// No scan in progress
    #[default]
    Idle,
    /// Scanning the pointer
    Mouse,
    /// Scanning one object
    Single,
    /// Scanning every object
    All,
    /// Scanning the objects of one type
    ByType,
}

/// Progress of a scan series, kept between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanCursor {
    mode: ScanMode,
    shapes: ShapeCursor,
    target_scan: Option<ObjectId>,
    type_scan: Option<ProcessType>,
    type_token: TypeScanToken,
    viewport_index: usize,
}

impl ScanCursor {
    /// Current mode
    pub const fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Shape pair the next call starts from
    pub const fn shapes(&self) -> ShapeCursor {
        self.shapes
    }

    /// Target visited last
    pub const fn target_scan(&self) -> Option<ObjectId> {
        self.target_scan
    }

    /// Process type of a by-type scan
    pub const fn type_scan(&self) -> Option<ProcessType> {
        self.type_scan
    }

    /// Viewport the next mouse check starts from
    pub const fn viewport_index(&self) -> usize {
        self.viewport_index
    }

    fn restart(&mut self, mode: ScanMode) {
        log::debug!("Collision scan restarting in {mode:?} mode (was {:?})", self.mode);
        *self = Self { mode, ..Self::default() };
    }

    fn advance_past(&mut self, hit: &ShapeHit) {
        self.shapes = ShapeCursor {
            collider: hit.collider_index,
            target: hit.target_index + 1,
        };
    }
}

/// What a collider matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionTarget {
    /// The pointer
    Mouse,
    /// A scene object
    Object(ObjectId),
}

/// A matching shape pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
    /// Tag of the collider shape; -1 for pointer matches
    pub collider_shape_code: i64,
    /// Object or pointer matched
    pub target: CollisionTarget,
    /// Tag of the target shape
    pub target_shape_code: i64,
}

impl MatchResult {
    /// Raw target id: the object id, or [`MOUSE_TARGET_ID`] for the pointer
    pub fn target_id(&self) -> i64 {
        match self.target {
            CollisionTarget::Mouse => MOUSE_TARGET_ID,
            CollisionTarget::Object(id) => i64::try_from(id.id()).unwrap_or(i64::MAX),
        }
    }
}

/// Collider snapshot and world shapes shared by every candidate of one call
struct Collider<'w> {
    id: ObjectId,
    object: &'w SceneObject,
    snapshot: ObjectSnapshot,
    shapes: Vec<WorldShape>,
}

impl<'w> Collider<'w> {
    fn build<W: CollisionWorld + ?Sized>(world: &'w W, id: ObjectId) -> Result<Self, CollisionError> {
        let object = world.object(id).ok_or(CollisionError::UnknownObject(id))?;
        let snapshot = ObjectSnapshot::build(world, id)?;
        let shapes = compute_world_shapes(&snapshot)?;
        Ok(Self { id, object, snapshot, shapes })
    }

    fn accepts(&self, id: ObjectId, target: &SceneObject) -> bool {
        id != self.id
            && target.collider.coordinate_space == self.object.collider.coordinate_space
            && target.status.is_collidable()
    }
}

/// Resumable collision checks for one collider object
#[derive(Debug, Clone, Default)]
pub struct CollisionScanner {
    config: CollisionConfig,
    cursor: ScanCursor,
    last_match: Option<MatchResult>,
}

impl CollisionScanner {
    /// Create a scanner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner with the given settings, clamped into range
    pub fn with_config(config: &CollisionConfig) -> Self {
        Self {
            config: config.sanitized(),
            ..Self::default()
        }
    }

    /// Settings in use
    pub const fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Scan progress
    pub const fn cursor(&self) -> &ScanCursor {
        &self.cursor
    }

    /// Most recent match
    pub const fn last_match(&self) -> Option<&MatchResult> {
        self.last_match.as_ref()
    }

    /// Drop all scan progress
    pub fn reset(&mut self) {
        self.cursor = ScanCursor::default();
    }

    /// Find the next overlap between `collider` and the candidates of `selector`
    ///
    /// Every failure degrades to `None`: a collider that cannot be snapshot or
    /// a pointer off the display leaves the scanner idle, unusable candidates
    /// are skipped, and an allocation failure aborts the call without touching
    /// the cursor.
    pub fn scan<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: ObjectId,
        selector: Selector,
    ) -> Option<MatchResult> {
        match self.try_scan(world, collider, selector) {
            Ok(Some(found)) => {
                log::debug!(
                    "Collision {collider} -> {:?} (shapes {} / {})",
                    found.target,
                    found.collider_shape_code,
                    found.target_shape_code
                );
                self.last_match = Some(found);
                Some(found)
            }
            Ok(None) => None,
            Err(CollisionError::Allocation(e)) => {
                log::warn!("Collision check for {collider} aborted: {e}");
                None
            }
            Err(e) => {
                log::debug!("Collision check for {collider} abandoned: {e}");
                self.cursor.mode = ScanMode::Idle;
                None
            }
        }
    }

    /// [`scan`](Self::scan) reporting a raw id: 0 for no match,
    /// [`MOUSE_TARGET_ID`] for the pointer, otherwise the object id
    pub fn collision<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: ObjectId,
        selector: Selector,
    ) -> i64 {
        self.scan(world, collider, selector)
            .map_or(0, |found| found.target_id())
    }

    /// Iterate over every remaining match of one scan series
    pub fn matches<'s, 'w, W: CollisionWorld + ?Sized>(
        &'s mut self,
        world: &'w W,
        collider: ObjectId,
        selector: Selector,
    ) -> Matches<'s, 'w, W> {
        Matches {
            scanner: self,
            world,
            collider,
            selector,
            finished: false,
        }
    }

    fn try_scan<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: ObjectId,
        selector: Selector,
    ) -> Result<Option<MatchResult>, CollisionError> {
        let collider = Collider::build(world, collider)?;
        let found = match selector {
            Selector::Mouse => self.scan_mouse(world, &collider)?,
            Selector::Target(id) => self.scan_single(world, &collider, id)?,
            Selector::AllOfSameType => self.scan_all(world, &collider)?,
            Selector::ByType(process_type) => self.scan_by_type(world, &collider, process_type)?,
        };
        if found.is_none() {
            self.cursor.mode = ScanMode::Idle;
        }
        Ok(found)
    }

    fn scan_mouse<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: &Collider<'_>,
    ) -> Result<Option<MatchResult>, CollisionError> {
        let mut pointer = ObjectSnapshot::from_pointer(world)?;

        if self.cursor.mode != ScanMode::Mouse || self.cursor.viewport_index >= self.config.max_viewports {
            self.cursor.restart(ScanMode::Mouse);
        }

        if collider.object.collider.coordinate_space == CoordinateSpace::Screen {
            self.cursor.viewport_index = 0;
            return Ok(self.test(collider, &pointer)?.map(|hit| self.mouse_match(&hit)));
        }

        let viewports = world.viewports();
        let limit = self.config.max_viewports.min(viewports.len());
        while self.cursor.viewport_index < limit {
            let index = self.cursor.viewport_index;
            let viewport = &viewports[index];
            if viewport.active
                && collider.object.collider.sees_viewport(index)
                && viewport.region.contains(pointer.position)
            {
                let offset = viewport.offset();
                pointer.translate(offset);
                let hit = self.test(collider, &pointer);
                pointer.translate(-offset);
                if let Some(hit) = hit? {
                    return Ok(Some(self.mouse_match(&hit)));
                }
            }
            self.cursor.viewport_index += 1;
            self.cursor.shapes = ShapeCursor::default();
        }
        Ok(None)
    }

    fn scan_single<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: &Collider<'_>,
        target: ObjectId,
    ) -> Result<Option<MatchResult>, CollisionError> {
        if self.cursor.mode != ScanMode::Single || self.cursor.target_scan != Some(target) {
            self.cursor.restart(ScanMode::Single);
        }
        match self.test_candidate(world, collider, target) {
            Ok(found) => Ok(found),
            Err(e @ CollisionError::Allocation(_)) => Err(e),
            Err(e) => {
                log::debug!("Collision target skipped: {e}");
                Ok(None)
            }
        }
    }

    fn scan_all<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: &Collider<'_>,
    ) -> Result<Option<MatchResult>, CollisionError> {
        if self.cursor.mode != ScanMode::All || self.cursor.target_scan.is_none() {
            self.cursor.restart(ScanMode::All);
        }

        let mut next = match self.cursor.target_scan {
            Some(id) if world.object(id).is_some() => Some(id),
            Some(_) => {
                self.cursor.restart(ScanMode::All);
                world.first_object()
            }
            None => world.first_object(),
        };

        while let Some(id) = next {
            if let Some(found) = self.visit(world, collider, id)? {
                return Ok(Some(found));
            }
            next = world.next_object(id);
        }
        Ok(None)
    }

    fn scan_by_type<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: &Collider<'_>,
        process_type: ProcessType,
    ) -> Result<Option<MatchResult>, CollisionError> {
        if self.cursor.mode != ScanMode::ByType || self.cursor.type_scan != Some(process_type) {
            self.cursor.restart(ScanMode::ByType);
            self.cursor.type_scan = Some(process_type);
        }

        let mut next = match self.cursor.target_scan {
            Some(id) if world.object(id).is_some() => Some(id),
            Some(_) => {
                self.cursor.shapes = ShapeCursor::default();
                world.next_of_type(process_type, &mut self.cursor.type_token)
            }
            None => world.next_of_type(process_type, &mut self.cursor.type_token),
        };

        while let Some(id) = next {
            if let Some(found) = self.visit(world, collider, id)? {
                return Ok(Some(found));
            }
            next = world.next_of_type(process_type, &mut self.cursor.type_token);
        }
        Ok(None)
    }

    /// Test one registry candidate; unusable candidates are skipped
    fn visit<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: &Collider<'_>,
        id: ObjectId,
    ) -> Result<Option<MatchResult>, CollisionError> {
        log::trace!("Collision candidate {id}");
        match self.test_candidate(world, collider, id) {
            Ok(Some(found)) => return Ok(Some(found)),
            Ok(None) => {}
            Err(e @ CollisionError::Allocation(_)) => return Err(e),
            Err(e) => log::trace!("Collision candidate skipped: {e}"),
        }
        self.cursor.shapes = ShapeCursor::default();
        Ok(None)
    }

    fn test_candidate<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        collider: &Collider<'_>,
        id: ObjectId,
    ) -> Result<Option<MatchResult>, CollisionError> {
        let target = world.object(id).ok_or(CollisionError::StaleTarget(id))?;
        if !collider.accepts(id, target) {
            return Err(CollisionError::StaleTarget(id));
        }
        let snapshot = ObjectSnapshot::build(world, id)?;
        let found = self.test(collider, &snapshot)?.map(|hit| {
            self.cursor.target_scan = Some(id);
            MatchResult {
                collider_shape_code: hit.collider_code,
                target: CollisionTarget::Object(id),
                target_shape_code: hit.target_code,
            }
        });
        Ok(found)
    }

    /// Run the shape pair kernel from the cursor, stepping past any match
    fn test(
        &mut self,
        collider: &Collider<'_>,
        target: &ObjectSnapshot,
    ) -> Result<Option<ShapeHit>, CollisionError> {
        let target_shapes = compute_world_shapes(target)?;
        let kernel = PairKernel::select(
            collider.snapshot.shape_set(),
            target.shape_set(),
            self.config.dispatch,
        );
        let ctx = PairContext {
            collider: &collider.shapes,
            collider_frame: collider.snapshot.frame(),
            target: &target_shapes,
            target_frame: target.frame(),
        };
        let hit = kernel.run(&ctx, &mut self.cursor.shapes);
        if let Some(hit) = &hit {
            self.cursor.advance_past(hit);
        }
        Ok(hit)
    }

    fn mouse_match(&self, hit: &ShapeHit) -> MatchResult {
        MatchResult {
            collider_shape_code: NO_SHAPE_CODE,
            target: CollisionTarget::Mouse,
            target_shape_code: hit.target_code,
        }
    }
}

/// Iterator over the remaining matches of one scan series
///
/// Ends at the first call that finds no further overlap, leaving the scanner idle.
#[derive(Debug)]
pub struct Matches<'s, 'w, W: CollisionWorld + ?Sized> {
    scanner: &'s mut CollisionScanner,
    world: &'w W,
    collider: ObjectId,
    selector: Selector,
    finished: bool,
}

impl<W: CollisionWorld + ?Sized> Iterator for Matches<'_, '_, W> {
    type Item = MatchResult;

    fn next(&mut self) -> Option<MatchResult> {
        if self.finished {
            return None;
        }
        let found = self.scanner.scan(self.world, self.collider, self.selector);
        self.finished = found.is_none();
        found
    }
}

impl<W: CollisionWorld + ?Sized> FusedIterator for Matches<'_, '_, W> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::components::{Graphic, TransformComponent};
    use crate::ecs::World;
    use crate::physics::collision::Shape;

    fn square_world() -> (World, ObjectId, ObjectId) {
        let mut world = World::new();
        let graphic = world.insert_graphic(
            Graphic::new(10.0, 10.0).with_shape(Shape::rect(0.0, 0.0, 10.0, 10.0, 4)),
        );
        let spawn = |world: &mut World, x: f64, y: f64| {
            world.spawn(
                SceneObject::new(ProcessType(1))
                    .with_graphic(graphic)
                    .with_transform(TransformComponent::from_position(x, y).with_center(0.0, 0.0)),
            )
        };
        let collider = spawn(&mut world, 0.0, 0.0);
        let target = spawn(&mut world, 5.0, 5.0);
        (world, collider, target)
    }

    #[test]
    fn test_selector_from_raw() {
        assert_eq!(Selector::from_raw(-1), Some(Selector::Mouse));
        assert_eq!(Selector::from_raw(0), Some(Selector::AllOfSameType));
        assert_eq!(Selector::from_raw(7), Some(Selector::ByType(ProcessType(7))));
        assert_eq!(
            Selector::from_raw(65_536),
            Some(Selector::Target(ObjectId::new(65_536)))
        );
        assert_eq!(Selector::from_raw(-5), None);
    }

    #[test]
    fn test_selector_modes() {
        assert_eq!(Selector::Mouse.mode(), ScanMode::Mouse);
        assert_eq!(Selector::AllOfSameType.mode(), ScanMode::All);
        assert_eq!(Selector::ByType(ProcessType(2)).mode(), ScanMode::ByType);
    }

    #[test]
    fn test_match_reports_raw_ids() {
        let (world, collider, target) = square_world();
        let mut scanner = CollisionScanner::new();

        let id = scanner.collision(&world, collider, Selector::Target(target));
        assert_eq!(id, target.id() as i64);

        let found = scanner.last_match().unwrap();
        assert_eq!(found.collider_shape_code, 4);
        assert_eq!(found.target_shape_code, 4);
        assert_eq!(found.target, CollisionTarget::Object(target));
    }

    #[test]
    fn test_cursor_parks_past_the_hit() {
        let (world, collider, target) = square_world();
        let mut scanner = CollisionScanner::new();

        scanner.scan(&world, collider, Selector::Target(target)).unwrap();
        assert_eq!(scanner.cursor().mode(), ScanMode::Single);
        assert_eq!(scanner.cursor().target_scan(), Some(target));
        assert_eq!(scanner.cursor().shapes(), ShapeCursor { collider: 0, target: 1 });

        assert!(scanner.scan(&world, collider, Selector::Target(target)).is_none());
        assert_eq!(scanner.cursor().mode(), ScanMode::Idle);
    }

    #[test]
    fn test_reset_forgets_progress() {
        let (world, collider, target) = square_world();
        let mut scanner = CollisionScanner::new();

        scanner.scan(&world, collider, Selector::Target(target)).unwrap();
        scanner.reset();
        assert_eq!(*scanner.cursor(), ScanCursor::default());
        assert!(scanner.scan(&world, collider, Selector::Target(target)).is_some());
    }

    #[test]
    fn test_matches_iterator_is_fused() {
        let (world, collider, _) = square_world();
        let mut scanner = CollisionScanner::new();

        let mut matches = scanner.matches(&world, collider, Selector::AllOfSameType);
        assert!(matches.next().is_some());
        assert!(matches.next().is_none());
        assert!(matches.next().is_none());
    }

    #[test]
    fn test_with_config_clamps_viewport_bound() {
        let config = CollisionConfig {
            max_viewports: 0,
            ..CollisionConfig::default()
        };
        let scanner = CollisionScanner::with_config(&config);
        assert_eq!(scanner.config().max_viewports, 1);
    }
}
