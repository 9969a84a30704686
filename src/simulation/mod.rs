//! GravityCore - one physics world per container
//!
//! Owns the registry, the rapier world and the frame clock for a single
//! container. Nothing here is global: two containers on one page are two
//! independent `GravityCore`s.
//!
//! Lifecycle: `Uninitialized → Running ⇄ Stopped → TornDown`. A resize
//! rebuild tears the world down to `Uninitialized` and initializes again.
//!
//! The core never reads the wall clock; every time-dependent call takes an
//! explicit `now` in milliseconds, so tests drive it frame by frame.

use std::collections::HashSet;

use crate::domain::config::GravityConfig;
use crate::domain::host::{BodyElement, Container, Cursor, RenderSurface, Size};
use crate::domain::props::BodyProps;
use crate::error::BridgeError;
use crate::geometry::Pose;
use crate::systems::{BodyHandle, MouseConstraint, PhysicsWorld, Renderer};

#[path = "registry/registry.rs"]
pub mod registry;
#[path = "step/clock.rs"]
pub mod clock;
#[path = "resize/debounce.rs"]
pub mod debounce;
#[path = "cursor/cursor.rs"]
pub mod cursor;
#[path = "init/init.rs"]
mod init;
#[path = "commands/commands.rs"]
mod commands;
#[path = "commands/pointer.rs"]
mod pointer;
#[path = "step/sync.rs"]
mod sync;

pub use clock::{SimulationClock, MAX_DELTA_MS};
pub use cursor::CursorTracker;
pub use debounce::ResizeDebounce;
pub use registry::{BodySlot, Entry, HydratedBody, Registry};
pub use sync::css_transform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldState {
    /// No world yet (before mount, while the container has no size, or
    /// mid-rebuild).
    Uninitialized,
    Running,
    Stopped,
    /// Unmounted. Only `initialize` leaves this state.
    TornDown,
}

/// Everything that is rebuilt from scratch on resize.
struct WorldRuntime<S: RenderSurface> {
    physics: PhysicsWorld,
    renderer: Renderer<S>,
    mouse: MouseConstraint,
    size: Size,
}

pub struct GravityCore<E, C: Container> {
    container: C,
    config: GravityConfig,
    registry: Registry<E>,
    world: Option<WorldRuntime<C::Surface>>,
    state: WorldState,
    clock: SimulationClock,
    resize: ResizeDebounce,
    cursor: CursorTracker,
    /// Ids already reported in debug logs; cleared on unmount.
    logged: HashSet<String>,
}

impl<E: BodyElement, C: Container> GravityCore<E, C> {
    pub fn new(container: C, config: GravityConfig) -> Self {
        let resize = ResizeDebounce::new(config.resize_debounce_ms);
        Self {
            container,
            config,
            registry: Registry::new(),
            world: None,
            state: WorldState::Uninitialized,
            clock: SimulationClock::new(),
            resize,
            cursor: CursorTracker::new(),
            logged: HashSet::new(),
        }
    }

    /// Measure the container and build the world.
    ///
    /// Skipped (and `Ok`) while the container has no size. Hydration
    /// failures don't abort: every other entry is still hydrated and the
    /// first error is returned.
    pub fn initialize(&mut self, now: f64) -> Result<(), BridgeError> {
        init::initialize(self, now)
    }

    /// Add or update an element. Builds its body right away when the world
    /// exists, otherwise on the next `initialize`.
    pub fn register_element(&mut self, id: &str, element: E, props: BodyProps) -> Result<(), BridgeError> {
        commands::register_element(self, id, element, props)
    }

    /// Remove an element and its body. Returns false for unknown ids.
    pub fn unregister_element(&mut self, id: &str) -> bool {
        commands::unregister_element(self, id)
    }

    pub fn start(&mut self, now: f64) {
        commands::start(self, now)
    }

    pub fn stop(&mut self) {
        commands::stop(self)
    }

    /// Put every body back at its declared pose, at rest.
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    /// Note a container resize; the rebuild happens on the first frame after
    /// the debounce delay.
    pub fn request_resize(&mut self, now: f64) {
        commands::request_resize(self, now)
    }

    /// Tear down and rebuild against the container's current size.
    pub fn rebuild(&mut self, now: f64) -> Result<(), BridgeError> {
        commands::rebuild(self, now)
    }

    pub fn unmount(&mut self) {
        commands::unmount(self)
    }

    /// One animation frame: step physics (if running) then write transforms.
    pub fn frame(&mut self, now: f64) -> Result<(), BridgeError> {
        sync::frame(self, now)
    }

    /// Returns true when a body was grabbed.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        pointer::pointer_down(self, x, y)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        pointer::pointer_move(self, x, y)
    }

    pub fn pointer_up(&mut self) {
        pointer::pointer_up(self)
    }

    pub fn pointer_leave(&mut self) {
        pointer::pointer_leave(self)
    }

    // === Inspection ===

    pub fn state(&self) -> WorldState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == WorldState::Running
    }

    pub fn is_initialized(&self) -> bool {
        self.world.is_some()
    }

    pub fn config(&self) -> &GravityConfig {
        &self.config
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn registry(&self) -> &Registry<E> {
        &self.registry
    }

    pub fn entry_count(&self) -> usize {
        self.registry.len()
    }

    pub fn hydrated_count(&self) -> usize {
        self.registry.hydrated_count()
    }

    /// Bodies in the physics world, walls included. Zero without a world.
    pub fn physics_body_count(&self) -> usize {
        self.world.as_ref().map_or(0, |w| w.physics.body_count())
    }

    pub fn world_size(&self) -> Option<Size> {
        self.world.as_ref().map(|w| w.size)
    }

    /// Total simulated time of the current world.
    pub fn simulated_ms(&self) -> f64 {
        self.world.as_ref().map_or(0.0, |w| w.physics.simulated_ms())
    }

    pub fn body_pose(&self, id: &str) -> Option<Pose> {
        let (world, handle) = self.body_of(id)?;
        world.physics.pose(handle)
    }

    /// Linear (px/s) and angular (rad/s) velocity of an element's body.
    pub fn body_velocity(&self, id: &str) -> Option<(f64, f64, f64)> {
        let (world, handle) = self.body_of(id)?;
        world.physics.velocity(handle)
    }

    pub fn is_dragging(&self) -> bool {
        self.world.as_ref().is_some_and(|w| w.mouse.is_dragging())
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor.shown()
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.is_pending()
    }

    fn body_of(&self, id: &str) -> Option<(&WorldRuntime<C::Surface>, BodyHandle)> {
        let world = self.world.as_ref()?;
        let body = self.registry.get(id)?.body.hydrated()?;
        Some((world, body.handle))
    }

    /// Handles of bodies the pointer may pick up.
    fn draggable_handles(&self) -> HashSet<BodyHandle> {
        self.registry
            .iter()
            .filter(|(_, entry)| entry.props.draggable)
            .filter_map(|(_, entry)| entry.body.hydrated().map(|body| body.handle))
            .collect()
    }

    fn log_once(&mut self, key: String, message: impl FnOnce() -> String) {
        if self.config.debug && self.logged.insert(key) {
            bridge_log!("{}", message());
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
