//! PhysicsWorld - rapier2d behind a small pixel-space API
//!
//! Units are CSS pixels and milliseconds on the outside; rapier sees pixels
//! and seconds. One instance per container, dropped wholesale on rebuild.

mod mouse;
mod walls;

pub use mouse::MouseConstraint;
pub use walls::{Wall, WALL_THICKNESS};

use rapier2d::na::UnitComplex;
use rapier2d::prelude::*;

use crate::geometry::Pose;

/// Pixels per second squared for one unit of configured gravity
/// (`{x: 0, y: 1}` accelerates at 0.001 px/ms²).
pub const GRAVITY_SCALE: f64 = 1000.0;

/// Rapier tunes its tolerances in "length units"; bodies here are tens to
/// hundreds of pixels across.
const LENGTH_UNIT: Real = 100.0;

/// Opaque reference to a body owned by a `PhysicsWorld`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(RigidBodyHandle);

pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    walls: Vec<Wall>,
    simulated_ms: f64,
}

impl PhysicsWorld {
    /// Create an empty world with gravity in configured units.
    pub fn new(gravity_x: f64, gravity_y: f64) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.length_unit = LENGTH_UNIT;

        Self {
            gravity: Vector::new(
                (gravity_x * GRAVITY_SCALE) as Real,
                (gravity_y * GRAVITY_SCALE) as Real,
            ),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            walls: Vec::new(),
            simulated_ms: 0.0,
        }
    }

    /// Insert a rigid body with its colliders (a compound body when there
    /// are several).
    pub fn insert(&mut self, body: RigidBody, colliders: Vec<Collider>) -> BodyHandle {
        let handle = self.bodies.insert(body);
        for collider in colliders {
            self.colliders
                .insert_with_parent(collider, handle, &mut self.bodies);
        }
        BodyHandle(handle)
    }

    /// Remove a body and its colliders. Returns false if it was already gone.
    pub fn remove(&mut self, handle: BodyHandle) -> bool {
        self.bodies
            .remove(
                handle.0,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle.0)
    }

    /// Advance the simulation by `delta_ms`. Non-positive deltas are ignored.
    pub fn step(&mut self, delta_ms: f64) {
        if !(delta_ms > 0.0) {
            return;
        }
        self.integration_parameters.dt = (delta_ms / 1000.0) as Real;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
        self.simulated_ms += delta_ms;
    }

    /// Total simulated time since creation.
    pub fn simulated_ms(&self) -> f64 {
        self.simulated_ms
    }

    /// Centre position and rotation of a body.
    pub fn pose(&self, handle: BodyHandle) -> Option<Pose> {
        self.bodies.get(handle.0).map(|rb| {
            let t = rb.translation();
            Pose {
                x: t.x as f64,
                y: t.y as f64,
                angle: rb.rotation().angle() as f64,
            }
        })
    }

    /// Teleport a body, waking it up.
    pub fn set_pose(&mut self, handle: BodyHandle, pose: Pose) {
        if let Some(rb) = self.bodies.get_mut(handle.0) {
            rb.set_translation(Vector::new(pose.x as Real, pose.y as Real), true);
            rb.set_rotation(UnitComplex::new(pose.angle as Real), true);
        }
    }

    /// Linear (px/s) and angular (rad/s) velocity.
    pub fn velocity(&self, handle: BodyHandle) -> Option<(f64, f64, f64)> {
        self.bodies.get(handle.0).map(|rb| {
            let v = rb.linvel();
            (v.x as f64, v.y as f64, rb.angvel() as f64)
        })
    }

    pub fn zero_velocity(&mut self, handle: BodyHandle) {
        if let Some(rb) = self.bodies.get_mut(handle.0) {
            rb.set_linvel(Vector::zeros(), true);
            rb.set_angvel(0.0, true);
        }
    }

    /// First body (accepted by `filter`) whose shape contains the point.
    pub fn body_at_point(&self, x: f64, y: f64, filter: impl Fn(BodyHandle) -> bool) -> Option<BodyHandle> {
        let point = Point::new(x as Real, y as Real);
        self.colliders
            .iter()
            .filter_map(|(_, collider)| collider.parent().map(|parent| (BodyHandle(parent), collider)))
            .filter(|(handle, _)| filter(*handle))
            .find(|(_, collider)| collider.shape().contains_point(collider.position(), &point))
            .map(|(handle, _)| handle)
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Every body in the world, walls included.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(world: &mut PhysicsWorld, x: f64, y: f64) -> BodyHandle {
        world.insert(
            RigidBodyBuilder::dynamic()
                .translation(Vector::new(x as Real, y as Real))
                .build(),
            vec![ColliderBuilder::ball(10.0).density(0.001).build()],
        )
    }

    #[test]
    fn insert_and_remove_exactly_once() {
        let mut world = PhysicsWorld::new(0.0, 1.0);
        let body = ball(&mut world, 0.0, 0.0);
        assert_eq!(world.body_count(), 1);
        assert!(world.remove(body));
        assert!(!world.remove(body));
        assert_eq!(world.body_count(), 0);
    }

    #[test]
    fn gravity_pulls_bodies_down() {
        let mut world = PhysicsWorld::new(0.0, 1.0);
        let body = ball(&mut world, 50.0, 50.0);
        for _ in 0..10 {
            world.step(1000.0 / 60.0);
        }
        let pose = world.pose(body).unwrap();
        assert!(pose.y > 50.0, "body should fall: y={}", pose.y);
        assert!((pose.x - 50.0).abs() < 1e-3);
    }

    #[test]
    fn zero_and_negative_deltas_do_not_step() {
        let mut world = PhysicsWorld::new(0.0, 1.0);
        let body = ball(&mut world, 0.0, 0.0);
        world.step(0.0);
        world.step(-5.0);
        assert_eq!(world.simulated_ms(), 0.0);
        assert_eq!(world.pose(body).unwrap().y, 0.0);
    }

    #[test]
    fn set_pose_and_zero_velocity() {
        let mut world = PhysicsWorld::new(0.0, 1.0);
        let body = ball(&mut world, 0.0, 0.0);
        for _ in 0..5 {
            world.step(16.0);
        }
        world.set_pose(body, Pose { x: 10.0, y: 20.0, angle: 0.5 });
        world.zero_velocity(body);

        let pose = world.pose(body).unwrap();
        assert!((pose.x - 10.0).abs() < 1e-4);
        assert!((pose.y - 20.0).abs() < 1e-4);
        assert!((pose.angle - 0.5).abs() < 1e-4);
        assert_eq!(world.velocity(body).unwrap(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn point_queries_respect_the_filter() {
        let mut world = PhysicsWorld::new(0.0, 0.0);
        let body = ball(&mut world, 100.0, 100.0);
        assert_eq!(world.body_at_point(105.0, 100.0, |_| true), Some(body));
        assert_eq!(world.body_at_point(130.0, 100.0, |_| true), None);
        assert_eq!(world.body_at_point(105.0, 100.0, |_| false), None);
    }
}
