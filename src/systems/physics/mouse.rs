//! Pointer dragging
//!
//! A grabbed body is pulled towards the pointer by a damped spring attached
//! at the point where it was picked up. The spring force is recomputed
//! before every step, so releasing simply stops applying it.

use rapier2d::prelude::*;

use super::{BodyHandle, PhysicsWorld};

struct Grab {
    body: BodyHandle,
    /// Pick-up point in the body's local frame.
    anchor: Point<Real>,
}

pub struct MouseConstraint {
    /// Spring rate per unit mass (1/s²).
    rate: Real,
    damping: Real,
    target: Point<Real>,
    grab: Option<Grab>,
}

impl MouseConstraint {
    /// `stiffness` uses the same 0..1 scale as the config option; 0.2 gives
    /// a soft pull that settles in a few frames.
    pub fn new(stiffness: f64) -> Self {
        let rate = (stiffness.clamp(0.0, 1.0) * 1000.0) as Real;
        Self {
            rate,
            damping: 2.0 * rate.sqrt(),
            target: Point::origin(),
            grab: None,
        }
    }

    /// Grab `body` at the given world point. Fixed bodies can't be grabbed.
    pub fn press(&mut self, world: &mut PhysicsWorld, body: BodyHandle, x: f64, y: f64) -> bool {
        self.release(world);
        let point = Point::new(x as Real, y as Real);
        let Some(rb) = world.bodies.get(body.0) else {
            return false;
        };
        if !rb.is_dynamic() {
            return false;
        }
        self.target = point;
        self.grab = Some(Grab {
            body,
            anchor: rb.position().inverse_transform_point(&point),
        });
        true
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        self.target = Point::new(x as Real, y as Real);
    }

    pub fn release(&mut self, world: &mut PhysicsWorld) {
        if let Some(grab) = self.grab.take() {
            if let Some(rb) = world.bodies.get_mut(grab.body.0) {
                rb.reset_forces(true);
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }

    pub fn grabbed(&self) -> Option<BodyHandle> {
        self.grab.as_ref().map(|grab| grab.body)
    }

    /// Refresh the spring force; call once before each step.
    pub fn apply(&mut self, world: &mut PhysicsWorld) {
        let Some(grab) = &self.grab else {
            return;
        };
        let Some(rb) = world.bodies.get_mut(grab.body.0) else {
            // The body was removed underneath us.
            self.grab = None;
            return;
        };

        let anchor = rb.position() * grab.anchor;
        let stretch = self.target - anchor;
        let velocity = rb.velocity_at_point(&anchor);
        let force = (stretch * self.rate - velocity * self.damping) * rb.mass();

        rb.reset_forces(false);
        rb.add_force_at_point(force, anchor, true);
    }
}
