//! Systems - physics world, body construction and debug rendering

pub mod body_factory;
pub mod physics;
pub mod render;

pub use body_factory::{build_body, BuiltBody, ResolvedShape};
pub use physics::{BodyHandle, MouseConstraint, PhysicsWorld};
pub use render::Renderer;
