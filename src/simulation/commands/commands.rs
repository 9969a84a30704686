use crate::domain::host::{BodyElement, Container, Cursor};
use crate::domain::props::BodyProps;
use crate::error::BridgeError;
use crate::geometry::resolve_pose;

use super::init;
use super::registry::Upsert;
use super::{GravityCore, WorldState};

pub(super) fn register_element<E: BodyElement, C: Container>(
    core: &mut GravityCore<E, C>,
    id: &str,
    element: E,
    props: BodyProps,
) -> Result<(), BridgeError> {
    match core.registry.upsert(id, element, props, |a, b| a.is_same(b)) {
        Upsert::Updated => {}
        Upsert::Replaced(previous) => {
            if let (Some(body), Some(world)) = (previous, core.world.as_mut()) {
                world.physics.remove(body.handle);
            }
        }
    }
    // No-op for entries that already have a body.
    init::hydrate(core, id).map(|_| ())
}

pub(super) fn unregister_element<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>, id: &str) -> bool {
    let Some(mut entry) = core.registry.remove(id) else {
        return false;
    };
    if let (Some(body), Some(world)) = (entry.body.take(), core.world.as_mut()) {
        world.physics.remove(body.handle);
    }
    true
}

pub(super) fn start<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>, now: f64) {
    let Some(world) = core.world.as_mut() else {
        return;
    };
    if core.state == WorldState::Running {
        return;
    }
    world.renderer.run();
    core.clock.rebase(now);
    core.state = WorldState::Running;
}

pub(super) fn stop<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) {
    let Some(world) = core.world.as_mut() else {
        return;
    };
    if core.state != WorldState::Running {
        return;
    }
    world.renderer.pause();
    core.state = WorldState::Stopped;
}

pub(super) fn reset<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) {
    let Some(world) = core.world.as_mut() else {
        return;
    };
    let size = match core.container.bounding_size() {
        Some(size) if !size.is_empty() => size,
        _ => world.size,
    };
    for (_, entry) in core.registry.iter() {
        let Some(body) = entry.body.hydrated() else {
            continue;
        };
        let pose = resolve_pose(&entry.props, size, body.size);
        world.physics.set_pose(body.handle, pose);
        world.physics.zero_velocity(body.handle);
    }
}

pub(super) fn request_resize<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>, now: f64) {
    if !core.config.reset_on_resize || core.state == WorldState::TornDown {
        return;
    }
    core.resize.schedule(now);
}

pub(super) fn rebuild<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>, now: f64) -> Result<(), BridgeError> {
    if core.state == WorldState::TornDown {
        return Ok(());
    }
    teardown(core);
    init::initialize(core, now)
}

pub(super) fn unmount<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) {
    core.resize.cancel();
    teardown(core);
    core.registry.clear();
    core.logged.clear();
    core.state = WorldState::TornDown;
}

/// Drop the world and every body in it. Registry entries survive as
/// `Pending` so the next `initialize` rebuilds them.
fn teardown<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) {
    stop(core);

    if let Some(mut world) = core.world.take() {
        world.mouse.release(&mut world.physics);
        world.renderer.discard();
        for body in core.registry.take_bodies() {
            world.physics.remove(body.handle);
        }
        debug_log!(core.config.debug, "gravity: world torn down");
    }

    core.clock.reset();
    if core.cursor.shown() != Cursor::Default {
        core.container.set_cursor(Cursor::Default);
    }
    core.cursor.reset();
    core.state = WorldState::Uninitialized;
}
