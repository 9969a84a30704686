use crate::domain::host::{BodyElement, Container};
use crate::error::BridgeError;
use crate::systems::{build_body, MouseConstraint, PhysicsWorld, Renderer};

use super::commands;
use super::registry::BodySlot;
use super::{GravityCore, WorldRuntime, WorldState};

pub(super) fn initialize<E: BodyElement, C: Container>(
    core: &mut GravityCore<E, C>,
    now: f64,
) -> Result<(), BridgeError> {
    if core.world.is_some() {
        return Ok(());
    }

    let size = match core.container.bounding_size() {
        Some(size) if !size.is_empty() => size,
        _ => {
            debug_log!(core.config.debug, "gravity: container not measurable yet, skipping init");
            return Ok(());
        }
    };

    let mut physics = PhysicsWorld::new(core.config.gravity.x, core.config.gravity.y);
    physics.add_walls(size, core.config.add_top_wall);

    let surface = if core.config.debug {
        core.container.attach_surface(size)
    } else {
        None
    };

    core.world = Some(WorldRuntime {
        physics,
        renderer: Renderer::new(surface),
        mouse: MouseConstraint::new(core.config.mouse_stiffness),
        size,
    });
    core.state = WorldState::Stopped;
    core.clock.reset();

    debug_log!(
        core.config.debug,
        "gravity: world created at {}x{} with {} pending bodies",
        size.width,
        size.height,
        core.registry.pending_ids().len()
    );

    let hydrated = hydrate_pending(core);

    if core.config.auto_start {
        commands::start(core, now);
    }
    hydrated
}

/// Build bodies for every entry registered while there was no world.
fn hydrate_pending<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) -> Result<(), BridgeError> {
    let mut first_error = None;
    for id in core.registry.pending_ids() {
        if let Err(err) = hydrate(core, &id) {
            bridge_log!("gravity: failed to build body for `{}`: {}", id, err);
            first_error.get_or_insert(err);
        }
    }
    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Build the body for `id` if it is still pending and a world exists.
/// Returns whether a body was created.
pub(super) fn hydrate<E: BodyElement, C: Container>(
    core: &mut GravityCore<E, C>,
    id: &str,
) -> Result<bool, BridgeError> {
    let Some(world) = core.world.as_mut() else {
        return Ok(false);
    };
    let Some(entry) = core.registry.get_mut(id) else {
        return Ok(false);
    };
    if !entry.body.is_pending() {
        return Ok(false);
    }

    let built = build_body(
        &mut world.physics,
        &entry.element,
        world.size,
        &entry.props,
        core.config.debug,
    )?;
    let pose = built.initial;
    entry.body = BodySlot::Hydrated(built.into());

    core.log_once(format!("hydrated:{id}"), || {
        format!("gravity: `{}` hydrated at ({:.1}, {:.1})", id, pose.x, pose.y)
    });
    Ok(true)
}
