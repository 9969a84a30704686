//! Sync loop body
//!
//! Within one frame physics is stepped exactly once, and only then are
//! transforms written, so every element reflects the same world state.

use crate::domain::host::{BodyElement, Container, Size};
use crate::domain::outline::{BodyOutline, OutlineShape, PlacedOutline, RenderStyle};
use crate::error::BridgeError;
use crate::geometry::Pose;

use super::{commands, pointer};
use super::{GravityCore, WorldState};

/// CSS transform placing an element of `size` so its centre sits at `pose`.
pub fn css_transform(pose: Pose, size: Size) -> String {
    format!(
        "translate({}px, {}px) rotate({}deg)",
        round3(pose.x - size.width / 2.0),
        round3(pose.y - size.height / 2.0),
        round3(pose.angle.to_degrees()),
    )
}

fn round3(v: f64) -> f64 {
    let r = (v * 1000.0).round() / 1000.0;
    // Avoid printing "-0".
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

pub(super) fn frame<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>, now: f64) -> Result<(), BridgeError> {
    let mut result = Ok(());
    if core.resize.poll(now) {
        debug_log!(core.config.debug, "gravity: resize settled, rebuilding");
        result = commands::rebuild(core, now);
    }

    if core.state == WorldState::Running {
        pointer::tick(core);
    }

    if let Some(world) = core.world.as_mut() {
        if core.state == WorldState::Running {
            let delta = core.clock.advance(now);
            world.physics.step(delta);
        } else {
            core.clock.rebase(now);
        }
    }

    write_transforms(core);
    draw_outlines(core);
    result
}

fn write_transforms<E: BodyElement, C: Container>(core: &GravityCore<E, C>) {
    let Some(world) = core.world.as_ref() else {
        return;
    };
    for (_, entry) in core.registry.iter() {
        let Some(body) = entry.body.hydrated() else {
            continue;
        };
        if let Some(pose) = world.physics.pose(body.handle) {
            entry.element.set_transform(&css_transform(pose, body.size));
        }
    }
}

fn draw_outlines<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) {
    let Some(world) = core.world.as_mut() else {
        return;
    };
    if !world.renderer.is_running() || !world.renderer.has_surface() {
        return;
    }

    let walls: Vec<(BodyOutline, f64, f64)> = world
        .physics
        .walls()
        .iter()
        .map(|wall| {
            let outline = BodyOutline {
                shape: OutlineShape::Rect { width: wall.width, height: wall.height },
                style: RenderStyle::DEBUG_WALL,
            };
            (outline, wall.x, wall.y)
        })
        .collect();

    let mut placed: Vec<PlacedOutline<'_>> = walls
        .iter()
        .map(|(outline, x, y)| PlacedOutline { outline, x: *x, y: *y, angle: 0.0 })
        .collect();
    for (_, entry) in core.registry.iter() {
        let Some(body) = entry.body.hydrated() else {
            continue;
        };
        if let Some(pose) = world.physics.pose(body.handle) {
            placed.push(PlacedOutline { outline: &body.outline, x: pose.x, y: pose.y, angle: pose.angle });
        }
    }

    world.renderer.draw(&placed);
}
