use crate::domain::host::{BodyElement, Container};

use super::GravityCore;

pub(super) fn pointer_down<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>, x: f64, y: f64) -> bool {
    core.cursor.pointer_moved(x, y);

    let draggable = core.draggable_handles();
    let Some(world) = core.world.as_mut() else {
        return false;
    };
    let Some(handle) = world.physics.body_at_point(x, y, |h| draggable.contains(&h)) else {
        return false;
    };
    world.mouse.press(&mut world.physics, handle, x, y)
}

pub(super) fn pointer_move<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>, x: f64, y: f64) {
    core.cursor.pointer_moved(x, y);
    if let Some(world) = core.world.as_mut() {
        world.mouse.drag_to(x, y);
    }
}

pub(super) fn pointer_up<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) {
    if let Some(world) = core.world.as_mut() {
        world.mouse.release(&mut world.physics);
    }
}

pub(super) fn pointer_leave<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) {
    core.cursor.pointer_left();
    if let Some(world) = core.world.as_mut() {
        world.mouse.release(&mut world.physics);
    }
}

/// Pre-step tick: refresh the drag spring and the cursor affordance.
pub(super) fn tick<E: BodyElement, C: Container>(core: &mut GravityCore<E, C>) {
    let draggable = core.draggable_handles();
    let Some(world) = core.world.as_mut() else {
        return;
    };
    world.mouse.apply(&mut world.physics);

    if !core.config.grab_cursor {
        return;
    }
    let over_body = core
        .cursor
        .pointer()
        .and_then(|(x, y)| world.physics.body_at_point(x, y, |h| draggable.contains(&h)))
        .is_some();
    if let Some(cursor) = core.cursor.update(world.mouse.is_dragging(), over_body) {
        core.container.set_cursor(cursor);
    }
}
