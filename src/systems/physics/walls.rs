use rapier2d::prelude::*;

use super::PhysicsWorld;
use crate::domain::host::Size;

/// Thickness of the static boundary walls, in pixels.
pub const WALL_THICKNESS: f64 = 50.0;

/// A static boundary, kept around for the debug overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PhysicsWorld {
    /// Fence the container with walls lying flush against its outside
    /// edges. Bottom, left and right are always present.
    pub fn add_walls(&mut self, size: Size, top: bool) {
        let (w, h, t) = (size.width, size.height, WALL_THICKNESS);

        let mut walls = vec![
            // bottom
            Wall { x: w / 2.0, y: h + t / 2.0, width: w + 2.0 * t, height: t },
            // left
            Wall { x: -t / 2.0, y: h / 2.0, width: t, height: h + 2.0 * t },
            // right
            Wall { x: w + t / 2.0, y: h / 2.0, width: t, height: h + 2.0 * t },
        ];
        if top {
            walls.push(Wall { x: w / 2.0, y: -t / 2.0, width: w + 2.0 * t, height: t });
        }

        for wall in &walls {
            let body = RigidBodyBuilder::fixed()
                .translation(Vector::new(wall.x as Real, wall.y as Real))
                .build();
            let collider = ColliderBuilder::cuboid(
                (wall.width / 2.0) as Real,
                (wall.height / 2.0) as Real,
            )
            .friction(0.1)
            .build();
            self.insert(body, vec![collider]);
        }
        self.walls.extend(walls);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_wall_is_optional() {
        let mut open = PhysicsWorld::new(0.0, 1.0);
        open.add_walls(Size::new(300.0, 200.0), false);
        assert_eq!(open.walls().len(), 3);
        assert_eq!(open.body_count(), 3);

        let mut closed = PhysicsWorld::new(0.0, 1.0);
        closed.add_walls(Size::new(300.0, 200.0), true);
        assert_eq!(closed.walls().len(), 4);
    }

    #[test]
    fn walls_sit_outside_the_visible_area() {
        let mut world = PhysicsWorld::new(0.0, 1.0);
        world.add_walls(Size::new(300.0, 200.0), true);
        // Nothing inside the container is solid.
        assert_eq!(world.body_at_point(1.0, 1.0, |_| true), None);
        assert_eq!(world.body_at_point(299.0, 199.0, |_| true), None);
        // Just past each edge is.
        assert!(world.body_at_point(150.0, 201.0, |_| true).is_some());
        assert!(world.body_at_point(-1.0, 100.0, |_| true).is_some());
        assert!(world.body_at_point(301.0, 100.0, |_| true).is_some());
        assert!(world.body_at_point(150.0, -1.0, |_| true).is_some());
    }
}
