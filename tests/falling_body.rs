mod support;

use gravity_bridge::{BodyProps, Coordinate, GravityConfig, ShapeKind};
use support::{setup, FakeElement, FRAME_MS};

#[test]
fn circle_falls_and_rests_on_the_floor() {
    let (mut core, _container) = setup(300.0, 300.0, GravityConfig::default().with_gravity(0.0, 1.0));
    let ball = FakeElement::new(40.0, 40.0);
    let props = BodyProps::default()
        .with_shape(ShapeKind::Circle)
        .with_position(Coordinate::Percent(50.0), Coordinate::Percent(50.0));
    core.register_element("ball", ball.clone(), props).unwrap();
    core.initialize(0.0).unwrap();
    assert!(core.is_running());

    let radius = 20.0;
    let mut now = 0.0;
    let mut last_y = core.body_pose("ball").unwrap().y;
    assert_eq!(last_y, 150.0);

    for frame in 0..300 {
        now += FRAME_MS;
        core.frame(now).unwrap();
        let pose = core.body_pose("ball").unwrap();

        if frame < 20 {
            assert!(pose.y > last_y, "frame {frame}: {} !> {}", pose.y, last_y);
        }
        assert!(pose.x - radius >= -1.0 && pose.x + radius <= 301.0, "x out of bounds: {}", pose.x);
        assert!(pose.y + radius <= 302.0, "fell through the floor: {}", pose.y);
        last_y = pose.y;
    }

    let pose = core.body_pose("ball").unwrap();
    assert!((pose.y - (300.0 - radius)).abs() < 2.0, "resting y = {}", pose.y);
    let (vx, vy, _) = core.body_velocity("ball").unwrap();
    assert!(vx.abs() < 1.0 && vy.abs() < 1.0, "still moving: ({vx}, {vy})");

    let transform = ball.transform().unwrap();
    assert!(transform.starts_with("translate(") && transform.ends_with("deg)"), "{transform}");
}

#[test]
fn a_stopped_world_keeps_showing_its_pose() {
    let (mut core, _container) = setup(300.0, 300.0, GravityConfig::default());
    let ball = FakeElement::new(40.0, 40.0);
    let props = BodyProps::default()
        .with_shape(ShapeKind::Circle)
        .with_position(Coordinate::Percent(50.0), Coordinate::Percent(50.0));
    core.register_element("ball", ball.clone(), props).unwrap();
    core.initialize(0.0).unwrap();

    let now = support::frames(&mut core, 0.0, 10);
    core.stop();
    let y = core.body_pose("ball").unwrap().y;
    let writes = ball.writes();
    support::frames(&mut core, now, 10);

    assert_eq!(core.body_pose("ball").unwrap().y, y);
    assert_eq!(ball.writes(), writes + 10);
}

#[test]
fn unpositioned_body_settles_inside_the_walls() {
    let (mut core, _container) = setup(300.0, 300.0, GravityConfig::default());
    let box_element = FakeElement::new(40.0, 40.0);
    core.register_element("corner", box_element.clone(), BodyProps::default()).unwrap();
    core.initialize(0.0).unwrap();

    let start = core.body_pose("corner").unwrap();
    assert_eq!((start.x, start.y), (280.0, 280.0));

    support::frames(&mut core, 0.0, 300);
    let pose = core.body_pose("corner").unwrap();
    assert!(pose.x - 20.0 >= -2.0 && pose.x + 20.0 <= 302.0, "x = {}", pose.x);
    assert!(pose.y - 20.0 >= -2.0 && pose.y + 20.0 <= 302.0, "y = {}", pose.y);
    assert!(box_element.transform().is_some());
}
