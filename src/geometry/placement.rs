use crate::domain::host::Size;
use crate::domain::props::{BodyProps, Coordinate};

/// Centre position and rotation of a body, in container pixels/radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

/// Resolve one axis of a declared position.
///
/// Unspecified positions put the element flush against the container's
/// bottom/right edge, on the inside. Anything further out lands behind the
/// boundary walls and would never reach the view.
pub fn resolve_axis(coord: Option<Coordinate>, container: f64, element: f64) -> f64 {
    match coord {
        Some(Coordinate::Percent(p)) => container * p / 100.0,
        Some(Coordinate::Absolute(v)) => v,
        None => container - element / 2.0,
    }
}

/// Resolve the full initial pose against the current container size.
pub fn resolve_pose(props: &BodyProps, container: Size, element: Size) -> Pose {
    Pose {
        x: resolve_axis(props.x, container.width, element.width),
        y: resolve_axis(props.y, container.height, element.height),
        angle: props.angle.to_radians(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_scale_with_the_container() {
        assert_eq!(resolve_axis(Some(Coordinate::Percent(50.0)), 400.0, 30.0), 200.0);
        assert_eq!(resolve_axis(Some(Coordinate::Percent(0.0)), 400.0, 30.0), 0.0);
        assert_eq!(resolve_axis(Some(Coordinate::Percent(100.0)), 250.0, 30.0), 250.0);
    }

    #[test]
    fn absolute_values_ignore_the_container() {
        for container in [0.0, 120.0, 400.0, 4000.0] {
            assert_eq!(resolve_axis(Some(Coordinate::Absolute(120.0)), container, 30.0), 120.0);
        }
    }

    #[test]
    fn unspecified_axis_hugs_the_far_edge() {
        let x = resolve_axis(None, 400.0, 40.0);
        assert_eq!(x, 380.0);
        // Far edge touches the container edge, near edge is inside it.
        assert_eq!(x + 20.0, 400.0);
        assert!(x - 20.0 > 0.0);
    }

    #[test]
    fn pose_converts_degrees_to_radians() {
        let props = BodyProps::default()
            .with_position(Coordinate::Percent(50.0), Coordinate::Absolute(10.0))
            .with_angle(90.0);
        let pose = resolve_pose(&props, Size::new(300.0, 200.0), Size::new(40.0, 40.0));
        assert_eq!(pose.x, 150.0);
        assert_eq!(pose.y, 10.0);
        assert!((pose.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
