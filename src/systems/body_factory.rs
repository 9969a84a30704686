//! Body factory
//!
//! Builds one rigid body per registered element: shape from the element's
//! laid-out size (or its vector paths), material from defaults merged with
//! the element's overrides, initial pose from its declared position.

use rapier2d::prelude::*;

use crate::domain::host::{BodyElement, Size};
use crate::domain::outline::{BodyOutline, OutlineShape, RenderStyle};
use crate::domain::props::{BodyProps, Material, ShapeKind};
use crate::error::BridgeError;
use crate::geometry::{resolve_pose, sample_path, Pose};

use super::physics::{BodyHandle, PhysicsWorld};

/// Contours smaller than this (in px²) are treated as degenerate.
const MIN_CONTOUR_AREA: f64 = 1e-3;

/// What `build_body` inserted, plus what the sync loop needs later.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltBody {
    pub handle: BodyHandle,
    pub outline: BodyOutline,
    /// Element size at build time; offsets the CSS transform.
    pub size: Size,
    /// Declared pose, restored by `reset`.
    pub initial: Pose,
}

/// Collision geometry in body-local pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedShape {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    /// One closed polygon per vector path, vertices relative to the centre.
    Contours(Vec<Vec<(f64, f64)>>),
}

impl ResolvedShape {
    pub fn resolve<E: BodyElement>(element: &E, props: &BodyProps) -> Result<Self, BridgeError> {
        let size = element.offset_size();
        let shape = match props.shape {
            ShapeKind::Rectangle => Self::Rectangle { width: size.width, height: size.height },
            ShapeKind::Circle => Self::Circle { radius: size.width.max(size.height) / 2.0 },
            ShapeKind::Path => {
                let mut contours = Vec::new();
                for d in element.path_data() {
                    let points = sample_path(&d, props.sample_length)?;
                    let contour: Vec<(f64, f64)> = points
                        .iter()
                        .map(|p| (p.x - size.width / 2.0, p.y - size.height / 2.0))
                        .collect();
                    if let Some(contour) = usable_contour(contour) {
                        contours.push(contour);
                    }
                }
                if contours.is_empty() {
                    Self::Rectangle { width: size.width, height: size.height }
                } else {
                    Self::Contours(contours)
                }
            }
        };
        Ok(shape)
    }

    pub fn outline(&self, debug: bool) -> BodyOutline {
        let shape = match self {
            Self::Rectangle { width, height } => OutlineShape::Rect { width: *width, height: *height },
            Self::Circle { radius } => OutlineShape::Circle { radius: *radius },
            Self::Contours(contours) => OutlineShape::Polygons(contours.clone()),
        };
        BodyOutline { shape, style: RenderStyle::for_debug(debug) }
    }

    fn colliders(&self, material: &Material) -> Vec<Collider> {
        let builders = match self {
            Self::Rectangle { width, height } => {
                let (hx, hy) = ((width / 2.0).max(0.5), (height / 2.0).max(0.5));
                let builder = match material.chamfer {
                    Some(radius) if radius > 0.0 => {
                        let r = radius.min(hx.min(hy) - 0.25).max(0.0);
                        ColliderBuilder::round_cuboid((hx - r) as Real, (hy - r) as Real, r as Real)
                    }
                    _ => ColliderBuilder::cuboid(hx as Real, hy as Real),
                };
                vec![builder]
            }
            Self::Circle { radius } => vec![ColliderBuilder::ball(radius.max(0.5) as Real)],
            Self::Contours(contours) => contours
                .iter()
                .map(|contour| {
                    let vertices: Vec<Point<Real>> = contour
                        .iter()
                        .map(|&(x, y)| Point::new(x as Real, y as Real))
                        .collect();
                    let n = vertices.len() as u32;
                    let indices: Vec<[u32; 2]> = (0..n).map(|i| [i, (i + 1) % n]).collect();
                    match material.chamfer {
                        Some(radius) if radius > 0.0 => {
                            ColliderBuilder::round_convex_decomposition(&vertices, &indices, radius as Real)
                        }
                        _ => ColliderBuilder::convex_decomposition(&vertices, &indices),
                    }
                })
                .collect(),
        };

        builders
            .into_iter()
            .map(|builder| {
                builder
                    .friction(material.friction as Real)
                    .restitution(material.restitution as Real)
                    .density(material.density as Real)
                    .build()
            })
            .collect()
    }
}

/// Drop a wrap-around vertex and reject contours that enclose no area.
fn usable_contour(mut contour: Vec<(f64, f64)>) -> Option<Vec<(f64, f64)>> {
    if contour.len() > 1 && close(contour[0], contour[contour.len() - 1]) {
        contour.pop();
    }
    if contour.len() < 3 || signed_area(&contour).abs() < MIN_CONTOUR_AREA {
        return None;
    }
    Some(contour)
}

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

fn signed_area(points: &[(f64, f64)]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (x0, y0) = points[i];
            let (x1, y1) = points[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum::<f64>()
        / 2.0
}

/// Build and insert the body for `element`.
///
/// Nothing is inserted when shape resolution fails (malformed path data).
pub fn build_body<E: BodyElement>(
    world: &mut PhysicsWorld,
    element: &E,
    container: Size,
    props: &BodyProps,
    debug: bool,
) -> Result<BuiltBody, BridgeError> {
    let size = element.offset_size();
    let shape = ResolvedShape::resolve(element, props)?;
    let material = Material::default().merged(&props.material);
    let initial = resolve_pose(props, container, size);

    let builder = if material.is_static {
        RigidBodyBuilder::fixed()
    } else {
        RigidBodyBuilder::dynamic()
    };
    let body = builder
        .translation(Vector::new(initial.x as Real, initial.y as Real))
        .rotation(initial.angle as Real)
        .build();

    let handle = world.insert(body, shape.colliders(&material));
    Ok(BuiltBody {
        handle,
        outline: shape.outline(debug),
        size,
        initial,
    })
}
