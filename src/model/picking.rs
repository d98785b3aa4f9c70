use nalgebra::{Point2, Point3, Unit, Vector3};
use tracing::trace;

use super::camera::ViewCamera;
use super::indicator::IndicatorSet;
use super::registry::BodyRegistry;

/// The shapes that can be picked. Everything else in the scene is invisible to
/// the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere {
        center: Point3<f32>,
        radius: f32,
    },
    Annulus {
        center: Point3<f32>,
        normal: Unit<Vector3<f32>>,
        inner: f32,
        outer: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub shape: Shape,
    /// Name of the body or orbit indicator this surface belongs to
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub name: String,
    pub distance: f32,
}

impl Surface {
    pub fn new(shape: Shape, owner: &str) -> Self {
        Surface {
            shape,
            owner: Some(owner.to_owned()),
        }
    }

    pub fn unowned(shape: Shape) -> Self {
        Surface { shape, owner: None }
    }
}

/// Collects everything pickable, in a fixed order: body spheres, then
/// planetary rings, then orbit indicators. Within each group bodies keep their
/// registration order.
pub fn pickable_surfaces(registry: &BodyRegistry, indicators: &IndicatorSet) -> Vec<Surface> {
    let mut surfaces = vec![];

    for body in registry.all() {
        let center = registry.world_position(body.id);
        surfaces.push(Surface::new(
            Shape::Sphere {
                center,
                radius: body.info.radius,
            },
            body.name(),
        ));
    }

    for body in registry.all() {
        if let Some(ring) = body.info.ring {
            surfaces.push(Surface::new(
                Shape::Annulus {
                    center: registry.world_position(body.id),
                    normal: Vector3::y_axis(),
                    inner: ring.inner,
                    outer: ring.outer,
                },
                body.name(),
            ));
        }
    }

    for indicator in indicators.iter() {
        let center = match registry.pivot_center(indicator.body) {
            Some(center) => center,
            None => continue,
        };
        surfaces.push(Surface::new(
            Shape::Annulus {
                center,
                normal: Vector3::y_axis(),
                inner: indicator.radius,
                outer: indicator.radius + indicator.width,
            },
            &indicator.name,
        ));
    }

    surfaces
}

/// Finds the nearest surface under the pointer. Ties go to whichever surface
/// comes first. If the nearest surface has no owner, nothing is picked.
///
/// This doesn't touch the scene, so identical inputs always give identical
/// results.
pub fn pick(ndc: &Point2<f32>, camera: &ViewCamera, surfaces: &[Surface]) -> Option<Hit> {
    let ray = camera.ray_through(ndc)?;

    let mut nearest: Option<(f32, &Surface)> = None;
    for surface in surfaces {
        let distance = match &surface.shape {
            Shape::Sphere { center, radius } => ray.intersect_sphere(center, *radius),
            Shape::Annulus {
                center,
                normal,
                inner,
                outer,
            } => ray.intersect_annulus(center, normal, *inner, *outer),
        };
        let distance = match distance {
            Some(d) => d,
            None => continue,
        };

        match nearest {
            Some((best, _)) if best <= distance => {}
            _ => nearest = Some((distance, surface)),
        }
    }

    let (distance, surface) = nearest?;
    let name = surface.owner.clone()?;
    trace!(%name, distance, "picked");
    Some(Hit { name, distance })
}
