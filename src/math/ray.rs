use nalgebra::{Point3, Unit, Vector3};

// Anything closer to parallel than this is treated as missing a plane
const PARALLEL_TOLERANCE: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Unit<Vector3<f32>>,
}

impl Ray {
    /// Returns None if the direction is zero, or if anything isn't finite.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Option<Self> {
        if !origin.coords.iter().chain(direction.iter()).all(|x| x.is_finite()) {
            return None;
        }
        let direction = Unit::try_new(direction, f32::EPSILON)?;
        Some(Ray { origin, direction })
    }

    /// The ray from `origin` through `through`
    pub fn between(origin: Point3<f32>, through: Point3<f32>) -> Option<Self> {
        Self::new(origin, through - origin)
    }

    pub fn at(&self, distance: f32) -> Point3<f32> {
        self.origin + self.direction.into_inner() * distance
    }

    /// Distance along the ray to the first point where it enters the sphere.
    /// If the ray starts inside, this is where it leaves instead. Hits behind
    /// the origin don't count.
    pub fn intersect_sphere(&self, center: &Point3<f32>, radius: f32) -> Option<f32> {
        // Solve |o + t d - c|^2 = r^2, with |d| = 1
        let to_origin = self.origin - center;
        let b = to_origin.dot(&self.direction);
        let c = to_origin.norm_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near > 0.0 {
            Some(near)
        } else if far > 0.0 {
            Some(far)
        } else {
            None
        }
    }

    /// Distance along the ray to a flat annulus: the points of the plane through
    /// `center` with the given normal whose distance from `center` is between
    /// `inner` and `outer` (inclusive).
    pub fn intersect_annulus(
        &self,
        center: &Point3<f32>,
        normal: &Unit<Vector3<f32>>,
        inner: f32,
        outer: f32,
    ) -> Option<f32> {
        let denominator = self.direction.dot(normal);
        if denominator.abs() < PARALLEL_TOLERANCE {
            return None;
        }

        let t = (center - self.origin).dot(normal) / denominator;
        if !(t > 0.0) {
            return None;
        }

        let radius = (self.at(t) - center).norm();
        if inner <= radius && radius <= outer {
            Some(t)
        } else {
            None
        }
    }
}
