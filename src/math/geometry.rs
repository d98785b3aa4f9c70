use nalgebra::{Point3, UnitQuaternion, Vector3};

use std::f32::consts::TAU;

/// Rotation about the y-axis, which is "up" for the whole scene. Both spin and
/// revolution are rotations of this kind.
pub fn rotation_about_up(angle: f32) -> UnitQuaternion<f32> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), angle)
}

/// Where something `distance` away from its pivot ends up once the pivot has
/// turned by `angle`. At angle zero it lies along +x.
pub fn orbit_offset(distance: f32, angle: f32) -> Vector3<f32> {
    rotation_about_up(angle) * Vector3::new(distance, 0.0, 0.0)
}

/// Keeps an accumulated angle in [0, 2pi), so that long-running rotations don't
/// lose precision.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

pub fn lerp_point(from: &Point3<f32>, to: &Point3<f32>, t: f32) -> Point3<f32> {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_orbit_offset() {
        assert_relative_eq!(orbit_offset(78.0, 0.0), Vector3::new(78.0, 0.0, 0.0));

        // Quarter turn about +y takes +x to -z
        assert_relative_eq!(
            orbit_offset(10.0, FRAC_PI_2),
            Vector3::new(0.0, 0.0, -10.0),
            epsilon = 1e-5
        );

        assert_relative_eq!(
            orbit_offset(10.0, PI),
            Vector3::new(-10.0, 0.0, 0.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_wrap_angle() {
        assert_relative_eq!(wrap_angle(0.5), 0.5);
        assert_relative_eq!(wrap_angle(TAU + 0.5), 0.5, epsilon = 1e-6);
        assert_relative_eq!(wrap_angle(-0.5), TAU - 0.5, epsilon = 1e-6);
        assert!(wrap_angle(-1e-9) < TAU);
    }

    #[test]
    fn test_lerp_point() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, -4.0, 2.0);
        assert_eq!(lerp_point(&a, &b, 0.0), a);
        assert_relative_eq!(lerp_point(&a, &b, 0.5), Point3::new(5.0, -2.0, 1.0));
    }
}
