use std::f32::consts::TAU;

use kiss3d::renderer::LineRenderer;

use nalgebra::Point3;

use crate::math::geometry::orbit_offset;

pub fn path_iter_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(S) -> Point3<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    // Zero segments would divide by zero below; one is the least we can draw
    let num_segments = num_segments.max(1);
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| convert(i) / convert(num_segments))
        // u ranges from 0 to 1 (inclusive)
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

/// A closed circle of the given radius in the horizontal plane through
/// `center`. The first and last points coincide.
pub fn circle_points(
    center: Point3<f32>,
    radius: f32,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>> {
    path_iter_parametric(
        move |angle: f32| center + orbit_offset(radius, angle),
        0.0,
        TAU,
        num_segments,
    )
}

pub fn draw_path<I: Iterator<Item = Point3<f32>>>(
    line_renderer: &mut LineRenderer,
    points: I,
    color: &Point3<f32>,
) {
    let mut prev_pt = None;
    for pt in points {
        if let Some(prev_pt) = prev_pt {
            line_renderer.draw_line(prev_pt, pt, *color);
        }
        prev_pt = Some(pt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_circle_is_closed_and_round() {
        let center = Point3::new(5.0, 1.0, -2.0);
        let points: Vec<_> = circle_points(center, 3.0, 16).collect();

        assert_eq!(points.len(), 17);
        assert_relative_eq!(points[0], points[16], epsilon = 1e-5);
        for pt in points {
            assert_relative_eq!((pt - center).norm(), 3.0, epsilon = 1e-5);
            assert_relative_eq!(pt.y, 1.0);
        }
    }

    #[test]
    fn test_parametric_endpoints() {
        let points: Vec<_> =
            path_iter_parametric(|t: f32| Point3::new(t, 0.0, 0.0), 2.0, 4.0, 4).collect();
        let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 2.5, 3.0, 3.5, 4.0]);
    }
}
