use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, PointRenderer, Renderer};
use nalgebra::Point3;

use crate::config::IndicatorStyle;

use self::utils::{circle_points, draw_path};

mod utils;

const CIRCLE_SEGMENTS: usize = 128;
// Rings are drawn as a set of concentric circles, this many per unit of width
const RING_CIRCLES_PER_UNIT: f32 = 1.5;

/// Everything drawn with lines and points rather than meshes. Both kiss3d
/// renderers forget what they were given after each frame, so all of this has
/// to be re-submitted every step.
pub struct CompoundRenderer {
    line_renderer: LineRenderer,
    point_renderer: PointRenderer,
}

impl CompoundRenderer {
    pub fn new() -> Self {
        CompoundRenderer {
            line_renderer: LineRenderer::new(),
            point_renderer: PointRenderer::new(),
        }
    }

    /// An orbit indicator: a thin band from `radius` to `radius + width`,
    /// outlined on both edges.
    pub fn draw_indicator(
        &mut self,
        center: Point3<f32>,
        radius: f32,
        width: f32,
        style: IndicatorStyle,
    ) {
        let color = style.color * style.intensity;
        for r in [radius, radius + width] {
            draw_path(
                &mut self.line_renderer,
                circle_points(center, r, CIRCLE_SEGMENTS),
                &color,
            );
        }
    }

    pub fn draw_ring(&mut self, center: Point3<f32>, inner: f32, outer: f32, color: Point3<f32>) {
        let num_circles = ((outer - inner) * RING_CIRCLES_PER_UNIT).ceil().max(1.0) as usize;
        for i in 0..=num_circles {
            let r = inner + (outer - inner) * (i as f32) / (num_circles as f32);
            draw_path(
                &mut self.line_renderer,
                circle_points(center, r, CIRCLE_SEGMENTS),
                &color,
            );
        }
    }

    pub fn draw_stars(&mut self, stars: &[Point3<f32>], color: Point3<f32>) {
        for star in stars {
            self.point_renderer.draw_point(*star, color);
        }
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.line_renderer.render(pass, camera);
        self.point_renderer.render(pass, camera);
    }
}
