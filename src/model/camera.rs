use std::f32::consts::PI;

use nalgebra::{Isometry3, Matrix4, Perspective3, Point2, Point3, Vector2, Vector3};

use crate::config::CameraConfig;
use crate::math::ray::Ray;

/// A perspective camera looking from `eye` at `target`, with +y up.
///
/// Besides being placed directly (which is what camera transitions do), it can
/// be swung around its target and pulled in or out, like an orbit control.
/// Those knobs are driven from the window's input events; see `gui::camera`.
#[derive(Debug, Clone)]
pub struct ViewCamera {
    // -- pose --
    eye: Point3<f32>,
    target: Point3<f32>,
    // -- perspective --
    width: u32,
    height: u32,
    fovy: f32,
    znear: f32,
    zfar: f32,
    // -- input state --
    pub(crate) last_cursor_pos: Vector2<f32>,
    // -- knobs to fiddle with --
    pub(crate) rotate_step: f32,
    pub(crate) scroll_ratio: f32,
    polar_limit: f32,
    distance_limits: (f32, f32),
}

impl ViewCamera {
    pub fn new(config: &CameraConfig) -> Self {
        ViewCamera {
            eye: config.default_eye,
            target: config.default_target,
            width: 800,
            height: 600,
            fovy: config.fovy,
            znear: config.znear,
            zfar: config.zfar,
            last_cursor_pos: Vector2::zeros(),
            rotate_step: 0.005,
            scroll_ratio: 1.1,
            polar_limit: 0.01,
            distance_limits: (1.0, 0.5 * config.zfar),
        }
    }

    pub fn eye(&self) -> Point3<f32> {
        self.eye
    }

    pub fn target(&self) -> Point3<f32> {
        self.target
    }

    pub fn set_pose(&mut self, eye: Point3<f32>, target: Point3<f32>) {
        self.eye = eye;
        self.target = target;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        // A minimized window reports 0x0; keep the old aspect instead
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn distance(&self) -> f32 {
        (self.eye - self.target).norm()
    }

    pub fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(
            self.width as f32 / self.height as f32,
            self.fovy,
            self.znear,
            self.zfar,
        )
    }

    pub fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye, &self.target, &Vector3::y())
    }

    pub fn transformation(&self) -> Matrix4<f32> {
        self.projection().into_inner() * self.view_transform().to_homogeneous()
    }

    /// Converts a position in window pixels (origin top-left) into normalized
    /// device coordinates.
    pub fn pixel_to_ndc(&self, x: f32, y: f32) -> Point2<f32> {
        Point2::new(
            2.0 * x / self.width as f32 - 1.0,
            1.0 - 2.0 * y / self.height as f32,
        )
    }

    /// The ray from the eye through the point of the near plane under `ndc`.
    /// Returns None for coordinates that aren't finite or fall off the
    /// viewport, and when the camera itself is degenerate.
    pub fn ray_through(&self, ndc: &Point2<f32>) -> Option<Ray> {
        if !ndc.x.is_finite() || !ndc.y.is_finite() {
            return None;
        }
        if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
            return None;
        }
        if self.distance() <= f32::EPSILON {
            return None;
        }

        // In view space the eye sits at the origin, so the near-plane point is
        // also the ray's direction.
        let near_view = self
            .projection()
            .unproject_point(&Point3::new(ndc.x, ndc.y, -1.0));
        let direction = self
            .view_transform()
            .inverse_transform_vector(&near_view.coords);
        Ray::new(self.eye, direction)
    }

    /// Swings the eye around the target. `dazimuth` turns about the up axis,
    /// `dpolar` tilts toward or away from it.
    pub fn rotate(&mut self, dazimuth: f32, dpolar: f32) {
        let offset = self.eye - self.target;
        let radius = offset.norm();
        if radius <= f32::EPSILON {
            return;
        }

        let azimuth = offset.x.atan2(offset.z) + dazimuth;
        let polar = nalgebra::clamp(
            (offset.y / radius).acos() + dpolar,
            self.polar_limit,
            PI - self.polar_limit,
        );

        let new_offset = Vector3::new(
            radius * polar.sin() * azimuth.sin(),
            radius * polar.cos(),
            radius * polar.sin() * azimuth.cos(),
        );
        self.eye = self.target + new_offset;
    }

    /// Scales the distance between eye and target, within limits.
    pub fn zoom(&mut self, factor: f32) {
        let offset = self.eye - self.target;
        let radius = offset.norm();
        if radius <= f32::EPSILON {
            return;
        }

        let new_radius = nalgebra::clamp(
            radius * factor,
            self.distance_limits.0,
            self.distance_limits.1,
        );
        self.eye = self.target + offset * (new_radius / radius);
    }
}
