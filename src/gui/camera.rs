use kiss3d::camera::Camera;
use kiss3d::event::{Action, Key, MouseButton, WindowEvent};
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Point3, Vector2};

use crate::model::ViewCamera;

const KEY_ANGLE_STEP: f32 = 0.1;
const KEY_ZOOM_STEP: f32 = 1.2;

enum Nudge {
    Rotate(f32, f32),
    Zoom(f32),
}

// Keyboard equivalents of dragging and scrolling
fn key_nudge(key: Key) -> Option<Nudge> {
    let nudge = match key {
        Key::W => Nudge::Rotate(0.0, -KEY_ANGLE_STEP),
        Key::S => Nudge::Rotate(0.0, KEY_ANGLE_STEP),
        Key::A => Nudge::Rotate(-KEY_ANGLE_STEP, 0.0),
        Key::D => Nudge::Rotate(KEY_ANGLE_STEP, 0.0),
        Key::Equals => Nudge::Zoom(KEY_ZOOM_STEP.recip()),
        Key::Minus => Nudge::Zoom(KEY_ZOOM_STEP),
        _ => return None,
    };
    Some(nudge)
}

// The view camera behaves like an orbit control: drag with the left button to
// swing around whatever it's looking at, scroll to move in and out. Camera
// transitions overwrite the pose wholesale, so dragging during one only lasts
// until the next tick.
impl Camera for ViewCamera {
    fn handle_event(&mut self, canvas: &Canvas, event: &WindowEvent) {
        match *event {
            WindowEvent::CursorPos(x, y, _) => {
                let curr_pos = Vector2::new(x as f32, y as f32);
                if canvas.get_mouse_button(MouseButton::Button1) == Action::Press {
                    // Drag right == camera swings left, so the scene follows the cursor
                    let dpos = (curr_pos - self.last_cursor_pos) * self.rotate_step;
                    self.rotate(-dpos.x, -dpos.y);
                }
                self.last_cursor_pos = curr_pos;
            }
            // scroll up == zoom in
            WindowEvent::Scroll(_, off, _) if off < 0.0 => self.zoom(self.scroll_ratio),
            WindowEvent::Scroll(_, off, _) if off > 0.0 => self.zoom(self.scroll_ratio.recip()),
            WindowEvent::Key(key, Action::Press, _) => match key_nudge(key) {
                Some(Nudge::Rotate(dazimuth, dpolar)) => self.rotate(dazimuth, dpolar),
                Some(Nudge::Zoom(factor)) => self.zoom(factor),
                None => {}
            },
            _ => {}
        }
    }

    fn eye(&self) -> Point3<f32> {
        ViewCamera::eye(self)
    }

    fn view_transform(&self) -> Isometry3<f32> {
        ViewCamera::view_transform(self)
    }

    fn transformation(&self) -> Matrix4<f32> {
        ViewCamera::transformation(self)
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        // Only singular if eye == target, which set_pose never gets asked for
        ViewCamera::transformation(self)
            .try_inverse()
            .unwrap_or_else(Matrix4::identity)
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.projection().znear(), self.projection().zfar())
    }

    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection().into_inner());
        view.upload(&ViewCamera::view_transform(self).to_homogeneous());
    }
}
