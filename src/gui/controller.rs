use std::time::{Duration, Instant};

use kiss3d::event::{Action, Event, Key, MouseButton, WindowEvent};
use nalgebra::Vector2;
use tracing::debug;

use crate::model::{InfoPanel, StarSystem};

// Key config, all in one place
const KEY_RESET_CAMERA: Key = Key::R;

// A release further than this from the press (in pixels) ended a camera drag,
// not a click
const CLICK_DRAG_THRESHOLD: f32 = 4.0;

// Frames slower than this are treated as if they took this long, so a stalled
// window doesn't make the camera jump to the end of its transition
const MAX_FRAME_SECONDS: f32 = 0.25;

/// Turns raw window events into the model's pointer and reset events.
pub struct Controller {
    cursor: Vector2<f32>,
    press_pos: Option<Vector2<f32>>,
    frame_clock: FrameClock,
}

/// Real time between frames, plus a frames-per-second figure averaged over a
/// fixed window so it doesn't flicker.
pub struct FrameClock {
    last_frame: Instant,
    window_start: Instant,
    frames_in_window: usize,
    window: Duration,
    fps: f64,
}

impl FrameClock {
    pub fn new(window: Duration) -> Self {
        let now = Instant::now();
        FrameClock {
            last_frame: now,
            window_start: now,
            frames_in_window: 0,
            window,
            fps: 0.0,
        }
    }

    /// Marks the start of a frame and returns the seconds since the last one.
    pub fn lap(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frames_in_window += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed > self.window {
            self.fps = self.frames_in_window as f64 / elapsed.as_secs_f64();
            self.window_start = now;
            self.frames_in_window = 0;
        }

        dt.min(MAX_FRAME_SECONDS)
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            cursor: Vector2::zeros(),
            press_pos: None,
            frame_clock: FrameClock::new(Duration::from_secs(1)),
        }
    }

    pub fn process_event(
        &mut self,
        event: Event,
        system: &mut StarSystem,
        panel: &mut dyn InfoPanel,
    ) {
        match event.value {
            WindowEvent::CursorPos(x, y, _) => {
                self.cursor = Vector2::new(x as f32, y as f32);
                let ndc = system.camera().pixel_to_ndc(self.cursor.x, self.cursor.y);
                system.on_pointer_move(&ndc);
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Press, _) => {
                self.press_pos = Some(self.cursor);
            }
            WindowEvent::MouseButton(MouseButton::Button1, Action::Release, _) => {
                let press_pos = match self.press_pos.take() {
                    Some(pos) => pos,
                    None => return,
                };
                if !is_click(press_pos, self.cursor) {
                    return;
                }
                let ndc = system.camera().pixel_to_ndc(self.cursor.x, self.cursor.y);
                system.on_click(&ndc, panel);
            }
            WindowEvent::Key(KEY_RESET_CAMERA, Action::Press, _) => {
                debug!("camera reset requested");
                system.on_reset_requested(panel);
            }
            _ => {}
        }
    }

    pub fn cursor(&self) -> Vector2<f32> {
        self.cursor
    }

    /// Seconds since the previous frame
    pub fn frame_time(&mut self) -> f32 {
        self.frame_clock.lap()
    }

    pub fn fps(&self) -> f64 {
        self.frame_clock.fps()
    }
}

fn is_click(press: Vector2<f32>, release: Vector2<f32>) -> bool {
    (release - press).norm() < CLICK_DRAG_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_versus_drag() {
        let press = Vector2::new(100.0, 100.0);
        assert!(is_click(press, press));
        assert!(is_click(press, Vector2::new(102.0, 101.0)));
        assert!(!is_click(press, Vector2::new(100.0, 140.0)));
    }

    #[test]
    fn test_frame_clock_is_bounded() {
        let mut clock = FrameClock::new(Duration::from_secs(1));
        let dt = clock.lap();
        assert!(dt >= 0.0);
        assert!(dt <= MAX_FRAME_SECONDS);
        // No full window has gone by yet
        assert_eq!(clock.fps(), 0.0);
    }
}
