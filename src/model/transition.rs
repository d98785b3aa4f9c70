use nalgebra::Point3;
use tracing::debug;

use crate::math::geometry::lerp_point;

use super::camera::ViewCamera;

/// A single camera move, from wherever the camera was when it started to a
/// destination pose, over a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    start_eye: Point3<f32>,
    start_target: Point3<f32>,
    end_eye: Point3<f32>,
    end_target: Point3<f32>,
    elapsed: f32,
    duration: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionPhase {
    Idle,
    Moving(CameraTransition),
    Finished,
}

/// Drives camera transitions one tick at a time. Beginning a new transition
/// throws away whatever was in flight; there's no blending or queueing.
#[derive(Debug, Clone)]
pub struct TransitionController {
    phase: TransitionPhase,
    duration: f32,
}

impl CameraTransition {
    /// Fraction of the way through, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        nalgebra::clamp(self.elapsed / self.duration, 0.0, 1.0)
    }

    pub fn destination(&self) -> (Point3<f32>, Point3<f32>) {
        (self.end_eye, self.end_target)
    }

    fn pose(&self) -> (Point3<f32>, Point3<f32>) {
        let t = self.progress();
        if t >= 1.0 {
            // Land exactly, rather than wherever rounding puts us
            return self.destination();
        }
        (
            lerp_point(&self.start_eye, &self.end_eye, t),
            lerp_point(&self.start_target, &self.end_target, t),
        )
    }
}

impl TransitionController {
    pub fn new(duration: f32) -> Self {
        TransitionController {
            phase: TransitionPhase::Idle,
            duration,
        }
    }

    pub fn phase(&self) -> &TransitionPhase {
        &self.phase
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.phase, TransitionPhase::Moving(_))
    }

    /// Starts moving from the camera's current pose. Only reads the camera;
    /// the move itself happens in `advance`.
    pub fn begin(&mut self, camera: &ViewCamera, eye: Point3<f32>, target: Point3<f32>) {
        debug!(?eye, ?target, "camera transition started");
        self.phase = TransitionPhase::Moving(CameraTransition {
            start_eye: camera.eye(),
            start_target: camera.target(),
            end_eye: eye,
            end_target: target,
            elapsed: 0.0,
            duration: self.duration,
        });
    }

    /// Moves time forward by `dt` seconds and places the camera accordingly.
    /// Does nothing unless a transition is in flight.
    pub fn advance(&mut self, dt: f32, camera: &mut ViewCamera) {
        let transition = match &mut self.phase {
            TransitionPhase::Moving(transition) => transition,
            TransitionPhase::Idle | TransitionPhase::Finished => return,
        };

        // Bad clock readings shouldn't move time backwards
        if dt.is_finite() && dt > 0.0 {
            transition.elapsed += dt;
        }

        let (eye, target) = transition.pose();
        camera.set_pose(eye, target);

        if transition.progress() >= 1.0 {
            debug!("camera transition finished");
            self.phase = TransitionPhase::Finished;
        }
    }
}
