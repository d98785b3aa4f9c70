use nalgebra::{Point3, UnitQuaternion};

use crate::config::RingConfig;
use crate::math::geometry::{rotation_about_up, wrap_angle};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    pub radius: f32,
    pub color: Point3<f32>,
    pub texture: Option<String>,
    pub ring: Option<RingConfig>,
    pub focusable: bool,
}

/// The pivot a body hangs off of. Turning the pivot is what moves the body
/// around its primary.
#[derive(Debug, Clone)]
pub struct Pivot {
    /// `None` for bodies that orbit the center of the system
    pub primary: Option<BodyID>,
    pub distance: f32,
    pub rate: f32,
    angle: f32,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyID,
    pub info: BodyInfo,
    pub spin_rate: f32,
    spin_angle: f32,
    pivot: Option<Pivot>,
}

impl Pivot {
    pub fn new(primary: Option<BodyID>, distance: f32, rate: f32, phase: f32) -> Self {
        Pivot {
            primary,
            distance,
            rate,
            angle: wrap_angle(phase),
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Body {
    pub fn new(id: BodyID, info: BodyInfo, spin_rate: f32, pivot: Option<Pivot>) -> Self {
        Body {
            id,
            info,
            spin_rate,
            spin_angle: 0.0,
            pivot,
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn pivot(&self) -> Option<&Pivot> {
        self.pivot.as_ref()
    }

    pub fn primary(&self) -> Option<BodyID> {
        self.pivot.as_ref().and_then(|p| p.primary)
    }

    /// Zero for bodies without a pivot
    pub fn revolution_rate(&self) -> f32 {
        self.pivot.as_ref().map_or(0.0, |p| p.rate)
    }

    pub fn spin_angle(&self) -> f32 {
        self.spin_angle
    }

    /// Orientation of the visual root about its own axis
    pub fn spin_rotation(&self) -> UnitQuaternion<f32> {
        rotation_about_up(self.spin_angle)
    }

    pub fn advance_spin(&mut self) {
        self.spin_angle = wrap_angle(self.spin_angle + self.spin_rate);
    }

    pub fn advance_revolution(&mut self) {
        if let Some(pivot) = self.pivot.as_mut() {
            pivot.angle = wrap_angle(pivot.angle + pivot.rate);
        }
    }
}
