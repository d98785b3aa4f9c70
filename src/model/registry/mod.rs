use std::collections::HashMap;
use std::f32::consts::TAU;

use nalgebra::Point3;
use rand::Rng;
use tracing::debug;

use crate::config::BodyConfig;
use crate::math::geometry::orbit_offset;

mod body;

pub use body::{Body, BodyID, BodyInfo, Pivot};

use super::error::SetupError;

/// Owns every body in the scene. Bodies are only ever added, and they keep the
/// order they were added in.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    // Invariant: bodies[k].id == BodyID(k)
    bodies: Vec<Body>,
    name_to_id: HashMap<String, BodyID>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_configs<R: Rng + ?Sized>(
        configs: &[BodyConfig],
        rng: &mut R,
    ) -> Result<Self, SetupError> {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config, rng)?;
        }
        Ok(registry)
    }

    /// Adds a body. Its primary, if it has one, must already be registered.
    /// Bodies whose orbit doesn't fix a phase get one drawn from `rng`.
    pub fn register<R: Rng + ?Sized>(
        &mut self,
        config: &BodyConfig,
        rng: &mut R,
    ) -> Result<BodyID, SetupError> {
        if self.name_to_id.contains_key(&config.name) {
            return Err(SetupError::DuplicateName(config.name.clone()));
        }

        let pivot = match &config.orbit {
            None => None,
            Some(orbit) => {
                let primary = match &orbit.primary {
                    None => None,
                    Some(name) => match self.name_to_id.get(name) {
                        Some(id) => Some(*id),
                        None => {
                            return Err(SetupError::UnknownPrimary {
                                body: config.name.clone(),
                                primary: name.clone(),
                            })
                        }
                    },
                };
                let phase = match orbit.phase {
                    Some(phase) => phase,
                    None => rng.gen_range(0.0..TAU),
                };
                Some(Pivot::new(
                    primary,
                    orbit.distance,
                    orbit.revolution_rate,
                    phase,
                ))
            }
        };

        let id = BodyID(self.bodies.len());
        let info = BodyInfo {
            name: config.name.clone(),
            radius: config.radius,
            color: config.color,
            texture: config.texture.clone(),
            ring: config.ring,
            focusable: config.focusable,
        };
        debug!(name = %config.name, ?id, "registered body");

        self.bodies
            .push(Body::new(id, info, config.spin_rate, pivot));
        self.name_to_id.insert(config.name.clone(), id);
        Ok(id)
    }

    pub fn find(&self, name: &str) -> Option<&Body> {
        self.name_to_id.get(name).map(|id| self.get(*id))
    }

    pub fn find_id(&self, name: &str) -> Option<BodyID> {
        self.name_to_id.get(name).copied()
    }

    pub fn get(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    pub fn all(&self) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter()
    }

    pub fn all_mut(&mut self) -> impl Iterator<Item = &mut Body> + '_ {
        self.bodies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The first body registered without a pivot
    pub fn central(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.pivot().is_none())
    }

    /// The bodies `id` orbits, innermost first. Empty for planets and the
    /// central body.
    pub fn primaries(&self, id: BodyID) -> impl Iterator<Item = BodyID> + '_ {
        // Primaries are always registered before their satellites, so this
        // chain strictly decreases and can't cycle.
        std::iter::successors(self.get(id).primary(), move |p| self.get(*p).primary())
    }

    /// The point the body's pivot turns around: its primary's center, or the
    /// origin. None if the body has no pivot.
    pub fn pivot_center(&self, id: BodyID) -> Option<Point3<f32>> {
        let pivot = self.get(id).pivot()?;
        Some(match pivot.primary {
            Some(primary) => self.world_position(primary),
            None => Point3::origin(),
        })
    }

    pub fn world_position(&self, id: BodyID) -> Point3<f32> {
        let body = self.get(id);
        match (body.pivot(), self.pivot_center(id)) {
            (Some(pivot), Some(center)) => {
                center + orbit_offset(pivot.distance, pivot.angle())
            }
            _ => Point3::origin(),
        }
    }
}
