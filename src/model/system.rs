use std::collections::HashMap;

use nalgebra::{Point2, Point3};
use rand::Rng;
use tracing::{debug, warn};

use crate::config::{CameraConfig, SceneConfig};

use super::animation;
use super::camera::ViewCamera;
use super::error::SetupError;
use super::indicator::IndicatorSet;
use super::interaction::InteractionState;
use super::picking::{self, Hit, Surface};
use super::registry::BodyRegistry;
use super::transition::TransitionController;

/// Wherever the descriptive text for the focused body ends up.
pub trait InfoPanel {
    fn show(&mut self, name: &str, text: &str);
    fn clear(&mut self);
}

/// The interactive model: bodies, their orbit indicators, the camera, and what
/// the pointer is doing to them.
///
/// Event handlers only change the interaction state and request camera moves.
/// Bodies and the camera pose change in `tick`.
pub struct StarSystem {
    registry: BodyRegistry,
    indicators: IndicatorSet,
    interaction: InteractionState,
    camera: ViewCamera,
    camera_config: CameraConfig,
    transitions: TransitionController,
    descriptions: HashMap<String, String>,
    pointer_over_something: bool,
}

impl StarSystem {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self, SetupError> {
        let registry = BodyRegistry::from_configs(&config.bodies, rng)?;
        let indicators = IndicatorSet::new(&registry, &config.indicators);

        Ok(StarSystem {
            registry,
            indicators,
            interaction: InteractionState::new(),
            camera: ViewCamera::new(&config.camera),
            camera_config: config.camera.clone(),
            transitions: TransitionController::new(config.camera.transition_duration),
            descriptions: config.descriptions.clone(),
            pointer_over_something: false,
        })
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut ViewCamera {
        &mut self.camera
    }

    pub fn transitions(&self) -> &TransitionController {
        &self.transitions
    }

    /// True while the pointer is over something pickable, so the UI can show
    /// a "clickable" cursor.
    pub fn pointer_affordance(&self) -> bool {
        self.pointer_over_something
    }

    pub fn surfaces(&self) -> Vec<Surface> {
        picking::pickable_surfaces(&self.registry, &self.indicators)
    }

    pub fn pick(&self, ndc: &Point2<f32>) -> Option<Hit> {
        picking::pick(ndc, &self.camera, &self.surfaces())
    }

    // A picked name should always match a body or an indicator, since the
    // surfaces come from them. If it doesn't, something's stale.
    fn is_known(&self, name: &str) -> bool {
        self.registry.find(name).is_some() || self.indicators.find(name).is_some()
    }

    pub fn on_pointer_move(&mut self, ndc: &Point2<f32>) {
        let hit = self.pick(ndc);
        if let Some(hit) = &hit {
            if !self.is_known(&hit.name) {
                warn!(name = %hit.name, "hovered a name nothing answers to");
                return;
            }
        }

        self.pointer_over_something = hit.is_some();
        let name = hit.map(|h| h.name);
        if name == self.interaction.hovered {
            return;
        }

        if self.interaction.hovered.is_some() {
            self.indicators.clear_highlight();
        }
        debug!(from = ?self.interaction.hovered, to = ?name, "hover changed");
        if let Some(name) = &name {
            if self.indicators.find(name).is_some() {
                self.indicators.highlight(name);
            }
        }
        self.interaction.hovered = name;
    }

    pub fn on_click(&mut self, ndc: &Point2<f32>, panel: &mut dyn InfoPanel) {
        let hit = match self.pick(ndc) {
            Some(hit) => hit,
            None => {
                // Clicking empty space drops the focus but leaves the camera be
                if self.interaction.focused.take().is_some() {
                    debug!("focus cleared");
                }
                panel.clear();
                return;
            }
        };

        let body = match self.registry.find(&hit.name) {
            Some(body) => body,
            None => {
                warn!(name = %hit.name, "clicked a name with no body");
                return;
            }
        };
        if !body.info.focusable {
            debug!(name = %hit.name, "ignoring click on unfocusable body");
            return;
        }

        let position = self.registry.world_position(body.id);
        let text = self
            .descriptions
            .get(&hit.name)
            .map(String::as_str)
            .unwrap_or("");
        panel.show(&hit.name, text);

        debug!(name = %hit.name, ?position, "focused");
        self.transitions.begin(
            &self.camera,
            position + self.camera_config.focus_offset,
            position,
        );
        self.interaction.focused = Some(hit.name);
    }

    pub fn on_reset_requested(&mut self, panel: &mut dyn InfoPanel) {
        self.interaction.focused = None;
        panel.clear();

        let target = match self.registry.central() {
            Some(central) => self.registry.world_position(central.id),
            None => self.camera_config.default_target,
        };
        self.transitions
            .begin(&self.camera, self.camera_config.default_eye, target);
    }

    /// One frame: move the bodies, then the camera. `dt` is the real time in
    /// seconds since the previous tick.
    pub fn tick(&mut self, dt: f32) {
        animation::tick(&mut self.registry, &self.interaction);
        self.transitions.advance(dt, &mut self.camera);
    }

    pub fn world_position(&self, name: &str) -> Option<Point3<f32>> {
        let id = self.registry.find_id(name)?;
        Some(self.registry.world_position(id))
    }
}
