use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::light::Light;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::text::Font;
use kiss3d::window::{State, Window};
use nalgebra::{Point2, Point3};
use rand::Rng;

use crate::config::StarfieldConfig;
use crate::model::StarSystem;

use self::controller::Controller;
use self::panel::TextPanel;
use self::renderers::CompoundRenderer;
use self::scene::BodyNodes;

mod camera;
mod controller;
mod panel;
mod renderers;
mod scene;
mod starfield;

const STAR_COLOR: [f32; 3] = [0.9, 0.9, 0.9];

/// The window-side half of the app: owns the star system and draws it.
pub struct OrreryApp {
    system: StarSystem,
    body_nodes: BodyNodes,
    stars: Vec<Point3<f32>>,
    panel: TextPanel,
    controller: Controller,
    renderer: CompoundRenderer,
}

impl OrreryApp {
    pub fn new<R: Rng + ?Sized>(
        system: StarSystem,
        starfield: &StarfieldConfig,
        window: &mut Window,
        rng: &mut R,
    ) -> Self {
        window.set_framerate_limit(Some(60));
        window.set_light(Light::StickToCamera);
        window.set_background_color(0.0, 0.0, 0.0);

        let body_nodes = BodyNodes::new(window, system.registry());
        let stars = starfield::scatter(starfield, rng);

        OrreryApp {
            system,
            body_nodes,
            stars,
            panel: TextPanel::new(),
            controller: Controller::new(),
            renderer: CompoundRenderer::new(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        for event in events.iter() {
            self.controller
                .process_event(event, &mut self.system, &mut self.panel);
        }
    }

    fn prerender_scene(&mut self, window: &mut Window) {
        self.body_nodes.sync(self.system.registry());

        let registry = self.system.registry();
        for indicator in self.system.indicators().iter() {
            if let Some(center) = registry.pivot_center(indicator.body) {
                self.renderer.draw_indicator(
                    center,
                    indicator.radius,
                    indicator.width,
                    indicator.style(),
                );
            }
        }

        for body in registry.all() {
            if let Some(ring) = body.info.ring {
                let center = registry.world_position(body.id);
                self.renderer
                    .draw_ring(center, ring.inner, ring.outer, body.info.color);
            }
        }

        self.renderer
            .draw_stars(&self.stars, Point3::from(STAR_COLOR));

        // Draw text
        self.panel.draw(window);
        if let Some(hovered) = &self.system.interaction().hovered {
            let cursor = self.controller.cursor();
            panel::draw_hover_label(window, hovered, Point2::new(cursor.x, cursor.y));
        }
        window.draw_text(
            &format!("{:.0} FPS", self.controller.fps()),
            // text is in physical pixels, so the window width needs scaling
            &Point2::new(
                window.width() as f32 * window.scale_factor() as f32 - 300.0,
                0.0,
            ),
            60.0,
            &Font::default(),
            &Point3::new(1.0, 1.0, 1.0),
        );
    }
}

impl State for OrreryApp {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (
            Some(self.system.camera_mut()),
            None,
            Some(&mut self.renderer),
            None,
        )
    }

    fn step(&mut self, window: &mut Window) {
        // Keep picking in step with the window, even before any resize event
        self.system
            .camera_mut()
            .set_viewport(window.width(), window.height());

        self.process_user_input(window.events());
        let dt = self.controller.frame_time();
        self.system.tick(dt);
        self.prerender_scene(window);
    }
}
