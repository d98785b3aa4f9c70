use std::path::Path;

use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use nalgebra::Translation3;
use tracing::{debug, warn};

use crate::model::{Body, BodyID, BodyRegistry};

/// The mesh for each body, kept in step with the registry.
pub struct BodyNodes {
    nodes: Vec<(BodyID, SceneNode)>,
}

impl BodyNodes {
    pub fn new(window: &mut Window, registry: &BodyRegistry) -> Self {
        let nodes = registry
            .all()
            .map(|body| (body.id, Self::create_body_object(window, body)))
            .collect();

        let mut nodes = BodyNodes { nodes };
        nodes.sync(registry);
        nodes
    }

    fn create_body_object(window: &mut Window, body: &Body) -> SceneNode {
        // Make the sphere that represents the body
        let mut sphere = window.add_sphere(body.info.radius);
        let color = &body.info.color;
        sphere.set_color(color.x, color.y, color.z);

        if let Some(texture) = &body.info.texture {
            // kiss3d panics on a missing file, so look before we leap
            let path = Path::new(texture);
            if path.is_file() {
                debug!(name = body.name(), %texture, "loading texture");
                sphere.set_color(1.0, 1.0, 1.0);
                sphere.set_texture_from_file(path, texture);
            } else {
                warn!(name = body.name(), %texture, "texture not found, using plain color");
            }
        }

        sphere
    }

    /// Moves every mesh to where its body currently is.
    pub fn sync(&mut self, registry: &BodyRegistry) {
        for (id, node) in self.nodes.iter_mut() {
            let position = registry.world_position(*id);
            node.set_local_translation(Translation3::from(position.coords));
            node.set_local_rotation(registry.get(*id).spin_rotation());
        }
    }
}
