use super::interaction::InteractionState;
use super::registry::BodyRegistry;

/// Advances every body by one frame. Spin always advances; revolution stops
/// for bodies the interaction state suspends.
///
/// Suspension is decided for all bodies before any of them move, so the order
/// bodies are updated in can't matter.
pub fn tick(registry: &mut BodyRegistry, interaction: &InteractionState) {
    let suspended: Vec<bool> = {
        let registry: &BodyRegistry = registry;
        registry
            .all()
            .map(|body| interaction.is_suspended(registry, body.id))
            .collect()
    };

    for (body, suspended) in registry.all_mut().zip(suspended) {
        body.advance_spin();
        if !suspended {
            body.advance_revolution();
        }
    }
}
