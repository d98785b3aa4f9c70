use super::registry::{BodyID, BodyRegistry};

/// What the pointer is doing to the scene. Bodies are referred to by name; the
/// registry owns the bodies themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: Option<String>,
    pub focused: Option<String>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_engaged(&self, name: &str) -> bool {
        self.hovered.as_deref() == Some(name) || self.focused.as_deref() == Some(name)
    }

    /// Whether a body's revolution is paused this tick. That's the case when
    /// the body itself is hovered or focused, or when anything it orbits is:
    /// pausing a planet pauses its moons along with it.
    pub fn is_suspended(&self, registry: &BodyRegistry, id: BodyID) -> bool {
        if self.is_engaged(registry.get(id).name()) {
            return true;
        }
        registry
            .primaries(id)
            .any(|primary| self.is_engaged(registry.get(primary).name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::BodyConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> BodyRegistry {
        let configs = vec![
            BodyConfig::central("Sun", 16.0, 0.004),
            BodyConfig::orbiting("Earth", 6.0, 62.0, 0.02, 0.009),
            BodyConfig::orbiting("Mars", 4.0, 78.0, 0.018, 0.008),
            BodyConfig::orbiting("Moon", 1.6, 10.0, 0.01, 0.003).around("Earth"),
        ];
        let mut rng = StdRng::seed_from_u64(3);
        BodyRegistry::from_configs(&configs, &mut rng).unwrap()
    }

    fn suspended(state: &InteractionState, registry: &BodyRegistry) -> Vec<String> {
        registry
            .all()
            .filter(|b| state.is_suspended(registry, b.id))
            .map(|b| b.name().to_owned())
            .collect()
    }

    #[test]
    fn test_nothing_suspended_when_idle() {
        let registry = registry();
        assert!(suspended(&InteractionState::new(), &registry).is_empty());
    }

    #[test]
    fn test_hover_and_focus_suspend_independently() {
        let registry = registry();
        let state = InteractionState {
            hovered: Some("Mars".to_owned()),
            focused: Some("Sun".to_owned()),
        };
        // Focusing the Sun doesn't drag the planets along
        assert_eq!(suspended(&state, &registry), vec!["Sun", "Mars"]);
    }

    #[test]
    fn test_moon_follows_its_primary() {
        let registry = registry();

        let hovering_earth = InteractionState {
            hovered: Some("Earth".to_owned()),
            focused: None,
        };
        assert_eq!(suspended(&hovering_earth, &registry), vec!["Earth", "Moon"]);

        let focusing_earth = InteractionState {
            hovered: None,
            focused: Some("Earth".to_owned()),
        };
        assert_eq!(suspended(&focusing_earth, &registry), vec!["Earth", "Moon"]);

        // But not the other way around
        let hovering_moon = InteractionState {
            hovered: Some("Moon".to_owned()),
            focused: None,
        };
        assert_eq!(suspended(&hovering_moon, &registry), vec!["Moon"]);
    }
}
