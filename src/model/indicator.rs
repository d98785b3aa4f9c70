use tracing::warn;

use crate::config::{IndicatorConfig, IndicatorStyle};

use super::registry::{BodyID, BodyRegistry};

/// The ring drawn along a body's orbit.
#[derive(Debug, Clone)]
pub struct OrbitIndicator {
    pub name: String,
    pub body: BodyID,
    pub radius: f32,
    pub width: f32,
    highlighted: bool,
    style: IndicatorStyle,
}

impl OrbitIndicator {
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn style(&self) -> IndicatorStyle {
        self.style
    }
}

/// One indicator per orbiting body, of which at most one is highlighted.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    indicators: Vec<OrbitIndicator>,
    default_style: IndicatorStyle,
    highlight_style: IndicatorStyle,
}

impl IndicatorSet {
    pub fn new(registry: &BodyRegistry, config: &IndicatorConfig) -> Self {
        let indicators = registry
            .all()
            .filter_map(|body| {
                let pivot = body.pivot()?;
                Some(OrbitIndicator {
                    name: body.name().to_owned(),
                    body: body.id,
                    radius: pivot.distance,
                    width: config.width,
                    highlighted: false,
                    style: config.default_style,
                })
            })
            .collect();

        IndicatorSet {
            indicators,
            default_style: config.default_style,
            highlight_style: config.highlight_style,
        }
    }

    pub fn find(&self, name: &str) -> Option<&OrbitIndicator> {
        self.indicators.iter().find(|i| i.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitIndicator> + '_ {
        self.indicators.iter()
    }

    pub fn highlighted(&self) -> Option<&OrbitIndicator> {
        self.indicators.iter().find(|i| i.highlighted)
    }

    /// Highlights the named indicator, un-highlighting whatever was lit
    /// before. An unknown name changes nothing and returns false.
    pub fn highlight(&mut self, name: &str) -> bool {
        if self.find(name).is_none() {
            warn!(name, "no orbit indicator to highlight");
            return false;
        }

        self.clear_highlight();
        if let Some(indicator) = self.indicators.iter_mut().find(|i| i.name == name) {
            indicator.highlighted = true;
            indicator.style = self.highlight_style;
        }
        true
    }

    pub fn clear_highlight(&mut self) {
        for indicator in self.indicators.iter_mut() {
            indicator.highlighted = false;
            indicator.style = self.default_style;
        }
    }
}
