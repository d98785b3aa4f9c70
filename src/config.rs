use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use crate::consts;

/// How a body revolves. A body without one of these sits at the center of the
/// system and never revolves.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    /// The body this one orbits. `None` means the center of the system.
    pub primary: Option<String>,
    pub distance: f32,
    /// Radians per tick
    pub revolution_rate: f32,
    /// Initial pivot angle. `None` picks one uniformly from [0, 2pi).
    pub phase: Option<f32>,
}

/// A flat ring around a planet, lying in its orbital plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingConfig {
    pub inner: f32,
    pub outer: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub radius: f32,
    pub orbit: Option<OrbitConfig>,
    /// Radians per tick
    pub spin_rate: f32,
    pub ring: Option<RingConfig>,
    pub color: Point3<f32>,
    pub texture: Option<String>,
    pub focusable: bool,
}

impl BodyConfig {
    pub fn central(name: &str, radius: f32, spin_rate: f32) -> Self {
        BodyConfig {
            name: name.to_owned(),
            radius,
            orbit: None,
            spin_rate,
            ring: None,
            color: Point3::new(1.0, 1.0, 1.0),
            texture: None,
            focusable: true,
        }
    }

    pub fn orbiting(
        name: &str,
        radius: f32,
        distance: f32,
        spin_rate: f32,
        revolution_rate: f32,
    ) -> Self {
        BodyConfig {
            orbit: Some(OrbitConfig {
                primary: None,
                distance,
                revolution_rate,
                phase: None,
            }),
            ..Self::central(name, radius, spin_rate)
        }
    }

    pub fn around(mut self, primary: &str) -> Self {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.primary = Some(primary.to_owned());
        }
        self
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        if let Some(orbit) = self.orbit.as_mut() {
            orbit.phase = Some(phase);
        }
        self
    }

    pub fn with_ring(mut self, inner: f32, outer: f32) -> Self {
        self.ring = Some(RingConfig { inner, outer });
        self
    }

    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = Point3::new(r, g, b);
        self
    }

    pub fn with_texture(mut self, path: &str) -> Self {
        self.texture = Some(path.to_owned());
        self
    }

    pub fn unfocusable(mut self) -> Self {
        self.focusable = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub default_eye: Point3<f32>,
    pub default_target: Point3<f32>,
    pub focus_offset: Vector3<f32>,
    /// Radians
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Seconds
    pub transition_duration: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            default_eye: Point3::from(consts::DEFAULT_CAMERA_EYE),
            default_target: Point3::from(consts::DEFAULT_CAMERA_TARGET),
            focus_offset: Vector3::from(consts::FOCUS_OFFSET),
            fovy: consts::CAMERA_FOVY_DEGREES.to_radians(),
            znear: consts::CAMERA_ZNEAR,
            zfar: consts::CAMERA_ZFAR,
            transition_duration: consts::TRANSITION_DURATION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    pub color: Point3<f32>,
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorConfig {
    pub width: f32,
    pub default_style: IndicatorStyle,
    pub highlight_style: IndicatorStyle,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            width: consts::INDICATOR_WIDTH,
            default_style: IndicatorStyle {
                color: Point3::from(consts::INDICATOR_COLOR),
                intensity: 1.0,
            },
            highlight_style: IndicatorStyle {
                color: Point3::from(consts::INDICATOR_HIGHLIGHT_COLOR),
                intensity: 1.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub extent: Vector3<f32>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        StarfieldConfig {
            count: consts::STAR_COUNT,
            extent: Vector3::from(consts::STARFIELD_EXTENT),
        }
    }
}

/// Everything fixed at construction time. Bodies are registered in the order
/// given, so a satellite must come after its primary.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub bodies: Vec<BodyConfig>,
    pub camera: CameraConfig,
    pub indicators: IndicatorConfig,
    pub starfield: StarfieldConfig,
    pub descriptions: HashMap<String, String>,
}

impl SceneConfig {
    pub fn new(bodies: Vec<BodyConfig>) -> Self {
        SceneConfig {
            bodies,
            camera: CameraConfig::default(),
            indicators: IndicatorConfig::default(),
            starfield: StarfieldConfig::default(),
            descriptions: HashMap::new(),
        }
    }

    pub fn with_description(mut self, name: &str, text: &str) -> Self {
        self.descriptions.insert(name.to_owned(), text.to_owned());
        self
    }

    /// The Sun, eight planets and Earth's Moon.
    pub fn solar_system() -> Self {
        let bodies = vec![
            BodyConfig::central("Sun", 16.0, 0.004)
                .with_color(1.0, 0.8, 0.3)
                .with_texture("assets/sunmap.jpg"),
            BodyConfig::orbiting("Mercury", 3.2, 28.0, 0.004, 0.03)
                .with_color(0.6, 0.5, 0.4)
                .with_texture("assets/mercurymap.jpg"),
            BodyConfig::orbiting("Venus", 5.8, 44.0, 0.002, 0.015)
                .with_color(0.8, 0.7, 0.4)
                .with_texture("assets/venusmap.jpg"),
            BodyConfig::orbiting("Earth", 6.0, 62.0, 0.02, 0.009)
                .with_color(0.3, 0.5, 0.8)
                .with_texture("assets/earthmap1k.jpg"),
            BodyConfig::orbiting("Mars", 4.0, 78.0, 0.018, 0.008)
                .with_color(0.7, 0.3, 0.2)
                .with_texture("assets/marsmap1k.jpg"),
            BodyConfig::orbiting("Jupiter", 12.0, 100.0, 0.04, 0.002)
                .with_color(0.7, 0.6, 0.4)
                .with_texture("assets/jupitermap.jpg"),
            BodyConfig::orbiting("Saturn", 10.0, 138.0, 0.038, 0.0009)
                .with_ring(10.0, 20.0)
                .with_color(0.7, 0.65, 0.4)
                .with_texture("assets/saturnmap.jpg"),
            BodyConfig::orbiting("Uranus", 7.0, 176.0, 0.03, 0.0004)
                .with_ring(7.0, 12.0)
                .with_color(0.4, 0.6, 0.7)
                .with_texture("assets/uranusmap.jpg"),
            BodyConfig::orbiting("Neptune", 7.0, 200.0, 0.032, 0.0001)
                .with_color(0.3, 0.4, 0.7)
                .with_texture("assets/neptunemap.jpg"),
            BodyConfig::orbiting("Moon", 1.6, 10.0, 0.01, 0.003)
                .around("Earth")
                .with_color(0.6, 0.6, 0.6)
                .with_texture("assets/moon.jpg")
                .unfocusable(),
        ];

        let mut config = SceneConfig::new(bodies);
        for (name, text) in DESCRIPTIONS {
            config = config.with_description(name, text);
        }
        config
    }
}

const DESCRIPTIONS: [(&str, &str); 9] = [
    (
        "Sun",
        "A G-type main-sequence star holding 99.8% of the system's mass.",
    ),
    (
        "Mercury",
        "The smallest planet and the closest to the Sun. A year lasts 88 days.",
    ),
    (
        "Venus",
        "Wrapped in a thick CO2 atmosphere, it is the hottest planet in the system.",
    ),
    (
        "Earth",
        "The only known world with liquid surface water and life. Orbited by one moon.",
    ),
    (
        "Mars",
        "A cold desert world with the tallest volcano in the system, Olympus Mons.",
    ),
    (
        "Jupiter",
        "The largest planet, a gas giant whose Great Red Spot is a centuries-old storm.",
    ),
    (
        "Saturn",
        "A gas giant famous for its bright ring system of ice and rock.",
    ),
    (
        "Uranus",
        "An ice giant that rotates on its side, with faint dark rings.",
    ),
    (
        "Neptune",
        "The outermost planet, with the fastest winds measured in the system.",
    ),
];
