// Fixed design parameters for the reference scene. Everything here ends up in
// a `SceneConfig`; nothing reads these at runtime directly.

pub const DEFAULT_CAMERA_EYE: [f32; 3] = [50.0, 50.0, 30.0];
pub const DEFAULT_CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

// Where the camera sits relative to a body it's focused on
pub const FOCUS_OFFSET: [f32; 3] = [20.0, 20.0, 20.0];

// Seconds
pub const TRANSITION_DURATION: f32 = 1.5;

pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

pub const INDICATOR_WIDTH: f32 = 0.3;
pub const INDICATOR_COLOR: [f32; 3] = [0.4, 0.4, 0.4];
pub const INDICATOR_HIGHLIGHT_COLOR: [f32; 3] = [1.0, 0.85, 0.3];

pub const STAR_COUNT: usize = 10_000;
// Side lengths of the box the stars are scattered in
pub const STARFIELD_EXTENT: [f32; 3] = [1500.0, 1500.0, 2000.0];
