use std::f32::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use nalgebra::{Point2, Point3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rust_orrery::config::{BodyConfig, SceneConfig};
use rust_orrery::model::{InfoPanel, StarSystem, TransitionPhase};

#[derive(Debug, Default)]
struct RecordingPanel {
    shown: Option<(String, String)>,
}

impl InfoPanel for RecordingPanel {
    fn show(&mut self, name: &str, text: &str) {
        self.shown = Some((name.to_owned(), text.to_owned()));
    }

    fn clear(&mut self) {
        self.shown = None;
    }
}

// Far enough off to the side that nothing is under it
fn empty_space() -> Point2<f32> {
    Point2::new(0.95, 0.95)
}

fn scene() -> SceneConfig {
    SceneConfig::new(vec![
        BodyConfig::central("Sun", 16.0, 0.004),
        BodyConfig::orbiting("Earth", 6.0, 62.0, 0.02, 0.009).with_phase(PI),
        BodyConfig::orbiting("Mars", 4.0, 78.0, 0.018, 0.008).with_phase(0.0),
        BodyConfig::orbiting("Saturn", 10.0, 138.0, 0.038, 0.0009)
            .with_phase(FRAC_PI_2)
            .with_ring(10.0, 20.0),
        BodyConfig::orbiting("Moon", 1.6, 10.0, 0.01, 0.003)
            .around("Earth")
            .with_phase(0.0)
            .unfocusable(),
    ])
    .with_description("Mars", "The red one.")
    .with_description("Saturn", "The one with rings.")
}

/// A system seen from high above, so that everything is in view.
fn system() -> StarSystem {
    let mut rng = StdRng::seed_from_u64(42);
    let mut system = StarSystem::new(&scene(), &mut rng).unwrap();
    system
        .camera_mut()
        .set_pose(Point3::new(0.0, 400.0, 40.0), Point3::origin());
    system
}

fn ndc_of(system: &StarSystem, point: Point3<f32>) -> Point2<f32> {
    let projected = system.camera().transformation().transform_point(&point);
    Point2::new(projected.x, projected.y)
}

fn ndc_of_body(system: &StarSystem, name: &str) -> Point2<f32> {
    ndc_of(system, system.world_position(name).unwrap())
}

fn run(system: &mut StarSystem, ticks: usize, dt: f32) {
    for _ in 0..ticks {
        system.tick(dt);
    }
}

fn pivot_angle(system: &StarSystem, name: &str) -> f32 {
    system
        .registry()
        .find(name)
        .unwrap()
        .pivot()
        .unwrap()
        .angle()
}

fn spin_angle(system: &StarSystem, name: &str) -> f32 {
    system.registry().find(name).unwrap().spin_angle()
}

#[test]
fn test_focus_then_unfocus() {
    let mut system = system();
    let mut panel = RecordingPanel::default();

    let ndc = ndc_of_body(&system, "Mars");
    system.on_click(&ndc, &mut panel);
    assert_eq!(system.interaction().focused.as_deref(), Some("Mars"));
    assert_eq!(
        panel.shown,
        Some(("Mars".to_owned(), "The red one.".to_owned()))
    );

    // A bit over 1.5 seconds of frames
    run(&mut system, 16, 0.1);
    assert_eq!(system.camera().eye(), Point3::new(98.0, 20.0, 20.0));
    assert_eq!(system.camera().target(), Point3::new(78.0, 0.0, 0.0));
    assert_eq!(system.transitions().phase(), &TransitionPhase::Finished);

    // Mars held still the whole time
    assert_eq!(pivot_angle(&system, "Mars"), 0.0);

    system.on_click(&empty_space(), &mut panel);
    assert_eq!(system.interaction().focused, None);
    assert_eq!(panel.shown, None);

    run(&mut system, 10, 0.1);
    assert_eq!(system.camera().eye(), Point3::new(98.0, 20.0, 20.0));
    assert_eq!(system.camera().target(), Point3::new(78.0, 0.0, 0.0));
    assert_relative_eq!(pivot_angle(&system, "Mars"), 0.08, epsilon = 1e-6);
}

#[test]
fn test_hover_pauses_and_highlights() {
    let mut system = system();

    let ndc = ndc_of_body(&system, "Saturn");
    system.on_pointer_move(&ndc);
    assert_eq!(system.interaction().hovered.as_deref(), Some("Saturn"));
    assert!(system.pointer_affordance());
    let indicator = system.indicators().find("Saturn").unwrap();
    assert!(indicator.is_highlighted());
    assert_eq!(
        indicator.style(),
        scene().indicators.highlight_style
    );

    let angle = pivot_angle(&system, "Saturn");
    let spin = spin_angle(&system, "Saturn");
    run(&mut system, 5, 0.016);
    assert_eq!(pivot_angle(&system, "Saturn"), angle);
    assert_relative_eq!(spin_angle(&system, "Saturn"), spin + 5.0 * 0.038, epsilon = 1e-5);

    system.on_pointer_move(&empty_space());
    assert_eq!(system.interaction().hovered, None);
    assert!(!system.pointer_affordance());
    let indicator = system.indicators().find("Saturn").unwrap();
    assert!(!indicator.is_highlighted());
    assert_eq!(indicator.style(), scene().indicators.default_style);

    run(&mut system, 5, 0.016);
    assert_relative_eq!(
        pivot_angle(&system, "Saturn"),
        angle + 5.0 * 0.0009,
        epsilon = 1e-5
    );
    assert_relative_eq!(spin_angle(&system, "Saturn"), spin + 10.0 * 0.038, epsilon = 1e-5);
}

#[test]
fn test_ring_resolves_to_its_planet() {
    let mut system = system();
    let saturn = system.world_position("Saturn").unwrap();

    // Just beyond the far edge of the body, in the middle of the ring
    let ndc = ndc_of(&system, saturn + nalgebra::Vector3::new(0.0, 0.0, -15.0));
    assert_eq!(system.pick(&ndc).unwrap().name, "Saturn");

    system.on_pointer_move(&ndc);
    assert_eq!(system.interaction().hovered.as_deref(), Some("Saturn"));
    assert!(system.indicators().find("Saturn").unwrap().is_highlighted());
}

#[test]
fn test_orbit_indicator_resolves_to_its_planet() {
    let mut system = system();
    let mut panel = RecordingPanel::default();
    assert_eq!(system.world_position("Mars"), Some(Point3::new(78.0, 0.0, 0.0)));

    // A quarter of the way round Mars's orbit from Mars itself, in the middle
    // of the indicator band
    let ndc = ndc_of(&system, Point3::new(0.0, 0.0, 78.15));
    assert_eq!(system.pick(&ndc).unwrap().name, "Mars");

    system.on_pointer_move(&ndc);
    assert_eq!(system.interaction().hovered.as_deref(), Some("Mars"));
    assert!(system.pointer_affordance());
    assert_eq!(system.indicators().highlighted().unwrap().name, "Mars");

    run(&mut system, 5, 0.016);
    assert_eq!(pivot_angle(&system, "Mars"), 0.0);

    // Clicking the band focuses the planet, not the spot on its orbit
    system.on_click(&ndc, &mut panel);
    assert_eq!(system.interaction().focused.as_deref(), Some("Mars"));
    run(&mut system, 16, 0.1);
    assert_eq!(system.camera().target(), Point3::new(78.0, 0.0, 0.0));
}

#[test]
fn test_at_most_one_highlight() {
    let mut system = system();

    for name in ["Mars", "Saturn", "Earth", "Mars"] {
        let ndc = ndc_of_body(&system, name);
        system.on_pointer_move(&ndc);

        let lit: Vec<_> = system
            .indicators()
            .iter()
            .filter(|i| i.is_highlighted())
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(lit, vec![name.to_owned()]);
    }

    // Hovering the Sun lights nothing, it has no orbit
    let ndc = ndc_of_body(&system, "Sun");
    system.on_pointer_move(&ndc);
    assert!(system.indicators().highlighted().is_none());
}

#[test]
fn test_pick_is_deterministic() {
    let system = system();
    let points = [
        ndc_of_body(&system, "Mars"),
        ndc_of_body(&system, "Sun"),
        empty_space(),
        Point2::new(0.1, -0.3),
    ];
    for ndc in points {
        assert_eq!(system.pick(&ndc), system.pick(&ndc));
    }
}

#[test]
fn test_reset_is_idempotent() {
    let mut system = system();
    let mut panel = RecordingPanel::default();

    let ndc = ndc_of_body(&system, "Mars");
    system.on_click(&ndc, &mut panel);
    run(&mut system, 20, 0.1);

    system.on_reset_requested(&mut panel);
    assert_eq!(system.interaction().focused, None);
    assert_eq!(panel.shown, None);
    run(&mut system, 20, 0.1);
    let defaults = scene().camera;
    assert_eq!(system.camera().eye(), defaults.default_eye);
    assert_eq!(system.camera().target(), Point3::origin());

    system.on_reset_requested(&mut panel);
    run(&mut system, 20, 0.1);
    assert_eq!(system.camera().eye(), defaults.default_eye);
    assert_eq!(system.camera().target(), Point3::origin());
}

#[test]
fn test_satellite_follows_its_primary() {
    let mut system = system();
    let mut panel = RecordingPanel::default();

    let ndc = ndc_of_body(&system, "Earth");
    system.on_pointer_move(&ndc);
    assert_eq!(system.interaction().hovered.as_deref(), Some("Earth"));

    let moon_spin = spin_angle(&system, "Moon");
    run(&mut system, 10, 0.016);
    assert_eq!(pivot_angle(&system, "Moon"), 0.0);
    assert_relative_eq!(spin_angle(&system, "Moon"), moon_spin + 0.1, epsilon = 1e-5);

    // The moon stays parked next to a parked Earth
    let earth = system.world_position("Earth").unwrap();
    let moon = system.world_position("Moon").unwrap();
    assert_relative_eq!(moon, earth + nalgebra::Vector3::new(10.0, 0.0, 0.0), epsilon = 1e-4);

    // Clicking the moon does nothing at all
    let ndc = ndc_of_body(&system, "Moon");
    assert_eq!(system.pick(&ndc).unwrap().name, "Moon");
    system.on_click(&ndc, &mut panel);
    assert_eq!(system.interaction().focused, None);
    assert_eq!(panel.shown, None);
    assert!(!system.transitions().is_moving());
}

#[test]
fn test_pointer_off_screen_picks_nothing() {
    let mut system = system();
    let mut panel = RecordingPanel::default();

    let ndc = ndc_of_body(&system, "Mars");
    system.on_click(&ndc, &mut panel);
    assert!(system.interaction().focused.is_some());

    system.on_pointer_move(&Point2::new(3.0, 0.0));
    assert_eq!(system.interaction().hovered, None);
    system.on_click(&Point2::new(0.0, -1.5), &mut panel);
    assert_eq!(system.interaction().focused, None);
}
