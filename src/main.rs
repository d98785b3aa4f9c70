use color_eyre::eyre;
use kiss3d::window::Window;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rust_orrery::config::SceneConfig;
use rust_orrery::gui::OrreryApp;
use rust_orrery::model::StarSystem;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = SceneConfig::solar_system();
    let mut rng = rand::thread_rng();
    let system = StarSystem::new(&config, &mut rng)?;
    info!(bodies = system.registry().len(), "star system ready");

    let mut window = Window::new("Solar System");
    let app = OrreryApp::new(system, &config.starfield, &mut window, &mut rng);
    window.render_loop(app);
    Ok(())
}
