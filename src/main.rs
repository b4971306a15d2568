use anyhow::Context;
use env_logger::Builder;
use log::{LevelFilter, info};

use blackout_simulator::common::{SimulatorConfig, load_scene};
use blackout_simulator::simulation::EntityInfo;
use blackout_simulator::simulation::runner::run_scene;

fn main() -> anyhow::Result<()> {
    let scene_path = std::env::args().nth(1).context("Usage: blackout-simulator <scene.json>")?;

    let config_path = SimulatorConfig::config_path_from_scene(&scene_path);
    let config = SimulatorConfig::load_or_default(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("blackout_simulator"), config.log_level.into())
        .init();

    info!("Starting up (log level {})", config.log_level);

    let scene = load_scene(&scene_path).with_context(|| format!("Failed to load scene {scene_path}"))?;
    let (controller, report) = run_scene(&scene, config.ticks);

    let ids = controller.list_satellite_ids().into_iter().chain(controller.list_device_ids());
    let snapshots: Vec<EntityInfo> = ids.filter_map(|id| controller.entity_info(&id)).collect();
    println!("{}", serde_json::to_string_pretty(&snapshots).context("Failed to serialize entity snapshots")?);

    info!("Done: {} ticks, {} rejected requests", report.ticks, report.rejected);
    Ok(())
}
