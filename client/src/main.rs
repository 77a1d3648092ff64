use anyhow::Result;
use log::info;
use std::path::Path;

mod demo;
mod input;
mod settings;
mod time;
mod view;

/// Length of the demo session, in frames
const DEMO_FRAMES: u32 = 300;

fn main() -> Result<()> {
    env_logger::init();

    info!("Starting up...");
    let config_folder = Path::new("config");
    let config_file = Path::new("config/settings.toml");
    let settings = settings::load_settings(&config_folder, &config_file)?;
    info!("Current settings: {:?}", settings);

    let summary = demo::run_demo(&settings, &demo::demo_script(), DEMO_FRAMES)?;
    info!(
        "Demo finished: {} blocks placed, {} blocks removed, {} block rebuilds",
        summary.placed_blocks, summary.removed_blocks, summary.view_rebuilds
    );
    Ok(())
}
