use anyhow::{Context, Result};
use blockedit_common::config::SimulationConfig;
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs::OpenOptions,
    io::{Read, Write},
    path::Path,
};

pub fn load_settings(folder_path: &Path, file_path: &Path) -> Result<Settings> {
    info!(
        "Reading settings from folder path {} and file path {}...",
        folder_path.display(),
        file_path.display()
    );
    let settings: Settings = if file_path.is_file() {
        let mut settings_file = OpenOptions::new()
            .read(true)
            .open(file_path)
            .context(format!("Failed to open settings file {}", file_path.display()))?;
        let mut buf = String::new();
        settings_file
            .read_to_string(&mut buf)
            .context(format!("Failed to read settings file {}", file_path.display()))?;
        toml::de::from_str(&buf)
            .context(format!("Failed to parse settings file {}", file_path.display()))?
    } else {
        std::fs::create_dir_all(folder_path).context(format!(
            "Failed to create settings folder {}",
            folder_path.display()
        ))?;
        let settings = Settings::default();
        write_settings(file_path, &settings)?;
        settings
    };

    settings
        .simulation
        .validate()
        .context(format!("Invalid simulation settings in {}", file_path.display()))?;
    Ok(settings)
}

fn write_settings(path: impl AsRef<Path>, settings: &Settings) -> Result<()> {
    info!("Writing settings...");
    let path = path.as_ref();
    let mut settings_file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&path)
        .context(format!("Failed to open settings file {}", path.display()))?;
    let string = toml::ser::to_string(settings).context("Failed to serialize settings")?;
    settings_file
        .write_all(string.as_bytes())
        .context(format!("Failed to write settings file {}", path.display()))?;

    Ok(())
}

/// Settings of the game
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub invert_mouse: bool,
    /// Degrees of rotation per unit of mouse movement
    pub mouse_speed: f64,
    /// Frames per second of the demo session
    pub frame_rate: u32,
    pub simulation: SimulationConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            invert_mouse: false,
            mouse_speed: 0.2,
            frame_rate: 60,
            simulation: SimulationConfig::default(),
        }
    }
}
