use crate::physics::{player::PlayerConfig, raycast::RaycastConfig};
use crate::world::grid::{DEFAULT_WORLD_SIZE, MAX_WORLD_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Some value is outside of its allowed range
    InvalidValue {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    WorldSizeMismatch { world: u32, config: u32 },
    /// The player can't fit inside the world at its spawn position
    SpawnOutsideWorld { position: [f64; 3] },
    /// The player would spawn inside blocks
    SpawnInsideBlocks { position: [f64; 3] },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(f, "invalid value {} for {}: expected {}", value, field, expected),
            Self::WorldSizeMismatch { world, config } => write!(
                f,
                "world of size {} doesn't match the configured size {}",
                world, config
            ),
            Self::SpawnOutsideWorld { position } => {
                write!(f, "spawn position {:?} is outside of the world", position)
            }
            Self::SpawnInsideBlocks { position } => {
                write!(f, "spawn position {:?} is inside blocks", position)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side of the world, in blocks
    pub world_size: u32,
    /// Longest time step of a single tick. Longer frames are slowed down.
    pub max_tick_seconds: f64,
    /// Where the player's feet are when the world starts
    pub spawn_position: [f64; 3],
    pub player: PlayerConfig,
    pub raycast: RaycastConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_size: DEFAULT_WORLD_SIZE,
            max_tick_seconds: 0.05,
            spawn_position: [15.0, 4.0, 15.0],
            player: PlayerConfig::default(),
            raycast: RaycastConfig::default(),
        }
    }
}

fn check(
    field: &'static str,
    value: f64,
    valid: bool,
    expected: &'static str,
) -> Result<(), ConfigError> {
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value,
            expected,
        })
    }
}

impl SimulationConfig {
    /// Make sure the simulation can run with this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.world_size as f64;
        check(
            "world_size",
            size,
            self.world_size <= MAX_WORLD_SIZE,
            "at most 256",
        )?;
        let p = &self.player;
        let smaller_than_world = "positive and smaller than the world";
        check(
            "player.width",
            p.width,
            p.width > 0.0 && p.width < size,
            smaller_than_world,
        )?;
        check(
            "player.height",
            p.height,
            p.height > 0.0 && p.height < size,
            smaller_than_world,
        )?;
        check(
            "player.eye_height",
            p.eye_height,
            p.eye_height >= 0.0 && p.eye_height <= p.height,
            "between 0 and the player height",
        )?;
        for &(field, value) in [
            ("player.acceleration", p.acceleration),
            ("player.friction", p.friction),
            ("player.gravity", p.gravity),
            ("player.jump_speed", p.jump_speed),
            ("player.max_speed", p.max_speed),
            ("raycast.max_distance", self.raycast.max_distance),
        ]
        .iter()
        {
            let valid = value >= 0.0 && value.is_finite();
            check(field, value, valid, "a finite non-negative number")?;
        }
        let step = self.raycast.step;
        check("raycast.step", step, step > 0.0, "positive")?;
        let tick = self.max_tick_seconds;
        check("max_tick_seconds", tick, tick > 0.0, "positive")?;
        Ok(())
    }
}
