use super::BlockContainer;
use crate::world::BlockPos;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Parameters of the block targeting ray
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastConfig {
    /// Distance between two samples along the ray
    pub step: f64,
    /// Maximum distance from the eye of a targeted block
    pub max_distance: f64,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            step: 0.05,
            max_distance: 6.0,
        }
    }
}

/// The block the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointedBlock {
    /// The first full block along the ray
    pub hit: BlockPos,
    /// The cell visited just before `hit`, where a new block would be placed.
    /// `None` if the ray starts inside `hit`.
    pub adjacent: Option<BlockPos>,
}

/// Find the first full block along a ray.
///
/// The ray is sampled every `config.step` from `origin`, so it can cut the corner of a block
/// without hitting it. At block scale this doesn't matter.
pub fn get_pointed_at<BC: BlockContainer>(
    world: &BC,
    origin: Vector3<f64>,
    direction: Vector3<f64>,
    config: &RaycastConfig,
) -> Option<PointedBlock> {
    let norm = direction.norm();
    if norm < 1e-9 || config.step <= 0.0 {
        return None;
    }
    let direction = direction / norm;

    let samples = (config.max_distance / config.step).floor() as u32;
    let mut previous = None;
    for n in 0..=samples {
        let cell = BlockPos::from(origin + direction * (config.step * n as f64));
        if world.is_inside(cell) && world.is_block_full(cell) {
            return Some(PointedBlock {
                hit: cell,
                adjacent: previous,
            });
        }
        previous = Some(cell);
    }
    None
}
