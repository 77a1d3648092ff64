use crate::block::BlockType;
use crate::world::{grid::VoxelGrid, WorldGenerator};
use log::info;

/// Layers of the flat floor, from the bottom of the world
pub const FLOOR_LAYERS: [BlockType; 2] = [BlockType::Dirt, BlockType::Grass];

/// Generates a flat world: a layer of dirt covered by a layer of grass
pub struct FlatWorldGenerator;

impl WorldGenerator for FlatWorldGenerator {
    fn generate(&mut self, grid: &mut VoxelGrid) {
        for (py, &block) in FLOOR_LAYERS.iter().enumerate() {
            grid.fill_layer(py as i64, block);
        }
        info!(
            "Generated flat world of size {} with {} floor blocks",
            grid.size(),
            grid.iter_blocks().count()
        );
    }
}
