use crate::{physics::player::EyePose, world::grid::VoxelGrid};

/// Something that shows the world, typically a renderer.
pub trait WorldView {
    /// Called when the blocks of the world changed, and once at startup.
    /// `VoxelGrid::iter_blocks` and `VoxelGrid::count` give everything there is to draw.
    fn rebuild_blocks(&mut self, world: &VoxelGrid);
    /// Called every frame with the camera of the player
    fn update_camera(&mut self, pose: &EyePose);
}
