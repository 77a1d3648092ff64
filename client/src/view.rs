use blockedit_common::{
    block::BlockType,
    physics::player::EyePose,
    view::WorldView,
    world::grid::VoxelGrid,
};
use log::{debug, info};

/// A `WorldView` that reports what a renderer would draw to the log
pub struct LoggingView {
    /// Number of blocks of every drawable type, as of the last rebuild
    instance_counts: Vec<(BlockType, usize)>,
    rebuilds: u32,
    last_pose: Option<EyePose>,
}

impl LoggingView {
    pub fn new() -> Self {
        Self {
            instance_counts: Vec::new(),
            rebuilds: 0,
            last_pose: None,
        }
    }

    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }
}

impl WorldView for LoggingView {
    fn rebuild_blocks(&mut self, world: &VoxelGrid) {
        self.instance_counts = [BlockType::Grass, BlockType::Dirt]
            .iter()
            .map(|&block| (block, world.count(block)))
            .collect();
        self.rebuilds += 1;
        info!(
            "Rebuilt block instances: {}",
            self.instance_counts
                .iter()
                .map(|(block, count)| format!("{} {}", count, block))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    fn update_camera(&mut self, pose: &EyePose) {
        if self.last_pose.as_ref() != Some(pose) {
            debug!(
                "Camera at ({:.2}, {:.2}, {:.2}) yaw {:.0} pitch {:.0}",
                pose.position.x, pose.position.y, pose.position.z, pose.yaw, pose.pitch
            );
        }
        self.last_pose = Some(*pose);
    }
}
