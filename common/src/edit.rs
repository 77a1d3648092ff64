//! Placing and removing blocks.
//!
//! Edits are all-or-nothing: an edit that breaks one of the rules leaves the world untouched.

use crate::{
    block::{BlockType, EMPTY},
    physics::{aabb::AABB, raycast::PointedBlock},
    world::{grid::VoxelGrid, BlockPos},
};
use log::{debug, info};

/// Number of layers at the bottom of the world that can never be removed
pub const IMMUTABLE_LAYERS: i64 = 2;

/// What happened to an edit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Removed(BlockPos),
    Placed(BlockPos, BlockType),
    /// Not looking at any block
    NoTarget,
    ImmutableFloor(BlockPos),
    OutOfWorld(BlockPos),
    Occupied(BlockPos),
    OverlapsPlayer(BlockPos),
}

impl EditOutcome {
    /// Whether the edit modified the world
    pub fn grid_changed(&self) -> bool {
        match self {
            Self::Removed(_) | Self::Placed(_, _) => true,
            _ => false,
        }
    }
}

/// Applies the block edits of a player
#[derive(Debug, Clone)]
pub struct WorldEditor {
    selected: BlockType,
    placed_blocks: u32,
    removed_blocks: u32,
}

impl WorldEditor {
    pub fn new() -> Self {
        Self {
            selected: BlockType::Grass,
            placed_blocks: 0,
            removed_blocks: 0,
        }
    }

    /// The type of the blocks being placed
    pub fn selected(&self) -> BlockType {
        self.selected
    }

    pub fn select(&mut self, block: BlockType) {
        self.selected = block;
    }

    /// Select the next placeable block type
    pub fn cycle_selected(&mut self) -> BlockType {
        self.selected = self.selected.next_placeable();
        info!("Selected block: {}", self.selected);
        self.selected
    }

    /// Number of blocks successfully placed
    pub fn placed_blocks(&self) -> u32 {
        self.placed_blocks
    }

    /// Number of blocks successfully removed
    pub fn removed_blocks(&self) -> u32 {
        self.removed_blocks
    }

    /// Remove the pointed block
    pub fn remove(&mut self, world: &mut VoxelGrid, target: Option<&PointedBlock>) -> EditOutcome {
        let outcome = match target {
            None => EditOutcome::NoTarget,
            Some(target) if target.hit.py < IMMUTABLE_LAYERS => {
                EditOutcome::ImmutableFloor(target.hit)
            }
            Some(target) => {
                if world.set(target.hit, EMPTY) {
                    self.removed_blocks += 1;
                    EditOutcome::Removed(target.hit)
                } else {
                    EditOutcome::OutOfWorld(target.hit)
                }
            }
        };
        log_outcome(outcome);
        outcome
    }

    /// Place the selected block in front of the pointed block,
    /// unless it would end up inside the player
    pub fn place(
        &mut self,
        world: &mut VoxelGrid,
        target: Option<&PointedBlock>,
        player_box: &AABB,
    ) -> EditOutcome {
        let outcome = match target.and_then(|t| t.adjacent) {
            None => EditOutcome::NoTarget,
            Some(pos) if !world.contains(pos) => EditOutcome::OutOfWorld(pos),
            Some(pos) if world.get(pos) != EMPTY => EditOutcome::Occupied(pos),
            Some(pos) if AABB::block(pos).intersect(player_box) => EditOutcome::OverlapsPlayer(pos),
            Some(pos) => {
                world.set(pos, self.selected);
                self.placed_blocks += 1;
                EditOutcome::Placed(pos, self.selected)
            }
        };
        log_outcome(outcome);
        outcome
    }
}

impl Default for WorldEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn log_outcome(outcome: EditOutcome) {
    match outcome {
        EditOutcome::Removed(pos) => info!("Removed block at {}", pos),
        EditOutcome::Placed(pos, block) => info!("Placed {} at {}", block, pos),
        rejected => debug!("Edit rejected: {:?}", rejected),
    }
}
