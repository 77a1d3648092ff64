use super::BlockPos;
use crate::block::{BlockId, EMPTY};
use crate::physics::BlockContainer;

/// Side of the demo world, in blocks
pub const DEFAULT_WORLD_SIZE: u32 = 30;
/// Largest supported side
pub const MAX_WORLD_SIZE: u32 = 256;

/// A fixed-size cube of blocks.
///
/// Cells outside of `[0, size)` on any axis don't exist: they read as `EMPTY`
/// and writing to them does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    size: u32,
    data: Vec<BlockId>,
}

impl VoxelGrid {
    /// Create a new empty grid of side `size`, capped to `MAX_WORLD_SIZE`
    pub fn new(size: u32) -> Self {
        let size = size.min(MAX_WORLD_SIZE);
        let len = (size as usize).pow(3);
        Self {
            size,
            data: vec![EMPTY; len],
        }
    }

    /// Number of blocks along an axis
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Return true if `pos` is inside the grid
    pub fn contains(&self, pos: BlockPos) -> bool {
        let s = self.size as i64;
        (0..s).contains(&pos.px) && (0..s).contains(&pos.py) && (0..s).contains(&pos.pz)
    }

    #[inline(always)]
    fn index(&self, pos: BlockPos) -> Option<usize> {
        if self.contains(pos) {
            let s = self.size as usize;
            Some(pos.px as usize + s * (pos.py as usize + s * pos.pz as usize))
        } else {
            None
        }
    }

    #[inline(always)]
    fn pos_of_index(&self, index: usize) -> BlockPos {
        let s = self.size as usize;
        BlockPos {
            px: (index % s) as i64,
            py: ((index / s) % s) as i64,
            pz: (index / (s * s)) as i64,
        }
    }

    /// Get block at some position. `EMPTY` is returned outside of the grid.
    pub fn get(&self, pos: BlockPos) -> BlockId {
        match self.index(pos) {
            Some(i) => self.data[i],
            None => EMPTY,
        }
    }

    /// Set block at some position, returning whether the position is inside the grid
    pub fn set(&mut self, pos: BlockPos, block: impl Into<BlockId>) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.data[i] = block.into();
                true
            }
            None => false,
        }
    }

    /// Number of cells holding `block`
    pub fn count(&self, block: impl Into<BlockId>) -> usize {
        let block = block.into();
        self.data.iter().filter(|&&b| b == block).count()
    }

    /// Iterate over all the non-empty cells
    pub fn iter_blocks(&self) -> impl Iterator<Item = (BlockPos, BlockId)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b != EMPTY)
            .map(move |(i, &b)| (self.pos_of_index(i), b))
    }

    /// Set every cell of the horizontal layer `py`.
    /// Does nothing if the layer is outside of the grid.
    pub fn fill_layer(&mut self, py: i64, block: impl Into<BlockId>) {
        let block = block.into();
        if py < 0 || py >= self.size as i64 {
            return;
        }
        for pz in 0..self.size as i64 {
            for px in 0..self.size as i64 {
                self.set(BlockPos { px, py, pz }, block);
            }
        }
    }
}

impl BlockContainer for VoxelGrid {
    fn is_block_full(&self, pos: BlockPos) -> bool {
        self.get(pos) != EMPTY
    }

    fn size(&self) -> u32 {
        self.size
    }
}
