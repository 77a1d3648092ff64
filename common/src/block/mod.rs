use serde::{Deserialize, Serialize};

pub type BlockId = u8;

/// Id of the empty block. Out-of-world cells always read as this.
pub const EMPTY: BlockId = 0;
pub const GRASS: BlockId = 1;
pub const DIRT: BlockId = 2;

/// The known block types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockType {
    Empty = EMPTY,
    Grass = GRASS,
    Dirt = DIRT,
}

/// Block types the player can place, in selection order
pub const PLACEABLE_BLOCKS: [BlockType; 2] = [BlockType::Grass, BlockType::Dirt];

impl BlockType {
    pub fn id(self) -> BlockId {
        self as BlockId
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Grass => "grass",
            Self::Dirt => "dirt",
        }
    }

    /// The placeable block that comes after this one.
    /// Types that are not placeable restart the cycle.
    pub fn next_placeable(self) -> Self {
        match PLACEABLE_BLOCKS.iter().position(|&b| b == self) {
            Some(i) => PLACEABLE_BLOCKS[(i + 1) % PLACEABLE_BLOCKS.len()],
            None => PLACEABLE_BLOCKS[0],
        }
    }
}

impl From<BlockType> for BlockId {
    fn from(block: BlockType) -> Self {
        block.id()
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
