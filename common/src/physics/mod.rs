use crate::world::BlockPos;

pub mod aabb;
pub mod camera;
pub mod player;
pub mod raycast;
pub mod simulation;

/// A "block container", i.e. a bounded volume of blocks.
/// This trait allows the physics simulation to work with any kind of block storage.
pub trait BlockContainer {
    fn is_block_full(&self, pos: BlockPos) -> bool;
    /// Side of the cubic volume, which is surrounded by solid walls
    fn size(&self) -> u32;

    /// Return true if `pos` is inside the volume
    fn is_inside(&self, pos: BlockPos) -> bool {
        let s = self.size() as i64;
        (0..s).contains(&pos.px) && (0..s).contains(&pos.py) && (0..s).contains(&pos.pz)
    }
}

/// One of the three world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Order in which movement is resolved, one axis at a time.
/// The vertical axis comes last so that walking against a wall slides along it.
pub const AXIS_ORDER: [Axis; 3] = [Axis::X, Axis::Z, Axis::Y];

impl Axis {
    /// Index of the axis in a `Vector3`
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    pub fn is_vertical(self) -> bool {
        self == Self::Y
    }
}
