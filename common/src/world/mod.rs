use self::grid::VoxelGrid;

pub mod grid;

/// The position of a block in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub px: i64,
    pub py: i64,
    pub pz: i64,
}

impl BlockPos {
    pub fn new(px: i64, py: i64, pz: i64) -> Self {
        Self { px, py, pz }
    }
}

impl From<(i64, i64, i64)> for BlockPos {
    fn from((px, py, pz): (i64, i64, i64)) -> Self {
        Self { px, py, pz }
    }
}

impl From<(f64, f64, f64)> for BlockPos {
    fn from((px, py, pz): (f64, f64, f64)) -> Self {
        Self {
            px: px.floor() as i64,
            py: py.floor() as i64,
            pz: pz.floor() as i64,
        }
    }
}

impl From<nalgebra::Vector3<f64>> for BlockPos {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        (v.x, v.y, v.z).into()
    }
}

impl std::fmt::Display for BlockPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.px, self.py, self.pz)
    }
}

/// A world generator
pub trait WorldGenerator {
    /// Fill a freshly allocated grid. The result must only depend on the grid size.
    fn generate(&mut self, grid: &mut VoxelGrid);
}
