use super::{Axis, BlockContainer};
use crate::world::BlockPos;
use nalgebra::Vector3;

/// Largest distance a box travels between two collision checks
pub const MAX_SUB_STEP: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct AABB {
    /// The corner with the lowest coordinates
    pub pos: Vector3<f64>,
    pub size_x: f64,
    pub size_y: f64,
    pub size_z: f64,
}

impl AABB {
    /// Create a new AABB box
    pub fn new(pos: Vector3<f64>, (s_x, s_y, s_z): (f64, f64, f64)) -> Self {
        AABB {
            pos,
            size_x: s_x,
            size_y: s_y,
            size_z: s_z,
        }
    }

    /// The unit box filling the block at `pos`
    pub fn block(pos: BlockPos) -> Self {
        Self::new(
            Vector3::new(pos.px as f64, pos.py as f64, pos.pz as f64),
            (1.0, 1.0, 1.0),
        )
    }

    /// The corner with the highest coordinates
    pub fn max(&self) -> Vector3<f64> {
        self.pos + Vector3::new(self.size_x, self.size_y, self.size_z)
    }

    /// Return true if the AABB box intersects with the other box.
    /// Boxes that only share a face don't intersect.
    pub fn intersect(&self, other: &AABB) -> bool {
        !((other.pos.x >= self.pos.x + self.size_x)
            || (other.pos.x + other.size_x <= self.pos.x)
            || (other.pos.y >= self.pos.y + self.size_y)
            || (other.pos.y + other.size_y <= self.pos.y)
            || (other.pos.z >= self.pos.z + self.size_z)
            || (other.pos.z + other.size_z <= self.pos.z))
    }

    /// Return true if the box intersects some block
    pub fn intersect_world<BC: BlockContainer>(&self, world: &BC) -> bool {
        let max = self.max();
        let min_x = self.pos.x.floor() as i64;
        let max_x = max.x.ceil() as i64;
        let min_y = self.pos.y.floor() as i64;
        let max_y = max.y.ceil() as i64;
        let min_z = self.pos.z.floor() as i64;
        let max_z = max.z.ceil() as i64;

        for i in min_x..max_x {
            for j in min_y..max_y {
                for k in min_z..max_z {
                    if world.is_block_full((i, j, k).into()) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// Dimensions of an upright box standing on its feet position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySize {
    pub width: f64,
    pub height: f64,
}

impl BodySize {
    /// The box of a body whose feet are at `feet`
    pub fn aabb_at(self, feet: Vector3<f64>) -> AABB {
        let half = self.width / 2.0;
        AABB::new(
            Vector3::new(feet.x - half, feet.y, feet.z - half),
            (self.width, self.height, self.width),
        )
    }

    /// Range of feet coordinates along `axis` that keeps the body inside a world
    /// of side `world_size`
    pub fn bounds(self, axis: Axis, world_size: f64) -> (f64, f64) {
        if axis.is_vertical() {
            (0.0, world_size - self.height)
        } else {
            let half = self.width / 2.0;
            (half, world_size - half)
        }
    }
}

/// Result of moving a body along a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMove {
    pub position: Vector3<f64>,
    /// The velocity along the axis after the move
    pub velocity: f64,
    /// Whether the move was stopped by a block or by the world walls
    pub collided: bool,
}

/// Try to move the body by `delta` along `axis`, stopping before it goes through a block.
///
/// The movement is clamped to the world walls, then performed in sub-steps of at most
/// `MAX_SUB_STEP`. The first sub-step that makes the body intersect a block is cancelled
/// and the velocity along the axis drops to 0.
/// A body that already intersects blocks before moving is not blocked, so that it can get out.
pub fn resolve_axis<BC: BlockContainer>(
    world: &BC,
    size: BodySize,
    position: Vector3<f64>,
    velocity: f64,
    axis: Axis,
    delta: f64,
) -> AxisMove {
    let i = axis.index();
    let start = position[i];
    let (low, high) = size.bounds(axis, world.size() as f64);
    let wanted = start + delta;
    let target = wanted.max(low).min(high);
    let clamped = target != wanted;

    let mut position = position;
    let stuck_inside = size.aabb_at(position).intersect_world(world);
    let distance = target - start;
    let steps = (distance.abs() / MAX_SUB_STEP).ceil() as u32;
    let step = if steps > 0 { distance / steps as f64 } else { 0.0 };

    let mut blocked = false;
    for k in 1..=steps {
        // The last sub-step lands exactly on the target
        position[i] = if k == steps { target } else { start + step * k as f64 };
        if !stuck_inside && size.aabb_at(position).intersect_world(world) {
            // cancel the last sub-step
            position[i] = start + step * (k - 1) as f64;
            blocked = true;
            break;
        }
    }

    let collided = blocked || clamped;
    AxisMove {
        position,
        velocity: if collided { 0.0 } else { velocity },
        collided,
    }
}
