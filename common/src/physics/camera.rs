//! This module contains the player controller.
//!
//! It defines how the player's entity reacts to that player's inputs.

use super::{
    aabb::resolve_axis,
    player::{PhysicsPlayer, PlayerConfig},
    BlockContainer, AXIS_ORDER,
};
use crate::{debug::send_debug_info, player::PlayerInput};
use nalgebra::Vector3;

// Unit vector in the `angle` direction, relative to the yaw
fn movement_direction(yaw: f64, angle: f64) -> Vector3<f64> {
    let yaw = yaw + angle;
    Vector3::new(-yaw.to_radians().sin(), 0.0, -yaw.to_radians().cos()).normalize()
}

/// The default camera: walking with gravity and collisions.
///
/// `yaw` is in degrees, only the horizontal orientation matters for movement.
pub fn default_camera<BC: BlockContainer>(
    player: &mut PhysicsPlayer,
    config: &PlayerConfig,
    yaw: f64,
    input: &PlayerInput,
    seconds_delta: f64,
    world: &BC,
) {
    // Grounded is derived again from this tick's collisions
    let was_grounded = player.grounded;
    player.grounded = false;

    let mut wish = Vector3::zeros();
    if input.key_move_forward {
        wish += movement_direction(yaw, 0.0);
    }
    if input.key_move_left {
        wish += movement_direction(yaw, 90.0);
    }
    if input.key_move_backward {
        wish += movement_direction(yaw, 180.0);
    }
    if input.key_move_right {
        wish += movement_direction(yaw, 270.0);
    }
    if wish.norm() > 1e-9 {
        player.velocity += wish.normalize() * (config.acceleration * seconds_delta);
    }

    let horizontal_speed = player.velocity.x.hypot(player.velocity.z);
    if horizontal_speed > config.max_speed {
        let factor = config.max_speed / horizontal_speed;
        player.velocity.x *= factor;
        player.velocity.z *= factor;
    }

    let damping = (1.0 - config.friction * seconds_delta).max(0.0);
    player.velocity.x *= damping;
    player.velocity.z *= damping;

    player.velocity.y -= config.gravity * seconds_delta;

    if input.jump && was_grounded {
        player.velocity.y = config.jump_speed;
    }

    let size = config.body_size();
    for &axis in AXIS_ORDER.iter() {
        let i = axis.index();
        let delta = player.velocity[i] * seconds_delta;
        let res = resolve_axis(world, size, player.position, player.velocity[i], axis, delta);
        player.position = res.position;
        player.velocity[i] = res.velocity;
        if res.collided && axis.is_vertical() && delta < 0.0 {
            player.grounded = true;
        }
    }

    send_debug_info(
        "Physics",
        "grounded",
        format!("Player on the ground? {}", player.grounded),
    );
    let [vx, vy, vz]: [f64; 3] = player.velocity.into();
    send_debug_info(
        "Physics",
        "velocity",
        format!("velocity: {:.2} {:.2} {:.2}", vx, vy, vz),
    );
}
