use super::aabb::{BodySize, AABB};
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Physical constants of the player. Distances are in blocks and times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f64,
    pub height: f64,
    /// Height of the camera above the feet
    pub eye_height: f64,
    pub acceleration: f64,
    pub friction: f64,
    pub gravity: f64,
    pub jump_speed: f64,
    /// Maximum horizontal speed
    pub max_speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 0.6,
            height: 1.8,
            eye_height: 1.62,
            acceleration: 25.0,
            friction: 10.0,
            gravity: 32.0,
            jump_speed: 11.0,
            max_speed: 7.0,
        }
    }
}

impl PlayerConfig {
    pub fn body_size(&self) -> BodySize {
        BodySize {
            width: self.width,
            height: self.height,
        }
    }
}

/// The physics representation of a player
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsPlayer {
    /// Position of the feet, at the center of the bottom face of the player's box
    pub position: Vector3<f64>,
    /// The current velocity of the player
    pub velocity: Vector3<f64>,
    /// Whether the last vertical move was stopped by the ground
    pub grounded: bool,
}

impl PhysicsPlayer {
    /// A motionless player with its feet at `position`
    pub fn new(position: Vector3<f64>) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
            grounded: false,
        }
    }

    /// Get the bounding box of the player
    pub fn aabb(&self, config: &PlayerConfig) -> AABB {
        config.body_size().aabb_at(self.position)
    }

    /// Get the position of the camera
    pub fn get_camera_position(&self, config: &PlayerConfig) -> Vector3<f64> {
        self.position + Vector3::new(0.0, config.eye_height, 0.0)
    }
}

/// Position and orientation of the player's eye, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyePose {
    pub position: Vector3<f64>,
    pub yaw: f64,
    pub pitch: f64,
}

impl EyePose {
    /// Unit vector in the looking direction. Yaw 0 and pitch 0 look towards -Z.
    pub fn look_direction(&self) -> Vector3<f64> {
        let y = self.yaw.to_radians();
        let p = self.pitch.to_radians();
        Vector3::new(-y.sin() * p.cos(), p.sin(), -y.cos() * p.cos())
    }

    /// Rotation from camera space (looking towards -Z) to world space:
    /// yaw around Y, then pitch, no roll
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw.to_radians())
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch.to_radians())
    }
}
