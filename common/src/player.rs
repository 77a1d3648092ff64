/// The input of a player for one tick
///
/// Held keys describe the state during the whole tick, the other fields are edges
/// and deltas accumulated since the previous tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub key_move_forward: bool,
    pub key_move_left: bool,
    pub key_move_backward: bool,
    pub key_move_right: bool,
    /// Yaw change in degrees
    pub yaw_delta: f64,
    /// Pitch change in degrees
    pub pitch_delta: f64,
    pub jump: bool,
    pub cycle_block: bool,
    pub remove_block: bool,
    pub place_block: bool,
}

/// A helper struct to keep track of the yaw and pitch of a player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawPitch {
    pub yaw: f64,
    pub pitch: f64,
}

impl YawPitch {
    /// Rotate by some amount of degrees
    pub fn rotate(&mut self, yaw_delta: f64, pitch_delta: f64) {
        self.yaw += yaw_delta;
        self.pitch += pitch_delta;

        // Ensure the yaw stays within [-180; 180]
        if self.yaw < -180.0 || self.yaw > 180.0 {
            self.yaw = (self.yaw + 180.0).rem_euclid(360.0) - 180.0;
        }

        // Ensure the pitch stays within [-90; 90]
        self.pitch = self.pitch.max(-90.0).min(90.0);
    }
}

impl Default for YawPitch {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}
