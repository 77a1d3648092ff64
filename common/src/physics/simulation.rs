use crate::{
    config::{ConfigError, SimulationConfig},
    debug::send_debug_info,
    edit::{EditOutcome, WorldEditor},
    physics::{
        camera::default_camera,
        player::{EyePose, PhysicsPlayer},
        raycast::{get_pointed_at, PointedBlock},
        AXIS_ORDER,
    },
    player::{PlayerInput, YawPitch},
    world::{grid::VoxelGrid, WorldGenerator},
};
use log::info;
use nalgebra::Vector3;

/// The whole state of a world being played: the blocks, the player and its pending input.
pub struct Simulation {
    config: SimulationConfig,
    world: VoxelGrid,
    player: PhysicsPlayer,
    yaw_pitch: YawPitch,
    editor: WorldEditor,
    /// Input received since the last tick
    input: PlayerInput,
}

impl Simulation {
    /// Create a new world using `generator` and spawn the player in it
    pub fn new<G: WorldGenerator>(
        config: SimulationConfig,
        generator: &mut G,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = VoxelGrid::new(config.world_size);
        generator.generate(&mut world);
        Self::from_world(config, world)
    }

    /// Start a simulation in an existing world
    pub fn from_world(config: SimulationConfig, world: VoxelGrid) -> Result<Self, ConfigError> {
        config.validate()?;
        if world.size() != config.world_size {
            return Err(ConfigError::WorldSizeMismatch {
                world: world.size(),
                config: config.world_size,
            });
        }
        let spawn = Vector3::from(config.spawn_position);
        let body = config.player.body_size();
        let size = world.size() as f64;
        let inside_walls = AXIS_ORDER.iter().all(|&axis| {
            let (low, high) = body.bounds(axis, size);
            let coord = spawn[axis.index()];
            coord.is_finite() && coord >= low && coord <= high
        });
        if !inside_walls {
            return Err(ConfigError::SpawnOutsideWorld {
                position: config.spawn_position,
            });
        }
        if body.aabb_at(spawn).intersect_world(&world) {
            return Err(ConfigError::SpawnInsideBlocks {
                position: config.spawn_position,
            });
        }
        let player = PhysicsPlayer::new(spawn);
        info!(
            "Simulation started in a world of size {}, player at {:?}",
            world.size(),
            config.spawn_position
        );
        Ok(Self {
            config,
            world,
            player,
            yaw_pitch: YawPitch::default(),
            editor: WorldEditor::new(),
            input: PlayerInput::default(),
        })
    }

    /// Set the input for the next tick, replacing any input that was not consumed yet
    pub fn set_input(&mut self, input: PlayerInput) {
        self.input = input;
    }

    /// Step the simulation by `seconds_delta`, consuming the pending input.
    /// Return whether the blocks of the world changed.
    pub fn step_simulation(&mut self, seconds_delta: f64) -> bool {
        let seconds_delta = seconds_delta.max(0.0).min(self.config.max_tick_seconds);
        let input = std::mem::take(&mut self.input);

        self.yaw_pitch.rotate(input.yaw_delta, input.pitch_delta);
        if input.cycle_block {
            self.editor.cycle_selected();
        }

        default_camera(
            &mut self.player,
            &self.config.player,
            self.yaw_pitch.yaw,
            &input,
            seconds_delta,
            &self.world,
        );

        let mut grid_changed = false;
        if input.remove_block {
            grid_changed |= self.remove_block().grid_changed();
        }
        if input.place_block {
            grid_changed |= self.place_block().grid_changed();
        }

        let p = self.player.position;
        send_debug_info(
            "Player",
            "position",
            format!("x = {:.2}\ny = {:.2}\nz = {:.2}", p.x, p.y, p.z),
        );
        send_debug_info(
            "Player",
            "yawpitch",
            format!("yaw = {:.0}\npitch = {:.0}", self.yaw_pitch.yaw, self.yaw_pitch.pitch),
        );
        match self.pointed_block() {
            Some(pointed) => {
                send_debug_info("Player", "pointedat", format!("Pointed block: {}", pointed.hit))
            }
            None => send_debug_info("Player", "pointedat", "Pointed block: None"),
        }
        grid_changed
    }

    /// The block the player is looking at
    pub fn pointed_block(&self) -> Option<PointedBlock> {
        let pose = self.eye_pose();
        get_pointed_at(&self.world, pose.position, pose.look_direction(), &self.config.raycast)
    }

    /// Remove the block the player is looking at
    pub fn remove_block(&mut self) -> EditOutcome {
        let target = self.pointed_block();
        self.editor.remove(&mut self.world, target.as_ref())
    }

    /// Place the selected block against the block the player is looking at
    pub fn place_block(&mut self) -> EditOutcome {
        let target = self.pointed_block();
        let player_box = self.player.aabb(&self.config.player);
        self.editor.place(&mut self.world, target.as_ref(), &player_box)
    }

    /// Get the camera of the player
    pub fn eye_pose(&self) -> EyePose {
        EyePose {
            position: self.player.get_camera_position(&self.config.player),
            yaw: self.yaw_pitch.yaw,
            pitch: self.yaw_pitch.pitch,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn world(&self) -> &VoxelGrid {
        &self.world
    }

    pub fn player(&self) -> &PhysicsPlayer {
        &self.player
    }

    /// Mutable access to the player, to teleport it for instance
    pub fn player_mut(&mut self) -> &mut PhysicsPlayer {
        &mut self.player
    }

    pub fn yaw_pitch(&self) -> YawPitch {
        self.yaw_pitch
    }

    /// Look in some direction, in degrees
    pub fn set_yaw_pitch(&mut self, yaw: f64, pitch: f64) {
        self.yaw_pitch = YawPitch::default();
        self.yaw_pitch.rotate(yaw, pitch);
    }

    pub fn editor(&self) -> &WorldEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut WorldEditor {
        &mut self.editor
    }
}
