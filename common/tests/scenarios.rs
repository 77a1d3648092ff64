use blockedit_common::{
    block::{BlockType, DIRT, EMPTY, GRASS},
    config::{ConfigError, SimulationConfig},
    edit::EditOutcome,
    physics::{raycast::get_pointed_at, simulation::Simulation},
    player::PlayerInput,
    world::{grid::VoxelGrid, BlockPos, WorldGenerator},
    worldgen::FlatWorldGenerator,
};
use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn new_simulation() -> Simulation {
    Simulation::new(SimulationConfig::default(), &mut FlatWorldGenerator).unwrap()
}

fn overlaps_blocks(sim: &Simulation) -> bool {
    sim.player()
        .aabb(&sim.config().player)
        .intersect_world(sim.world())
}

#[test]
fn test_falling_from_spawn() {
    let mut sim = new_simulation();
    assert_eq!(sim.player().position, Vector3::new(15.0, 4.0, 15.0));
    sim.step_simulation(0.016);
    let player = sim.player();
    assert!((player.velocity.y - -0.512).abs() < 1e-9);
    assert!((4.0 - player.position.y - 0.008192).abs() < 1e-9);
    assert!(!player.grounded);
}

#[test]
fn test_standing_on_grass() {
    let mut sim = new_simulation();
    sim.player_mut().position = Vector3::new(15.0, 2.0, 15.0);
    sim.step_simulation(0.016);
    assert_eq!(sim.player().position.y, 2.0);
    assert_eq!(sim.player().velocity.y, 0.0);
    assert!(sim.player().grounded);
}

#[test]
fn test_grounded_follows_collisions() {
    let mut sim = new_simulation();
    // Falling from the spawn point until landing
    let mut ticks = 0;
    while !sim.player().grounded {
        let before = sim.player().position.y;
        sim.step_simulation(0.016);
        ticks += 1;
        assert!(ticks < 100, "the player never landed");
        if !sim.player().grounded {
            assert!(sim.player().position.y < before);
        }
    }
    assert!(sim.player().position.y >= 2.0);
    assert!(sim.player().position.y < 2.0 + 0.05 + 1e-9);

    // Jumping: in the air until it lands again
    sim.set_input(PlayerInput {
        jump: true,
        ..Default::default()
    });
    sim.step_simulation(0.016);
    assert!(!sim.player().grounded);
    assert!(sim.player().velocity.y > 0.0);
    let mut airborne_ticks = 0;
    while !sim.player().grounded {
        sim.step_simulation(0.016);
        airborne_ticks += 1;
        assert!(airborne_ticks < 200, "the player never landed");
    }
    // 2 * 11 / 32 seconds of flight
    assert!(airborne_ticks > 35 && airborne_ticks < 50);
}

#[test]
fn test_jump_while_airborne_does_nothing() {
    let mut sim = new_simulation();
    sim.set_input(PlayerInput {
        jump: true,
        ..Default::default()
    });
    sim.step_simulation(0.016);
    assert!(sim.player().velocity.y < 0.0);
}

#[test]
fn test_spawn_inside_floor_is_rejected() {
    let mut config = SimulationConfig::default();
    config.spawn_position = [15.0, 1.5, 15.0];
    match Simulation::new(config, &mut FlatWorldGenerator) {
        Err(ConfigError::SpawnInsideBlocks { position }) => assert_eq!(position, [15.0, 1.5, 15.0]),
        other => panic!("spawned inside the floor: {:?}", other.err()),
    }

    // Standing right on the grass is fine
    let mut config = SimulationConfig::default();
    config.spawn_position = [15.0, 2.0, 15.0];
    let mut sim = Simulation::new(config, &mut FlatWorldGenerator).unwrap();
    for _ in 0..60 {
        sim.step_simulation(0.016);
        assert!(!overlaps_blocks(&sim));
    }
    assert_eq!(sim.player().position.y, 2.0);
}

#[test]
fn test_pushing_into_wall() {
    let mut world = VoxelGrid::new(30);
    FlatWorldGenerator.generate(&mut world);
    for py in 2..6 {
        for pz in 0..30 {
            world.set(BlockPos::new(17, py, pz), DIRT);
        }
    }
    let mut sim = Simulation::from_world(SimulationConfig::default(), world).unwrap();
    sim.player_mut().position = Vector3::new(15.0, 2.0, 15.0);
    // Facing +X
    sim.set_yaw_pitch(-90.0, 0.0);
    for _ in 0..120 {
        sim.set_input(PlayerInput {
            key_move_forward: true,
            ..Default::default()
        });
        sim.step_simulation(0.016);
        let player = sim.player();
        assert!(player.position.x + 0.3 <= 17.0 + 1e-9);
        assert!(!overlaps_blocks(&sim));
    }
    assert_eq!(sim.player().velocity.x, 0.0);
    assert!(sim.player().position.x > 16.6);
    assert!((sim.player().position.z - 15.0).abs() < 1e-6);
}

#[test]
fn test_never_overlaps_blocks() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut sim = new_simulation();
    for _ in 0..2000 {
        let input = PlayerInput {
            key_move_forward: rng.gen_bool(0.6),
            key_move_left: rng.gen_bool(0.2),
            key_move_backward: rng.gen_bool(0.1),
            key_move_right: rng.gen_bool(0.2),
            yaw_delta: rng.gen_range(-20.0f64, 20.0),
            pitch_delta: rng.gen_range(-10.0f64, 10.0),
            jump: rng.gen_bool(0.05),
            cycle_block: rng.gen_bool(0.02),
            remove_block: rng.gen_bool(0.05),
            place_block: rng.gen_bool(0.2),
        };
        sim.set_input(input);
        sim.step_simulation(rng.gen_range(0.0f64, 0.08));
        assert!(!overlaps_blocks(&sim), "player inside blocks at {:?}", sim.player().position);
        let world = sim.world();
        assert_eq!(world.count(DIRT) + world.count(GRASS) + world.count(EMPTY), 27000);
    }
    // The floor is still complete
    for px in 0..30 {
        for pz in 0..30 {
            assert_eq!(sim.world().get(BlockPos::new(px, 0, pz)), DIRT);
            assert_eq!(sim.world().get(BlockPos::new(px, 1, pz)), GRASS);
        }
    }
}

#[test]
fn test_remove_floor_looking_down() {
    let mut sim = new_simulation();
    sim.player_mut().position = Vector3::new(15.5, 2.0, 15.5);
    sim.set_yaw_pitch(0.0, -90.0);
    let before = sim.world().clone();

    let pointed = sim.pointed_block().unwrap();
    assert_eq!(pointed.hit, BlockPos::new(15, 1, 15));
    assert_eq!(sim.remove_block(), EditOutcome::ImmutableFloor(BlockPos::new(15, 1, 15)));
    assert_eq!(*sim.world(), before);

    sim.set_input(PlayerInput {
        remove_block: true,
        ..Default::default()
    });
    assert!(!sim.step_simulation(0.016));
    assert_eq!(*sim.world(), before);
    assert_eq!(sim.editor().removed_blocks(), 0);
}

#[test]
fn test_place_on_exposed_grass() {
    let mut world = VoxelGrid::new(30);
    FlatWorldGenerator.generate(&mut world);
    world.set(BlockPos::new(17, 2, 15), GRASS);
    let mut sim = Simulation::from_world(SimulationConfig::default(), world).unwrap();
    sim.player_mut().position = Vector3::new(15.5, 2.0, 15.5);
    sim.editor_mut().select(BlockType::Dirt);
    // Aim at the center of the top face of the grass block
    let pitch = (-0.62f64).atan2(2.0).to_degrees();
    sim.set_yaw_pitch(-90.0, pitch);

    let pointed = sim.pointed_block().unwrap();
    assert_eq!(pointed.hit, BlockPos::new(17, 2, 15));
    assert_eq!(pointed.adjacent, Some(BlockPos::new(17, 3, 15)));

    sim.set_input(PlayerInput {
        place_block: true,
        ..Default::default()
    });
    assert!(sim.step_simulation(0.016));
    assert_eq!(sim.world().get(BlockPos::new(17, 3, 15)), DIRT);
    assert_eq!(sim.editor().placed_blocks(), 1);

    // Removing it again is allowed
    assert_eq!(sim.pointed_block().unwrap().hit, BlockPos::new(17, 3, 15));
    assert_eq!(sim.remove_block(), EditOutcome::Removed(BlockPos::new(17, 3, 15)));
    assert_eq!(sim.world().get(BlockPos::new(17, 3, 15)), EMPTY);
}

#[test]
fn test_place_inside_player_is_rejected() {
    let mut sim = new_simulation();
    sim.player_mut().position = Vector3::new(15.5, 2.0, 15.5);
    sim.set_yaw_pitch(0.0, -90.0);
    let before = sim.world().clone();
    assert_eq!(
        sim.place_block(),
        EditOutcome::OverlapsPlayer(BlockPos::new(15, 2, 15))
    );
    assert_eq!(*sim.world(), before);
    assert_eq!(sim.editor().placed_blocks(), 0);
}

#[test]
fn test_nothing_to_edit_when_looking_at_the_sky() {
    let mut sim = new_simulation();
    sim.set_yaw_pitch(0.0, 90.0);
    let before = sim.world().clone();
    assert_eq!(sim.pointed_block(), None);
    assert_eq!(sim.place_block(), EditOutcome::NoTarget);
    assert_eq!(sim.remove_block(), EditOutcome::NoTarget);
    assert_eq!(*sim.world(), before);
}

#[test]
fn test_raycast_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut world = VoxelGrid::new(30);
    FlatWorldGenerator.generate(&mut world);
    for _ in 0..300 {
        let pos = BlockPos::new(
            rng.gen_range(0i64, 30),
            rng.gen_range(2i64, 10),
            rng.gen_range(0i64, 30),
        );
        world.set(pos, DIRT);
    }
    let config = SimulationConfig::default().raycast;
    for _ in 0..200 {
        let origin = Vector3::new(
            rng.gen_range(0.0f64, 30.0),
            rng.gen_range(2.0f64, 12.0),
            rng.gen_range(0.0f64, 30.0),
        );
        let direction = Vector3::new(
            rng.gen_range(-1.0f64, 1.0),
            rng.gen_range(-1.0f64, 1.0),
            rng.gen_range(-1.0f64, 1.0),
        );
        let first = get_pointed_at(&world, origin, direction, &config);
        let second = get_pointed_at(&world, origin, direction, &config);
        assert_eq!(first, second);
        if let Some(pointed) = first {
            assert_ne!(world.get(pointed.hit), EMPTY);
            if let Some(adjacent) = pointed.adjacent {
                assert_eq!(world.get(adjacent), EMPTY);
                assert_ne!(adjacent, pointed.hit);
            }
        }
    }
}
