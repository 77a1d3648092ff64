//! A scripted play session, standing in for a window and a real player.

use crate::{
    input::{
        ElementState, InputEvent, InputState, MouseButton, CYCLE_BLOCK, JUMP, MOVE_FORWARD,
        MOVE_RIGHT,
    },
    settings::Settings,
    time::AverageTimeCounter,
    view::LoggingView,
};
use anyhow::{Context, Result};
use blockedit_common::{
    debug::DebugInfo,
    physics::simulation::Simulation,
    view::WorldView,
    worldgen::FlatWorldGenerator,
};
use log::{debug, info};
use std::time::Instant;

/// Raw events sent at the beginning of some frames
pub fn demo_script() -> Vec<(u32, InputEvent)> {
    use ElementState::*;
    let key = |scancode, state| InputEvent::Keyboard { scancode, state };
    let click = |button, state| InputEvent::MouseButton { button, state };
    vec![
        // Land, then walk forward for a second
        (40, key(MOVE_FORWARD, Pressed)),
        (100, key(MOVE_FORWARD, Released)),
        (110, key(JUMP, Pressed)),
        (112, key(JUMP, Released)),
        // Look down in front of the feet
        (160, InputEvent::MouseMotion { dx: 0.0, dy: 225.0 }),
        // The floor can't be removed
        (170, click(MouseButton::Left, Pressed)),
        (172, click(MouseButton::Left, Released)),
        (180, click(MouseButton::Right, Pressed)),
        (182, click(MouseButton::Right, Released)),
        (190, key(CYCLE_BLOCK, Pressed)),
        (192, key(CYCLE_BLOCK, Released)),
        (200, click(MouseButton::Right, Pressed)),
        (202, click(MouseButton::Right, Released)),
        // Strafe against the new blocks
        (220, key(MOVE_RIGHT, Pressed)),
        (260, key(MOVE_RIGHT, Released)),
        (280, click(MouseButton::Left, Pressed)),
        (282, click(MouseButton::Left, Released)),
    ]
}

/// What happened during a demo session
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub frames: u32,
    pub placed_blocks: u32,
    pub removed_blocks: u32,
    pub view_rebuilds: u32,
}

/// Run the simulation for `frames` frames, feeding it the events of `script`
pub fn run_demo(
    settings: &Settings,
    script: &[(u32, InputEvent)],
    frames: u32,
) -> Result<DemoSummary> {
    let mut simulation = Simulation::new(settings.simulation.clone(), &mut FlatWorldGenerator)
        .context("Failed to create the simulation")?;
    let mut input_state = InputState::new(settings.mouse_speed, settings.invert_mouse);
    let mut view = LoggingView::new();
    let mut debug_info = DebugInfo::new_current();
    let mut tick_times = AverageTimeCounter::new();
    let frame_rate = settings.frame_rate.max(1);
    let seconds_delta = 1.0 / frame_rate as f64;

    view.rebuild_blocks(simulation.world());
    for frame in 0..frames {
        // Events are only applied at the start of a tick
        for (_, event) in script.iter().filter(|(f, _)| *f == frame) {
            input_state.process_event(*event);
        }
        simulation.set_input(input_state.get_physics_input());

        let tick_start = Instant::now();
        let grid_changed = simulation.step_simulation(seconds_delta);
        tick_times.add_time(tick_start.elapsed());

        if grid_changed {
            view.rebuild_blocks(simulation.world());
        }
        view.update_camera(&simulation.eye_pose());

        if frame % frame_rate == frame_rate - 1 {
            for (section, values) in debug_info.get_debug_info() {
                for (id, message) in values {
                    debug!("[{}/{}] {}", section, id, message.replace('\n', " "));
                }
            }
        }
    }

    info!(
        "Simulated {} frames, average tick {} us, worst tick {} us",
        frames,
        tick_times.average_time_micros(),
        tick_times.worst_time_micros()
    );
    Ok(DemoSummary {
        frames,
        placed_blocks: simulation.editor().placed_blocks(),
        removed_blocks: simulation.editor().removed_blocks(),
        view_rebuilds: view.rebuilds(),
    })
}
