use blockedit_common::player::PlayerInput;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

/// A raw event from the keyboard or the mouse
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Keyboard { scancode: u32, state: ElementState },
    MouseButton { button: MouseButton, state: ElementState },
    MouseMotion { dx: f64, dy: f64 },
}

/// The state of the keyboard and mouse buttons, plus everything that happened since the last tick.
pub struct InputState {
    keys: HashMap<u32, ElementState>,
    mouse_buttons: HashMap<MouseButton, ElementState>,
    mouse_speed: f64,
    invert_mouse: bool,
    // Accumulated until the next call to `get_physics_input`
    yaw_delta: f64,
    pitch_delta: f64,
    jump: bool,
    cycle_block: bool,
    remove_block: bool,
    place_block: bool,
}

impl InputState {
    pub fn new(mouse_speed: f64, invert_mouse: bool) -> InputState {
        Self {
            keys: HashMap::new(),
            mouse_buttons: HashMap::new(),
            mouse_speed,
            invert_mouse,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            jump: false,
            cycle_block: false,
            remove_block: false,
            place_block: false,
        }
    }

    pub fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Keyboard { scancode, state } => {
                self.process_keyboard_input(scancode, state);
            }
            InputEvent::MouseButton { button, state } => {
                self.process_mouse_input(state, button);
            }
            InputEvent::MouseMotion { dx, dy } => self.process_mouse_motion(dx, dy),
        }
    }

    /// Process a keyboard input, returning whether the state of the key changed or not
    pub fn process_keyboard_input(&mut self, scancode: u32, state: ElementState) -> bool {
        let previous_state = self.keys.insert(scancode, state);
        let changed = previous_state != Some(state);
        if changed && state == ElementState::Pressed {
            match scancode {
                JUMP => self.jump = true,
                CYCLE_BLOCK => self.cycle_block = true,
                _ => {}
            }
        }
        changed
    }

    /// Process a mouse input, returning whether the state of the button changed or not
    pub fn process_mouse_input(&mut self, state: ElementState, button: MouseButton) -> bool {
        let previous_state = self.mouse_buttons.insert(button, state);
        let changed = previous_state != Some(state);
        if changed && state == ElementState::Pressed {
            match button {
                MouseButton::Left => self.remove_block = true,
                MouseButton::Right => self.place_block = true,
            }
        }
        changed
    }

    pub fn process_mouse_motion(&mut self, dx: f64, dy: f64) {
        self.yaw_delta -= self.mouse_speed * dx;
        let pitch_delta = self.mouse_speed * dy;
        if self.invert_mouse {
            self.pitch_delta += pitch_delta;
        } else {
            self.pitch_delta -= pitch_delta;
        }
    }

    pub fn get_key_state(&self, scancode: u32) -> ElementState {
        self.keys
            .get(&scancode)
            .cloned()
            .unwrap_or(ElementState::Released)
    }

    fn is_key_pressed(&self, scancode: u32) -> bool {
        match self.get_key_state(scancode) {
            ElementState::Pressed => true,
            ElementState::Released => false,
        }
    }

    /// Snapshot of the input for the next tick. Resets the edges and the mouse movement.
    pub fn get_physics_input(&mut self) -> PlayerInput {
        let input = PlayerInput {
            key_move_forward: self.is_key_pressed(MOVE_FORWARD),
            key_move_left: self.is_key_pressed(MOVE_LEFT),
            key_move_backward: self.is_key_pressed(MOVE_BACKWARD),
            key_move_right: self.is_key_pressed(MOVE_RIGHT),
            yaw_delta: self.yaw_delta,
            pitch_delta: self.pitch_delta,
            jump: self.jump,
            cycle_block: self.cycle_block,
            remove_block: self.remove_block,
            place_block: self.place_block,
        };
        self.yaw_delta = 0.0;
        self.pitch_delta = 0.0;
        self.jump = false;
        self.cycle_block = false;
        self.remove_block = false;
        self.place_block = false;
        input
    }
}

pub const MOVE_FORWARD: u32 = 17;
pub const MOVE_LEFT: u32 = 30;
pub const MOVE_BACKWARD: u32 = 31;
pub const MOVE_RIGHT: u32 = 32;
pub const JUMP: u32 = 57;
pub const CYCLE_BLOCK: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    fn key(scancode: u32, state: ElementState) -> InputEvent {
        InputEvent::Keyboard { scancode, state }
    }

    #[test]
    fn test_held_keys_persist() {
        let mut input_state = InputState::new(0.2, false);
        input_state.process_event(key(MOVE_FORWARD, ElementState::Pressed));
        assert!(input_state.get_physics_input().key_move_forward);
        assert!(input_state.get_physics_input().key_move_forward);
        input_state.process_event(key(MOVE_FORWARD, ElementState::Released));
        assert!(!input_state.get_physics_input().key_move_forward);
    }

    #[test]
    fn test_edges_fire_once() {
        let mut input_state = InputState::new(0.2, false);
        input_state.process_event(key(JUMP, ElementState::Pressed));
        input_state.process_event(key(CYCLE_BLOCK, ElementState::Pressed));
        input_state.process_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            state: ElementState::Pressed,
        });
        let first = input_state.get_physics_input();
        assert!(first.jump && first.cycle_block && first.place_block && !first.remove_block);
        // Still held, but the edge was consumed
        let second = input_state.get_physics_input();
        assert!(!second.jump && !second.cycle_block && !second.place_block);
        // Key repeat doesn't count as a new press
        assert!(!input_state.process_keyboard_input(JUMP, ElementState::Pressed));
        assert!(!input_state.get_physics_input().jump);
    }

    #[test]
    fn test_mouse_motion() {
        let mut input_state = InputState::new(0.2, false);
        input_state.process_event(InputEvent::MouseMotion { dx: 10.0, dy: 5.0 });
        input_state.process_event(InputEvent::MouseMotion { dx: 10.0, dy: 5.0 });
        let input = input_state.get_physics_input();
        assert!((input.yaw_delta - -4.0).abs() < 1e-9);
        assert!((input.pitch_delta - -2.0).abs() < 1e-9);
        assert_eq!(input_state.get_physics_input().yaw_delta, 0.0);

        let mut inverted = InputState::new(0.2, true);
        inverted.process_mouse_motion(0.0, 5.0);
        assert!((inverted.get_physics_input().pitch_delta - 1.0).abs() < 1e-9);
    }
}
