//! Keyboard input
//!
//! Action-based mapping over macroquad's key polling. The simulation never
//! reads keys directly: each frame the binary polls one `InputSnapshot`
//! (plain bools) and hands it to the game tick, which keeps the game logic
//! headless and testable.

use macroquad::prelude::*;

/// The game actions a key can trigger
///
/// Key mappings:
/// - Left/A, Right/D = move
/// - Space = jump (held; re-jumps on landing)
/// - Shift = sprint (held, stamina-gated)
/// - J/X = attack (sky-quest only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Sprint,
    Attack,
}

impl Action {
    /// Is any key bound to this action currently held?
    pub fn is_down(self) -> bool {
        match self {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            Action::Jump => is_key_down(KeyCode::Space),
            Action::Sprint => is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
            Action::Attack => is_key_down(KeyCode::J) || is_key_down(KeyCode::X),
        }
    }

    /// Was any key bound to this action pressed this frame? (edge trigger)
    pub fn is_pressed(self) -> bool {
        match self {
            Action::MoveLeft => is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A),
            Action::MoveRight => is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D),
            Action::Jump => is_key_pressed(KeyCode::Space),
            Action::Sprint => {
                is_key_pressed(KeyCode::LeftShift) || is_key_pressed(KeyCode::RightShift)
            }
            Action::Attack => is_key_pressed(KeyCode::J) || is_key_pressed(KeyCode::X),
        }
    }
}

/// One frame's worth of input, as plain data
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    /// Jump key held; landing with it still down re-jumps immediately
    pub jump: bool,
    pub sprint: bool,
    /// Attack key pressed this frame (edge-triggered)
    pub attack_pressed: bool,
    /// Any key at all pressed this frame (restarts from game over)
    pub any_key_pressed: bool,
}

/// Poll the keyboard into a snapshot for this frame
pub fn poll() -> InputSnapshot {
    InputSnapshot {
        left: Action::MoveLeft.is_down(),
        right: Action::MoveRight.is_down(),
        jump: Action::Jump.is_down(),
        sprint: Action::Sprint.is_down(),
        attack_pressed: Action::Attack.is_pressed(),
        any_key_pressed: get_last_key_pressed().is_some(),
    }
}
