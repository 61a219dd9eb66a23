//! Keyboard polling
//!
//! Reads macroquad's keyboard state once per frame and folds it into a
//! `FrameInput` snapshot, so the simulation never touches the window.

use macroquad::prelude::*;
use super::{Action, ActionSet, FrameInput};

/// Keys bound to each action. First key is the one shown in help text.
pub fn bindings(action: Action) -> &'static [KeyCode] {
    match action {
        Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
        Action::MoveRight => &[KeyCode::Right, KeyCode::D],
        Action::MoveUp => &[KeyCode::Up, KeyCode::W],
        Action::MoveDown => &[KeyCode::Down, KeyCode::S],
        Action::Jump => &[KeyCode::Space, KeyCode::Up, KeyCode::W],
        Action::Restart => &[KeyCode::R],
        Action::Back => &[KeyCode::Escape],
        Action::ToggleDebug => &[KeyCode::F1],
    }
}

pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Call once per frame
    pub fn poll(&self) -> FrameInput {
        let mut held = ActionSet::empty();
        let mut pressed = ActionSet::empty();

        for action in Action::ALL {
            let keys = bindings(action);
            if keys.iter().any(|&k| is_key_down(k)) {
                held.insert(action);
            }
            if keys.iter().any(|&k| is_key_pressed(k)) {
                pressed.insert(action);
            }
        }

        FrameInput { held, pressed }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
