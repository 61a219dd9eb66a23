//! Per-frame mouse snapshot for the menu widgets

use macroquad::prelude::{is_mouse_button_down, is_mouse_button_pressed, is_mouse_button_released, mouse_position, MouseButton};
use super::Rect;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    /// Went down since last frame
    pub left_pressed: bool,
    /// Came up since last frame
    pub left_released: bool,
}

impl MouseState {
    /// Snapshot macroquad's mouse. Pressed/released are edge events, so a
    /// click shorter than a frame still registers.
    pub fn poll() -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
        }
    }

    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Left button down with the cursor over `rect`
    pub fn held_in(&self, rect: &Rect) -> bool {
        self.left_down && self.inside(rect)
    }

    /// Left button went down this frame with the cursor over `rect`
    pub fn pressed_in(&self, rect: &Rect) -> bool {
        self.left_pressed && self.inside(rect)
    }
}

/// Mouse input shared by every widget drawn this frame.
///
/// A click goes to the first widget that claims it, so overlapping
/// buttons never fire together.
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    pub mouse: MouseState,
    click_taken: bool,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame with a fresh snapshot
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.click_taken = false;
    }

    /// Claim this frame's click if it landed in `rect` and is still unclaimed
    pub fn take_click(&mut self, rect: &Rect) -> bool {
        if self.click_taken || !self.mouse.pressed_in(rect) {
            return false;
        }
        self.click_taken = true;
        true
    }

    pub fn click_taken(&self) -> bool {
        self.click_taken
    }
}
