//! Push button widget
//!
//! Solid rectangle with a darker outline and a centered label drawn in the
//! inverse of the fill color, so it stays readable on any fill.

use macroquad::prelude::*;
use super::{darken, invert, Rect, UiContext, FONT_SIZE_BUTTON};

/// Longest label a button keeps (in bytes)
pub const MAX_LABEL_LEN: usize = 49;

/// What happened to a button this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Mouse is over the button
    pub hovered: bool,
    /// Left button is held down over the button
    pub held: bool,
    /// Left button went down over the button this frame
    pub clicked: bool,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub bound: Rect,
    pub standard_color: Color,
    pub hovered_color: Color,
    pub current_color: Color,
    text: String,
}

impl Button {
    pub fn new(bound: Rect, color: Color, hovered_color: Color, text: &str) -> Self {
        Self {
            bound,
            standard_color: color,
            hovered_color,
            current_color: color,
            text: truncate_label(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = truncate_label(text);
    }

    /// Hit-test against the mouse and update the hover color
    pub fn update(&mut self, ctx: &mut UiContext) -> ButtonState {
        let hovered = ctx.mouse.inside(&self.bound);
        self.current_color = if hovered { self.hovered_color } else { self.standard_color };

        ButtonState {
            hovered,
            held: ctx.mouse.held_in(&self.bound),
            clicked: ctx.take_click(&self.bound),
        }
    }

    pub fn draw(&self) {
        let r = &self.bound;
        draw_rectangle(r.x, r.y, r.w, r.h, self.current_color);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, darken(self.current_color));

        let font_size = FONT_SIZE_BUTTON;
        let dims = measure_text(&self.text, None, font_size as u16, 1.0);
        let (x, top) = label_origin(r, dims.width, font_size);
        // draw_text takes the baseline, not the top of the glyphs
        draw_text(&self.text, x.round(), (top + dims.offset_y).round(), font_size, invert(self.current_color));
    }
}

/// Top-left of a label of width `text_w` centered in `bound`
fn label_origin(bound: &Rect, text_w: f32, font_size: f32) -> (f32, f32) {
    (bound.x + (bound.w - text_w) / 2.0, bound.y + (bound.h - font_size) / 2.0)
}

fn truncate_label(text: &str) -> String {
    if text.len() <= MAX_LABEL_LEN {
        return text.to_string();
    }
    let mut end = MAX_LABEL_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].to_string()
}
