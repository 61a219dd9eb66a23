//! Main menu screen
//!
//! Start and Exit stacked in the middle of the screen, with a mode
//! selector underneath.

use macroquad::prelude::*;

use crate::game::GameMode;
use crate::ui::{self, Button, Rect, UiContext};

/// Actions returned by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(GameMode),
    CycleMode,
    Quit,
}

pub struct MainMenu {
    pub mode: GameMode,
    start: Button,
    exit: Button,
    mode_button: Button,
    screen_w: f32,
    screen_h: f32,
}

mod layout {
    use crate::ui::Rect;

    pub const BUTTON_W: f32 = 100.0;
    pub const BUTTON_H: f32 = 50.0;
    pub const MODE_W: f32 = 200.0;
    pub const MODE_H: f32 = 40.0;

    pub fn start(w: f32, h: f32) -> Rect {
        Rect::new(w / 2.0 - 50.0, h / 2.0 - 50.0, BUTTON_W, BUTTON_H)
    }

    pub fn exit(w: f32, h: f32) -> Rect {
        Rect::new(w / 2.0 - 50.0, h / 2.0, BUTTON_W, BUTTON_H)
    }

    pub fn mode(w: f32, h: f32) -> Rect {
        Rect::new(w / 2.0 - MODE_W / 2.0, h / 2.0 + 60.0, MODE_W, MODE_H)
    }
}

fn mode_label(mode: GameMode) -> String {
    format!("Mode: {}", mode.label())
}

impl MainMenu {
    pub fn new(screen_w: f32, screen_h: f32, mode: GameMode) -> Self {
        let (fill, hover) = (ui::BUTTON_COLOR, ui::BUTTON_HOVER_COLOR);
        Self {
            mode,
            start: Button::new(layout::start(screen_w, screen_h), fill, hover, "Start"),
            exit: Button::new(layout::exit(screen_w, screen_h), fill, hover, "Exit"),
            mode_button: Button::new(layout::mode(screen_w, screen_h), fill, hover, &mode_label(mode)),
            screen_w,
            screen_h,
        }
    }

    /// Re-center the buttons after a window resize
    pub fn relayout(&mut self, screen_w: f32, screen_h: f32) {
        if screen_w == self.screen_w && screen_h == self.screen_h {
            return;
        }
        self.screen_w = screen_w;
        self.screen_h = screen_h;
        self.start.bound = layout::start(screen_w, screen_h);
        self.exit.bound = layout::exit(screen_w, screen_h);
        self.mode_button.bound = layout::mode(screen_w, screen_h);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.mode_button.set_text(&mode_label(mode));
    }

    /// Hit-test all buttons. Start is checked before Exit, so it wins if
    /// both somehow register in the same frame.
    pub fn update(&mut self, ctx: &mut UiContext, escape_pressed: bool) -> MenuAction {
        let start = self.start.update(ctx);
        let exit = self.exit.update(ctx);
        let mode = self.mode_button.update(ctx);

        if start.clicked {
            MenuAction::Start(self.mode)
        } else if exit.clicked || escape_pressed {
            MenuAction::Quit
        } else if mode.clicked {
            MenuAction::CycleMode
        } else {
            MenuAction::None
        }
    }

    pub fn draw(&self) {
        clear_background(ui::BG_COLOR);

        let title = "RECTRUN";
        let size = ui::FONT_SIZE_TITLE;
        let dims = measure_text(title, None, size as u16, 1.0);
        let area = Rect::screen(self.screen_w, self.screen_h);
        draw_text(
            title,
            (area.center_x() - dims.width / 2.0).round(),
            (self.start.bound.y - 40.0).round(),
            size,
            ui::BUTTON_COLOR,
        );

        self.start.draw();
        self.exit.draw();
        self.mode_button.draw();
    }
}
