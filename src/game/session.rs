//! Game session
//!
//! One run of a level: owns the player, the level, the camera and the
//! fixed-step clock. `update` is pure simulation (testable without a
//! window), `draw` renders the current state.

use log::{debug, info, warn};
use macroquad::prelude::*;

use crate::config::{Config, PhysicsConfig, TICK_RATE};
use crate::input::{Action, ActionSet, FrameInput};
use crate::ui::{self, Rect};
use super::collision::{first_hit, move_blocked, move_free, move_platformer};
use super::{FixedClock, GameCamera, GameMode, Level, Player};

/// Upper bound on simulation ticks per rendered frame
const MAX_TICKS_PER_FRAME: u32 = 5;

/// What the session asks of the app after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    None,
    ExitToMenu,
}

pub struct GameSession {
    pub mode: GameMode,
    pub level: Level,
    pub player: Player,
    pub camera: GameCamera,
    pub debug: bool,
    /// Ticks simulated since the session started
    pub ticks: u64,
    /// Times the player fell out of the level
    pub falls: u32,
    walls: Vec<Rect>,
    physics: PhysicsConfig,
    clock: FixedClock,
    /// Presses seen on frames that ran no tick, delivered to the next tick
    queued: ActionSet,
}

impl GameSession {
    pub fn new(mode: GameMode, level: Level, config: &Config, view_w: f32, view_h: f32) -> Self {
        let pc = &config.player;
        let bound = Rect::new(level.spawn.0, level.spawn.1, pc.width, pc.height);
        let player = Player::new(bound, ui::PLAYER_COLOR, pc.hp, pc.speed);
        let walls = level.wall_rects();

        if !level.contains_fully(&bound) {
            warn!("Spawn in '{}' leaves the player partly outside the level", level.name);
        }
        if let Some(i) = first_hit(&bound, &walls) {
            warn!("Spawn in '{}' overlaps wall {}, the player may get stuck", level.name, i);
        }

        let mut camera = GameCamera::new(view_w, view_h);
        camera.smoothing = config.camera_smoothing;
        camera.snap(player.center(), &level.bounds());

        info!("Starting {} mode on '{}' ({} walls)", mode.label(), level.name, walls.len());

        Self {
            mode,
            level,
            player,
            camera,
            debug: false,
            ticks: 0,
            falls: 0,
            walls,
            physics: config.physics.clone(),
            clock: FixedClock::new(TICK_RATE, MAX_TICKS_PER_FRAME),
            queued: ActionSet::empty(),
        }
    }

    /// Track window size changes
    pub fn resize(&mut self, view_w: f32, view_h: f32) {
        self.camera.resize(view_w, view_h);
    }

    /// Advance by one rendered frame of `frame_dt` seconds
    pub fn update(&mut self, frame_dt: f32, input: &FrameInput) -> SessionEvent {
        if input.pressed(Action::Back) {
            return SessionEvent::ExitToMenu;
        }
        if input.pressed(Action::ToggleDebug) {
            self.debug = !self.debug;
        }
        if input.pressed(Action::Restart) {
            self.respawn();
        }

        self.queued = self.queued.union(input.pressed);

        let ticks = self.clock.advance(frame_dt as f64);
        for _ in 0..ticks {
            let tick_input = FrameInput { held: input.held, pressed: self.queued };
            self.queued = ActionSet::empty();
            self.tick(&tick_input);
        }

        self.camera.follow(self.player.center(), &self.level.bounds());
        SessionEvent::None
    }

    /// One fixed simulation step
    pub fn tick(&mut self, input: &FrameInput) {
        self.ticks += 1;
        match self.mode {
            GameMode::Basic => self.tick_basic(input),
            GameMode::Platformer => self.tick_platformer(input),
            GameMode::Free => self.tick_free(input),
        }
    }

    fn tick_basic(&mut self, input: &FrameInput) {
        let (ax, ay) = input.axis();
        let speed = self.player.speed;
        let result = move_blocked(&self.player.bound, ax as f32 * speed, ay as f32 * speed, &self.walls);
        self.player.bound = result.bound.clamp_inside(&self.level.bounds());
    }

    fn tick_free(&mut self, input: &FrameInput) {
        let (ax, ay) = input.axis();
        let dir = vec2(ax as f32, ay as f32).normalize_or_zero();
        let delta = dir * self.player.speed;
        self.player.velocity = delta;

        let result = move_free(&self.player.bound, delta.x, delta.y, &self.walls);
        self.player.bound = result.bound.clamp_inside(&self.level.bounds());
    }

    fn tick_platformer(&mut self, input: &FrameInput) {
        let physics = &self.physics;
        let player = &mut self.player;

        let (ax, _) = input.axis();
        player.velocity.x = ax as f32 * player.speed;

        if input.pressed(Action::Jump) && player.grounded {
            player.velocity.y = -physics.jump_speed;
            player.grounded = false;
        }
        player.velocity.y = (player.velocity.y + physics.gravity).min(physics.max_fall_speed);

        let result = move_platformer(&player.bound, player.velocity.x, player.velocity.y, &self.walls);
        player.bound = result.bound;
        if result.grounded || result.hit_ceiling {
            player.velocity.y = 0.0;
        }
        player.grounded = result.grounded;

        // Horizontal edges are hard limits, the bottom is a pit
        let bounds = self.level.bounds();
        let x = player.bound.x.clamp(bounds.x, (bounds.right() - player.bound.w).max(bounds.x));
        player.bound.x = x;

        if player.bound.y > bounds.bottom() {
            self.fell_out();
        }
    }

    fn fell_out(&mut self) {
        self.falls += 1;
        if self.player.damage(1) {
            info!("Out of HP after {} falls, refilling", self.falls);
            self.player.restore();
        } else {
            debug!("Fell out of the level, {} HP left", self.player.hp);
        }
        self.respawn();
    }

    pub fn respawn(&mut self) {
        self.player.respawn(self.level.spawn);
        self.camera.snap(self.player.center(), &self.level.bounds());
        self.clock.reset();
    }

    pub fn draw(&self) {
        clear_background(ui::BG_COLOR);

        for wall in &self.level.walls {
            if !self.camera.is_visible(&wall.rect) {
                continue;
            }
            let s = self.camera.to_screen(&wall.rect);
            let color = wall.color.map(ui::rgba).unwrap_or(ui::WALL_COLOR);
            draw_rectangle(s.x, s.y, s.w, s.h, color);
            draw_rectangle_lines(s.x, s.y, s.w, s.h, 1.0, ui::darken(color));
        }

        self.player.draw(&self.camera.to_screen(&self.player.bound));

        self.draw_hud();
        if self.debug {
            self.draw_debug();
        }
    }

    fn draw_hud(&self) {
        let size = ui::FONT_SIZE_HUD;
        let status = format!(
            "{}  |  HP {}/{}  |  {}",
            self.mode.label(),
            self.player.hp,
            self.player.max_hp,
            self.level.name
        );
        draw_text(&status, 10.0, 10.0 + size, size, ui::HUD_TEXT);

        let fps = format!("{} FPS", get_fps());
        let dims = measure_text(&fps, None, size as u16, 1.0);
        draw_text(&fps, (self.camera.view_w - dims.width - 10.0).round(), 10.0 + size, size, ui::HUD_TEXT);

        let hint = match self.mode {
            GameMode::Platformer => "Arrows/AD move, Space jump, R restart, Esc menu",
            _ => "Arrows/WASD move, R restart, Esc menu",
        };
        draw_text(hint, 10.0, self.camera.view_h - 10.0, 16.0, ui::HUD_TEXT);
    }

    fn draw_debug(&self) {
        for wall in &self.walls {
            if self.camera.is_visible(wall) {
                let s = self.camera.to_screen(wall);
                draw_rectangle_lines(s.x, s.y, s.w, s.h, 2.0, ui::DEBUG_COLOR);
            }
        }
        let p = &self.player;
        let s = self.camera.to_screen(&p.bound);
        draw_rectangle_lines(s.x - 1.0, s.y - 1.0, s.w + 2.0, s.h + 2.0, 1.0, ui::DEBUG_COLOR);

        let lines = [
            format!("pos ({:.0}, {:.0})  size {:.0}x{:.0}", p.bound.x, p.bound.y, p.bound.w, p.bound.h),
            format!("vel ({:.1}, {:.1})  grounded {}", p.velocity.x, p.velocity.y, p.grounded),
            format!("cam ({:.0}, {:.0})  falls {}", self.camera.x, self.camera.y, self.falls),
            format!("ticks {} @ {:.0} Hz", self.ticks, 1.0 / self.clock.step()),
        ];
        draw_rectangle(6.0, 44.0, 380.0, 22.0 + lines.len() as f32 * 18.0, ui::lighten(ui::BG_COLOR));
        for (i, line) in lines.iter().enumerate() {
            draw_text(line, 10.0, 60.0 + i as f32 * 18.0, 16.0, ui::DEBUG_COLOR);
        }
    }
}
