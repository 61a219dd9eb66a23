//! Player entity

use macroquad::prelude::*;
use crate::ui::{darken, Rect};

#[derive(Debug, Clone)]
pub struct Player {
    pub bound: Rect,
    pub color: Color,
    pub hp: u32,
    pub max_hp: u32,
    /// Pixels per tick at full input
    pub speed: f32,
    /// Pixels per tick, only used by modes with momentum
    pub velocity: Vec2,
    pub grounded: bool,
}

impl Player {
    pub fn new(bound: Rect, color: Color, hp: u32, speed: f32) -> Self {
        Self {
            bound,
            color,
            hp,
            max_hp: hp,
            speed,
            velocity: Vec2::ZERO,
            grounded: false,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        self.bound.center()
    }

    /// Put the player back at `spawn` (top-left), at rest. HP is kept.
    pub fn respawn(&mut self, spawn: (f32, f32)) {
        self.bound = self.bound.with_pos(spawn.0, spawn.1);
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }

    /// Lose `amount` hp. Returns true if this emptied the bar.
    pub fn damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.hp == 0
    }

    pub fn restore(&mut self) {
        self.hp = self.max_hp;
    }

    /// Draw at `screen`, the player's bound already moved into screen space
    pub fn draw(&self, screen: &Rect) {
        let r = screen;
        draw_rectangle(r.x, r.y, r.w, r.h, self.color);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, darken(self.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(Rect::new(100.0, 100.0, 100.0, 50.0), BLACK, 20, 10.0)
    }

    #[test]
    fn test_new_is_full_hp_and_at_rest() {
        let p = player();
        assert_eq!(p.hp, 20);
        assert_eq!(p.max_hp, 20);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.center(), (150.0, 125.0));
    }

    #[test]
    fn test_damage_saturates() {
        let mut p = player();
        assert!(!p.damage(5));
        assert_eq!(p.hp, 15);
        assert!(p.damage(100));
        assert_eq!(p.hp, 0);

        p.restore();
        assert_eq!(p.hp, 20);
    }

    #[test]
    fn test_respawn_keeps_size_and_hp() {
        let mut p = player();
        p.velocity = vec2(3.0, 4.0);
        p.grounded = true;
        p.damage(1);

        p.respawn((10.0, 20.0));
        assert_eq!(p.bound, Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!(!p.grounded);
        assert_eq!(p.hp, 19);
    }
}
