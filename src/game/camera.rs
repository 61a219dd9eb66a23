//! Follow camera
//!
//! The camera is just a view rectangle in world space. Drawing code
//! subtracts its top-left from world coordinates, no GPU transform needed.

use crate::ui::Rect;

/// Top-left of a `view_w`x`view_h` view centered on `center`, clamped so
/// it never shows space outside `level`. On an axis where the level is
/// smaller than the view, the level is centered instead.
pub fn follow_target(center: (f32, f32), view_w: f32, view_h: f32, level: &Rect) -> (f32, f32) {
    (
        follow_axis(center.0, view_w, level.x, level.w),
        follow_axis(center.1, view_h, level.y, level.h),
    )
}

fn follow_axis(center: f32, view: f32, lo: f32, size: f32) -> f32 {
    if size <= view {
        lo + (size - view) * 0.5
    } else {
        (center - view * 0.5).clamp(lo, lo + size - view)
    }
}

#[derive(Debug, Clone)]
pub struct GameCamera {
    /// Top-left of the view in world space
    pub x: f32,
    pub y: f32,
    pub view_w: f32,
    pub view_h: f32,
    /// Fraction of the remaining distance covered per update (1.0 = snap)
    pub smoothing: f32,
}

impl GameCamera {
    pub fn new(view_w: f32, view_h: f32) -> Self {
        Self { x: 0.0, y: 0.0, view_w, view_h, smoothing: 1.0 }
    }

    pub fn resize(&mut self, view_w: f32, view_h: f32) {
        self.view_w = view_w;
        self.view_h = view_h;
    }

    /// Move toward the view that keeps `center` in frame
    pub fn follow(&mut self, center: (f32, f32), level: &Rect) {
        let (tx, ty) = follow_target(center, self.view_w, self.view_h, level);
        let t = self.smoothing.clamp(0.0, 1.0);
        self.x += (tx - self.x) * t;
        self.y += (ty - self.y) * t;
    }

    /// Jump straight to the target (used on spawn so the first frame isn't a pan)
    pub fn snap(&mut self, center: (f32, f32), level: &Rect) {
        let (tx, ty) = follow_target(center, self.view_w, self.view_h, level);
        self.x = tx;
        self.y = ty;
    }

    pub fn view(&self) -> Rect {
        Rect::new(self.x, self.y, self.view_w, self.view_h)
    }

    /// World rect to screen rect, rounded to whole pixels for crisp edges
    pub fn to_screen(&self, r: &Rect) -> Rect {
        Rect::new((r.x - self.x).round(), (r.y - self.y).round(), r.w, r.h)
    }

    pub fn is_visible(&self, r: &Rect) -> bool {
        self.view().overlaps(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_W: f32 = 800.0;
    const VIEW_H: f32 = 600.0;

    #[test]
    fn test_follow_centers_player() {
        let level = Rect::new(0.0, 0.0, 3000.0, 2000.0);
        assert_eq!(follow_target((1500.0, 1000.0), VIEW_W, VIEW_H, &level), (1100.0, 700.0));
    }

    #[test]
    fn test_follow_clamps_to_level_edges() {
        let level = Rect::new(0.0, 0.0, 3000.0, 2000.0);
        assert_eq!(follow_target((10.0, 10.0), VIEW_W, VIEW_H, &level), (0.0, 0.0));
        assert_eq!(follow_target((2990.0, 1990.0), VIEW_W, VIEW_H, &level), (2200.0, 1400.0));
    }

    #[test]
    fn test_small_level_is_centered() {
        let level = Rect::new(0.0, 0.0, 400.0, 2000.0);
        let (x, y) = follow_target((200.0, 1000.0), VIEW_W, VIEW_H, &level);
        assert_eq!(x, -200.0);
        assert_eq!(y, 700.0);

        // Exactly screen sized: no scrolling at all
        let screen = Rect::screen(VIEW_W, VIEW_H);
        assert_eq!(follow_target((700.0, 10.0), VIEW_W, VIEW_H, &screen), (0.0, 0.0));
    }

    #[test]
    fn test_smoothing_moves_part_way() {
        let level = Rect::new(0.0, 0.0, 3000.0, 2000.0);
        let mut cam = GameCamera::new(VIEW_W, VIEW_H);
        cam.smoothing = 0.5;
        cam.follow((1500.0, 1000.0), &level);
        assert_eq!((cam.x, cam.y), (550.0, 350.0));

        cam.snap((1500.0, 1000.0), &level);
        assert_eq!((cam.x, cam.y), (1100.0, 700.0));
    }

    #[test]
    fn test_to_screen() {
        let mut cam = GameCamera::new(VIEW_W, VIEW_H);
        cam.x = 100.0;
        cam.y = 50.0;
        let r = cam.to_screen(&Rect::new(150.0, 60.0, 10.0, 10.0));
        assert_eq!(r, Rect::new(50.0, 10.0, 10.0, 10.0));
        assert!(cam.is_visible(&Rect::new(150.0, 60.0, 10.0, 10.0)));
        assert!(!cam.is_visible(&Rect::new(0.0, 0.0, 10.0, 10.0)));
    }
}
