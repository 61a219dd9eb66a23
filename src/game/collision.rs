//! Collision System
//!
//! Axis-aligned box collision between the player and static walls.
//! One resolver per game mode:
//! - `move_blocked`: refuse moves that would overlap (Basic)
//! - `move_platformer`: move X then Y, snapping flush to walls (Platformer)
//! - `move_free`: move, then push out along the shallowest axis (Free)
//!
//! Y grows downward (screen space), so "landing" means moving with dy > 0.

use crate::ui::Rect;

/// Result of a collision-resolved move
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveResult {
    /// Corrected bound after collision
    pub bound: Rect,
    /// Horizontal motion was stopped by a wall
    pub blocked_x: bool,
    /// Vertical motion was stopped by a wall
    pub blocked_y: bool,
    /// Came to rest on top of a wall
    pub grounded: bool,
    /// Bumped into the underside of a wall
    pub hit_ceiling: bool,
}

impl MoveResult {
    fn unobstructed(bound: Rect) -> Self {
        Self { bound, ..Default::default() }
    }
}

/// Index of the first wall overlapping `bound`
pub fn first_hit(bound: &Rect, walls: &[Rect]) -> Option<usize> {
    walls.iter().position(|w| bound.overlaps(w))
}

/// Basic mode: try the full move, then X alone, then Y alone.
/// Whatever still overlaps is refused, the player stays put.
pub fn move_blocked(bound: &Rect, dx: f32, dy: f32, walls: &[Rect]) -> MoveResult {
    let full = bound.translate(dx, dy);
    if first_hit(&full, walls).is_none() {
        return MoveResult::unobstructed(full);
    }

    if dx != 0.0 {
        let x_only = bound.translate(dx, 0.0);
        if first_hit(&x_only, walls).is_none() {
            return MoveResult {
                bound: x_only,
                blocked_y: dy != 0.0,
                ..Default::default()
            };
        }
    }

    if dy != 0.0 {
        let y_only = bound.translate(0.0, dy);
        if first_hit(&y_only, walls).is_none() {
            return MoveResult {
                bound: y_only,
                blocked_x: dx != 0.0,
                ..Default::default()
            };
        }
    }

    MoveResult {
        bound: *bound,
        blocked_x: dx != 0.0,
        blocked_y: dy != 0.0,
        ..Default::default()
    }
}

/// Platformer mode: resolve X fully, then Y.
///
/// On each axis the player snaps flush against every wall it ends up
/// inside, on the side it came from. The caller zeroes velocity on the
/// blocked axis.
pub fn move_platformer(bound: &Rect, vx: f32, vy: f32, walls: &[Rect]) -> MoveResult {
    let mut result = MoveResult::unobstructed(*bound);
    let mut r = bound.translate(vx, 0.0);

    if vx != 0.0 {
        for wall in walls {
            if !r.overlaps(wall) {
                continue;
            }
            r.x = if vx > 0.0 { wall.x - r.w } else { wall.right() };
            result.blocked_x = true;
        }
    }

    r = r.translate(0.0, vy);

    if vy != 0.0 {
        for wall in walls {
            if !r.overlaps(wall) {
                continue;
            }
            if vy > 0.0 {
                r.y = wall.y - r.h;
                result.grounded = true;
            } else {
                r.y = wall.bottom();
                result.hit_ceiling = true;
            }
            result.blocked_y = true;
        }
    }

    result.bound = r;
    result
}

/// Push-out passes before a free move gives up and falls back to `move_blocked`
const MAX_PUSH_PASSES: usize = 8;

/// Flush position just outside `wall` along one axis
fn push_out(r: &Rect, wall: &Rect, along_x: bool) -> Rect {
    if along_x {
        let x = if r.center_x() < wall.center_x() { wall.x - r.w } else { wall.right() };
        r.with_pos(x, r.y)
    } else {
        let y = if r.center_y() < wall.center_y() { wall.y - r.h } else { wall.bottom() };
        r.with_pos(r.x, y)
    }
}

/// Free mode: apply the whole move, then push out of overlapping walls
/// along the axis of least penetration until nothing overlaps.
///
/// Ties go to the axis the player moved further along this tick, and to Y
/// when both moved equally. A push that would land inside another wall
/// takes the other axis instead, when that push is no deeper than the move
/// itself. If the player is still stuck after
/// `MAX_PUSH_PASSES`, the move is resolved as in Basic mode.
pub fn move_free(bound: &Rect, dx: f32, dy: f32, walls: &[Rect]) -> MoveResult {
    let mut result = MoveResult::unobstructed(*bound);
    let mut r = bound.translate(dx, dy);

    for _ in 0..MAX_PUSH_PASSES {
        let Some(i) = first_hit(&r, walls) else {
            result.bound = r;
            return result;
        };
        let wall = &walls[i];
        let ox = r.overlap_x(wall);
        let oy = r.overlap_y(wall);
        let prefer_x = if ox != oy { ox < oy } else { dx.abs() > dy.abs() };

        // The other axis is only an escape when it is no deeper than the move
        let other_depth = if prefer_x { oy } else { ox };
        let preferred = push_out(&r, wall, prefer_x);
        let along_x = if first_hit(&preferred, walls).is_some()
            && other_depth <= dx.abs().max(dy.abs())
            && first_hit(&push_out(&r, wall, !prefer_x), walls).is_none()
        {
            !prefer_x
        } else {
            prefer_x
        };

        let next = push_out(&r, wall, along_x);
        if along_x {
            result.blocked_x = true;
        } else {
            result.blocked_y = true;
            if next.y < r.y {
                result.grounded = true;
            } else {
                result.hit_ceiling = true;
            }
        }
        r = next;
    }

    if first_hit(&r, walls).is_none() {
        result.bound = r;
        return result;
    }
    move_blocked(bound, dx, dy, walls)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::new(x, y, 20.0, 20.0)
    }

    fn floor() -> Rect {
        Rect::new(-100.0, 100.0, 400.0, 50.0)
    }

    fn right_wall() -> Rect {
        Rect::new(100.0, -100.0, 50.0, 400.0)
    }

    #[test]
    fn test_first_hit() {
        let walls = [floor(), right_wall()];
        assert_eq!(first_hit(&player_at(0.0, 0.0), &walls), None);
        assert_eq!(first_hit(&player_at(0.0, 90.0), &walls), Some(0));
        assert_eq!(first_hit(&player_at(90.0, 0.0), &walls), Some(1));
    }

    #[test]
    fn test_blocked_free_move() {
        let r = move_blocked(&player_at(0.0, 0.0), 10.0, 10.0, &[floor()]);
        assert_eq!(r.bound, player_at(10.0, 10.0));
        assert!(!r.blocked_x && !r.blocked_y);
    }

    #[test]
    fn test_blocked_refuses_move_into_wall() {
        // 5px from the wall, 10px step: the move is refused, not shortened
        let r = move_blocked(&player_at(75.0, 0.0), 10.0, 0.0, &[right_wall()]);
        assert_eq!(r.bound, player_at(75.0, 0.0));
        assert!(r.blocked_x);
        assert!(!r.blocked_y);
    }

    #[test]
    fn test_blocked_slides_along_wall() {
        // Diagonal into the right wall keeps the vertical part
        let r = move_blocked(&player_at(75.0, 0.0), 10.0, 10.0, &[right_wall()]);
        assert_eq!(r.bound, player_at(75.0, 10.0));
        assert!(r.blocked_x);

        // Diagonal into the floor keeps the horizontal part
        let r = move_blocked(&player_at(0.0, 75.0), 10.0, 10.0, &[floor()]);
        assert_eq!(r.bound, player_at(10.0, 75.0));
        assert!(r.blocked_y);
    }

    #[test]
    fn test_blocked_corner_stops() {
        let walls = [floor(), right_wall()];
        let r = move_blocked(&player_at(75.0, 75.0), 10.0, 10.0, &walls);
        assert_eq!(r.bound, player_at(75.0, 75.0));
        assert!(r.blocked_x && r.blocked_y);
    }

    #[test]
    fn test_platformer_lands_flush() {
        let r = move_platformer(&player_at(0.0, 75.0), 0.0, 10.0, &[floor()]);
        assert_eq!(r.bound, player_at(0.0, 80.0));
        assert!(r.grounded);
        assert!(r.blocked_y);
        assert!(!r.hit_ceiling);
    }

    #[test]
    fn test_platformer_hits_ceiling() {
        let ceiling = Rect::new(-100.0, -50.0, 400.0, 50.0);
        let r = move_platformer(&player_at(0.0, 5.0), 0.0, -10.0, &[ceiling]);
        assert_eq!(r.bound, player_at(0.0, 0.0));
        assert!(r.hit_ceiling);
        assert!(!r.grounded);
    }

    #[test]
    fn test_platformer_walks_into_wall() {
        let r = move_platformer(&player_at(75.0, 0.0), 10.0, 0.0, &[right_wall()]);
        assert_eq!(r.bound, player_at(80.0, 0.0));
        assert!(r.blocked_x);

        // From the other side
        let r = move_platformer(&player_at(155.0, 0.0), -10.0, 0.0, &[right_wall()]);
        assert_eq!(r.bound, player_at(150.0, 0.0));
        assert!(r.blocked_x);
    }

    #[test]
    fn test_platformer_walks_along_floor() {
        // Standing on the floor with gravity pulling down: moves right and stays grounded
        let r = move_platformer(&player_at(0.0, 80.0), 10.0, 1.0, &[floor()]);
        assert_eq!(r.bound, player_at(10.0, 80.0));
        assert!(r.grounded);
        assert!(!r.blocked_x);
    }

    #[test]
    fn test_free_pushes_out_shallowest_axis() {
        // Moving right into a tall wall: X penetration is smallest
        let r = move_free(&player_at(75.0, 0.0), 10.0, 0.0, &[right_wall()]);
        assert_eq!(r.bound, player_at(80.0, 0.0));
        assert!(r.blocked_x && !r.blocked_y);

        // Moving down into a wide floor: Y penetration is smallest
        let r = move_free(&player_at(0.0, 75.0), 0.0, 10.0, &[floor()]);
        assert_eq!(r.bound, player_at(0.0, 80.0));
        assert!(r.blocked_y && !r.blocked_x);
    }

    #[test]
    fn test_free_slides_diagonally() {
        let r = move_free(&player_at(75.0, 0.0), 10.0, 10.0, &[right_wall()]);
        assert_eq!(r.bound, player_at(80.0, 10.0));
    }

    #[test]
    fn test_free_tie_breaks() {
        let block = Rect::new(100.0, 100.0, 40.0, 40.0);

        // Moved more along X: equal 5px penetration on both axes, pushed back on X
        let r = move_free(&player_at(75.0, 83.0), 10.0, 2.0, &[block]);
        assert_eq!(r.bound, player_at(80.0, 85.0));
        assert!(r.blocked_x && !r.blocked_y);

        // Moved more along Y
        let r = move_free(&player_at(83.0, 75.0), 2.0, 10.0, &[block]);
        assert_eq!(r.bound, player_at(85.0, 80.0));
        assert!(r.blocked_y && !r.blocked_x);

        // Exact diagonal: Y wins
        let r = move_free(&player_at(75.0, 75.0), 10.0, 10.0, &[block]);
        assert_eq!(r.bound, player_at(85.0, 80.0));
        assert!(r.blocked_y && !r.blocked_x);
    }

    #[test]
    fn test_free_push_never_lands_in_earlier_wall() {
        // Shallowest push out of the step is up, straight into the ceiling
        let walls = [Rect::new(0.0, -50.0, 300.0, 50.0), Rect::new(100.0, 18.0, 50.0, 7.0)];
        let start = player_at(80.0, 3.0);
        assert_eq!(first_hit(&start, &walls), None);

        let r = move_free(&start, 6.0, 0.0, &walls);
        assert_eq!(first_hit(&r.bound, &walls), None);
        assert_eq!(r.bound, player_at(80.0, 3.0));
        assert!(r.blocked_x && !r.blocked_y);
    }

    #[test]
    fn test_free_push_does_not_tunnel_through_tall_wall() {
        // Diagonal into a shaft corner: escaping the right wall vertically
        // would jump 120px, so the player is pushed back along X then up
        let walls = [
            Rect::new(20.0, -100.0, 50.0, 400.0),
            Rect::new(-100.0, 20.0, 400.0, 50.0),
            Rect::new(-50.0, -100.0, 50.0, 400.0),
        ];
        let r = move_free(&player_at(0.0, 0.0), 6.0, 6.0, &walls);
        assert_eq!(r.bound, player_at(0.0, 0.0));
        assert!(r.blocked_x && r.blocked_y);
        assert!(r.grounded);
    }

    #[test]
    fn test_free_never_ends_inside_dense_walls() {
        // 8px blocks, moves of at most 7px
        let mut walls = Vec::new();
        for i in 0..8 {
            for j in 0..8 {
                walls.push(Rect::new(i as f32 * 31.0, j as f32 * 29.0, 8.0, 8.0));
            }
        }
        let mut p = player_at(-40.0, -40.0);
        assert_eq!(first_hit(&p, &walls), None);

        let mut seed: u32 = 12345;
        let mut next = || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((seed >> 16) % 15) as f32 - 7.0
        };
        for step in 0..2000 {
            let (dx, dy) = (next(), next());
            p = move_free(&p, dx, dy, &walls).bound;
            assert_eq!(first_hit(&p, &walls), None, "step {}", step);
        }
    }

    #[test]
    fn test_resolvers_never_leave_player_inside_walls() {
        let walls = [
            floor(),
            right_wall(),
            Rect::new(-150.0, -100.0, 50.0, 400.0),
            Rect::new(-100.0, -150.0, 400.0, 50.0),
            Rect::new(30.0, 40.0, 25.0, 25.0),
        ];
        let moves: [(f32, f32); 8] = [
            (10.0, 0.0), (-10.0, 0.0), (0.0, 10.0), (0.0, -10.0),
            (7.0, 7.0), (-7.0, 7.0), (7.0, -7.0), (-7.0, -7.0),
        ];

        let mut a = player_at(0.0, 0.0);
        let mut b = player_at(0.0, 0.0);
        let mut c = player_at(0.0, 0.0);
        for step in 0..400 {
            let (dx, dy) = moves[(step * 5 + step / 7) % moves.len()];
            a = move_blocked(&a, dx, dy, &walls).bound;
            b = move_platformer(&b, dx, dy, &walls).bound;
            c = move_free(&c, dx, dy, &walls).bound;
            assert_eq!(first_hit(&a, &walls), None, "blocked step {}", step);
            assert_eq!(first_hit(&b, &walls), None, "platformer step {}", step);
            assert_eq!(first_hit(&c, &walls), None, "free step {}", step);
        }
    }
}
