//! Collision predicates for the rectangular arena
//!
//! Everything is axis-aligned, so a "collision" is a containment test plus a
//! sign flip on one velocity component. Bricks are tested against the ball's
//! current center; walls, paddle and floor are tested against the projected
//! next position (`pos + vel`) so the reflection lands before the move is
//! committed.

use glam::Vec2;

/// Point-in-rect containment with exclusive edges.
///
/// The ball is treated as a point for brick tests; its radius only matters
/// at the arena walls.
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    point.x > origin.x
        && point.x < origin.x + size.x
        && point.y > origin.y
        && point.y < origin.y + size.y
}

/// True when the projected x puts the ball within `radius` of either
/// vertical wall.
pub fn hits_side_wall(projected_x: f32, radius: f32, arena_width: f32) -> bool {
    projected_x > arena_width - radius || projected_x < radius
}

/// True when the projected y puts the ball within `radius` of the top wall.
pub fn hits_ceiling(projected_y: f32, radius: f32) -> bool {
    projected_y < radius
}

/// What happens at the floor line this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorOutcome {
    /// Ball stays above the floor line.
    None,
    /// Ball reached the floor over the paddle and bounces back up.
    PaddleBounce,
    /// Ball crossed the floor outside the paddle span: life loss.
    Miss,
}

/// Classify the floor crossing for this tick.
///
/// The crossing is detected on the projected y, but the paddle span test
/// uses the ball's current x, matching the order the checks run in.
pub fn floor_outcome(
    projected_y: f32,
    ball_x: f32,
    radius: f32,
    arena_height: f32,
    paddle_x: f32,
    paddle_width: f32,
) -> FloorOutcome {
    if projected_y <= arena_height - radius {
        return FloorOutcome::None;
    }
    if ball_x > paddle_x && ball_x < paddle_x + paddle_width {
        FloorOutcome::PaddleBounce
    } else {
        FloorOutcome::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_in_rect_is_exclusive_at_edges() {
        let origin = Vec2::new(30.0, 30.0);
        let size = Vec2::new(75.0, 20.0);

        assert!(point_in_rect(Vec2::new(60.0, 40.0), origin, size));
        // Exactly on an edge does not count.
        assert!(!point_in_rect(Vec2::new(30.0, 40.0), origin, size));
        assert!(!point_in_rect(Vec2::new(105.0, 40.0), origin, size));
        assert!(!point_in_rect(Vec2::new(60.0, 30.0), origin, size));
        assert!(!point_in_rect(Vec2::new(60.0, 50.0), origin, size));
    }

    #[test]
    fn side_wall_triggers_within_radius() {
        assert!(hits_side_wall(9.0, 10.0, 480.0));
        assert!(hits_side_wall(471.0, 10.0, 480.0));
        assert!(!hits_side_wall(240.0, 10.0, 480.0));
        // Exactly at the radius line is not a hit.
        assert!(!hits_side_wall(10.0, 10.0, 480.0));
        assert!(!hits_side_wall(470.0, 10.0, 480.0));
    }

    #[test]
    fn ceiling_triggers_within_radius() {
        assert!(hits_ceiling(9.5, 10.0));
        assert!(!hits_ceiling(10.0, 10.0));
    }

    #[test]
    fn floor_outcome_none_above_the_line() {
        let outcome = floor_outcome(300.0, 240.0, 10.0, 320.0, 202.5, 75.0);
        assert_eq!(outcome, FloorOutcome::None);
    }

    #[test]
    fn floor_outcome_bounce_over_paddle() {
        let outcome = floor_outcome(311.0, 240.0, 10.0, 320.0, 202.5, 75.0);
        assert_eq!(outcome, FloorOutcome::PaddleBounce);
    }

    #[test]
    fn floor_outcome_miss_outside_paddle() {
        let outcome = floor_outcome(311.0, 50.0, 10.0, 320.0, 202.5, 75.0);
        assert_eq!(outcome, FloorOutcome::Miss);

        // Paddle edges are exclusive, same as the brick test.
        let at_edge = floor_outcome(311.0, 202.5, 10.0, 320.0, 202.5, 75.0);
        assert_eq!(at_edge, FloorOutcome::Miss);
    }
}
