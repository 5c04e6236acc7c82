//! One simulation tick
//!
//! Runs the collision/scoring pass in a fixed order, applies paddle intent,
//! then integrates the ball. One call advances everything by exactly one
//! logical step; the host's frame scheduler decides the cadence.

use super::collision::{self, FloorOutcome};
use super::state::{GameEvent, GamePhase, GameState};

/// Directional intent sampled once per tick
///
/// Set/cleared by input events outside the tick, read at its start; the
/// core never sees key identities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left_held: bool,
    pub right_held: bool,
}

/// Advance the game by one tick. Returns the events this tick produced, in
/// the order they occurred. A terminal state returns immediately with no
/// events and no mutation.
pub fn tick(state: &mut GameState, input: TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::GameOver {
        return events;
    }
    state.time_ticks += 1;

    // Brick positions count as grid state for collision purposes; recompute
    // them up front (idempotent).
    state.grid.layout(&state.config.bricks);

    // 1. Brick pass: containment of the current center, first alive match in
    //    column-then-row scan order, at most one brick per tick.
    if let Some((col, row)) = state.grid.first_hit(state.ball.pos, &state.config.bricks) {
        state.ball.vel.y = -state.ball.vel.y;
        state.grid.mark_destroyed(col, row);
        state.score += 1;
        events.push(GameEvent::BrickBroken);
        log::debug!("brick ({col},{row}) broken, score {}", state.score);
        if state.grid.is_cleared() {
            state.level_up();
            events.push(GameEvent::LevelUp(state.level));
            log::debug!("grid cleared, level {}", state.level);
        }
    }

    // 2-3. Walls, paddle and floor, tested against the projected next
    //      position with the post-brick velocity.
    let radius = state.ball.radius;
    let arena = state.config.arena;
    let projected = state.ball.projected();

    if collision::hits_side_wall(projected.x, radius, arena.width) {
        state.ball.vel.x = -state.ball.vel.x;
        events.push(GameEvent::WallHit);
    }
    if collision::hits_ceiling(projected.y, radius) {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallHit);
    } else {
        match collision::floor_outcome(
            projected.y,
            state.ball.pos.x,
            radius,
            arena.height,
            state.paddle.x,
            state.paddle.width,
        ) {
            FloorOutcome::None => {}
            FloorOutcome::PaddleBounce => {
                state.ball.vel.y = -state.ball.vel.y;
                events.push(GameEvent::PaddleHit);
            }
            FloorOutcome::Miss => {
                state.lives -= 1;
                if state.lives == 0 {
                    state.phase = GamePhase::GameOver;
                    events.push(GameEvent::GameOver);
                    log::debug!("terminal: game over at score {}", state.score);
                } else {
                    state.reset_serve();
                    events.push(GameEvent::LifeLost(state.lives));
                    log::debug!("life lost, {} remaining", state.lives);
                }
                // The serve reset (or terminal state) replaces the normal
                // move: no intent, no integration this tick.
                return events;
            }
        }
    }

    // 4. Apply paddle intent, then commit the move.
    state
        .paddle
        .apply_intent(input.left_held, input.right_held, arena.width);
    state.ball.integrate();
    events
}
