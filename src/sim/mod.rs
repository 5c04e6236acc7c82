//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to [`tick`] = one fixed logical step (velocities are in
//!   pixels per tick; effective speed is tied to invocation frequency)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{FloorOutcome, floor_outcome, hits_ceiling, hits_side_wall, point_in_rect};
pub use grid::{Brick, BrickGrid, BrickView};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
