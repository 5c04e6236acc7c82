//! Brick Breaker - a classic rectangular-arena arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `config`: Launch-time parameters with fail-fast validation
//! - `highscores`: Local leaderboard persistence
//!
//! The crate is the core loop only. Rendering, input-device capture and
//! audio playback live outside it: each tick exposes read-only snapshots
//! for drawing and a list of discrete [`sim::GameEvent`]s for sound/UI.

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use highscores::HighScores;
