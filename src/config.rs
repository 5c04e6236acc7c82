//! Launch-time game configuration
//!
//! Every value here is fixed for the duration of a session. Malformed
//! configuration is rejected before the loop begins rather than producing
//! undefined behavior mid-game.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration rejected at session start
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("arena dimensions must be positive")]
    InvalidArena,
    #[error("ball radius, speed and serve height must be positive")]
    InvalidBall,
    #[error("paddle must have positive dimensions and step, and fit inside the arena")]
    InvalidPaddle,
    #[error("brick grid needs at least one row and one column")]
    EmptyGrid,
    #[error("brick dimensions must be positive and padding/offsets non-negative")]
    InvalidBrick,
    #[error("brick layout does not fit inside the arena")]
    LayoutOverflow,
    #[error("at least one life is required")]
    NoLives,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The bounded rectangular playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 320.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    /// Per-axis velocity magnitude at level 1, in pixels per tick.
    pub speed: f32,
    /// Added to each velocity component's magnitude on level-up.
    pub speed_increment: f32,
    /// Serve position height above the arena floor.
    pub serve_height: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            speed: 2.0,
            speed_increment: 0.5,
            serve_height: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Horizontal distance moved per tick of held intent.
    pub step: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 75.0,
            height: 10.0,
            step: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConfig {
    pub row_count: u32,
    pub column_count: u32,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            row_count: 3,
            column_count: 5,
            width: 75.0,
            height: 20.0,
            padding: 10.0,
            offset_top: 30.0,
            offset_left: 30.0,
        }
    }
}

impl BrickConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Total destroyable bricks in a fresh grid.
    pub fn total(&self) -> u32 {
        self.row_count * self.column_count
    }

    /// Width/height of the laid-out grid including offsets.
    fn extent(&self) -> Vec2 {
        let cols = self.column_count as f32;
        let rows = self.row_count as f32;
        Vec2::new(
            self.offset_left + cols * (self.width + self.padding) - self.padding,
            self.offset_top + rows * (self.height + self.padding) - self.padding,
        )
    }
}

/// Complete session configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub arena: ArenaConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    pub bricks: BrickConfig,
    pub lives: Lives,
}

/// Starting lives, newtyped so `#[serde(default)]` can default to 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lives(pub u8);

impl Default for Lives {
    fn default() -> Self {
        Self(3)
    }
}

impl GameConfig {
    /// Reject malformed configuration before the first tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.width <= 0.0 || self.arena.height <= 0.0 {
            return Err(ConfigError::InvalidArena);
        }
        if self.ball.radius <= 0.0
            || self.ball.speed <= 0.0
            || self.ball.speed_increment < 0.0
            || self.ball.serve_height <= 0.0
        {
            return Err(ConfigError::InvalidBall);
        }
        if self.paddle.width <= 0.0
            || self.paddle.height <= 0.0
            || self.paddle.step <= 0.0
            || self.paddle.width > self.arena.width
        {
            return Err(ConfigError::InvalidPaddle);
        }
        if self.bricks.row_count == 0 || self.bricks.column_count == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.bricks.width <= 0.0
            || self.bricks.height <= 0.0
            || self.bricks.padding < 0.0
            || self.bricks.offset_top < 0.0
            || self.bricks.offset_left < 0.0
        {
            return Err(ConfigError::InvalidBrick);
        }
        let extent = self.bricks.extent();
        if extent.x > self.arena.width || extent.y > self.arena.height {
            return Err(ConfigError::LayoutOverflow);
        }
        if self.lives.0 == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Fixed serve position: horizontally centered, just above the floor.
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.arena.width / 2.0,
            self.arena.height - self.ball.serve_height,
        )
    }

    /// Paddle rest position: centered on the floor.
    pub fn paddle_start_x(&self) -> f32 {
        (self.arena.width - self.paddle.width) / 2.0
    }
}
