//! Brick Breaker headless runner
//!
//! Drives the core loop with a simple autopilot paddle so the simulation can
//! be exercised without a renderer. The boundary collaborators (render,
//! audio, score display) are represented here by log output.

use std::time::{SystemTime, UNIX_EPOCH};

use brick_breaker::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use brick_breaker::{GameConfig, HighScores};

const HIGH_SCORE_FILE: &str = "highscores.json";

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Track the ball with the paddle center, with a one-step deadzone so the
/// paddle does not jitter when it is already underneath the ball.
fn autopilot(state: &GameState) -> TickInput {
    let target = state.ball.pos.x;
    let center = state.paddle.center();
    let deadzone = state.paddle.step;
    TickInput {
        left_held: target < center - deadzone,
        right_held: target > center + deadzone,
    }
}

fn main() {
    env_logger::init();

    let mut seed = now_ms();
    let mut max_ticks: u64 = 120_000;
    let mut config = GameConfig::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                    seed = v;
                }
            }
            "--ticks" => {
                if let Some(v) = args.next().and_then(|v| v.parse().ok()) {
                    max_ticks = v;
                }
            }
            "--config" => {
                let path = args.next().unwrap_or_default();
                match GameConfig::load(&path) {
                    Ok(c) => config = c,
                    Err(e) => {
                        log::error!("rejected config {path}: {e}");
                        std::process::exit(1);
                    }
                }
            }
            other => log::warn!("ignoring unknown argument {other}"),
        }
    }

    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    log::info!("session started, seed {seed}");

    while state.phase == GamePhase::Playing && state.time_ticks < max_ticks {
        let input = autopilot(&state);
        for event in tick(&mut state, input) {
            match event {
                GameEvent::LevelUp(level) => log::info!("LEVEL {level}!"),
                GameEvent::LifeLost(lives) => log::info!("life lost, {lives} remaining"),
                GameEvent::GameOver => log::info!("GAME OVER"),
                // Brick/wall/paddle events are where an audio boundary
                // would trigger playback.
                _ => log::debug!("{event:?}"),
            }
        }
    }

    println!(
        "score {} | level {} | lives {} | {} ticks",
        state.score, state.level, state.lives, state.time_ticks
    );

    let mut scores = HighScores::load(HIGH_SCORE_FILE);
    if let Some(rank) = scores.add_score(state.score, state.level, now_ms()) {
        log::info!("new high score, rank {rank}");
        scores.save(HIGH_SCORE_FILE);
    }
}
