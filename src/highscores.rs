//! High score leaderboard
//!
//! Persisted as a JSON file, tracks the top 10 runs.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final score of the run
    pub score: u32,
    /// Level reached
    pub level: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp_ms: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a run to the leaderboard if it qualifies.
    /// Returns the rank achieved (1-indexed) or None.
    pub fn add_score(&mut self, score: u32, level: u32, timestamp_ms: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            level,
            timestamp_ms,
        };

        // Insert sorted descending by score.
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the leaderboard, falling back to an empty one on any failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scores) => {
                    log::info!("loaded high scores from {}", path.as_ref().display());
                    scores
                }
                Err(e) => {
                    log::warn!("high score file unreadable ({e}), starting fresh");
                    Self::new()
                }
            },
            Err(_) => Self::new(),
        }
    }

    /// Persist the leaderboard; failures are logged, never fatal.
    pub fn save(&self, path: impl AsRef<Path>) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path.as_ref(), json) {
                    log::warn!("failed to save high scores: {e}");
                }
            }
            Err(e) => log::warn!("failed to serialize high scores: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn scores_rank_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(10, 1, 0), Some(1));
        assert_eq!(scores.add_score(30, 2, 1), Some(1));
        assert_eq!(scores.add_score(20, 2, 2), Some(2));
        assert_eq!(scores.top_score(), Some(30));
    }

    #[test]
    fn leaderboard_truncates_to_capacity() {
        let mut scores = HighScores::new();
        for i in 1..=15 {
            scores.add_score(i, 1, i as u64);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // Only the top ten survive.
        assert_eq!(scores.top_score(), Some(15));
        assert_eq!(scores.entries.last().unwrap().score, 6);
        // A score below the floor no longer qualifies.
        assert_eq!(scores.add_score(5, 1, 99), None);
    }
}
