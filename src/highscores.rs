//! High score leaderboard
//!
//! Tracks the best finished episodes of a session, top 10 by score.

use serde::{Deserialize, Serialize};

use crate::sim::{EpisodePhase, GameState, Termination};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Coins collected
    pub score: u32,
    /// Steps survived
    pub distance: u32,
    /// Seed that reproduces the episode
    pub seed: u64,
    /// How it ended
    pub ended_by: Option<Termination>,
}

impl HighScoreEntry {
    pub fn from_state(state: &GameState) -> Self {
        let ended_by = match state.phase {
            EpisodePhase::Terminated(reason) => Some(reason),
            EpisodePhase::Running => None,
        };
        Self {
            score: state.score,
            distance: state.distance,
            seed: state.seed,
            ended_by,
        }
    }

    /// Higher score wins, then longer distance
    fn beats(&self, other: &Self) -> bool {
        (self.score, self.distance) > (other.score, other.distance)
    }
}

/// High score leaderboard, sorted best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if an episode qualifies for the leaderboard
    pub fn qualifies(&self, entry: &HighScoreEntry) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| entry.beats(e)).unwrap_or(true)
    }

    /// Add an episode (if it qualifies).
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(&entry) {
            return None;
        }

        let pos = self.entries.iter().position(|e| entry.beats(e));
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

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top entry (if any)
    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }
}
