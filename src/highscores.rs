//! High score leaderboard table
//!
//! Tracks the top 10 scores for a game post. The table itself is the data
//! contract: the host serializes it into its own key-value record and owns
//! all display. The core only feeds it terminal round scores.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final round score
    pub score: u64,
    /// Round index the score was achieved in
    pub round: u32,
    /// Unix timestamp (ms) when achieved, supplied by the host
    pub timestamp: f64,
}

/// High score leaderboard, sorted descending by score
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

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64, round: u32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            round,
            timestamp,
        };

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

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_add_score_keeps_descending_order() {
        let mut scores = HighScores::new();
        scores.add_score(50, 1, 0.0);
        scores.add_score(100, 2, 0.0);
        scores.add_score(75, 3, 0.0);

        let values: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![100, 75, 50]);
    }

    #[test]
    fn test_table_truncates_to_max() {
        let mut scores = HighScores::new();
        for i in 1..=15u64 {
            scores.add_score(i * 10, i as u32, 0.0);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(150));
        // The lowest surviving entry beat the evicted ones
        assert_eq!(scores.entries.last().unwrap().score, 60);
    }

    #[test]
    fn test_rank_reporting() {
        let mut scores = HighScores::new();
        scores.add_score(100, 1, 0.0);
        scores.add_score(50, 2, 0.0);

        assert_eq!(scores.potential_rank(75), Some(2));
        let rank = scores.add_score(75, 3, 0.0);
        assert_eq!(rank, Some(2));
    }

    #[test]
    fn test_full_table_rejects_low_scores() {
        let mut scores = HighScores::new();
        for i in 1..=10u64 {
            scores.add_score(i * 10, i as u32, 0.0);
        }
        assert!(!scores.qualifies(5));
        assert_eq!(scores.add_score(5, 11, 0.0), None);
    }
}
