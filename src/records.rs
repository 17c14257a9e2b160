//! Best-run leaderboard
//!
//! Tracks the top runs of a session. Persistence is the embedder's
//! concern; the core only keeps the ranked list.

use serde::{Deserialize, Serialize};

/// Maximum number of runs to keep
pub const MAX_RECORDS: usize = 10;

/// A single finished run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEntry {
    /// Final score
    pub score: u64,
    /// Distance traveled along the track
    pub distance: f32,
    /// Game time survived (seconds)
    pub elapsed: f64,
}

/// Ranked list of best runs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Records {
    pub entries: Vec<RunEntry>,
}

impl Records {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the list
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_RECORDS {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a finished run (if it qualifies)
    ///
    /// Returns the rank achieved (1-indexed) or None if it didn't
    /// qualify.
    pub fn add_run(&mut self, score: u64, distance: f32, elapsed: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = RunEntry {
            score,
            distance,
            elapsed,
        };

        // Insertion point in the descending-by-score order
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

        self.entries.truncate(MAX_RECORDS);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The best score so far (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
