//! Per-move counts of the human player's choices.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Move, RandomSource};

/// Counts of each move the player has made this match.
///
/// Every move always has an entry. Counts only grow, except on `reset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveFrequency {
    counts: FxHashMap<Move, u32>,
}

impl Default for MoveFrequency {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveFrequency {
    /// Create a tracker with every count at zero.
    pub fn new() -> Self {
        Self {
            counts: Move::ALL.iter().map(|&m| (m, 0)).collect(),
        }
    }

    /// Record one player move.
    pub fn record(&mut self, mv: Move) {
        *self.counts.entry(mv).or_insert(0) += 1;
    }

    /// How many times `mv` was played.
    #[must_use]
    pub fn count(&self, mv: Move) -> u32 {
        self.counts.get(&mv).copied().unwrap_or(0)
    }

    /// Total moves recorded.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The most played move, or `None` before any move is recorded.
    ///
    /// Ties go to the earliest move in `Move::ALL` order (rock, paper, scissor).
    #[must_use]
    pub fn leader(&self) -> Option<Move> {
        let mut best: Option<(Move, u32)> = None;
        for mv in Move::ALL {
            let count = self.count(mv);
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((mv, count));
            }
        }
        best.map(|(mv, _)| mv)
    }

    /// The most played move, falling back to a uniformly random move when
    /// nothing has been recorded.
    pub fn most_frequent(&self, rng: &mut dyn RandomSource) -> Move {
        self.leader().unwrap_or_else(|| rng.any_move())
    }

    /// Zero every count.
    pub fn reset(&mut self) {
        for count in self.counts.values_mut() {
            *count = 0;
        }
    }
}
