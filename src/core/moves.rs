//! Moves and the beats-relation.
//!
//! The relation is a 3-cycle: Rock > Scissor > Paper > Rock.
//! Every ordered pair of moves is exactly one of "beats", "loses to" or equal.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;

/// A single hand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissor,
}

impl Move {
    /// All moves in fixed enumeration order.
    ///
    /// This order is also the tie-break order for the frequency tracker.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissor];

    /// Does `self` beat `other`?
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissor) | (Move::Paper, Move::Rock) | (Move::Scissor, Move::Paper)
        )
    }

    /// The move that beats `self`.
    ///
    /// ```
    /// use rust_rps::core::Move;
    ///
    /// assert_eq!(Move::Rock.counter(), Move::Paper);
    /// assert!(Move::Scissor.counter().beats(Move::Scissor));
    /// ```
    #[must_use]
    pub const fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissor,
            Move::Scissor => Move::Rock,
        }
    }

    /// Stable index into `Move::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Normalise free-form recognised speech into a move.
    ///
    /// Looks for the move words as substrings, checked in the order rock,
    /// paper, scissor. Returns `None` when nothing matches; callers treat
    /// that as "no move" and never forward it to the engine.
    #[must_use]
    pub fn from_utterance(text: &str) -> Option<Move> {
        let text = text.to_lowercase();
        if text.contains("rock") {
            Some(Move::Rock)
        } else if text.contains("paper") {
            Some(Move::Paper)
        } else if text.contains("scissor") {
            Some(Move::Scissor)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissor => "scissor",
        };
        f.write_str(name)
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissor" | "scissors" => Ok(Move::Scissor),
            _ => Err(EngineError::InvalidMove(s.to_string())),
        }
    }
}
