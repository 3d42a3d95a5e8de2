//! Opponent move policies.
//!
//! Policies are trait-based so the engine can swap them:
//! - `AdaptiveOpponent`: counters the player's favourite move with a bias
//! - `UniformOpponent`: plays uniformly at random

use crate::core::{Move, RandomSource};
use crate::tracker::MoveFrequency;

/// Policy for choosing the opponent's move.
pub trait OpponentPolicy {
    /// Choose a move given the player's history and the current bias percent.
    fn select(&self, tracker: &MoveFrequency, bias_percent: u8, rng: &mut dyn RandomSource) -> Move;
}

/// Plays the counter to the player's most frequent move with probability
/// `bias_percent`, otherwise a uniformly random move.
///
/// With no recorded history the move is uniformly random. A bias of 100
/// never draws from `rng`; a bias of 0 always takes the uniform branch.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdaptiveOpponent;

impl OpponentPolicy for AdaptiveOpponent {
    fn select(&self, tracker: &MoveFrequency, bias_percent: u8, rng: &mut dyn RandomSource) -> Move {
        if tracker.is_empty() {
            return rng.any_move();
        }
        let counter = tracker.most_frequent(rng).counter();
        if rng.chance(bias_percent) {
            counter
        } else {
            rng.any_move()
        }
    }
}

/// Ignores history entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn select(&self, _tracker: &MoveFrequency, _bias_percent: u8, rng: &mut dyn RandomSource) -> Move {
        rng.any_move()
    }
}
