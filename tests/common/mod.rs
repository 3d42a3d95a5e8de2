//! Shared test helpers.

use rust_rps::{Move, RandomSource};
use std::collections::VecDeque;

/// Random source that replays scripted values.
///
/// `any_move` pops the next scripted move and panics when the script runs
/// out. `chance` honours the 0/100 boundaries, otherwise pops the next
/// scripted coin (defaulting to `false`).
#[derive(Debug, Default)]
pub struct ScriptedRng {
    moves: VecDeque<Move>,
    coins: VecDeque<bool>,
}

impl ScriptedRng {
    pub fn new(moves: &[Move]) -> Self {
        Self {
            moves: moves.iter().copied().collect(),
            coins: VecDeque::new(),
        }
    }

    #[allow(dead_code)]
    pub fn with_coins(mut self, coins: &[bool]) -> Self {
        self.coins = coins.iter().copied().collect();
        self
    }

    #[allow(dead_code)]
    pub fn remaining_moves(&self) -> usize {
        self.moves.len()
    }
}

impl RandomSource for ScriptedRng {
    fn chance(&mut self, percent: u8) -> bool {
        match percent {
            0 => false,
            p if p >= 100 => true,
            _ => self.coins.pop_front().unwrap_or(false),
        }
    }

    fn any_move(&mut self) -> Move {
        self.moves.pop_front().expect("scripted moves exhausted")
    }
}
