//! # rust-rps
//!
//! A rock-paper-scissors round engine with an adaptive opponent.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No windows, sound or speech capture. Front-ends
//!    collect a `Move` from any input and call the engine.
//!
//! 2. **Injectable Randomness**: The opponent draws from a `RandomSource`,
//!    so tests can script exact sequences.
//!
//! 3. **Configuration Over Variants**: Goal, difficulty, boss phase and
//!    bias schedule are `MatchConfig` values, not separate game modes.
//!
//! ## Modules
//!
//! - `core`: Moves, difficulty, configuration, errors, RNG
//! - `tracker`: Frequency of the player's moves
//! - `rules`: Round engine, match state, opponent policies
//! - `story`: Ladder of sequential opponents
//! - `console`: Typed command parsing and the secret code buffer

pub mod core;
pub mod tracker;
pub mod rules;
pub mod story;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    BiasSchedule, BossConfig, Difficulty, EngineError, GameRng, MatchConfig, Move, RandomSource,
};

pub use crate::tracker::MoveFrequency;

pub use crate::rules::{
    AdaptiveOpponent, MatchState, MatchStatus, OpponentPolicy, Outcome, RoundEngine, RoundOutcome,
    UniformOpponent,
};

pub use crate::story::{Opponent, StoryLadder, StoryMode, StoryProgress, StoryRound};

pub use crate::console::{Command, ConsoleError, Input, SecretBuffer};
