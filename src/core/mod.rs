//! Core engine types: moves, difficulty, configuration, errors, RNG.
//!
//! Everything here is free of match state. The round engine and story mode
//! build on these types.

pub mod moves;
pub mod config;
pub mod error;
pub mod rng;

pub use moves::Move;
pub use config::{BiasSchedule, BossConfig, Difficulty, MatchConfig, DEFAULT_SCORE_GOAL};
pub use error::{EngineError, Result};
pub use rng::{GameRng, RandomSource};
