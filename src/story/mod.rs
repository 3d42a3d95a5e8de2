//! Story mode: a ladder of sequential opponents.
//!
//! Each opponent is a fresh match with its own goal and difficulty.
//! Beating an opponent moves to the next one; losing restarts the ladder.

mod ladder;
mod mode;

pub use ladder::{Opponent, StoryLadder};
pub use mode::{StoryMode, StoryProgress, StoryRound};
