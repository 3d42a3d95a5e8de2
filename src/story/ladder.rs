//! Ordered list of story opponents.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Difficulty, EngineError, MatchConfig, Result};

/// One opponent in the story ladder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    pub name: String,
    pub difficulty: Difficulty,
    /// Wins needed to beat this opponent.
    pub score_goal: u32,
}

impl Opponent {
    pub fn new(name: impl Into<String>, difficulty: Difficulty, score_goal: u32) -> Self {
        Self {
            name: name.into(),
            difficulty,
            score_goal,
        }
    }

    /// Match configuration for a bout against this opponent.
    ///
    /// Story bouts have no boss phase.
    #[must_use]
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::new()
            .with_score_goal(self.score_goal)
            .with_difficulty(self.difficulty)
            .without_boss()
    }
}

/// Opponents fought in order.
///
/// SmallVec keeps the usual three-opponent ladder inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryLadder {
    opponents: SmallVec<[Opponent; 4]>,
}

impl Default for StoryLadder {
    /// Ghost Bot (easy, 2), Witch Bot (medium, 3), Boss Bot (hard, 4).
    fn default() -> Self {
        Self::new()
            .with_opponent(Opponent::new("Ghost Bot", Difficulty::Easy, 2))
            .with_opponent(Opponent::new("Witch Bot", Difficulty::Medium, 3))
            .with_opponent(Opponent::new("Boss Bot", Difficulty::Hard, 4))
    }
}

impl StoryLadder {
    /// Create an empty ladder.
    pub fn new() -> Self {
        Self {
            opponents: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_opponent(mut self, opponent: Opponent) -> Self {
        self.opponents.push(opponent);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.opponents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opponents.is_empty()
    }

    #[must_use]
    pub fn get(&self, stage: usize) -> Option<&Opponent> {
        self.opponents.get(stage)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Opponent> {
        self.opponents.iter()
    }

    /// Reject empty ladders and opponents that cannot be beaten.
    pub fn validate(&self) -> Result<()> {
        if self.opponents.is_empty() {
            return Err(EngineError::InvalidConfig("story ladder has no opponents".to_string()));
        }
        for opponent in &self.opponents {
            opponent.match_config().validate().map_err(|e| {
                EngineError::InvalidConfig(format!("opponent {:?}: {e}", opponent.name))
            })?;
        }
        Ok(())
    }
}
