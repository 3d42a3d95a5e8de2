//! Story mode: beat each opponent in the ladder in turn.

use tracing::info;

use crate::core::{EngineError, GameRng, Move, Result};
use crate::rules::{MatchStatus, RoundEngine, RoundOutcome};

use super::ladder::{Opponent, StoryLadder};

/// What a round did to story progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoryProgress {
    /// The bout continues.
    Fighting,
    /// Current opponent beaten; now facing the opponent at `stage`.
    Advanced { stage: usize },
    /// Last opponent beaten.
    Completed,
    /// Lost the bout; the ladder restarts from the first opponent.
    Defeated,
}

/// Result of one story round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryRound {
    pub outcome: RoundOutcome,
    pub progress: StoryProgress,
}

/// Runs a story ladder, one fresh match per opponent.
///
/// Each bout gets its own RNG forked from the story's master RNG, so a story
/// seeded the same way replays identically.
#[derive(Clone, Debug)]
pub struct StoryMode {
    ladder: StoryLadder,
    stage: usize,
    rng: GameRng,
    engine: RoundEngine,
}

impl StoryMode {
    /// Start at the first opponent.
    pub fn new(ladder: StoryLadder, mut rng: GameRng) -> Result<Self> {
        ladder.validate()?;
        let engine = bout(&ladder, 0, &mut rng)?;
        info!(stages = ladder.len(), seed = rng.seed(), "story mode started");
        Ok(Self {
            ladder,
            stage: 0,
            rng,
            engine,
        })
    }

    /// Index of the current opponent. Equals the ladder length once completed.
    #[must_use]
    pub fn stage(&self) -> usize {
        self.stage
    }

    /// Current opponent, or `None` once the story is completed.
    #[must_use]
    pub fn opponent(&self) -> Option<&Opponent> {
        self.ladder.get(self.stage)
    }

    #[must_use]
    pub fn ladder(&self) -> &StoryLadder {
        &self.ladder
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.stage >= self.ladder.len()
    }

    /// Match against the current opponent.
    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Mutable access for cheats and reconfiguration of the current bout.
    pub fn engine_mut(&mut self) -> &mut RoundEngine {
        &mut self.engine
    }

    /// Play one round against the current opponent.
    pub fn play_round(&mut self, player_move: Move) -> Result<StoryRound> {
        if self.is_completed() {
            return Err(EngineError::StoryComplete);
        }

        let outcome = self.engine.play_round(player_move)?;
        let progress = match outcome.status {
            MatchStatus::PlayerVictory | MatchStatus::BossDefeated => self.advance()?,
            MatchStatus::OpponentVictory => {
                info!(stage = self.stage, "story bout lost");
                self.restart()?;
                StoryProgress::Defeated
            }
            MatchStatus::Ongoing | MatchStatus::BossWeakened => StoryProgress::Fighting,
        };

        Ok(StoryRound { outcome, progress })
    }

    /// Go back to the first opponent with a fresh bout.
    pub fn restart(&mut self) -> Result<()> {
        self.stage = 0;
        self.engine = bout(&self.ladder, 0, &mut self.rng)?;
        Ok(())
    }

    fn advance(&mut self) -> Result<StoryProgress> {
        self.stage += 1;
        if self.is_completed() {
            info!("story mode completed");
            return Ok(StoryProgress::Completed);
        }
        self.engine = bout(&self.ladder, self.stage, &mut self.rng)?;
        info!(stage = self.stage, "story advanced to next opponent");
        Ok(StoryProgress::Advanced { stage: self.stage })
    }
}

fn bout(ladder: &StoryLadder, stage: usize, rng: &mut GameRng) -> Result<RoundEngine> {
    let opponent = ladder
        .get(stage)
        .ok_or_else(|| EngineError::InvalidConfig(format!("no opponent at stage {stage}")))?;
    RoundEngine::new(opponent.match_config(), rng.fork())
}
