//! Round engine: resolves one round per call and tracks the match.
//!
//! ## Match lifecycle
//!
//! `Ongoing` until a round produces `PlayerVictory`, `OpponentVictory` or
//! `BossDefeated`. A terminal match rejects further rounds with
//! `MatchConcluded` until `reset` is called. `BossWeakened` is reported on
//! the round but leaves the match ongoing.
//!
//! ## Boss phase
//!
//! Once the player's score reaches the boss threshold the boss appears and
//! winning requires `score_goal + extra_margin`. The opponent's win condition
//! is unchanged while the boss is up.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::validate_score_goal;
use crate::core::{
    BossConfig, Difficulty, EngineError, GameRng, MatchConfig, Move, RandomSource, Result,
};
use crate::tracker::MoveFrequency;

use super::opponent::{AdaptiveOpponent, OpponentPolicy};
use super::outcome::{MatchStatus, Outcome, RoundOutcome};

/// Mutable record of one match.
///
/// Uses an `im` vector for the round history so snapshots clone in O(1).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,
    player_score: u32,
    opponent_score: u32,
    bonus_used: bool,
    boss_active: bool,
    boss_defeated: bool,
    tracker: MoveFrequency,
    /// `Ongoing` or a terminal status. `BossWeakened` is never stored.
    status: MatchStatus,
    round: u32,
    history: Vector<RoundOutcome>,
}

impl MatchState {
    /// Fresh state for a new match.
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            player_score: 0,
            opponent_score: 0,
            bonus_used: false,
            boss_active: false,
            boss_defeated: false,
            tracker: MoveFrequency::new(),
            status: MatchStatus::Ongoing,
            round: 0,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    #[must_use]
    pub fn opponent_score(&self) -> u32 {
        self.opponent_score
    }

    #[must_use]
    pub fn bonus_used(&self) -> bool {
        self.bonus_used
    }

    #[must_use]
    pub fn boss_active(&self) -> bool {
        self.boss_active
    }

    #[must_use]
    pub fn boss_defeated(&self) -> bool {
        self.boss_defeated
    }

    #[must_use]
    pub fn tracker(&self) -> &MoveFrequency {
        &self.tracker
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Rounds played this match, ties included.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn history(&self) -> &Vector<RoundOutcome> {
        &self.history
    }

    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.status.is_terminal()
    }

    /// Score the player needs to end the match right now.
    #[must_use]
    pub fn target_score(&self) -> u32 {
        if self.boss_active {
            self.config.score_goal.saturating_add(self.boss_margin())
        } else {
            self.config.score_goal
        }
    }

    fn boss_margin(&self) -> u32 {
        self.config.boss.unwrap_or_default().extra_margin
    }

    /// Clear everything except configuration.
    fn reset(&mut self) {
        self.player_score = 0;
        self.opponent_score = 0;
        self.bonus_used = false;
        self.boss_active = false;
        self.boss_defeated = false;
        self.tracker.reset();
        self.status = MatchStatus::Ongoing;
        self.round = 0;
        self.history = Vector::new();
    }
}

/// Owns one match and resolves its rounds.
///
/// Every mutating call takes `&mut self`, so calls on one match are
/// serialized by construction.
///
/// ```
/// use rust_rps::core::{GameRng, MatchConfig, Move};
/// use rust_rps::rules::RoundEngine;
///
/// let mut engine = RoundEngine::new(MatchConfig::new(), GameRng::new(42)).unwrap();
/// let round = engine.play_round(Move::Rock).unwrap();
/// assert_eq!(round.player_move, Move::Rock);
/// assert_eq!(engine.state().tracker().count(Move::Rock), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine<R: RandomSource = GameRng, P: OpponentPolicy = AdaptiveOpponent> {
    state: MatchState,
    rng: R,
    policy: P,
}

impl<R: RandomSource> RoundEngine<R, AdaptiveOpponent> {
    /// Start a match against the adaptive opponent.
    pub fn new(config: MatchConfig, rng: R) -> Result<Self> {
        Self::with_policy(config, rng, AdaptiveOpponent)
    }
}

impl<R: RandomSource, P: OpponentPolicy> RoundEngine<R, P> {
    /// Start a match against a custom opponent policy.
    pub fn with_policy(config: MatchConfig, rng: R, policy: P) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: MatchState::new(config),
            rng,
            policy,
        })
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.state.player_score
    }

    #[must_use]
    pub fn opponent_score(&self) -> u32 {
        self.state.opponent_score
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.state.status
    }

    /// Current chance (percent) that the opponent counters the player.
    #[must_use]
    pub fn bias_percent(&self) -> u8 {
        self.state.config.bias_percent(self.state.boss_active)
    }

    /// Choose the opponent's move from the current tracker and bias.
    pub fn select_opponent_move(&mut self) -> Move {
        let bias = self.bias_percent();
        self.policy.select(&self.state.tracker, bias, &mut self.rng)
    }

    /// Resolve one round.
    ///
    /// Fails with `MatchConcluded` if the match already ended.
    pub fn play_round(&mut self, player_move: Move) -> Result<RoundOutcome> {
        self.ensure_ongoing()?;

        self.state.tracker.record(player_move);
        let opponent_move = self.select_opponent_move();

        let outcome = Outcome::resolve(player_move, opponent_move);
        match outcome {
            Outcome::PlayerWin => self.state.player_score += 1,
            Outcome::OpponentWin => self.state.opponent_score += 1,
            Outcome::Tie => {}
        }

        self.check_for_boss();
        let status = self.evaluate_victory();
        if status.is_terminal() {
            self.state.status = status;
            info!(
                %status,
                player = self.state.player_score,
                opponent = self.state.opponent_score,
                "match concluded"
            );
        }

        self.state.round += 1;
        let result = RoundOutcome {
            round: self.state.round,
            player_move,
            opponent_move,
            outcome,
            status,
            player_score: self.state.player_score,
            opponent_score: self.state.opponent_score,
        };
        debug!(
            round = result.round,
            player = %player_move,
            opponent = %opponent_move,
            ?outcome,
            %status,
            "round resolved"
        );
        self.state.history.push_back(result.clone());

        Ok(result)
    }

    /// One-time +1 to the player's score.
    ///
    /// Runs the boss check but does not evaluate victory; the next round does.
    pub fn apply_bonus(&mut self) -> Result<()> {
        self.ensure_ongoing()?;
        if self.state.bonus_used {
            return Err(EngineError::AlreadyUsed);
        }
        self.state.bonus_used = true;
        self.state.player_score += 1;
        info!(player = self.state.player_score, "bonus applied");
        self.check_for_boss();
        Ok(())
    }

    /// +1 to the player's score from the secret code. Not limited per match.
    pub fn apply_secret_bonus(&mut self) -> Result<()> {
        self.ensure_ongoing()?;
        self.state.player_score += 1;
        info!(player = self.state.player_score, "secret code bonus applied");
        self.check_for_boss();
        Ok(())
    }

    /// Summon the boss regardless of score.
    ///
    /// Returns `false` if the boss was already active.
    pub fn force_boss(&mut self) -> Result<bool> {
        self.ensure_ongoing()?;
        if self.state.boss_active {
            return Ok(false);
        }
        self.state.boss_active = true;
        info!("boss phase forced");
        Ok(true)
    }

    /// Start a new match with the same configuration.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("match reset");
    }

    /// Takes effect from the next round.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.state.config.difficulty = difficulty;
        info!(%difficulty, "difficulty changed");
    }

    /// Change the score goal. Fails with `InvalidConfig` for zero.
    pub fn set_score_goal(&mut self, goal: u32) -> Result<()> {
        validate_score_goal(goal)?;
        self.state.config.score_goal = goal;
        info!(goal, "score goal changed");
        Ok(())
    }

    fn ensure_ongoing(&self) -> Result<()> {
        if self.state.status.is_terminal() {
            return Err(EngineError::MatchConcluded(self.state.status));
        }
        Ok(())
    }

    fn check_for_boss(&mut self) {
        let Some(BossConfig { threshold, .. }) = self.state.config.boss else {
            return;
        };
        let s = &mut self.state;
        if !s.boss_active && !s.boss_defeated && s.player_score >= threshold {
            s.boss_active = true;
            info!(player = s.player_score, threshold, "boss phase activated");
        }
    }

    fn evaluate_victory(&mut self) -> MatchStatus {
        let goal = self.state.config.score_goal;
        let margin = self.state.boss_margin();
        let s = &mut self.state;

        if s.player_score >= goal && s.boss_active && !s.boss_defeated {
            if s.player_score >= goal.saturating_add(margin) {
                s.boss_defeated = true;
                s.boss_active = false;
                MatchStatus::BossDefeated
            } else {
                MatchStatus::BossWeakened
            }
        } else if s.player_score >= goal {
            MatchStatus::PlayerVictory
        } else if s.opponent_score >= goal {
            MatchStatus::OpponentVictory
        } else {
            MatchStatus::Ongoing
        }
    }
}
