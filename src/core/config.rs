//! Match configuration types.
//!
//! Callers configure a match at startup by providing:
//! - `Difficulty`: How strongly the opponent exploits the player's habits
//! - `BiasSchedule`: The exploit probability per difficulty
//! - `BossConfig`: When the boss phase starts and how much extra it demands
//! - `MatchConfig`: Combines all configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{EngineError, Result};

/// Default score needed to win a match.
pub const DEFAULT_SCORE_GOAL: u32 = 4;

/// Opponent difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidConfig(format!("unknown difficulty {s:?}"))),
        }
    }
}

/// Probability (in percent) that the opponent plays the counter to the
/// player's most frequent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasSchedule {
    pub easy: u8,
    pub medium: u8,
    pub hard: u8,
    /// Added on top of the difficulty bias while the boss is active.
    pub boss_bonus: u8,
}

impl Default for BiasSchedule {
    fn default() -> Self {
        Self {
            easy: 25,
            medium: 50,
            hard: 85,
            boss_bonus: 15,
        }
    }
}

impl BiasSchedule {
    /// Effective bias, capped at 100.
    #[must_use]
    pub fn percent(&self, difficulty: Difficulty, boss_active: bool) -> u8 {
        let base = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        };
        let bonus = if boss_active { self.boss_bonus } else { 0 };
        base.saturating_add(bonus).min(100)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("easy", self.easy),
            ("medium", self.medium),
            ("hard", self.hard),
            ("boss bonus", self.boss_bonus),
        ] {
            if value > 100 {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} bias must be at most 100%, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Boss phase parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossConfig {
    /// Player score that summons the boss.
    pub threshold: u32,
    /// Points beyond the score goal needed to defeat the boss.
    pub extra_margin: u32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            threshold: 3,
            extra_margin: 2,
        }
    }
}

/// Complete match configuration.
///
/// ```
/// use rust_rps::core::{Difficulty, MatchConfig};
///
/// let config = MatchConfig::new()
///     .with_score_goal(5)
///     .with_difficulty(Difficulty::Hard);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Score needed to win (positive).
    pub score_goal: u32,

    pub difficulty: Difficulty,

    /// Boss phase settings. `None` disables automatic boss activation.
    pub boss: Option<BossConfig>,

    pub bias: BiasSchedule,

    /// Overrides the bias schedule with a fixed percentage.
    pub fixed_bias: Option<u8>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            score_goal: DEFAULT_SCORE_GOAL,
            difficulty: Difficulty::default(),
            boss: Some(BossConfig::default()),
            bias: BiasSchedule::default(),
            fixed_bias: None,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration: goal 4, easy, boss enabled.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_score_goal(mut self, goal: u32) -> Self {
        self.score_goal = goal;
        self
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn with_boss(mut self, boss: BossConfig) -> Self {
        self.boss = Some(boss);
        self
    }

    /// Disable the automatic boss phase.
    #[must_use]
    pub fn without_boss(mut self) -> Self {
        self.boss = None;
        self
    }

    #[must_use]
    pub fn with_bias(mut self, bias: BiasSchedule) -> Self {
        self.bias = bias;
        self
    }

    /// Pin the opponent's bias to a fixed percentage.
    #[must_use]
    pub fn with_fixed_bias(mut self, percent: u8) -> Self {
        self.fixed_bias = Some(percent);
        self
    }

    /// Check the configuration for values the engine cannot honour.
    pub fn validate(&self) -> Result<()> {
        validate_score_goal(self.score_goal)?;
        self.bias.validate()?;
        if let Some(percent) = self.fixed_bias {
            if percent > 100 {
                return Err(EngineError::InvalidConfig(format!(
                    "fixed bias must be at most 100%, got {percent}"
                )));
            }
        }
        Ok(())
    }

    /// Bias in effect for the given boss state.
    #[must_use]
    pub fn bias_percent(&self, boss_active: bool) -> u8 {
        self.fixed_bias
            .unwrap_or_else(|| self.bias.percent(self.difficulty, boss_active))
    }
}

pub(crate) fn validate_score_goal(goal: u32) -> Result<()> {
    if goal == 0 {
        return Err(EngineError::InvalidConfig("score goal must be positive".to_string()));
    }
    Ok(())
}
