//! Round and match results.

use serde::{Deserialize, Serialize};

use crate::core::Move;

/// Who took a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    PlayerWin,
    OpponentWin,
}

impl Outcome {
    /// Resolve a round from the player's point of view.
    #[must_use]
    pub fn resolve(player: Move, opponent: Move) -> Self {
        if player == opponent {
            Outcome::Tie
        } else if player.beats(opponent) {
            Outcome::PlayerWin
        } else {
            Outcome::OpponentWin
        }
    }
}

/// State of the match after a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    #[default]
    Ongoing,
    PlayerVictory,
    OpponentVictory,
    /// Player reached the goal while the boss is up, but not the boss margin.
    BossWeakened,
    BossDefeated,
}

impl MatchStatus {
    /// Does this status end the match?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            MatchStatus::PlayerVictory | MatchStatus::OpponentVictory | MatchStatus::BossDefeated
        )
    }

    /// Did the player win the match?
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, MatchStatus::PlayerVictory | MatchStatus::BossDefeated)
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MatchStatus::Ongoing => "ongoing",
            MatchStatus::PlayerVictory => "player victory",
            MatchStatus::OpponentVictory => "opponent victory",
            MatchStatus::BossWeakened => "boss weakened",
            MatchStatus::BossDefeated => "boss defeated",
        };
        f.write_str(text)
    }
}

/// Immutable record of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round number within the match (starts at 1).
    pub round: u32,
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
    pub status: MatchStatus,
    /// Scores after this round.
    pub player_score: u32,
    pub opponent_score: u32,
}
