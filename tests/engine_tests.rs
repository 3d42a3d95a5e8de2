//! Round engine tests.
//!
//! These tests pin down scoring, the boss phase, the one-time bonus,
//! terminal lockout and reset.

mod common;

use common::ScriptedRng;
use rust_rps::{
    BossConfig, Difficulty, EngineError, GameRng, MatchConfig, MatchStatus, Move, Outcome,
    RoundEngine,
};

fn scripted_engine(config: MatchConfig, opponent: &[Move]) -> RoundEngine<ScriptedRng> {
    RoundEngine::new(config.with_fixed_bias(0), ScriptedRng::new(opponent)).unwrap()
}

/// Goal 4, easy, bias forced to 0, player always rock, opponent scripted to
/// scissor four times.
#[test]
fn test_scripted_scenario_player_victory() {
    let config = MatchConfig::new()
        .with_score_goal(4)
        .with_difficulty(Difficulty::Easy)
        .without_boss();
    let mut engine = scripted_engine(config, &[Move::Scissor; 4]);

    let mut last = None;
    for _ in 0..4 {
        last = Some(engine.play_round(Move::Rock).unwrap());
    }
    let last = last.unwrap();

    assert_eq!(engine.player_score(), 4);
    assert_eq!(engine.opponent_score(), 0);
    assert_eq!(last.status, MatchStatus::PlayerVictory);
    assert_eq!(engine.status(), MatchStatus::PlayerVictory);

    let tracker = engine.state().tracker();
    assert_eq!(tracker.count(Move::Rock), 4);
    assert_eq!(tracker.count(Move::Paper), 0);
    assert_eq!(tracker.count(Move::Scissor), 0);
}

/// Exactly one score moves by exactly one on a decisive round; none on a tie.
#[test]
fn test_score_monotonicity() {
    let opponent = [Move::Scissor, Move::Rock, Move::Paper, Move::Rock];
    let mut engine = scripted_engine(MatchConfig::new().with_score_goal(10), &opponent);

    for _ in 0..opponent.len() {
        let before = (engine.player_score(), engine.opponent_score());
        let round = engine.play_round(Move::Rock).unwrap();
        let after = (engine.player_score(), engine.opponent_score());

        match round.outcome {
            Outcome::Tie => assert_eq!(after, before),
            Outcome::PlayerWin => assert_eq!(after, (before.0 + 1, before.1)),
            Outcome::OpponentWin => assert_eq!(after, (before.0, before.1 + 1)),
        }
        assert_eq!((round.player_score, round.opponent_score), after);
    }
}

/// Bonus applies once; the second attempt fails and changes nothing.
#[test]
fn test_bonus_idempotence() {
    let mut engine = scripted_engine(MatchConfig::new(), &[]);

    engine.apply_bonus().unwrap();
    assert_eq!(engine.player_score(), 1);
    assert!(engine.state().bonus_used());

    assert_eq!(engine.apply_bonus(), Err(EngineError::AlreadyUsed));
    assert_eq!(engine.player_score(), 1);
}

/// Threshold 3, margin 2, goal 4: boss appears at 3, is weakened at 4 and
/// defeated at 6.
#[test]
fn test_boss_threshold_transition() {
    let config = MatchConfig::new()
        .with_score_goal(4)
        .with_boss(BossConfig { threshold: 3, extra_margin: 2 });
    let mut engine = scripted_engine(config, &[Move::Scissor; 6]);

    let mut statuses = Vec::new();
    let mut boss_flags = Vec::new();
    for _ in 0..6 {
        statuses.push(engine.play_round(Move::Rock).unwrap().status);
        boss_flags.push(engine.state().boss_active());
    }

    assert_eq!(boss_flags, vec![false, false, true, true, true, false]);
    assert_eq!(
        statuses,
        vec![
            MatchStatus::Ongoing,
            MatchStatus::Ongoing,
            MatchStatus::Ongoing,
            MatchStatus::BossWeakened,
            MatchStatus::BossWeakened,
            MatchStatus::BossDefeated,
        ]
    );
    assert!(engine.state().boss_defeated());
    assert_eq!(engine.player_score(), 6);
}

/// Boss phase does not extend the opponent's goal.
#[test]
fn test_boss_phase_keeps_opponent_goal() {
    let config = MatchConfig::new().with_score_goal(4);
    let mut opponent = vec![Move::Scissor; 3];
    opponent.extend([Move::Paper; 4]);
    let mut engine = scripted_engine(config, &opponent);

    for _ in 0..3 {
        engine.play_round(Move::Rock).unwrap();
    }
    assert!(engine.state().boss_active());

    let statuses: Vec<_> = (0..4).map(|_| engine.play_round(Move::Rock).unwrap().status).collect();
    assert_eq!(statuses.last(), Some(&MatchStatus::OpponentVictory));
    assert_eq!(engine.opponent_score(), 4);
}

/// Terminal statuses lock the match until reset.
#[test]
fn test_terminal_lockout() {
    let mut engine = scripted_engine(MatchConfig::new().with_score_goal(1), &[Move::Scissor, Move::Rock]);
    assert_eq!(engine.play_round(Move::Rock).unwrap().status, MatchStatus::PlayerVictory);

    for mv in Move::ALL {
        assert_eq!(
            engine.play_round(mv),
            Err(EngineError::MatchConcluded(MatchStatus::PlayerVictory))
        );
    }
    // Locked-out calls must not touch the tracker.
    assert_eq!(engine.state().tracker().total(), 1);

    engine.reset();
    assert_eq!(engine.play_round(Move::Rock).unwrap().outcome, Outcome::Tie);
}

#[test]
fn test_boss_defeated_is_terminal() {
    let config = MatchConfig::new().with_score_goal(1).with_boss(BossConfig { threshold: 1, extra_margin: 1 });
    let mut engine = scripted_engine(config, &[Move::Scissor; 2]);

    assert_eq!(engine.play_round(Move::Rock).unwrap().status, MatchStatus::BossWeakened);
    assert_eq!(engine.play_round(Move::Rock).unwrap().status, MatchStatus::BossDefeated);
    assert_eq!(
        engine.play_round(Move::Rock),
        Err(EngineError::MatchConcluded(MatchStatus::BossDefeated))
    );
}

/// Reset clears scores, flags, tracker and history.
#[test]
fn test_reset_completeness() {
    let config = MatchConfig::new().with_score_goal(10).with_difficulty(Difficulty::Medium);
    let mut engine = scripted_engine(config, &[Move::Scissor, Move::Scissor, Move::Paper, Move::Scissor]);

    for mv in [Move::Rock, Move::Rock, Move::Rock, Move::Rock] {
        engine.play_round(mv).unwrap();
    }
    engine.apply_bonus().unwrap();
    assert!(engine.state().boss_active());

    engine.reset();
    let state = engine.state();
    assert_eq!(state.player_score(), 0);
    assert_eq!(state.opponent_score(), 0);
    assert!(!state.bonus_used());
    assert!(!state.boss_active());
    assert!(!state.boss_defeated());
    assert!(state.tracker().is_empty());
    assert!(state.history().is_empty());
    assert_eq!(state.round(), 0);
    assert_eq!(state.status(), MatchStatus::Ongoing);

    assert_eq!(state.config().score_goal, 10);
    assert_eq!(state.config().difficulty, Difficulty::Medium);
}

/// Reset also clears a previously defeated boss so it can appear again.
#[test]
fn test_reset_rearms_boss() {
    let config = MatchConfig::new().with_score_goal(1).with_boss(BossConfig { threshold: 1, extra_margin: 0 });
    let mut engine = scripted_engine(config, &[Move::Scissor; 2]);

    assert_eq!(engine.play_round(Move::Rock).unwrap().status, MatchStatus::BossDefeated);
    engine.reset();
    assert!(!engine.state().boss_defeated());

    assert_eq!(engine.play_round(Move::Rock).unwrap().status, MatchStatus::BossDefeated);
}

#[test]
fn test_invalid_goal_rejected() {
    let mut engine = RoundEngine::new(MatchConfig::new(), GameRng::new(1)).unwrap();
    assert!(matches!(engine.set_score_goal(0), Err(EngineError::InvalidConfig(_))));
    assert!(matches!(
        RoundEngine::new(MatchConfig::new().with_score_goal(0), GameRng::new(1)),
        Err(EngineError::InvalidConfig(_))
    ));
}

/// A seeded engine replays identically.
#[test]
fn test_seeded_engine_is_deterministic() {
    let moves = [Move::Rock, Move::Paper, Move::Paper, Move::Scissor, Move::Rock, Move::Paper];
    let play = || {
        let config = MatchConfig::new().with_score_goal(50).with_difficulty(Difficulty::Medium);
        let mut engine = RoundEngine::new(config, GameRng::new(1234)).unwrap();
        moves
            .iter()
            .map(|&m| engine.play_round(m).unwrap().opponent_move)
            .collect::<Vec<_>>()
    };
    assert_eq!(play(), play());
}
