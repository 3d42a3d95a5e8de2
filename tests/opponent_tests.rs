//! Adaptive opponent tests.
//!
//! The opponent is biased-random, so most checks are statistical over a
//! seeded RNG. Only the 100% bias path is asserted exactly.

mod common;

use common::ScriptedRng;
use rust_rps::{
    AdaptiveOpponent, Difficulty, GameRng, MatchConfig, Move, MoveFrequency, OpponentPolicy,
    RoundEngine, UniformOpponent,
};

const TRIALS: usize = 3000;

fn long_match(difficulty: Difficulty) -> MatchConfig {
    MatchConfig::new()
        .with_score_goal(100_000)
        .with_difficulty(difficulty)
        .without_boss()
}

/// Hard difficulty plus the boss reaches 100%: always the exact counter.
#[test]
fn test_full_bias_is_deterministic() {
    let mut engine = RoundEngine::new(long_match(Difficulty::Hard), GameRng::new(42)).unwrap();
    engine.force_boss().unwrap();
    assert_eq!(engine.bias_percent(), 100);

    for _ in 0..200 {
        let round = engine.play_round(Move::Rock).unwrap();
        assert_eq!(round.opponent_move, Move::Paper);
    }
}

#[test]
fn test_full_bias_tracks_most_frequent() {
    let config = long_match(Difficulty::Easy).with_fixed_bias(100);
    let mut engine = RoundEngine::new(config, GameRng::new(5)).unwrap();

    // Scissor leads 2-1 after the third round.
    engine.play_round(Move::Scissor).unwrap();
    engine.play_round(Move::Rock).unwrap();
    let round = engine.play_round(Move::Scissor).unwrap();
    assert_eq!(round.opponent_move, Move::Rock);

    // Rock ties scissor at 2 and wins the tie-break.
    let round = engine.play_round(Move::Rock).unwrap();
    assert_eq!(round.opponent_move, Move::Paper);
}

/// Full bias never consumes randomness once history exists.
#[test]
fn test_full_bias_draws_nothing() {
    let mut tracker = MoveFrequency::new();
    tracker.record(Move::Paper);
    let mut rng = ScriptedRng::new(&[]);

    for _ in 0..10 {
        assert_eq!(AdaptiveOpponent.select(&tracker, 100, &mut rng), Move::Scissor);
    }
}

/// A scripted coin decides between counter and uniform fallback.
#[test]
fn test_partial_bias_follows_coin() {
    let mut tracker = MoveFrequency::new();
    tracker.record(Move::Rock);
    let mut rng = ScriptedRng::new(&[Move::Rock]).with_coins(&[true, false]);

    assert_eq!(AdaptiveOpponent.select(&tracker, 50, &mut rng), Move::Paper);
    assert_eq!(AdaptiveOpponent.select(&tracker, 50, &mut rng), Move::Rock);
    assert_eq!(rng.remaining_moves(), 0);
}

/// Zero bias: moves are spread uniformly no matter how predictable the player is.
#[test]
fn test_zero_bias_is_uniform() {
    let config = long_match(Difficulty::Hard).with_fixed_bias(0);
    let mut engine = RoundEngine::new(config, GameRng::new(99)).unwrap();

    let mut counts = [0usize; 3];
    for _ in 0..TRIALS {
        counts[engine.play_round(Move::Rock).unwrap().opponent_move.index()] += 1;
    }
    for count in counts {
        assert!((850..=1150).contains(&count), "{counts:?}");
    }
}

/// Medium bias: the counter appears about 50% + 50%/3 of the time.
#[test]
fn test_medium_bias_frequency() {
    let mut engine = RoundEngine::new(long_match(Difficulty::Medium), GameRng::new(7)).unwrap();

    let counters = (0..TRIALS)
        .filter(|_| engine.play_round(Move::Scissor).unwrap().opponent_move == Move::Rock)
        .count();
    let rate = counters as f64 / TRIALS as f64;
    assert!((0.60..=0.73).contains(&rate), "rate = {rate}");
}

/// Harder difficulties counter more often.
#[test]
fn test_difficulty_ordering() {
    let rate = |difficulty| {
        let mut engine = RoundEngine::new(long_match(difficulty), GameRng::new(11)).unwrap();
        (0..TRIALS)
            .filter(|_| engine.play_round(Move::Paper).unwrap().opponent_move == Move::Scissor)
            .count()
    };
    let easy = rate(Difficulty::Easy);
    let medium = rate(Difficulty::Medium);
    let hard = rate(Difficulty::Hard);
    assert!(easy < medium && medium < hard, "{easy} {medium} {hard}");
}

#[test]
fn test_uniform_opponent_policy() {
    let config = long_match(Difficulty::Hard);
    let mut engine = RoundEngine::with_policy(config, GameRng::new(3), UniformOpponent).unwrap();

    let mut counts = [0usize; 3];
    for _ in 0..TRIALS {
        counts[engine.play_round(Move::Rock).unwrap().opponent_move.index()] += 1;
    }
    for count in counts {
        assert!((850..=1150).contains(&count), "{counts:?}");
    }
}
