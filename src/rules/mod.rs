//! Round resolution and opponent policies.
//!
//! `RoundEngine` owns a `MatchState`, resolves rounds, updates scores and
//! reports a `RoundOutcome`. Opponent move choice is delegated to an
//! `OpponentPolicy` with an injectable `RandomSource`.

pub mod engine;
pub mod opponent;
pub mod outcome;

pub use engine::{MatchState, RoundEngine};
pub use opponent::{AdaptiveOpponent, OpponentPolicy, UniformOpponent};
pub use outcome::{MatchStatus, Outcome, RoundOutcome};
