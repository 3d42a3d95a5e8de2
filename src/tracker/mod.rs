//! Move frequency tracking for the adaptive opponent.

pub mod frequency;

pub use frequency::MoveFrequency;
