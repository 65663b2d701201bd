//! Card model and round resolution for Influence Draft.
//!
//! Everything in this crate is deterministic given its inputs; the only
//! randomness flows through the [`rng::MatchRng`] trait supplied by callers.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod log;
pub mod rng;
pub mod round;
pub mod tier;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{GameError, GameResult};
pub use rng::{MatchRng, XorShiftRng};
pub use round::{final_result, resolve_round, MatchResult, RoundVerdict, Side};
pub use tier::{classify, to_tier};
pub use types::*;
