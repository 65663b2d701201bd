//! Match rules for Influence Draft: pool construction, the snake draft,
//! the AI strategist and the phase state machine that ties them together.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod draft;
pub mod pool;
pub mod session;
pub mod state;
pub mod strategist;
pub mod view;

#[cfg(test)]
mod tests;

pub use draft::{DraftPick, DraftState, SNAKE_ORDER};
pub use pool::{build_draft_pool, pool_capacity, validate_roster, Stratum};
pub use session::Match;
pub use state::*;
pub use strategist::{AiDecision, BattleContext, Strategy, StrategyWeights};
pub use view::{CardView, MatchView, PhaseView};

pub use infl_battle::{GameError, GameResult, MatchRng, XorShiftRng};
