//! Influence Draft umbrella crate.
//!
//! Re-exports the card model and round resolver (`battle`), the match rules
//! and orchestrator (`game`) and the bundled roster (`assets`).

#![cfg_attr(not(feature = "std"), no_std)]

pub use infl_assets as assets;
pub use infl_battle as battle;
pub use infl_game as game;

pub use infl_game::{GameError, GameResult, Match, MatchPhase, MatchView};
