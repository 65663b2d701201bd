//! Snake draft sequencing
//!
//! Twelve picks in a fixed order. Each pick moves one card from the shared
//! pool into the acting side's hand.

use alloc::vec::Vec;

use infl_battle::error::{GameError, GameResult};
use infl_battle::round::Side;
use infl_battle::types::{PersonaCard, PersonaId};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::state::{Hand, POOL_SIZE};
use crate::strategist;

/// Which side picks at each draft step
pub const SNAKE_ORDER: [Side; POOL_SIZE] = [
    Side::Player,
    Side::Ai,
    Side::Ai,
    Side::Player,
    Side::Player,
    Side::Ai,
    Side::Ai,
    Side::Player,
    Side::Player,
    Side::Ai,
    Side::Ai,
    Side::Player,
];

/// One applied draft step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPick {
    pub step: u8,
    pub side: Side,
    pub card: PersonaId,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    pool: Vec<PersonaCard>,
    player_hand: Hand,
    ai_hand: Hand,
    /// Draft-turn counter, index into [`SNAKE_ORDER`]
    step: u8,
    picks: Vec<DraftPick>,
}

impl DraftState {
    pub fn new(pool: Vec<PersonaCard>) -> Self {
        Self {
            pool,
            player_hand: Hand::new(),
            ai_hand: Hand::new(),
            step: 0,
            picks: Vec::new(),
        }
    }

    pub fn pool(&self) -> &[PersonaCard] {
        &self.pool
    }

    pub fn hand(&self, side: Side) -> &Hand {
        match side {
            Side::Player => &self.player_hand,
            Side::Ai => &self.ai_hand,
        }
    }

    pub fn step(&self) -> usize {
        usize::from(self.step)
    }

    pub fn picks(&self) -> &[DraftPick] {
        &self.picks
    }

    pub fn is_complete(&self) -> bool {
        self.step() >= SNAKE_ORDER.len() || self.pool.is_empty()
    }

    /// Side due to pick next, `None` once the draft is over.
    pub fn on_the_clock(&self) -> Option<Side> {
        if self.is_complete() {
            return None;
        }
        SNAKE_ORDER.get(self.step()).copied()
    }

    /// Move `id` from the pool into `side`'s hand.
    ///
    /// Rejected picks leave the draft untouched.
    pub fn pick(&mut self, side: Side, id: PersonaId) -> GameResult<DraftPick> {
        let due = self.on_the_clock().ok_or(GameError::DraftComplete)?;
        if due != side {
            return Err(GameError::NotYourTurn);
        }
        let index = self
            .pool
            .iter()
            .position(|c| c.id == id)
            .ok_or(GameError::CardNotInPool { id })?;

        let card = self.pool.remove(index);
        match side {
            Side::Player => self.player_hand.push(card),
            Side::Ai => self.ai_hand.push(card),
        }

        let pick = DraftPick {
            step: self.step,
            side,
            card: id,
        };
        self.picks.push(pick);
        self.step += 1;
        Ok(pick)
    }

    /// Take the AI's step using the greedy draft heuristic.
    pub fn ai_pick(&mut self) -> GameResult<DraftPick> {
        let id = strategist::draft_pick(&self.pool).ok_or(GameError::DraftComplete)?;
        self.pick(Side::Ai, id)
    }

    /// Run AI steps until the player is due or the draft ends.
    pub fn run_ai_turns(&mut self) -> GameResult<Vec<DraftPick>> {
        let mut picks = Vec::new();
        while self.on_the_clock() == Some(Side::Ai) {
            picks.push(self.ai_pick()?);
        }
        Ok(picks)
    }

    /// Consume the finished draft into (player, ai) hands.
    pub fn into_hands(self) -> (Hand, Hand) {
        (self.player_hand, self.ai_hand)
    }
}
