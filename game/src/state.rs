use alloc::string::String;
use alloc::vec::Vec;

use infl_battle::error::{GameError, GameResult};
use infl_battle::round::{MatchResult, RoundVerdict};
use infl_battle::types::{Domain, PersonaCard, PersonaId, DOMAIN_COUNT};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::draft::DraftState;
use crate::strategist::Strategy;

/// Cards in a draft pool
pub const POOL_SIZE: usize = 12;
/// Cards each side holds once the draft is over
pub const HAND_SIZE: usize = 6;
/// Rounds in a match, one per domain
pub const ROUNDS_PER_MATCH: usize = DOMAIN_COUNT;
/// Pool slots filled from tiers S and A
pub const ELITE_QUOTA: usize = 2;
/// Pool slots filled from tiers B and C
pub const CORE_QUOTA: usize = 4;
/// Pool slots filled from tiers D and E
pub const FRINGE_QUOTA: usize = 4;
/// Pool slots filled from whatever is left after the strata
pub const WILDCARD_QUOTA: usize = 2;
/// Smallest roster worth starting a draft from
pub const MIN_VIABLE_ROSTER: usize = 4;

/// Ordered set of cards held by one side
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<PersonaCard>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<PersonaCard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[PersonaCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, id: PersonaId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: PersonaId) -> Option<&PersonaCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn ids(&self) -> Vec<PersonaId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn push(&mut self, card: PersonaCard) {
        self.cards.push(card);
    }

    /// Remove a card for good. Remaining cards keep their order.
    pub fn take(&mut self, id: PersonaId) -> GameResult<PersonaCard> {
        let index = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(GameError::CardNotInHand { id })?;
        Ok(self.cards.remove(index))
    }
}

/// Published result of one round
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    /// Zero-based round index
    pub round: u8,
    pub domain: Domain,
    pub player_card: PersonaId,
    pub player_card_name: String,
    pub ai_card: PersonaId,
    pub ai_card_name: String,
    pub player_score: u8,
    pub ai_score: u8,
    pub player_points: u8,
    pub ai_points: u8,
    pub is_tiebreak: bool,
    /// Narration only, never read by scoring
    pub ai_strategy: Strategy,
}

impl RoundRecord {
    pub fn new(
        round: u8,
        verdict: &RoundVerdict,
        player: &PersonaCard,
        ai: &PersonaCard,
        ai_strategy: Strategy,
    ) -> Self {
        Self {
            round,
            domain: verdict.domain,
            player_card: player.id,
            player_card_name: player.name.clone(),
            ai_card: ai.id,
            ai_card_name: ai.name.clone(),
            player_score: verdict.player_score,
            ai_score: verdict.ai_score,
            player_points: verdict.player_points,
            ai_points: verdict.ai_points,
            is_tiebreak: verdict.is_tiebreak,
            ai_strategy,
        }
    }
}

/// Battle-phase state: both hands, the fixed domain order and the score
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    pub domain_order: [Domain; ROUNDS_PER_MATCH],
    /// Index of the next round to be played
    pub round: u8,
    pub player_hand: Hand,
    pub ai_hand: Hand,
    pub player_points: u8,
    pub ai_points: u8,
    pub history: Vec<RoundRecord>,
}

impl BattleState {
    pub fn new(domain_order: [Domain; ROUNDS_PER_MATCH], player_hand: Hand, ai_hand: Hand) -> Self {
        Self {
            domain_order,
            round: 0,
            player_hand,
            ai_hand,
            player_points: 0,
            ai_points: 0,
            history: Vec::new(),
        }
    }

    pub fn active_domain(&self) -> Option<Domain> {
        self.domain_order.get(usize::from(self.round)).copied()
    }

    /// Domains still to come after the active one.
    pub fn future_domains(&self) -> &[Domain] {
        self.domain_order
            .get(usize::from(self.round) + 1..)
            .unwrap_or(&[])
    }

    /// Rounds left, counting the active one.
    pub fn rounds_remaining(&self) -> usize {
        ROUNDS_PER_MATCH.saturating_sub(usize::from(self.round))
    }

    pub fn is_over(&self) -> bool {
        usize::from(self.round) >= ROUNDS_PER_MATCH
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Bank a resolved round and move to the next one.
    pub fn record(&mut self, record: RoundRecord) {
        self.player_points += record.player_points;
        self.ai_points += record.ai_points;
        self.round += 1;
        self.history.push(record);
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            player_points: self.player_points,
            ai_points: self.ai_points,
            result: infl_battle::round::final_result(self.player_points, self.ai_points),
            rounds: self.history.clone(),
        }
    }
}

/// Final outcome of a finished match
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub player_points: u8,
    pub ai_points: u8,
    pub result: MatchResult,
    pub rounds: Vec<RoundRecord>,
}

/// Phase of a match. Transitions only move forward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum MatchPhase {
    #[default]
    Idle,
    /// Waiting for the roster to arrive
    Loading,
    Draft {
        draft: DraftState,
        domain_order: [Domain; ROUNDS_PER_MATCH],
    },
    Battle(BattleState),
    /// A round was just resolved; its record is the last history entry
    Revealing(BattleState),
    Result(MatchSummary),
}

impl MatchPhase {
    pub fn name(&self) -> &'static str {
        match self {
            MatchPhase::Idle => "idle",
            MatchPhase::Loading => "loading",
            MatchPhase::Draft { .. } => "draft",
            MatchPhase::Battle(_) => "battle",
            MatchPhase::Revealing(_) => "revealing",
            MatchPhase::Result(_) => "result",
        }
    }
}
