//! View types for UI serialization
//!
//! A flattened, read-only snapshot of a match for frontends. Both hands are
//! included: the game has no hidden information.

use alloc::string::String;
use alloc::vec::Vec;

use infl_battle::round::{MatchResult, Side};
use infl_battle::types::{Domain, Influence, PersonaCard, PersonaId, Tier};
use serde::{Deserialize, Serialize};

use crate::draft::SNAKE_ORDER;
use crate::state::*;

/// Card fields a frontend needs to draw a persona
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: PersonaId,
    pub name: String,
    pub profession: String,
    pub portrait: String,
    pub tier: Tier,
    pub influence: Influence,
}

impl From<&PersonaCard> for CardView {
    fn from(card: &PersonaCard) -> Self {
        Self {
            id: card.id,
            name: card.name.clone(),
            profession: card.profession.clone(),
            portrait: card.portrait.clone(),
            tier: card.tier,
            influence: card.influence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhaseView {
    Idle,
    Loading,
    Draft,
    Battle,
    Revealing,
    Result,
}

/// The complete match view sent to a frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub phase: PhaseView,
    /// Cards still in the draft pool
    pub pool: Vec<CardView>,
    pub draft_step: u8,
    /// Side due to draft next
    pub on_the_clock: Option<Side>,
    /// Upcoming draft order from the current step
    pub upcoming_picks: Vec<Side>,
    pub player_hand: Vec<CardView>,
    pub ai_hand: Vec<CardView>,
    /// Zero-based index of the next round
    pub round: u8,
    pub active_domain: Option<Domain>,
    pub upcoming_domains: Vec<Domain>,
    pub player_points: u8,
    pub ai_points: u8,
    pub history: Vec<RoundRecord>,
    pub result: Option<MatchResult>,
}

impl MatchView {
    fn empty(phase: PhaseView) -> Self {
        Self {
            phase,
            pool: Vec::new(),
            draft_step: 0,
            on_the_clock: None,
            upcoming_picks: Vec::new(),
            player_hand: Vec::new(),
            ai_hand: Vec::new(),
            round: 0,
            active_domain: None,
            upcoming_domains: Vec::new(),
            player_points: 0,
            ai_points: 0,
            history: Vec::new(),
            result: None,
        }
    }

    pub fn from_phase(phase: &MatchPhase) -> Self {
        match phase {
            MatchPhase::Idle => Self::empty(PhaseView::Idle),
            MatchPhase::Loading => Self::empty(PhaseView::Loading),
            MatchPhase::Draft { draft, .. } => Self {
                pool: draft.pool().iter().map(CardView::from).collect(),
                draft_step: draft.step() as u8,
                on_the_clock: draft.on_the_clock(),
                upcoming_picks: SNAKE_ORDER.iter().skip(draft.step()).copied().collect(),
                player_hand: cards(draft.hand(Side::Player)),
                ai_hand: cards(draft.hand(Side::Ai)),
                ..Self::empty(PhaseView::Draft)
            },
            MatchPhase::Battle(battle) => Self::from_battle(PhaseView::Battle, battle),
            MatchPhase::Revealing(battle) => Self::from_battle(PhaseView::Revealing, battle),
            MatchPhase::Result(summary) => Self {
                round: summary.rounds.len() as u8,
                player_points: summary.player_points,
                ai_points: summary.ai_points,
                history: summary.rounds.clone(),
                result: Some(summary.result),
                ..Self::empty(PhaseView::Result)
            },
        }
    }

    fn from_battle(phase: PhaseView, battle: &BattleState) -> Self {
        Self {
            player_hand: cards(&battle.player_hand),
            ai_hand: cards(&battle.ai_hand),
            round: battle.round,
            active_domain: battle.active_domain(),
            upcoming_domains: battle.future_domains().to_vec(),
            player_points: battle.player_points,
            ai_points: battle.ai_points,
            history: battle.history.clone(),
            ..Self::empty(phase)
        }
    }
}

fn cards(hand: &Hand) -> Vec<CardView> {
    hand.cards().iter().map(CardView::from).collect()
}
