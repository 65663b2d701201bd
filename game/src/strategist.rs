//! AI decision policy
//!
//! Drafting is a plain greedy pick on total influence. In battle the AI
//! draws one of two heuristics, weighted by the scoreline and how many
//! rounds are left:
//!
//! - **Dominate** wins the current round as cheaply as possible, or throws its
//!   strongest card in the domain when no card can win.
//! - **Prepare** sheds the card with the least value in the domains still
//!   to come.

use infl_battle::rng::MatchRng;
use infl_battle::types::{Domain, PersonaCard, PersonaId};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Fixed-point factor applied to weights before the draw, so percentage
/// scaling stays exact for whole-point weights.
const WEIGHT_SCALE: u32 = 10;

/// Heuristic chosen for a battle pick. Narration only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    Dominate,
    Prepare,
}

impl Strategy {
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Dominate => "dominate",
            Strategy::Prepare => "prepare",
        }
    }
}

/// Tunables for the strategy draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyWeights {
    pub base_dominate: u32,
    pub base_prepare: u32,
    /// Added to dominate per point the AI trails by
    pub trailing_dominate_bonus: u32,
    /// Taken from prepare per point the AI trails by
    pub trailing_prepare_penalty: u32,
    /// Added to prepare per point the AI leads by
    pub leading_prepare_bonus: u32,
    /// Taken from dominate per point the AI leads by
    pub leading_dominate_penalty: u32,
    /// Percentage of the prepare weight kept with two rounds to go
    pub penultimate_prepare_percent: u32,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            base_dominate: 50,
            base_prepare: 50,
            trailing_dominate_bonus: 15,
            trailing_prepare_penalty: 10,
            leading_prepare_bonus: 12,
            leading_dominate_penalty: 8,
            penultimate_prepare_percent: 60,
        }
    }
}

impl StrategyWeights {
    /// `[dominate, prepare]` draw weights, in tenths of a point.
    pub fn draw_weights(&self, ai_score: u8, player_score: u8, rounds_remaining: usize) -> [u32; 2] {
        if rounds_remaining == 1 {
            return [100 * WEIGHT_SCALE, 0];
        }

        // Weights come from user config; every step saturates at u32::MAX.
        let scaled = |weight: u32, points: u32| weight.saturating_mul(WEIGHT_SCALE).saturating_mul(points);
        let mut dominate = scaled(self.base_dominate, 1);
        let mut prepare = scaled(self.base_prepare, 1);

        if ai_score < player_score {
            let deficit = u32::from(player_score - ai_score);
            dominate = dominate.saturating_add(scaled(self.trailing_dominate_bonus, deficit));
            prepare = prepare.saturating_sub(scaled(self.trailing_prepare_penalty, deficit));
        } else if ai_score > player_score {
            let lead = u32::from(ai_score - player_score);
            prepare = prepare.saturating_add(scaled(self.leading_prepare_bonus, lead));
            dominate = dominate.saturating_sub(scaled(self.leading_dominate_penalty, lead));
        }

        if rounds_remaining == 2 {
            let kept = u64::from(prepare) * u64::from(self.penultimate_prepare_percent) / 100;
            prepare = u32::try_from(kept).unwrap_or(u32::MAX);
        }

        [dominate, prepare]
    }
}

/// Everything the AI may look at when choosing a battle card
#[derive(Debug, Clone, Copy)]
pub struct BattleContext<'a> {
    pub hand: &'a [PersonaCard],
    pub active_domain: Domain,
    /// The opponent's whole remaining hand; nothing is hidden
    pub opponent_hand: &'a [PersonaCard],
    pub ai_score: u8,
    pub player_score: u8,
    /// Rounds left, counting the active one
    pub rounds_remaining: usize,
    /// Domains after the active one
    pub future_domains: &'a [Domain],
}

/// A battle pick plus the heuristic that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDecision {
    pub card: PersonaId,
    pub strategy: Strategy,
}

/// Greedy draft pick: highest total influence, earliest card on ties.
pub fn draft_pick(pool: &[PersonaCard]) -> Option<PersonaId> {
    pool.iter()
        .rev()
        .max_by_key(|c| c.total_influence())
        .map(|c| c.id)
}

/// Cheapest card that beats the opponent's best in `domain`, else our best there.
pub fn dominate(hand: &[PersonaCard], domain: Domain, opponent_hand: &[PersonaCard]) -> Option<PersonaId> {
    let opponent_best = opponent_hand.iter().map(|c| c.score(domain)).max();
    let beats = |c: &&PersonaCard| opponent_best.map_or(true, |best| c.score(domain) > best);

    hand.iter()
        .filter(beats)
        .min_by_key(|c| c.score(domain))
        .or_else(|| hand.iter().rev().max_by_key(|c| c.score(domain)))
        .map(|c| c.id)
}

/// Card whose best score over `future_domains` is lowest.
pub fn prepare(hand: &[PersonaCard], future_domains: &[Domain]) -> Option<PersonaId> {
    hand.iter()
        .min_by_key(|c| c.influence.best_in(future_domains))
        .map(|c| c.id)
}

/// Choose the AI's card for the active round.
///
/// Returns `None` only for an empty hand.
pub fn pick<R: MatchRng>(
    ctx: &BattleContext<'_>,
    weights: &StrategyWeights,
    rng: &mut R,
) -> Option<AiDecision> {
    match ctx.hand {
        [] => return None,
        [only] => {
            return Some(AiDecision {
                card: only.id,
                strategy: Strategy::Dominate,
            })
        }
        _ => {}
    }

    let draw = weights.draw_weights(ctx.ai_score, ctx.player_score, ctx.rounds_remaining);
    let strategy = match rng.weighted_index(&draw) {
        Some(1) => Strategy::Prepare,
        _ => Strategy::Dominate,
    };

    let card = match strategy {
        Strategy::Dominate => dominate(ctx.hand, ctx.active_domain, ctx.opponent_hand),
        Strategy::Prepare => prepare(ctx.hand, ctx.future_domains),
    }?;

    Some(AiDecision { card, strategy })
}
