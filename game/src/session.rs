//! Match orchestration
//!
//! A [`Match`] owns one game's state and its random source. Each external
//! event (a roster arriving, a draft pick, a card play, the UI finishing a
//! reveal) advances the phase machine by one step. Operations attempted in
//! the wrong phase, or with a card the player does not hold, are rejected
//! without touching state.

use alloc::format;
use alloc::vec::Vec;

use infl_battle::error::{GameError, GameResult};
use infl_battle::log;
use infl_battle::rng::{MatchRng, XorShiftRng};
use infl_battle::round::{resolve_round, Side};
use infl_battle::types::{Domain, PersonaCard, PersonaId};

use crate::draft::{DraftPick, DraftState};
use crate::pool::{build_draft_pool, pool_capacity, validate_roster};
use crate::state::*;
use crate::strategist::{self, BattleContext, StrategyWeights};
use crate::view::MatchView;

pub struct Match<R: MatchRng = XorShiftRng> {
    phase: MatchPhase,
    rng: R,
    weights: StrategyWeights,
}

impl Match<XorShiftRng> {
    /// New idle match driven by a seeded [`XorShiftRng`].
    pub fn from_seed(seed: u64) -> Self {
        Self::new(XorShiftRng::seed_from_u64(seed))
    }
}

impl<R: MatchRng> Match<R> {
    pub fn new(rng: R) -> Self {
        Self {
            phase: MatchPhase::Idle,
            rng,
            weights: StrategyWeights::default(),
        }
    }

    /// Pick a match back up from a captured phase, e.g. a decoded snapshot.
    pub fn resume(phase: MatchPhase, rng: R) -> Self {
        Self {
            phase,
            rng,
            weights: StrategyWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: StrategyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn phase(&self) -> &MatchPhase {
        &self.phase
    }

    pub fn weights(&self) -> &StrategyWeights {
        &self.weights
    }

    /// Final summary, once the match has reached its result.
    pub fn summary(&self) -> Option<&MatchSummary> {
        match &self.phase {
            MatchPhase::Result(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn view(&self) -> MatchView {
        MatchView::from_phase(&self.phase)
    }

    /// Idle -> Loading.
    pub fn start_loading(&mut self) -> GameResult<()> {
        log::action("start_loading", "waiting for roster");
        if self.phase != MatchPhase::Idle {
            return Err(GameError::WrongPhase);
        }
        self.phase = MatchPhase::Loading;
        Ok(())
    }

    /// Loading -> Draft: sample the pool and fix the domain order.
    ///
    /// A roster that cannot fill the whole pool is rejected before any
    /// randomness is drawn, and the match stays in Loading.
    pub fn begin_draft(&mut self, roster: &[PersonaCard]) -> GameResult<Vec<DraftPick>> {
        log::action("begin_draft", &format!("roster={}", roster.len()));
        if self.phase != MatchPhase::Loading {
            return Err(GameError::WrongPhase);
        }
        validate_roster(roster)?;

        let capacity = pool_capacity(roster);
        if capacity < POOL_SIZE {
            log::result(false, "roster could not fill the pool");
            return Err(GameError::InsufficientRoster {
                have: capacity as u32,
                need: POOL_SIZE as u32,
            });
        }

        let pool = build_draft_pool(roster, &mut self.rng);

        let mut domain_order = Domain::ALL;
        self.rng.shuffle(&mut domain_order);

        let mut draft = DraftState::new(pool);
        let picks = draft.run_ai_turns()?;
        self.phase = MatchPhase::Draft { draft, domain_order };
        self.finish_draft_if_complete();
        self.log_state();
        Ok(picks)
    }

    /// Apply the player's draft pick, then every AI pick up to the player's
    /// next turn. Returns all picks applied, the player's first.
    pub fn player_draft_pick(&mut self, id: PersonaId) -> GameResult<Vec<DraftPick>> {
        log::action("player_draft_pick", &format!("card={id}"));
        let MatchPhase::Draft { draft, .. } = &mut self.phase else {
            return Err(GameError::WrongPhase);
        };

        let mut picks = Vec::with_capacity(3);
        picks.push(draft.pick(Side::Player, id)?);
        picks.extend(draft.run_ai_turns()?);

        self.finish_draft_if_complete();
        self.log_state();
        Ok(picks)
    }

    /// Play `id` from the player's hand against the AI's choice for this round.
    ///
    /// The AI commits against the player's hand as it stood before this play.
    pub fn play_card(&mut self, id: PersonaId) -> GameResult<RoundRecord> {
        log::action("play_card", &format!("card={id}"));
        let MatchPhase::Battle(battle) = &mut self.phase else {
            return Err(GameError::WrongPhase);
        };
        let domain = battle.active_domain().ok_or(GameError::WrongPhase)?;
        if !battle.player_hand.contains(id) {
            log::result(false, "card not in player hand");
            return Err(GameError::CardNotInHand { id });
        }

        let ctx = BattleContext {
            hand: battle.ai_hand.cards(),
            active_domain: domain,
            opponent_hand: battle.player_hand.cards(),
            ai_score: battle.ai_points,
            player_score: battle.player_points,
            rounds_remaining: battle.rounds_remaining(),
            future_domains: battle.future_domains(),
        };
        let decision = strategist::pick(&ctx, &self.weights, &mut self.rng)
            .expect("AI hand exhausted before the final round");

        let player_card = battle.player_hand.take(id)?;
        let ai_card = battle.ai_hand.take(decision.card)?;
        let verdict = resolve_round(domain, &player_card, &ai_card);
        let record = RoundRecord::new(
            battle.round,
            &verdict,
            &player_card,
            &ai_card,
            decision.strategy,
        );

        log::info(&format!(
            "round {} {}: {} ({}) vs {} ({}) -> {}-{} [{}]",
            record.round + 1,
            domain,
            player_card.name,
            verdict.player_score,
            ai_card.name,
            verdict.ai_score,
            verdict.player_points,
            verdict.ai_points,
            decision.strategy.label(),
        ));

        battle.record(record.clone());
        if let MatchPhase::Battle(battle) = core::mem::take(&mut self.phase) {
            self.phase = MatchPhase::Revealing(battle);
        }
        self.log_state();
        Ok(record)
    }

    /// Revealing -> Battle, or -> Result after the last round.
    pub fn continue_after_reveal(&mut self) -> GameResult<()> {
        log::action("continue_after_reveal", "closing reveal");
        if !matches!(self.phase, MatchPhase::Revealing(_)) {
            return Err(GameError::WrongPhase);
        }
        if let MatchPhase::Revealing(battle) = core::mem::take(&mut self.phase) {
            self.phase = if battle.is_over() {
                let summary = battle.summary();
                log::info(&format!(
                    "match over {}-{}: {:?}",
                    summary.player_points, summary.ai_points, summary.result
                ));
                MatchPhase::Result(summary)
            } else {
                MatchPhase::Battle(battle)
            };
        }
        self.log_state();
        Ok(())
    }
}

// Private implementation methods
impl<R: MatchRng> Match<R> {
    fn finish_draft_if_complete(&mut self) {
        let complete = matches!(&self.phase, MatchPhase::Draft { draft, .. } if draft.is_complete());
        if !complete {
            return;
        }
        if let MatchPhase::Draft { draft, domain_order } = core::mem::take(&mut self.phase) {
            let (player_hand, ai_hand) = draft.into_hands();
            log::info("=== DRAFT COMPLETE ===");
            self.phase = MatchPhase::Battle(BattleState::new(domain_order, player_hand, ai_hand));
        }
    }

    fn log_state(&self) {
        match &self.phase {
            MatchPhase::Draft { draft, .. } => log::state_summary(
                self.phase.name(),
                draft.step(),
                0,
                0,
                draft.hand(Side::Player).len(),
                draft.hand(Side::Ai).len(),
            ),
            MatchPhase::Battle(battle) | MatchPhase::Revealing(battle) => log::state_summary(
                self.phase.name(),
                usize::from(battle.round),
                battle.player_points,
                battle.ai_points,
                battle.player_hand.len(),
                battle.ai_hand.len(),
            ),
            MatchPhase::Result(summary) => log::state_summary(
                self.phase.name(),
                summary.rounds.len(),
                summary.player_points,
                summary.ai_points,
                0,
                0,
            ),
            MatchPhase::Idle | MatchPhase::Loading => {
                log::debug("STATE", self.phase.name())
            }
        }
    }
}
