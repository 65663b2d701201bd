//! Drives one match to completion with the strategist in both seats.

use anyhow::{anyhow, Result};

use infl_battle::rng::XorShiftRng;
use infl_battle::round::MatchResult;
use infl_battle::types::PersonaCard;
use infl_game::strategist::{self, BattleContext, Strategy, StrategyWeights};
use infl_game::{Match, MatchPhase};

/// Mixed into a match seed to give the player seat its own stream.
const PLAYER_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Strategy weights for each side of the table.
#[derive(Debug, Clone, Default)]
pub struct Seats {
    pub player: StrategyWeights,
    pub ai: StrategyWeights,
}

/// Strategy-label tallies for one seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrategyCounts {
    pub dominate: u32,
    pub prepare: u32,
}

impl StrategyCounts {
    pub fn bump(&mut self, strategy: Strategy) {
        match strategy {
            Strategy::Dominate => self.dominate += 1,
            Strategy::Prepare => self.prepare += 1,
        }
    }
}

/// What the report needs from one finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub result: MatchResult,
    pub player_points: u8,
    pub ai_points: u8,
    pub rounds: u32,
    pub tiebreaks: u32,
    pub player_strategies: StrategyCounts,
    pub ai_strategies: StrategyCounts,
}

/// Play one full match from `seed`. The player seat drafts greedily and
/// battles with the strategist from its own point of view.
pub fn play_match(seed: u64, roster: &[PersonaCard], seats: &Seats) -> Result<MatchOutcome> {
    let mut game = Match::from_seed(seed).with_weights(seats.ai.clone());
    let mut rng = XorShiftRng::seed_from_u64(seed ^ PLAYER_STREAM);
    let mut player_strategies = StrategyCounts::default();

    game.start_loading()?;
    game.begin_draft(roster)?;

    while let MatchPhase::Draft { draft, .. } = game.phase() {
        let id = strategist::draft_pick(draft.pool())
            .ok_or_else(|| anyhow!("seed {seed}: pool ran dry before the draft ended"))?;
        game.player_draft_pick(id)?;
    }

    while let MatchPhase::Battle(battle) = game.phase() {
        let domain = battle
            .active_domain()
            .ok_or_else(|| anyhow!("seed {seed}: battle without an active domain"))?;
        // Mirror the table: the player seat sees itself as the strategist.
        let ctx = BattleContext {
            hand: battle.player_hand.cards(),
            active_domain: domain,
            opponent_hand: battle.ai_hand.cards(),
            ai_score: battle.player_points,
            player_score: battle.ai_points,
            rounds_remaining: battle.rounds_remaining(),
            future_domains: battle.future_domains(),
        };
        let decision = strategist::pick(&ctx, &seats.player, &mut rng)
            .ok_or_else(|| anyhow!("seed {seed}: player hand empty in battle"))?;
        player_strategies.bump(decision.strategy);

        game.play_card(decision.card)?;
        game.continue_after_reveal()?;
    }

    let summary = game
        .summary()
        .ok_or_else(|| anyhow!("seed {seed}: match stopped in phase {}", game.phase().name()))?;

    let mut ai_strategies = StrategyCounts::default();
    for record in &summary.rounds {
        ai_strategies.bump(record.ai_strategy);
    }
    log::debug!(
        "seed {seed}: {:?} {}-{}",
        summary.result,
        summary.player_points,
        summary.ai_points
    );

    Ok(MatchOutcome {
        result: summary.result,
        player_points: summary.player_points,
        ai_points: summary.ai_points,
        rounds: summary.rounds.len() as u32,
        tiebreaks: summary.rounds.iter().filter(|r| r.is_tiebreak).count() as u32,
        player_strategies,
        ai_strategies,
    })
}
