//! Draft pool construction
//!
//! The roster is split into three tier strata, each contributes a fixed
//! quota, two wildcards come from whatever was left, and the result is
//! shuffled so pool order carries no tier signal.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::vec::Vec;

use infl_battle::error::{GameError, GameResult};
use infl_battle::log;
use infl_battle::rng::MatchRng;
use infl_battle::types::{PersonaCard, Tier};

use crate::state::{CORE_QUOTA, ELITE_QUOTA, FRINGE_QUOTA, MIN_VIABLE_ROSTER, WILDCARD_QUOTA};

/// Tier bands used for stratified sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stratum {
    /// Tiers S and A
    Elite,
    /// Tiers B and C
    Core,
    /// Tiers D and E
    Fringe,
}

impl Stratum {
    pub const ALL: [Stratum; 3] = [Stratum::Elite, Stratum::Core, Stratum::Fringe];

    pub fn of(tier: Tier) -> Stratum {
        match tier {
            Tier::S | Tier::A => Stratum::Elite,
            Tier::B | Tier::C => Stratum::Core,
            Tier::D | Tier::E => Stratum::Fringe,
        }
    }

    pub fn quota(self) -> usize {
        match self {
            Stratum::Elite => ELITE_QUOTA,
            Stratum::Core => CORE_QUOTA,
            Stratum::Fringe => FRINGE_QUOTA,
        }
    }
}

/// Roster entries with duplicate ids removed, first occurrence kept.
fn distinct(roster: &[PersonaCard]) -> Vec<&PersonaCard> {
    let mut seen = BTreeSet::new();
    roster.iter().filter(|c| seen.insert(c.id)).collect()
}

/// Fail fast when a roster is too small to be worth drafting from.
pub fn validate_roster(roster: &[PersonaCard]) -> GameResult<()> {
    let have = distinct(roster).len();
    if have < MIN_VIABLE_ROSTER {
        return Err(GameError::RosterTooSmall {
            have: have as u32,
            min: MIN_VIABLE_ROSTER as u32,
        });
    }
    Ok(())
}

/// Size of the pool [`build_draft_pool`] would return for `roster`.
///
/// Depends only on stratum sizes, so it consumes no randomness.
pub fn pool_capacity(roster: &[PersonaCard]) -> usize {
    let candidates = distinct(roster);
    let mut capacity = 0;
    let mut leftovers = 0;
    for stratum in Stratum::ALL {
        let members = candidates.iter().filter(|c| Stratum::of(c.tier) == stratum).count();
        let picked = members.min(stratum.quota());
        capacity += picked;
        leftovers += members - picked;
    }
    capacity + leftovers.min(WILDCARD_QUOTA)
}

/// Partial Fisher-Yates: move `count` random entries to the front and split them off.
fn sample_without_replacement<T, R: MatchRng>(items: &mut Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    let take = count.min(items.len());
    for i in 0..take {
        let j = i + rng.gen_range(items.len() - i);
        items.swap(i, j);
    }
    let rest = items.split_off(take);
    core::mem::replace(items, rest)
}

/// Sample a draft pool from `roster`.
///
/// Short strata are not backfilled: the pool simply comes out smaller, and
/// it is up to the caller to decide whether that is playable.
pub fn build_draft_pool<R: MatchRng>(roster: &[PersonaCard], rng: &mut R) -> Vec<PersonaCard> {
    let candidates = distinct(roster);

    let mut leftovers: Vec<&PersonaCard> = Vec::new();
    let mut pool: Vec<&PersonaCard> = Vec::new();

    for stratum in Stratum::ALL {
        let mut members: Vec<&PersonaCard> = candidates
            .iter()
            .copied()
            .filter(|c| Stratum::of(c.tier) == stratum)
            .collect();
        let picked = sample_without_replacement(&mut members, stratum.quota(), rng);
        if picked.len() < stratum.quota() {
            log::warn(&format!(
                "{stratum:?} stratum short: {} of {}",
                picked.len(),
                stratum.quota()
            ));
        }
        pool.extend(picked);
        leftovers.extend(members);
    }

    let wildcards = sample_without_replacement(&mut leftovers, WILDCARD_QUOTA, rng);
    pool.extend(wildcards);

    let mut pool: Vec<PersonaCard> = pool.into_iter().cloned().collect();
    rng.shuffle(&mut pool);

    log::debug(
        "build_draft_pool",
        &format!("roster={} pool={}", candidates.len(), pool.len()),
    );
    pool
}
