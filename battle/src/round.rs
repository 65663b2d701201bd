//! Single-round resolution
//!
//! One card per side is compared on the active domain. Higher influence
//! takes the point; equal influence falls back to tier rank, and equal tiers
//! wash the round.

use core::cmp::Ordering;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::types::{Domain, PersonaCard};

/// The two seats of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Ai => "ai",
        }
    }
}

/// Final outcome of a match from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchResult {
    Victory,
    Defeat,
    Draw,
}

/// Scored outcome of one round
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundVerdict {
    pub domain: Domain,
    pub player_score: u8,
    pub ai_score: u8,
    pub player_points: u8,
    pub ai_points: u8,
    /// Set whenever domain scores were equal, whether or not tier broke the tie
    pub is_tiebreak: bool,
}

impl RoundVerdict {
    pub fn winner(&self) -> Option<Side> {
        match self.player_points.cmp(&self.ai_points) {
            Ordering::Greater => Some(Side::Player),
            Ordering::Less => Some(Side::Ai),
            Ordering::Equal => None,
        }
    }

    /// The same verdict with the seats swapped.
    pub fn mirrored(&self) -> Self {
        Self {
            domain: self.domain,
            player_score: self.ai_score,
            ai_score: self.player_score,
            player_points: self.ai_points,
            ai_points: self.player_points,
            is_tiebreak: self.is_tiebreak,
        }
    }
}

/// Resolve one round between the player's and the AI's committed cards.
pub fn resolve_round(domain: Domain, player: &PersonaCard, ai: &PersonaCard) -> RoundVerdict {
    let player_score = player.score(domain);
    let ai_score = ai.score(domain);

    let (ordering, is_tiebreak) = match player_score.cmp(&ai_score) {
        Ordering::Equal => (player.tier.cmp(&ai.tier), true),
        decided => (decided, false),
    };

    let (player_points, ai_points) = match ordering {
        Ordering::Greater => (1, 0),
        Ordering::Less => (0, 1),
        Ordering::Equal => (0, 0),
    };

    RoundVerdict {
        domain,
        player_score,
        ai_score,
        player_points,
        ai_points,
        is_tiebreak,
    }
}

/// Outcome by total points. Equal totals are a draw; there is no sudden death.
pub fn final_result(player_points: u8, ai_points: u8) -> MatchResult {
    match player_points.cmp(&ai_points) {
        Ordering::Greater => MatchResult::Victory,
        Ordering::Less => MatchResult::Defeat,
        Ordering::Equal => MatchResult::Draw,
    }
}
