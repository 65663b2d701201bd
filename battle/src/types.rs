use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Highest value a card can hold in a single domain.
pub const MAX_INFLUENCE: u8 = 10;
/// Highest value of an ability attribute.
pub const MAX_ABILITY: u8 = 100;
/// Highest timelessness score.
pub const MAX_TIMELESSNESS: u8 = 40;
/// Number of influence domains (and rounds in a match).
pub const DOMAIN_COUNT: usize = 6;

/// Unique identifier for persona cards
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct PersonaId(pub u32);

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordinal persona classification, S highest.
///
/// Ordering follows rank, so `Tier::S > Tier::E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
    E,
}

impl Tier {
    pub const ALL: [Tier; 6] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D, Tier::E];

    /// Tie-break rank: S=6 down to E=1.
    pub fn rank(self) -> u8 {
        match self {
            Tier::S => 6,
            Tier::A => 5,
            Tier::B => 4,
            Tier::C => 3,
            Tier::D => 2,
            Tier::E => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
            Tier::E => "E",
        }
    }
}

impl Ord for Tier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Tier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The secondary attributes on a persona card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ability {
    Intellect,
    Charisma,
    Creativity,
    Resolve,
}

/// One of the six influence axes a round is fought over
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Domain {
    Science,
    Politics,
    Arts,
    Philosophy,
    Economics,
    Faith,
}

impl Domain {
    /// Canonical order; also the unshuffled category order of a match.
    pub const ALL: [Domain; DOMAIN_COUNT] = [
        Domain::Science,
        Domain::Politics,
        Domain::Arts,
        Domain::Philosophy,
        Domain::Economics,
        Domain::Faith,
    ];

    pub fn index(self) -> usize {
        match self {
            Domain::Science => 0,
            Domain::Politics => 1,
            Domain::Arts => 2,
            Domain::Philosophy => 3,
            Domain::Economics => 4,
            Domain::Faith => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Domain::Science => "Science",
            Domain::Politics => "Politics",
            Domain::Arts => "Arts",
            Domain::Philosophy => "Philosophy",
            Domain::Economics => "Economics",
            Domain::Faith => "Faith",
        }
    }

    /// Ability attribute paired with this domain in the card data.
    ///
    /// Round resolution breaks ties on tier rank and never reads this.
    pub fn tiebreak_ability(self) -> Ability {
        match self {
            Domain::Science | Domain::Philosophy => Ability::Intellect,
            Domain::Politics | Domain::Economics => Ability::Charisma,
            Domain::Arts => Ability::Creativity,
            Domain::Faith => Ability::Resolve,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-domain influence, each value 0..=10
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Influence {
    pub science: u8,
    pub politics: u8,
    pub arts: u8,
    pub philosophy: u8,
    pub economics: u8,
    pub faith: u8,
}

impl Influence {
    /// Build from values in [`Domain::ALL`] order, clamping to [`MAX_INFLUENCE`].
    pub fn from_array(values: [u8; DOMAIN_COUNT]) -> Self {
        let v = values.map(|x| x.min(MAX_INFLUENCE));
        Self {
            science: v[0],
            politics: v[1],
            arts: v[2],
            philosophy: v[3],
            economics: v[4],
            faith: v[5],
        }
    }

    pub fn get(&self, domain: Domain) -> u8 {
        match domain {
            Domain::Science => self.science,
            Domain::Politics => self.politics,
            Domain::Arts => self.arts,
            Domain::Philosophy => self.philosophy,
            Domain::Economics => self.economics,
            Domain::Faith => self.faith,
        }
    }

    /// Sum across all six domains (0..=60).
    pub fn total(&self) -> u32 {
        Domain::ALL.iter().map(|&d| u32::from(self.get(d))).sum()
    }

    /// Best value among `domains`, or 0 when the slice is empty.
    pub fn best_in(&self, domains: &[Domain]) -> u8 {
        domains.iter().map(|&d| self.get(d)).max().unwrap_or(0)
    }
}

/// Secondary attribute block, each value 0..=100
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct AbilityBlock {
    pub intellect: u8,
    pub charisma: u8,
    pub creativity: u8,
    pub resolve: u8,
}

impl AbilityBlock {
    pub fn new(intellect: u8, charisma: u8, creativity: u8, resolve: u8) -> Self {
        Self {
            intellect: intellect.min(MAX_ABILITY),
            charisma: charisma.min(MAX_ABILITY),
            creativity: creativity.min(MAX_ABILITY),
            resolve: resolve.min(MAX_ABILITY),
        }
    }

    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Intellect => self.intellect,
            Ability::Charisma => self.charisma,
            Ability::Creativity => self.creativity,
            Ability::Resolve => self.resolve,
        }
    }
}

/// A persona card. Immutable for the duration of a match.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaCard {
    pub id: PersonaId,
    pub name: String,
    pub profession: String,
    pub nationality: String,
    /// Portrait reference (URL or asset key), opaque to the engine
    pub portrait: String,
    pub quote: String,
    pub tier: Tier,
    /// Timelessness score (0..=40), the non-domain part of the tier composite
    pub timelessness: u8,
    pub influence: Influence,
    pub abilities: AbilityBlock,
}

impl PersonaCard {
    pub fn new(id: PersonaId, name: &str, tier: Tier, influence: Influence) -> Self {
        Self {
            id,
            name: name.to_string(),
            profession: String::new(),
            nationality: String::new(),
            portrait: String::new(),
            quote: String::new(),
            tier,
            timelessness: 0,
            influence,
            abilities: AbilityBlock::default(),
        }
    }

    pub fn with_profile(mut self, profession: &str, nationality: &str) -> Self {
        self.profession = profession.to_string();
        self.nationality = nationality.to_string();
        self
    }

    pub fn with_portrait(mut self, portrait: &str) -> Self {
        self.portrait = portrait.to_string();
        self
    }

    pub fn with_quote(mut self, quote: &str) -> Self {
        self.quote = quote.to_string();
        self
    }

    pub fn with_timelessness(mut self, timelessness: u8) -> Self {
        self.timelessness = timelessness.min(MAX_TIMELESSNESS);
        self
    }

    pub fn with_abilities(mut self, abilities: AbilityBlock) -> Self {
        self.abilities = abilities;
        self
    }

    /// Influence in a single domain, the card's round score.
    pub fn score(&self, domain: Domain) -> u8 {
        self.influence.get(domain)
    }

    pub fn total_influence(&self) -> u32 {
        self.influence.total()
    }
}
