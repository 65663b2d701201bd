//! Tier classification from a card's composite score.

use crate::types::{Influence, Tier};

/// Lower bounds (inclusive) of each tier on the 0..=100 composite scale.
pub const TIER_THRESHOLDS: [(f64, Tier); 5] = [
    (75.0, Tier::S),
    (60.0, Tier::A),
    (45.0, Tier::B),
    (30.0, Tier::C),
    (15.0, Tier::D),
];

/// Map a composite score (domain sum 0..=60 plus timelessness 0..=40) to a tier.
pub fn to_tier(total_score: f64) -> Tier {
    TIER_THRESHOLDS
        .iter()
        .find(|(floor, _)| total_score >= *floor)
        .map(|&(_, tier)| tier)
        .unwrap_or(Tier::E)
}

/// Classify a card from its parts.
pub fn classify(influence: &Influence, timelessness: u8) -> Tier {
    to_tier(f64::from(influence.total() + u32::from(timelessness)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_inclusive() {
        assert_eq!(to_tier(100.0), Tier::S);
        assert_eq!(to_tier(75.0), Tier::S);
        assert_eq!(to_tier(74.999), Tier::A);
        assert_eq!(to_tier(60.0), Tier::A);
        assert_eq!(to_tier(59.999), Tier::B);
        assert_eq!(to_tier(45.0), Tier::B);
        assert_eq!(to_tier(30.0), Tier::C);
        assert_eq!(to_tier(15.0), Tier::D);
        assert_eq!(to_tier(14.999), Tier::E);
        assert_eq!(to_tier(0.0), Tier::E);
    }

    #[test]
    fn test_nan_falls_to_bottom_tier() {
        assert_eq!(to_tier(f64::NAN), Tier::E);
    }

    #[test]
    fn test_classify_sums_parts() {
        let influence = Influence::from_array([10, 10, 10, 10, 10, 10]);
        assert_eq!(classify(&influence, 15), Tier::S);
        assert_eq!(classify(&influence, 0), Tier::A);

        let weak = Influence::from_array([2, 2, 2, 2, 2, 2]);
        assert_eq!(classify(&weak, 3), Tier::D);
        assert_eq!(classify(&weak, 2), Tier::E);
    }
}
