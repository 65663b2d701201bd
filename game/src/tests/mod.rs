mod draft;
mod view;

use infl_battle::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn create_card(id: u32, tier: Tier, influence: [u8; DOMAIN_COUNT]) -> PersonaCard {
    PersonaCard::new(PersonaId(id), "Persona", tier, Influence::from_array(influence))
}

/// Card scoring `value` in `domain` and 0 everywhere else.
fn spike_card(id: u32, domain: Domain, value: u8) -> PersonaCard {
    let mut influence = [0; DOMAIN_COUNT];
    influence[domain.index()] = value;
    create_card(id, Tier::C, influence)
}

/// `per_tier` cards of every tier, ids from 1, with varied influence.
fn create_roster(per_tier: usize) -> Vec<PersonaCard> {
    let mut roster = Vec::new();
    let mut id = 1u32;
    for tier in Tier::ALL {
        for _ in 0..per_tier {
            let influence = [3, 5, 7, 1, 2, 4].map(|k| ((id * k + k / 2) % 11) as u8);
            roster.push(create_card(id, tier, influence));
            id += 1;
        }
    }
    roster
}

fn ids(cards: &[PersonaCard]) -> Vec<PersonaId> {
    cards.iter().map(|c| c.id).collect()
}
