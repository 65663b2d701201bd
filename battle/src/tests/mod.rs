mod rounds;

use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn create_card(id: u32, tier: Tier, influence: [u8; DOMAIN_COUNT]) -> PersonaCard {
    PersonaCard::new(
        PersonaId(id),
        "Test Persona",
        tier,
        Influence::from_array(influence),
    )
}

/// Card scoring `value` in every domain.
fn flat_card(id: u32, tier: Tier, value: u8) -> PersonaCard {
    create_card(id, tier, [value; DOMAIN_COUNT])
}
