//! Bundled persona roster for Influence Draft.
//!
//! The cards are generated at build time from `personas/personas.json`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use infl_battle::types::{PersonaCard, PersonaId};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/personas_generated.rs"));
}

pub use generated::get_all_personas;

/// Look up a single bundled persona by id.
pub fn get_persona(id: PersonaId) -> Option<PersonaCard> {
    get_all_personas().into_iter().find(|p| p.id == id)
}

/// Bundled personas whose name contains `needle`, ignoring ASCII case.
pub fn search(needle: &str) -> Vec<PersonaCard> {
    let needle = needle.to_ascii_lowercase();
    get_all_personas()
        .into_iter()
        .filter(|p| p.name.to_ascii_lowercase().contains(&needle))
        .collect()
}
