//! Build script: reads /personas/personas.json and generates Rust source that
//! statically constructs the bundled roster, so the crate stays no_std and
//! never parses JSON at runtime.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

// ── JSON schema types (build-time only) ──────────────────────────────────────

#[derive(Deserialize)]
struct JsonPersona {
    id: u32,
    name: String,
    #[serde(default)]
    profession: String,
    #[serde(default)]
    nationality: String,
    #[serde(default)]
    portrait: String,
    #[serde(default)]
    quote: String,
    tier: String,
    #[serde(default)]
    timelessness: u8,
    influence: JsonInfluence,
    #[serde(default)]
    abilities: JsonAbilities,
}

#[derive(Deserialize)]
struct JsonInfluence {
    science: u8,
    politics: u8,
    arts: u8,
    philosophy: u8,
    economics: u8,
    faith: u8,
}

#[derive(Deserialize, Default)]
struct JsonAbilities {
    intellect: u8,
    charisma: u8,
    creativity: u8,
    resolve: u8,
}

// ── Code generation helpers ──────────────────────────────────────────────────

fn gen_tier(tier: &str) -> String {
    match tier {
        "S" | "A" | "B" | "C" | "D" | "E" => format!("Tier::{tier}"),
        other => panic!("Unknown tier: {other}"),
    }
}

fn gen_persona(p: &JsonPersona) -> String {
    let id = p.id;
    let tier = gen_tier(&p.tier);
    let i = &p.influence;
    let a = &p.abilities;

    // Debug formatting yields valid, escaped Rust string literals.
    format!(
        r#"        PersonaCard::new(
            PersonaId({id}),
            {name:?},
            {tier},
            Influence::from_array([{}, {}, {}, {}, {}, {}]),
        )
        .with_profile({profession:?}, {nationality:?})
        .with_portrait({portrait:?})
        .with_quote({quote:?})
        .with_timelessness({timelessness})
        .with_abilities(AbilityBlock::new({}, {}, {}, {}))"#,
        i.science,
        i.politics,
        i.arts,
        i.philosophy,
        i.economics,
        i.faith,
        a.intellect,
        a.charisma,
        a.creativity,
        a.resolve,
        name = p.name,
        profession = p.profession,
        nationality = p.nationality,
        portrait = p.portrait,
        quote = p.quote,
        timelessness = p.timelessness,
    )
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let personas_path = Path::new(&manifest_dir).join("../personas/personas.json");

    println!("cargo:rerun-if-changed={}", personas_path.display());

    let personas_json = fs::read_to_string(&personas_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", personas_path.display()));
    let personas: Vec<JsonPersona> =
        serde_json::from_str(&personas_json).expect("Failed to parse personas.json");

    let mut seen = std::collections::BTreeSet::new();
    for p in &personas {
        assert!(seen.insert(p.id), "Duplicate persona id {} in personas.json", p.id);
    }

    let entries: Vec<String> = personas.iter().map(gen_persona).collect();

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("personas_generated.rs");

    let generated = format!(
        r#"// Auto-generated from personas.json. DO NOT EDIT
use alloc::vec;
use alloc::vec::Vec;
use infl_battle::types::*;

/// Returns every persona defined in personas.json.
pub fn get_all_personas() -> Vec<PersonaCard> {{
    vec![
{}
    ]
}}
"#,
        entries.join(",\n"),
    );

    fs::write(&dest, generated).expect("Failed to write generated personas file");
}
