//! Fuzz target: spell lookup totality.
//!
//! `cast_spell` must never panic, whatever the name, and must always return
//! either a recorded effect or the unknown-spell sentinel.

#![no_main]

use libfuzzer_sys::fuzz_target;
use spellbook_core::{cast_spell, list_available_spells, UNKNOWN_SPELL};

fuzz_target!(|name: &str| {
    let effect = cast_spell(name);

    if effect == UNKNOWN_SPELL {
        return;
    }

    // A non-sentinel effect means the lowercased name is a listed spell.
    let lowered = name.to_lowercase();
    assert!(
        list_available_spells().contains(&lowered.as_str()),
        "effect without a matching spell book entry for '{lowered}'"
    );
});
