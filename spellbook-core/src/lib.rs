//! Domain tables and pure functions for the spellbook service.
//!
//! Defines the static spell book, potion recipes, shield charm generation,
//! and the placeholder protective wards. Everything here is synchronous,
//! total, and read-only after process start.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod potions;
pub mod shield;
pub mod spells;
pub mod wards;

pub use potions::{brew_potion, get_recipe_count, FAILED_POTION};
pub use shield::{shield_charm, ShieldCharm};
pub use spells::{cast_spell, list_available_spells, UNKNOWN_SPELL};
pub use wards::{rate_limit_check, validate_magic_signature};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_spell_casts_to_a_real_effect() {
        for name in list_available_spells() {
            let effect = cast_spell(name);
            assert_ne!(effect, UNKNOWN_SPELL, "listed spell '{name}' must have an effect");
        }
    }

    #[test]
    fn spell_book_has_four_entries() {
        assert_eq!(list_available_spells().len(), 4);
    }

    #[test]
    fn casting_an_uppercased_listed_spell_matches_the_lowercase_form() {
        for name in list_available_spells() {
            assert_eq!(cast_spell(&name.to_uppercase()), cast_spell(name));
        }
    }

    #[test]
    fn recipe_count_stays_in_sync_with_the_table() {
        // Brewing each table key must succeed, and the count must match the
        // number of keys that brew to something other than the failure recipe.
        let known = ["healing", "strength", "invisibility", "speed"];
        assert_eq!(get_recipe_count(), known.len());
        for kind in known {
            assert_ne!(brew_potion(kind), FAILED_POTION, "'{kind}' must have a recipe");
        }
    }

    #[test]
    fn failure_recipe_is_the_fixed_three_ingredients() {
        assert_eq!(FAILED_POTION, ["water", "hope", "disappointment"]);
        assert_eq!(brew_potion(""), FAILED_POTION);
    }

    #[test]
    fn shield_charm_scales_with_level() {
        let weak = shield_charm(1);
        let strong = shield_charm(5);
        assert_eq!(strong.protection, 5 * weak.protection);
        assert_eq!(weak.charm_type, strong.charm_type);
    }

    #[test]
    fn ward_stubs_keep_their_placeholder_behavior() {
        // Pinned so that any future attempt to make these "real" fails loudly.
        assert!(rate_limit_check("any-wizard-at-all"));
        assert!(validate_magic_signature("alnum1234"));
        assert!(!validate_magic_signature("short"));
    }
}
