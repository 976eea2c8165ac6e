//! Potion brewing over the static recipe table.

use std::sync::LazyLock;

use indexmap::IndexMap;

/// Ingredient list returned when a potion type has no recipe.
pub const FAILED_POTION: [&str; 3] = ["water", "hope", "disappointment"];

/// The process-wide recipe table. Keys are lowercase potion types; each value
/// is the ingredient sequence in brewing order.
static POTION_RECIPES: LazyLock<IndexMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        IndexMap::from([
            ("healing", &["phoenix_tear", "unicorn_hair", "moonwater"] as &[_]),
            ("strength", &["giant_toe", "iron_dust", "fire_salts"] as &[_]),
            ("invisibility", &["chameleon_scale", "void_essence", "ghost_pepper"] as &[_]),
            ("speed", &["lightning_essence", "hummingbird_feather", "quicksilver"] as &[_]),
        ])
    });

/// Brew a potion by type, returning its ingredient sequence.
///
/// Lookup is case-insensitive. Unknown types fall back to [`FAILED_POTION`]
/// instead of failing.
#[must_use]
pub fn brew_potion(potion_type: &str) -> &'static [&'static str] {
    POTION_RECIPES
        .get(potion_type.to_lowercase().as_str())
        .copied()
        .unwrap_or(&FAILED_POTION)
}

/// Number of recipes in the table.
#[must_use]
pub fn get_recipe_count() -> usize {
    POTION_RECIPES.len()
}
