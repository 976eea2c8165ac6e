//! Spell casting over the static spell book.

use std::sync::LazyLock;

use indexmap::IndexMap;

/// Effect returned when a spell name is not in the book.
pub const UNKNOWN_SPELL: &str = "❌ Unknown spell - check your spellbook!";

/// The process-wide spell book.
///
/// Keys are lowercase spell names; iteration order is insertion order, which
/// [`list_available_spells`] relies on.
static SPELL_BOOK: LazyLock<IndexMap<&'static str, &'static str>> = LazyLock::new(|| {
    IndexMap::from([
        ("fireball", "🔥 Blazing destruction"),
        ("heal", "💚 Restoration magic"),
        ("shield", "🛡️ Protective barrier"),
        ("teleport", "🌀 Instant transportation"),
    ])
});

/// Cast a spell by name, returning its effect description.
///
/// Lookup is case-insensitive. Unknown names fall back to [`UNKNOWN_SPELL`]
/// instead of failing.
#[must_use]
pub fn cast_spell(spell_name: &str) -> &'static str {
    SPELL_BOOK
        .get(spell_name.to_lowercase().as_str())
        .copied()
        .unwrap_or(UNKNOWN_SPELL)
}

/// All known spell names, in spell book order.
#[must_use]
pub fn list_available_spells() -> Vec<&'static str> {
    SPELL_BOOK.keys().copied().collect()
}
