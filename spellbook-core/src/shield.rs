//! Shield charm generation.

use serde::{Deserialize, Serialize};

/// A protective shield derived from a caster level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ShieldCharm {
    /// Charm type tag, always `"shield"`.
    #[serde(rename = "type")]
    pub charm_type: String,

    /// The caster level the charm was generated from.
    pub level: i64,

    /// Protection points, `level * 100`.
    pub protection: i64,

    /// Human-readable duration, `"{level * 10} minutes"`.
    pub duration: String,
}

/// Generate a shield charm for the given caster level.
///
/// Purely computational. The level is not validated: zero and negative
/// levels produce the plain arithmetic result rather than an error.
#[must_use]
pub fn shield_charm(level: i64) -> ShieldCharm {
    ShieldCharm {
        charm_type: "shield".to_owned(),
        level,
        protection: level * 100,
        duration: format!("{} minutes", level * 10),
    }
}

impl Default for ShieldCharm {
    /// A level-1 charm.
    fn default() -> Self {
        shield_charm(1)
    }
}
