//! Rarity tiers
//!
//! The fixed tier ladder plus authored per-tier tuning (affix counts,
//! base-stat scalar ranges).

use serde::{Deserialize, Serialize};

/// Item rarity tiers, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RarityTier {
    Common,
    Uncommon,
    Magic,
    Rare,
    Epic,
    Legendary,
    Set,
    Radiant,
}

impl RarityTier {
    /// All tiers in canonical roll order. Weighted selection walks this
    /// order, so it must stay stable.
    pub const ALL: [RarityTier; 8] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Magic,
        RarityTier::Rare,
        RarityTier::Epic,
        RarityTier::Legendary,
        RarityTier::Set,
        RarityTier::Radiant,
    ];

    /// Stable id used to key authored `RarityDefinition`s.
    pub fn id(&self) -> &'static str {
        match self {
            RarityTier::Common => "Common",
            RarityTier::Uncommon => "Uncommon",
            RarityTier::Magic => "Magic",
            RarityTier::Rare => "Rare",
            RarityTier::Epic => "Epic",
            RarityTier::Legendary => "Legendary",
            RarityTier::Set => "Set",
            RarityTier::Radiant => "Radiant",
        }
    }

    /// Parse a tier from its id, case-insensitively.
    pub fn from_id(id: &str) -> Option<RarityTier> {
        RarityTier::ALL
            .iter()
            .copied()
            .find(|t| t.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Get numeric value for sorting (higher = rarer)
    pub fn sort_value(&self) -> u8 {
        *self as u8
    }

    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            RarityTier::Common => (200, 200, 200),
            RarityTier::Uncommon => (100, 255, 100),
            RarityTier::Magic => (120, 120, 255),
            RarityTier::Rare => (100, 150, 255),
            RarityTier::Epic => (200, 100, 255),
            RarityTier::Legendary => (255, 180, 50),
            RarityTier::Set => (100, 255, 180),
            RarityTier::Radiant => (255, 255, 160),
        }
    }
}

fn default_scalar() -> f32 {
    1.0
}

fn default_enabled() -> bool {
    true
}

/// Authored per-rarity tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityDefinition {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub sort_order: u8,
    #[serde(default = "default_enabled")]
    pub enabled_by_default: bool,

    /// Affix count range rolled for this rarity.
    #[serde(default)]
    pub affix_min: u8,
    #[serde(default)]
    pub affix_max: u8,

    /// Multiplier range applied to the base item's stats.
    #[serde(default = "default_scalar")]
    pub scalar_min: f32,
    #[serde(default = "default_scalar")]
    pub scalar_max: f32,

    #[serde(default)]
    pub is_special: bool,
}

impl RarityDefinition {
    /// Affix count range, normalized so max >= min.
    pub fn affix_range(&self) -> (u8, u8) {
        (self.affix_min, self.affix_max.max(self.affix_min))
    }

    /// Base-stat scalar range, normalized so max >= min and both >= 0.
    pub fn scalar_range(&self) -> (f32, f32) {
        let min = self.scalar_min.max(0.0);
        (min, self.scalar_max.max(min))
    }

    /// The ladder tier this definition corresponds to, if its id matches one.
    pub fn tier(&self) -> Option<RarityTier> {
        RarityTier::from_id(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order() {
        assert!(RarityTier::Common < RarityTier::Uncommon);
        assert!(RarityTier::Magic < RarityTier::Rare);
        assert!(RarityTier::Legendary < RarityTier::Set);
        assert!(RarityTier::Set < RarityTier::Radiant);
        assert_eq!(RarityTier::Radiant.sort_value(), 7);
    }

    #[test]
    fn test_from_id_case_insensitive() {
        assert_eq!(RarityTier::from_id("rare"), Some(RarityTier::Rare));
        assert_eq!(RarityTier::from_id("LEGENDARY"), Some(RarityTier::Legendary));
        assert_eq!(RarityTier::from_id(" Radiant "), Some(RarityTier::Radiant));
        assert_eq!(RarityTier::from_id("Mythic"), None);
    }

    #[test]
    fn test_ranges_normalize() {
        let def = RarityDefinition {
            id: "Rare".to_string(),
            display_name: "Rare".to_string(),
            sort_order: 3,
            enabled_by_default: true,
            affix_min: 3,
            affix_max: 2,
            scalar_min: 1.2,
            scalar_max: 1.1,
            is_special: false,
        };
        assert_eq!(def.affix_range(), (3, 3));
        assert_eq!(def.scalar_range(), (1.2, 1.2));
    }
}
